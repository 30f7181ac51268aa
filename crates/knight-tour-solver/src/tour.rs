use std::{
    collections::HashSet,
    fmt::{self, Display},
};

use knight_tour_core::{Cell, MoveProfile, containers::Grid};

use crate::TourValidationError;

/// A completed tour: every board cell in visiting order.
///
/// # Examples
///
/// ```
/// use knight_tour_core::{Cell, MoveProfile};
/// use knight_tour_solver::TourSolver;
///
/// let solver = TourSolver::new(MoveProfile::knight());
/// let tour = solver
///     .solve(5, Cell::new(0, 0))?
///     .outcome
///     .into_tour()
///     .expect("5x5 has a tour from the corner");
///
/// assert_eq!(tour.start(), Cell::new(0, 0));
/// assert_eq!(tour.move_count(), 24);
///
/// let steps = tour.to_step_grid();
/// assert_eq!(steps[Cell::new(0, 0)], 1);
/// assert_eq!(steps[tour.end()], 25);
/// # Ok::<(), knight_tour_solver::TourError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    size: usize,
    cells: Vec<Cell>,
}

impl Tour {
    /// Wraps a finished path on a `size × size` board.
    pub(crate) fn new(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { size, cells }
    }

    /// Returns the side length of the board.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cells in visiting order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the number of cells visited.
    #[must_use]
    #[inline]
    #[expect(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of moves made, one less than [`len`](Self::len).
    #[must_use]
    #[inline]
    pub fn move_count(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Returns the first cell.
    #[must_use]
    #[inline]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// Returns the last cell.
    #[must_use]
    #[inline]
    pub fn end(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Consumes the tour and returns its cells.
    #[must_use]
    #[inline]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Returns `true` if the last cell can reach the start in one move.
    #[must_use]
    pub fn is_closed(&self, profile: &MoveProfile) -> bool {
        self.len() > 1 && profile.moves_between(self.end(), self.start()) > 0
    }

    /// Checks that the cells form a tour of the board under `profile`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, checking in this order: length,
    /// bounds, repeated cells, then the legality of each move.
    pub fn validate(&self, profile: &MoveProfile) -> Result<(), TourValidationError> {
        let expected = self.size * self.size;
        if self.cells.len() != expected {
            return Err(TourValidationError::WrongLength {
                len: self.cells.len(),
                expected,
            });
        }

        let mut seen = HashSet::with_capacity(expected);
        for (step, &cell) in self.cells.iter().enumerate() {
            if !cell.is_within(self.size, self.size) {
                return Err(TourValidationError::OutOfBounds { cell, step });
            }
            if !seen.insert(cell) {
                return Err(TourValidationError::Revisited { cell, step });
            }
        }

        for (step, pair) in self.cells.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            if profile.moves_between(from, to) != 1 {
                return Err(TourValidationError::IllegalMove {
                    from,
                    to,
                    step: step + 1,
                });
            }
        }
        Ok(())
    }

    /// Returns a grid holding the 1-based visit number of each cell.
    ///
    /// Cells the tour does not cover hold `0`.
    #[must_use]
    pub fn to_step_grid(&self) -> Grid<usize> {
        let mut grid = Grid::filled(self.size, self.size, 0);
        for (i, &cell) in self.cells.iter().enumerate() {
            if let Some(slot) = grid.get_mut(cell) {
                *slot = i + 1;
            }
        }
        grid
    }
}

impl Display for Tour {
    /// Renders the step grid, one board row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.to_step_grid();
        let width = grid.len().to_string().len();
        for y in 0..grid.rows() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, step) in grid.row(y).iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{step:>width$}")?;
            }
        }
        Ok(())
    }
}
