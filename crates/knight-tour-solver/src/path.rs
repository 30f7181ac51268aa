use knight_tour_core::Cell;

use crate::PathError;

/// Ordered history of the cells visited by the piece.
///
/// A path always begins at its start cell. [`push`](Self::push) records a
/// move and [`pop`](Self::pop) undoes the most recent one; the start cell is
/// the floor that `pop` refuses to go below. Dropping the start cell too is
/// only meaningful when giving up on the whole run, which is what
/// [`abandon`](Self::abandon) is for.
///
/// # Examples
///
/// ```
/// use knight_tour_core::Cell;
/// use knight_tour_solver::{Path, PathError};
///
/// let mut path = Path::new(Cell::new(0, 0));
/// path.push(Cell::new(1, 2));
/// assert_eq!(path.current(), Some(Cell::new(1, 2)));
///
/// assert_eq!(path.pop(), Ok(Cell::new(1, 2)));
/// assert_eq!(path.current(), Some(Cell::new(0, 0)));
/// assert_eq!(path.pop(), Err(PathError::EmptyHistory));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Creates a path whose history is just `start`.
    #[must_use]
    pub fn new(start: Cell) -> Self {
        Self::with_capacity(start, 1)
    }

    /// Creates a path with room for `capacity` cells without reallocating.
    #[must_use]
    pub fn with_capacity(start: Cell, capacity: usize) -> Self {
        let mut cells = Vec::with_capacity(capacity.max(1));
        cells.push(start);
        Self { cells }
    }

    /// Appends `cell`, making it the current cell.
    #[inline]
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Removes and returns the current cell.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptyHistory`] if the start cell is the only cell
    /// left, or if the path has been abandoned.
    #[inline]
    pub fn pop(&mut self) -> Result<Cell, PathError> {
        if self.cells.len() <= 1 {
            return Err(PathError::EmptyHistory);
        }
        self.cells.pop().ok_or(PathError::EmptyHistory)
    }

    /// Clears the whole history, including the start cell.
    pub fn abandon(&mut self) {
        self.cells.clear();
    }

    /// Returns the number of cells in the history.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the path has been abandoned.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell the piece currently stands on.
    ///
    /// Returns `None` only after [`abandon`](Self::abandon).
    #[must_use]
    #[inline]
    pub fn current(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Returns the start cell, or `None` after [`abandon`](Self::abandon).
    #[must_use]
    #[inline]
    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Returns the visited cells in traversal order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Consumes the path and returns its cells in traversal order.
    #[must_use]
    #[inline]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Board;

    #[test]
    fn test_new_path_holds_start() {
        let path = Path::new(Cell::new(2, 3));
        assert_eq!(path.len(), 1);
        assert!(!path.is_empty());
        assert_eq!(path.start(), Some(Cell::new(2, 3)));
        assert_eq!(path.current(), Some(Cell::new(2, 3)));
    }

    #[test]
    fn test_push_pop_order() {
        let mut path = Path::new(Cell::new(0, 0));
        path.push(Cell::new(1, 2));
        path.push(Cell::new(2, 4));
        assert_eq!(path.cells(), &[Cell::new(0, 0), Cell::new(1, 2), Cell::new(2, 4)]);
        assert_eq!(path.pop(), Ok(Cell::new(2, 4)));
        assert_eq!(path.pop(), Ok(Cell::new(1, 2)));
        assert_eq!(path.pop(), Err(PathError::EmptyHistory));
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_abandon_empties_path() {
        let mut path = Path::new(Cell::new(0, 0));
        path.push(Cell::new(1, 2));
        path.abandon();
        assert!(path.is_empty());
        assert_eq!(path.current(), None);
        assert_eq!(path.start(), None);
        assert_eq!(path.pop(), Err(PathError::EmptyHistory));
    }

    #[test]
    fn test_into_cells() {
        let mut path = Path::with_capacity(Cell::new(0, 0), 4);
        path.push(Cell::new(2, 1));
        assert_eq!(path.into_cells(), vec![Cell::new(0, 0), Cell::new(2, 1)]);
    }

    proptest! {
        // Mirroring every push/pop onto a board keeps exactly the path cells visited.
        #[test]
        fn test_path_mirrors_board(ops in proptest::collection::vec(any::<Option<(u8, u8)>>(), 0..64)) {
            let size = 6;
            let start = Cell::new(0, 0);
            let mut board = Board::new(size);
            let mut path = Path::new(start);
            board.mark_visited(start);

            for op in ops {
                match op {
                    Some((x, y)) => {
                        let cell = Cell::new(i32::from(x % 6), i32::from(y % 6));
                        if board.is_unvisited(cell) {
                            board.mark_visited(cell);
                            path.push(cell);
                        }
                    }
                    None => {
                        if let Ok(cell) = path.pop() {
                            board.mark_unvisited(cell);
                        }
                    }
                }
                prop_assert_eq!(board.visited_count(), path.len());
                prop_assert!(path.cells().iter().all(|&cell| !board.is_unvisited(cell)));
                prop_assert_eq!(path.start(), Some(start));
            }
        }
    }
}
