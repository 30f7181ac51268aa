use knight_tour_core::{Cell, Visit, containers::Grid};

/// Visitation state of a square board for one search run.
///
/// `Board` wraps a [`Grid`] of [`Visit`] markers with the operations the
/// search needs. It does not know about the path: keeping exactly the cells
/// on the current [`Path`](crate::Path) marked as visited is the caller's
/// contract, and it is not checked here.
///
/// # Examples
///
/// ```
/// use knight_tour_core::Cell;
/// use knight_tour_solver::Board;
///
/// let mut board = Board::new(3);
/// let cell = Cell::new(1, 2);
///
/// assert!(board.is_unvisited(cell));
/// board.mark_visited(cell);
/// assert!(!board.is_unvisited(cell));
/// board.mark_unvisited(cell);
/// assert!(board.is_unvisited(cell));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    markers: Grid<Visit>,
}

impl Board {
    /// Creates a `size × size` board with every cell unvisited.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds `i32::MAX`.
    #[must_use]
    #[track_caller]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            markers: Grid::filled(size, size, Visit::Unvisited),
        }
    }

    /// Returns the side length of the board.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells on the board.
    #[must_use]
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.markers.len()
    }

    /// Returns `true` if `cell` lies within `[0, size) × [0, size)`.
    #[must_use]
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.markers.contains(cell)
    }

    /// Returns `true` if `cell` has not been visited.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board. Check with
    /// [`contains`](Self::contains) first.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn is_unvisited(&self, cell: Cell) -> bool {
        self.markers[cell].is_unvisited()
    }

    /// Marks `cell` as visited.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    #[inline]
    #[track_caller]
    pub fn mark_visited(&mut self, cell: Cell) {
        self.markers[cell] = Visit::Visited;
    }

    /// Marks `cell` as unvisited.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the board.
    #[inline]
    #[track_caller]
    pub fn mark_unvisited(&mut self, cell: Cell) {
        self.markers[cell] = Visit::Unvisited;
    }

    /// Returns the number of visited cells.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.markers
            .cells()
            .filter(|&cell| self.markers[cell].is_visited())
            .count()
    }

    /// Marks every cell as unvisited.
    pub fn reset(&mut self) {
        self.markers.fill(Visit::Unvisited);
    }

    /// Returns the underlying marker grid.
    #[must_use]
    #[inline]
    pub fn markers(&self) -> &Grid<Visit> {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_unvisited() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.cell_count(), 16);
        assert_eq!(board.visited_count(), 0);
        assert!(board.markers().cells().all(|cell| board.is_unvisited(cell)));
    }

    #[test]
    fn test_contains_bounds() {
        let board = Board::new(5);
        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(4, 4)));
        assert!(!board.contains(Cell::new(5, 0)));
        assert!(!board.contains(Cell::new(0, -1)));
    }

    #[test]
    fn test_marks_are_unconditional_writes() {
        let mut board = Board::new(2);
        let cell = Cell::new(1, 0);
        board.mark_visited(cell);
        board.mark_visited(cell);
        assert_eq!(board.visited_count(), 1);
        board.mark_unvisited(cell);
        board.mark_unvisited(cell);
        assert_eq!(board.visited_count(), 0);
    }

    #[test]
    fn test_reset_clears_all_marks() {
        let mut board = Board::new(3);
        for cell in Board::new(3).markers().cells() {
            board.mark_visited(cell);
        }
        assert_eq!(board.visited_count(), 9);
        board.reset();
        assert_eq!(board.visited_count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_is_unvisited_out_of_bounds_panics() {
        let board = Board::new(3);
        let _ = board.is_unvisited(Cell::new(3, 0));
    }
}
