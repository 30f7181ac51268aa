use std::{
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

use crate::Cell;

/// A dense row-major 2-D grid indexed by [`Cell`].
///
/// `cell.x()` selects the column and `cell.y()` the row. Checked access goes
/// through [`get`](Self::get) / [`get_mut`](Self::get_mut); the `Index`
/// operators panic on out-of-bounds cells in the same way slice indexing does.
///
/// # Examples
///
/// ```
/// use knight_tour_core::{Cell, containers::Grid};
///
/// let mut grid = Grid::filled(2, 3, 0_u8);
/// assert_eq!((grid.rows(), grid.cols()), (2, 3));
///
/// grid[Cell::new(2, 1)] = 7;
/// assert_eq!(grid.get(Cell::new(2, 1)), Some(&7));
/// assert_eq!(grid.get(Cell::new(3, 1)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Clone,
{
    /// Creates a `rows × cols` grid with every cell set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` exceeds `i32::MAX`, the largest extent a
    /// [`Cell`] coordinate can address.
    #[must_use]
    #[track_caller]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        assert!(
            i32::try_from(rows).is_ok() && i32::try_from(cols).is_ok(),
            "{cols}x{rows} grid exceeds the cell coordinate range"
        );
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `cell` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_within(self.cols, self.rows)
    }

    #[inline]
    fn offset(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        let x = usize::try_from(cell.x()).ok()?;
        let y = usize::try_from(cell.y()).ok()?;
        Some(y * self.cols + x)
    }

    /// Returns a reference to the value at `cell`, or `None` if out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.offset(cell).map(|i| &self.cells[i])
    }

    /// Returns a mutable reference to the value at `cell`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.offset(cell).map(|i| &mut self.cells[i])
    }

    /// Stores `value` at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the grid.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, cell: Cell, value: T) {
        self[cell] = value;
    }

    /// Returns an iterator over all cells in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> Cells {
        Cells {
            cols: self.cols,
            next: 0,
            end: self.cells.len(),
        }
    }

    /// Returns the values of row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not less than [`rows`](Self::rows).
    #[must_use]
    #[track_caller]
    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.rows, "row {y} out of range for {} rows", self.rows);
        &self.cells[y * self.cols..(y + 1) * self.cols]
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, cell: Cell) -> &Self::Output {
        match self.offset(cell) {
            Some(i) => &self.cells[i],
            None => panic!(
                "cell {cell} out of bounds for {}x{} grid",
                self.cols, self.rows
            ),
        }
    }
}

impl<T> IndexMut<Cell> for Grid<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        match self.offset(cell) {
            Some(i) => &mut self.cells[i],
            None => panic!(
                "cell {cell} out of bounds for {}x{} grid",
                self.cols, self.rows
            ),
        }
    }
}

/// Row-major iterator over the cells of a [`Grid`].
#[derive(Debug, Clone)]
pub struct Cells {
    cols: usize,
    next: usize,
    end: usize,
}

impl Cells {
    /// `Grid::filled` bounds both extents by `i32::MAX`, so this is `Some`
    /// for every index below `end`.
    fn cell_at(&self, i: usize) -> Option<Cell> {
        let x = i32::try_from(i % self.cols).ok()?;
        let y = i32::try_from(i / self.cols).ok()?;
        Some(Cell::new(x, y))
    }
}

impl Iterator for Cells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let cell = self.cell_at(self.next)?;
        self.next += 1;
        Some(cell)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Cells {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let cell = self.cell_at(self.end - 1)?;
        self.end -= 1;
        Some(cell)
    }
}

impl FusedIterator for Cells {}
impl ExactSizeIterator for Cells {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_filled_and_fill() {
        let mut grid = Grid::filled(3, 4, 'a');
        assert_eq!(grid.len(), 12);
        assert!(grid.cells().all(|cell| grid[cell] == 'a'));

        grid.set(Cell::new(1, 1), 'b');
        assert_eq!(grid[Cell::new(1, 1)], 'b');

        grid.fill('c');
        assert!(grid.cells().all(|cell| grid[cell] == 'c'));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::filled(0, 0, ());
        assert!(grid.is_empty());
        assert_eq!(grid.cells().count(), 0);
        assert!(!grid.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_cells_row_major_order() {
        let grid = Grid::filled(2, 3, ());
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            [
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(2, 1),
            ]
        );
        assert_eq!(grid.cells().next_back(), Some(Cell::new(2, 1)));
    }

    #[test]
    fn test_row_slice() {
        let mut grid = Grid::filled(2, 2, 0);
        grid[Cell::new(0, 1)] = 1;
        grid[Cell::new(1, 1)] = 2;
        assert_eq!(grid.row(0), &[0, 0]);
        assert_eq!(grid.row(1), &[1, 2]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::filled(2, 2, 0);
        let _value = grid[Cell::new(2, 0)];
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_negative_panics() {
        let mut grid = Grid::filled(2, 2, 0);
        grid[Cell::new(0, -1)] = 1;
    }

    #[test]
    #[should_panic(expected = "exceeds the cell coordinate range")]
    fn test_filled_rejects_extent_beyond_cell_range() {
        let too_wide = usize::try_from(i32::MAX).unwrap() + 1;
        let _grid = Grid::filled(0, too_wide, ());
    }

    #[test]
    fn test_cells_reach_far_corner() {
        let grid = Grid::filled(3, 40_000, ());
        assert_eq!(grid.cells().next_back(), Some(Cell::new(39_999, 2)));
        assert_eq!(grid.cells().nth(40_001), Some(Cell::new(1, 1)));
    }

    proptest! {
        #[test]
        fn test_get_matches_contains(
            rows in 0_usize..10, cols in 0_usize..10,
            x in -3_i32..12, y in -3_i32..12,
        ) {
            let grid = Grid::filled(rows, cols, 0_u8);
            let cell = Cell::new(x, y);
            prop_assert_eq!(grid.get(cell).is_some(), grid.contains(cell));
        }

        #[test]
        fn test_cells_visits_each_slot_once(rows in 1_usize..8, cols in 1_usize..8) {
            let mut grid = Grid::filled(rows, cols, 0_u32);
            for cell in grid.cells() {
                grid[cell] += 1;
            }
            prop_assert!(grid.cells().all(|cell| grid[cell] == 1));
            prop_assert_eq!(grid.cells().len(), rows * cols);
        }
    }
}
