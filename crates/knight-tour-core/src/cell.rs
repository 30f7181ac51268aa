//! Board coordinates and relative displacements.

use std::{
    fmt::{self, Display},
    ops::Add,
};

/// A board coordinate `(x, y)`.
///
/// `x` is the column and `y` is the row, both 0-indexed. A `Cell` is a pure
/// value with no notion of a board: it may hold coordinates that lie outside
/// any particular grid, which is what moving off the edge produces. Bounds are
/// checked by the container that is indexed with it.
///
/// # Examples
///
/// ```
/// use knight_tour_core::{Cell, Offset};
///
/// let cell = Cell::new(0, 0) + Offset::new(-1, 2);
/// assert_eq!(cell, Cell::new(-1, 2));
/// assert_eq!(cell.to_string(), "(-1, 2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell {
    x: i32,
    y: i32,
}

impl Cell {
    /// Creates a new cell.
    #[must_use]
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the column (x coordinate).
    #[must_use]
    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Returns the row (y coordinate).
    #[must_use]
    #[inline]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Returns `true` if the cell lies within `[0, cols) × [0, rows)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use knight_tour_core::Cell;
    ///
    /// assert!(Cell::new(4, 0).is_within(5, 5));
    /// assert!(!Cell::new(5, 0).is_within(5, 5));
    /// assert!(!Cell::new(-1, 0).is_within(5, 5));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_within(self, cols: usize, rows: usize) -> bool {
        let in_range = |v: i32, len: usize| usize::try_from(v).is_ok_and(|v| v < len);
        in_range(self.x, cols) && in_range(self.y, rows)
    }

    /// Returns `self` moved by `offset`, or `None` if a coordinate overflows.
    ///
    /// An overflowing target lies outside every board, so callers that walk
    /// caller-supplied offsets can simply skip it.
    ///
    /// # Examples
    ///
    /// ```
    /// use knight_tour_core::{Cell, Offset};
    ///
    /// let cell = Cell::new(1, 0);
    /// assert_eq!(cell.checked_add(Offset::new(1, 2)), Some(Cell::new(2, 2)));
    /// assert_eq!(cell.checked_add(Offset::new(i32::MAX, 0)), None);
    /// ```
    #[must_use]
    #[inline]
    pub const fn checked_add(self, offset: Offset) -> Option<Self> {
        let Some(x) = self.x.checked_add(offset.dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add(offset.dy) else {
            return None;
        };
        Some(Self::new(x, y))
    }

    /// Returns the displacement that moves `self` onto `other`.
    #[must_use]
    #[inline]
    pub const fn offset_to(self, other: Self) -> Offset {
        Offset::new(other.x - self.x, other.y - self.y)
    }
}

impl Add<Offset> for Cell {
    type Output = Cell;

    /// Overflow behaves as plain `i32` addition; see [`Cell::checked_add`].
    #[inline]
    fn add(self, offset: Offset) -> Self::Output {
        Cell::new(self.x + offset.dx, self.y + offset.dy)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A relative displacement `(dx, dy)` between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Offset {
    /// Column displacement.
    pub dx: i32,
    /// Row displacement.
    pub dy: i32,
}

impl Offset {
    /// Creates a new offset.
    #[must_use]
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

impl From<(i32, i32)> for Offset {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self::new(dx, dy)
    }
}
