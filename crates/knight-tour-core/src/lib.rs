//! Core data structures for knight's tour search.
//!
//! This crate provides the value types shared by the tour solver: board
//! coordinates, relative move offsets, the movement model of a piece, and a
//! dense 2-D container for per-cell data.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`cell`]: [`Cell`] is an `(x, y)` coordinate and
//!    [`Offset`] is a relative displacement that can be added to it.
//! 2. **Movement** - [`move_profile`]: [`MoveProfile`] is an ordered list of
//!    offsets describing which cells a piece may reach in one move. The
//!    standard knight is a constant instance of this data, [`KNIGHT_OFFSETS`].
//! 3. **Containers** - [`containers`]: [`Grid`] is a row-major dense grid
//!    indexed by [`Cell`].
//! 4. **Markers** - [`visit`]: [`Visit`] is the per-cell visitation marker.
//!
//! [`Grid`]: containers::Grid
//!
//! # Examples
//!
//! ```
//! use knight_tour_core::{Cell, MoveProfile, Visit, containers::Grid};
//!
//! let profile = MoveProfile::knight();
//! let grid = Grid::filled(5, 5, Visit::Unvisited);
//!
//! // Only two knight moves from a corner stay on a 5x5 board.
//! let on_board: Vec<_> = profile
//!     .targets(Cell::new(0, 0))
//!     .filter(|&cell| grid.contains(cell))
//!     .collect();
//! assert_eq!(on_board, [Cell::new(1, 2), Cell::new(2, 1)]);
//! ```

pub mod cell;
pub mod containers;
pub mod move_profile;
pub mod visit;

// Re-export commonly used types
pub use self::{
    cell::{Cell, Offset},
    move_profile::{KNIGHT_OFFSETS, MoveProfile},
    visit::Visit,
};
