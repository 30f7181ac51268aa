//! Generic containers indexed by [`Cell`](crate::Cell).

pub use self::grid::*;

mod grid;
