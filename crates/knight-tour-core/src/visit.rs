//! Per-cell visitation marker.

/// Whether a board cell is part of the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Visit {
    /// The cell has not been visited.
    #[default]
    Unvisited,
    /// The cell is on the current path.
    Visited,
}
