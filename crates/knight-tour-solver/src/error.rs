use knight_tour_core::Cell;

/// Errors rejected before a search begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TourError {
    /// The board must have at least one cell and fit `Cell` coordinates.
    #[display("board size must be between 1 and i32::MAX, got {size}")]
    InvalidBoardSize {
        /// Requested board size.
        size: usize,
    },
    /// The start cell lies outside the board.
    #[display("start cell {start} is outside the {size}x{size} board")]
    InvalidStart {
        /// Requested start cell.
        start: Cell,
        /// Board size.
        size: usize,
    },
}

/// Errors from [`Path`](crate::Path) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PathError {
    /// Only the start cell remains; it cannot be undone.
    #[display("cannot pop the start cell of a path")]
    EmptyHistory,
}

/// Reasons a cell sequence fails to be a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TourValidationError {
    /// The sequence does not cover the board.
    #[display("tour has {len} cells, expected {expected}")]
    WrongLength {
        /// Number of cells in the sequence.
        len: usize,
        /// Number of cells on the board.
        expected: usize,
    },
    /// A cell lies outside the board.
    #[display("cell {cell} at step {step} is outside the board")]
    OutOfBounds {
        /// Offending cell.
        cell: Cell,
        /// 0-based index in the sequence.
        step: usize,
    },
    /// A cell appears more than once.
    #[display("cell {cell} is revisited at step {step}")]
    Revisited {
        /// Offending cell.
        cell: Cell,
        /// 0-based index of the second visit.
        step: usize,
    },
    /// Two consecutive cells are not one legal move apart.
    #[display("move from {from} to {to} at step {step} is not a single legal move")]
    IllegalMove {
        /// Source cell.
        from: Cell,
        /// Destination cell.
        to: Cell,
        /// 0-based index of the destination.
        step: usize,
    },
}
