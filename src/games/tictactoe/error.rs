//! Coordinate errors raised by the board and its slices.

/// Which coordinate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Axis {
    /// Column coordinate.
    #[display("X")]
    X,
    /// Row coordinate.
    #[display("Y")]
    Y,
    /// Offset of a cell within a slice.
    #[display("slice index")]
    Index,
}

/// Error that can occur when addressing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A coordinate fell outside `0..BOARD_SIZE`.
    #[display("Invalid {} position: {}", axis, value)]
    InvalidPosition {
        /// The offending axis.
        axis: Axis,
        /// The rejected value.
        value: usize,
    },
}

impl std::error::Error for BoardError {}
