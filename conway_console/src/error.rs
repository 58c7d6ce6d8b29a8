// error.rs - Error types for the console simulator

use thiserror::Error;

/// Errors raised while building or running a simulation.
#[derive(Debug, Error)]
pub enum LifeError {
    /// A board needs at least one row and one column.
    #[error("board dimensions must be non-zero, got {rows}x{cols}")]
    EmptyDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// The board's storage cannot be sized or allocated.
    #[error("board dimensions {rows}x{cols} are too large")]
    TooLarge { rows: usize, cols: usize },

    /// A checked write landed outside the board.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Two boards that must share a shape do not.
    #[error("board shape mismatch: {expected:?} vs {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// No catalog pattern carries the requested name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// Writing rendered output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
