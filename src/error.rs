use thiserror::Error;

/// Errors reported by the fallible grid operations.
///
/// `tick` and `render` are total; only construction and the direct cell
/// accessor can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("initial pattern has {got} cells, expected {expected}")]
    CellCountMismatch { expected: usize, got: usize },

    #[error("malformed RLE pattern: {0}")]
    MalformedRle(String),
}
