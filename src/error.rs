use thiserror::Error;

/// Failures raised by the grid, engine and controller.
/// All of them are local and synchronous; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("expected a {}x{} generation, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
