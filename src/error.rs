use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitEditError {
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
    #[error("Unknown tool: {0}")]
    InvalidToolName(String),
    #[error("Grid side must be at least 1")]
    InvalidSide,
}

pub type Result<T> = std::result::Result<T, BitEditError>;
