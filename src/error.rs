use thiserror::Error;

pub type Result<T> = std::result::Result<T, FitError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("x and y value sequences differ in length: {x} vs {y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("singular matrix: zero pivot at row {pivot}")]
    SingularMatrix { pivot: usize },
    #[error("division by zero fraction")]
    DivisionByZero,
    #[error("row {row} has {len} entries, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("dimension mismatch: {left} columns against {right} rows")]
    DimensionMismatch { left: usize, right: usize },
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("invalid options: {0}")]
    Config(String),
}
