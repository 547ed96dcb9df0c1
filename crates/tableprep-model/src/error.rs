use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("column '{name}' has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),
    #[error("row mask has {actual} entries, expected {expected}")]
    MaskLengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;
