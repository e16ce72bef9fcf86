use animdata_types::RecordError;
use thiserror::Error;

/// Errors produced while reading a text mirror.
///
/// Row indices count data rows from 0 (the header row is not counted).
#[derive(Debug, Error)]
pub enum TextError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid record field (entry={index}): {source}")]
    InvalidEntry { index: usize, source: RecordError },

    #[error("missing column (column_name={column_name:?})")]
    MissingColumn { column_name: String },

    #[error("missing cell (row={row}, column={column}, column_name={column_name:?})")]
    MissingCell {
        row: usize,
        column: usize,
        column_name: String,
    },

    #[error("cannot convert cell value {value:?} to integer (row={row}, column={column}, column_name={column_name:?})")]
    InvalidInteger {
        row: usize,
        column: usize,
        column_name: String,
        value: String,
    },

    #[error("invalid record field (row={row}): {source}")]
    InvalidRecord { row: usize, source: RecordError },

    #[error("unterminated quoted cell (line={line})")]
    UnterminatedQuote { line: usize },
}

pub type TextResult<T> = Result<T, TextError>;
