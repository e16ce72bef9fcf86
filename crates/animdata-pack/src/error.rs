use animdata_types::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("truncated data at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("cannot read record count for bucket {bucket} at offset {offset}")]
    RecordCountTruncated { bucket: usize, offset: usize },

    #[error("malformed COF name field at offset {offset}: {reason}")]
    MalformedName { offset: usize, reason: String },

    #[error("invalid record field at offset {offset}: {source}")]
    InvalidRecord { offset: usize, source: RecordError },

    #[error("incorrect hash for COF name {name:?} at offset {offset}: expected {expected} but got {actual}")]
    HashMismatch {
        offset: usize,
        name: String,
        expected: usize,
        actual: u8,
    },

    #[error("data size mismatch: buckets use {consumed} bytes, but data is {len} bytes")]
    TrailingData { consumed: usize, len: usize },

    #[error("bucket {bucket} holds {count} records, more than a record count can describe")]
    BucketOverflow { bucket: usize, count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Byte offset at which a structural problem was detected.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Truncated { offset, .. }
            | Self::RecordCountTruncated { offset, .. }
            | Self::MalformedName { offset, .. }
            | Self::InvalidRecord { offset, .. }
            | Self::HashMismatch { offset, .. } => Some(*offset),
            Self::TrailingData { consumed, .. } => Some(*consumed),
            Self::BucketOverflow { .. } | Self::Io(_) => None,
        }
    }
}

pub type PackResult<T> = Result<T, PackError>;
