//! Error types raised by store implementations.

use thiserror::Error;

use crate::core::RecordId;

/// Errors surfaced by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} record {id} not found")]
    NotFound { kind: &'static str, id: RecordId },

    #[error("a board space already exists at position {0}")]
    DuplicatePosition(u8),

    #[error("store backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl From<bincode::Error> for StoreError {
    fn from(err: bincode::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
