use thiserror::Error;

use crate::domain::{RecordId, RecordKind};

/// Error type returned by record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: RecordId },
    #[error("{kind} identifiers exhausted")]
    IdsExhausted { kind: RecordKind },
    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
