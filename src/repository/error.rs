use thiserror::Error;

use super::RecordId;

/// Errors surfaced by repository operations.
///
/// `NotFound` is the only variant callers are expected to act on; everything
/// else is an unexpected storage fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{label} with id {id} not found")]
    NotFound { label: &'static str, id: RecordId },

    #[error("repository lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}
