//! Store-specific error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Member store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The collection lock was poisoned by a panicking writer
    #[error("member store lock poisoned")]
    LockPoisoned,

    /// A member with this id already exists
    #[error("duplicate member id: {0}")]
    DuplicateId(u32),
}
