//! # Store Errors

use thiserror::Error;

use crate::address::AddressId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Address not found: {0}")]
    NotFound(AddressId),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
