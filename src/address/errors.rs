//! # Address Errors

use thiserror::Error;

use super::model::AddressId;
use crate::distance::DistanceError;
use crate::store::StoreError;

/// Result type for address operations
pub type AddressResult<T> = Result<T, AddressError>;

/// Address service errors
#[derive(Debug, Clone, Error)]
pub enum AddressError {
    /// No row carries this identifier
    #[error("Address not found")]
    NotFound(AddressId),

    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored or requested coordinate pair has no geodesic
    #[error("Distance error: {0}")]
    Distance(String),
}

impl AddressError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            AddressError::NotFound(_) => 404,
            AddressError::Storage(_) => 500,
            AddressError::Distance(_) => 500,
        }
    }
}

impl From<StoreError> for AddressError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AddressError::NotFound(id),
            other => AddressError::Storage(other.to_string()),
        }
    }
}

impl From<DistanceError> for AddressError {
    fn from(err: DistanceError) -> Self {
        AddressError::Distance(err.to_string())
    }
}
