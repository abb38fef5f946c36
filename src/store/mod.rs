//! # Record Store
//!
//! Persistence for address rows. Each backend implements [`AddressStore`];
//! none of them coordinate multi-step sequences across calls.

mod errors;
mod memory;
mod sqlite;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryAddressStore;
pub use sqlite::SqliteAddressStore;

use crate::address::{Address, AddressId, StoredAddress};

/// Trait for address persistence
pub trait AddressStore: Send + Sync + std::fmt::Debug {
    /// Append a row and return its new identifier
    fn insert(&self, address: &Address) -> StoreResult<AddressId>;

    /// Fetch one row, failing with `StoreError::NotFound` if absent
    fn get(&self, id: AddressId) -> StoreResult<StoredAddress>;

    /// Overwrite every field of a row. Missing ids are a silent no-op.
    fn update(&self, id: AddressId, address: &Address) -> StoreResult<()>;

    /// Remove a row. Missing ids are a silent no-op.
    fn delete(&self, id: AddressId) -> StoreResult<()>;

    /// Every row, in store iteration order
    fn list_all(&self) -> StoreResult<Vec<StoredAddress>>;
}
