//! In-memory address store
//!
//! Mirrors the SQLite backend's id behaviour: ids start at 1 and are never
//! handed out twice, even after a delete.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::AddressStore;
use crate::address::{Address, AddressId, StoredAddress};

#[derive(Debug, Default)]
struct Rows {
    last_id: AddressId,
    by_id: BTreeMap<AddressId, Address>,
}

/// Process-local store, lost on exit
#[derive(Debug, Default)]
pub struct MemoryAddressStore {
    rows: RwLock<Rows>,
}

impl MemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Internal("address store lock poisoned".to_string())
}

impl AddressStore for MemoryAddressStore {
    fn insert(&self, address: &Address) -> StoreResult<AddressId> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        rows.last_id += 1;
        let id = rows.last_id;
        rows.by_id.insert(id, address.clone());
        Ok(id)
    }

    fn get(&self, id: AddressId) -> StoreResult<StoredAddress> {
        let rows = self.rows.read().map_err(poisoned)?;
        rows.by_id
            .get(&id)
            .map(|address| StoredAddress::new(id, address.clone()))
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: AddressId, address: &Address) -> StoreResult<()> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        if let Some(row) = rows.by_id.get_mut(&id) {
            *row = address.clone();
        }
        Ok(())
    }

    fn delete(&self, id: AddressId) -> StoreResult<()> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        rows.by_id.remove(&id);
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<StoredAddress>> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows
            .by_id
            .iter()
            .map(|(id, address)| StoredAddress::new(*id, address.clone()))
            .collect())
    }
}
