//! SQLite-backed address store
//!
//! Every operation opens its own connection to the database file and drops
//! it when done. Each statement commits on its own; nothing spans calls.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, error};

use super::errors::{StoreError, StoreResult};
use super::AddressStore;
use crate::address::{Address, AddressId, Coordinates, StoredAddress};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS addresses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    street TEXT,
    city TEXT,
    state TEXT,
    country TEXT,
    latitude REAL,
    longitude REAL
)";

const SELECT_COLUMNS: &str = "SELECT id, street, city, state, country, latitude, longitude FROM addresses";

/// File-backed store, one connection per call
#[derive(Debug)]
pub struct SqliteAddressStore {
    path: PathBuf,
}

impl SqliteAddressStore {
    /// Open the store at `path`, creating the file and table if absent
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.create_schema()?;
        Ok(store)
    }

    fn create_schema(&self) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute(CREATE_TABLE, [])?;
        debug!(path = %self.path.display(), "address table ready");
        Ok(())
    }

    fn connect(&self) -> StoreResult<Connection> {
        Connection::open(&self.path).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "failed to open address database");
            StoreError::from(e)
        })
    }

    fn row_to_stored(row: &Row<'_>) -> rusqlite::Result<StoredAddress> {
        Ok(StoredAddress::new(
            row.get(0)?,
            Address {
                street: row.get(1)?,
                city: row.get(2)?,
                state: row.get(3)?,
                country: row.get(4)?,
                coordinates: Coordinates::new(row.get(5)?, row.get(6)?),
            },
        ))
    }
}

impl AddressStore for SqliteAddressStore {
    fn insert(&self, address: &Address) -> StoreResult<AddressId> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO addresses (street, city, state, country, latitude, longitude) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                address.street,
                address.city,
                address.state,
                address.country,
                address.coordinates.latitude,
                address.coordinates.longitude,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn get(&self, id: AddressId) -> StoreResult<StoredAddress> {
        let conn = self.connect()?;
        conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            Self::row_to_stored,
        )
        .optional()?
        .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: AddressId, address: &Address) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute(
            "UPDATE addresses SET street = ?1, city = ?2, state = ?3, country = ?4, \
             latitude = ?5, longitude = ?6 WHERE id = ?7",
            params![
                address.street,
                address.city,
                address.state,
                address.country,
                address.coordinates.latitude,
                address.coordinates.longitude,
                id,
            ],
        )?;
        Ok(())
    }

    fn delete(&self, id: AddressId) -> StoreResult<()> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM addresses WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn list_all(&self) -> StoreResult<Vec<StoredAddress>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_COLUMNS)?;
        let rows = stmt
            .query_map([], Self::row_to_stored)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, SqliteAddressStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteAddressStore::open(dir.path().join("address_book.db")).unwrap();
        (dir, store)
    }

    fn sample(street: &str) -> Address {
        Address::new(street, "Springfield", "IL", "US", Coordinates::new(39.78, -89.65))
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let (_dir, store) = open_temp();
        let a = store.insert(&sample("1 Main St")).unwrap();
        let b = store.insert(&sample("2 Main St")).unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let (_dir, store) = open_temp();
        assert!(matches!(store.get(99), Err(StoreError::NotFound(99))));
    }

    #[test]
    fn test_update_and_delete_missing_are_noops() {
        let (_dir, store) = open_temp();
        store.update(5, &sample("nowhere")).unwrap();
        store.delete(5).unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_deleted_ids_are_not_reissued() {
        let (_dir, store) = open_temp();
        let first = store.insert(&sample("1 Main St")).unwrap();
        store.delete(first).unwrap();
        let second = store.insert(&sample("2 Main St")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_open_is_idempotent() {
        let (dir, store) = open_temp();
        let id = store.insert(&sample("1 Main St")).unwrap();

        let reopened = SqliteAddressStore::open(dir.path().join("address_book.db")).unwrap();
        assert_eq!(reopened.get(id).unwrap().address, sample("1 Main St"));
    }
}
