//! # Address Service
//!
//! Request-shaped operations over an [`AddressStore`]. Multi-step operations
//! (update, delete) check existence first and are not atomic: a concurrent
//! delete between the check and the write is not guarded against.

use std::sync::Arc;

use tracing::debug;

use super::errors::AddressResult;
use super::model::{Address, AddressId, Coordinates, StoredAddress};
use crate::distance;
use crate::store::AddressStore;

/// Message returned by a successful delete
pub const DELETED_MESSAGE: &str = "Address deleted successfully";

/// Address operations backed by a shared store
#[derive(Debug, Clone)]
pub struct AddressService {
    store: Arc<dyn AddressStore>,
}

impl AddressService {
    pub fn new(store: Arc<dyn AddressStore>) -> Self {
        Self { store }
    }

    /// Insert, then re-fetch the stored row
    pub fn create(&self, address: &Address) -> AddressResult<StoredAddress> {
        let id = self.store.insert(address)?;
        debug!(id, "address created");
        Ok(self.store.get(id)?)
    }

    pub fn read(&self, id: AddressId) -> AddressResult<StoredAddress> {
        Ok(self.store.get(id)?)
    }

    /// Overwrite every field of an existing address and return the new row
    pub fn update(&self, id: AddressId, address: &Address) -> AddressResult<StoredAddress> {
        self.store.get(id)?;
        self.store.update(id, address)?;
        debug!(id, "address updated");
        Ok(self.store.get(id)?)
    }

    /// Delete an existing address, returning the confirmation message
    pub fn delete(&self, id: AddressId) -> AddressResult<&'static str> {
        self.store.get(id)?;
        self.store.delete(id)?;
        debug!(id, "address deleted");
        Ok(DELETED_MESSAGE)
    }

    /// Every stored address within `distance_km` of `center`, inclusive.
    ///
    /// Scans the whole table; results keep store iteration order. A row or
    /// centre with no geodesic (latitude out of range, non-finite) fails the
    /// whole query rather than being skipped.
    pub fn list_within_radius(
        &self,
        center: Coordinates,
        distance_km: f64,
    ) -> AddressResult<Vec<StoredAddress>> {
        let all = self.store.list_all()?;
        let scanned = all.len();

        let mut matches = Vec::new();
        for row in all {
            if distance::within_distance(row.coordinates(), center, distance_km)? {
                matches.push(row);
            }
        }

        debug!(scanned, matched = matches.len(), distance_km, "radius query");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressError;
    use crate::store::MemoryAddressStore;

    fn service() -> AddressService {
        AddressService::new(Arc::new(MemoryAddressStore::new()))
    }

    fn at(street: &str, latitude: f64, longitude: f64) -> Address {
        Address::new(street, "City", "ST", "US", Coordinates::new(latitude, longitude))
    }

    #[test]
    fn test_create_then_read_round_trips() {
        let svc = service();
        let input = at("1 Main St", 39.78, -89.65);

        let created = svc.create(&input).unwrap();
        assert_eq!(created.address, input);

        let read = svc.read(created.id).unwrap();
        assert_eq!(read, created);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let svc = service();
        let err = svc.update(3, &at("x", 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, AddressError::NotFound(3)));
    }

    #[test]
    fn test_update_twice_same_as_once() {
        let svc = service();
        let id = svc.create(&at("1 Main St", 1.0, 2.0)).unwrap().id;
        let new = at("2 Elm St", 3.0, 4.0);

        let once = svc.update(id, &new).unwrap();
        let twice = svc.update(id, &new).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.id, id);
        assert_eq!(twice.address, new);
    }

    #[test]
    fn test_delete_then_read_is_not_found() {
        let svc = service();
        let id = svc.create(&at("1 Main St", 1.0, 2.0)).unwrap().id;

        assert_eq!(svc.delete(id).unwrap(), DELETED_MESSAGE);
        assert!(matches!(svc.read(id), Err(AddressError::NotFound(_))));
        assert!(matches!(svc.delete(id), Err(AddressError::NotFound(_))));
    }

    #[test]
    fn test_radius_filters_and_keeps_store_order() {
        let svc = service();
        let near_a = svc.create(&at("near a", 39.78, -89.65)).unwrap();
        svc.create(&at("far", -33.87, 151.21)).unwrap();
        let near_b = svc.create(&at("near b", 39.79, -89.64)).unwrap();

        let found = svc
            .list_within_radius(Coordinates::new(39.78, -89.65), 5.0)
            .unwrap();

        assert_eq!(found, vec![near_a, near_b]);
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let svc = service();
        let center = Coordinates::new(39.78, -89.65);
        let other = Coordinates::new(41.8781, -87.6298);
        let stored = svc.create(&at("chicago", other.latitude, other.longitude)).unwrap();

        let exact = distance::geodesic_km(other, center).unwrap();
        let found = svc.list_within_radius(center, exact).unwrap();

        assert_eq!(found, vec![stored]);
    }

    #[test]
    fn test_radius_fails_on_out_of_range_row() {
        let svc = service();
        svc.create(&at("fine", 10.0, 10.0)).unwrap();
        svc.create(&at("off the globe", 123.0, 500.0)).unwrap();

        let err = svc
            .list_within_radius(Coordinates::new(0.0, 0.0), 1e9)
            .unwrap_err();

        assert!(matches!(err, AddressError::Distance(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_radius_fails_on_non_finite_centre() {
        let svc = service();
        svc.create(&at("fine", 10.0, 10.0)).unwrap();

        let err = svc
            .list_within_radius(Coordinates::new(f64::NAN, 0.0), 1e9)
            .unwrap_err();
        assert!(matches!(err, AddressError::Distance(_)));
    }

    #[test]
    fn test_radius_covering_globe_returns_everything_once() {
        let svc = service();
        let points = [(0.0, 0.0), (89.9, 10.0), (-89.9, -170.0), (0.0, 180.0), (51.5, -0.12)];
        for (i, (lat, lon)) in points.iter().enumerate() {
            svc.create(&at(&format!("{} St", i), *lat, *lon)).unwrap();
        }

        let found = svc
            .list_within_radius(Coordinates::new(10.0, 20.0), 25_000.0)
            .unwrap();

        let mut ids: Vec<_> = found.iter().map(|a| a.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
