//! Address domain types
//!
//! `Address` is what clients send; `StoredAddress` is what the store hands
//! back once an identifier has been assigned.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on insert
pub type AddressId = i64;

/// A latitude/longitude pair in decimal degrees.
///
/// On the wire this is a two-element array `[latitude, longitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(c: Coordinates) -> Self {
        (c.latitude, c.longitude)
    }
}

/// An address as submitted by a client.
///
/// Any `id` in the request body is ignored; only the store assigns ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub coordinates: Coordinates,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            coordinates,
        }
    }
}

/// A persisted address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAddress {
    pub id: AddressId,
    #[serde(flatten)]
    pub address: Address,
}

impl StoredAddress {
    pub fn new(id: AddressId, address: Address) -> Self {
        Self { id, address }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.address.coordinates
    }
}
