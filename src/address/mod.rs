//! # Address Module
//!
//! Domain model, errors and the service layer for address records.

mod errors;
mod model;
mod service;

pub use errors::{AddressError, AddressResult};
pub use model::{Address, AddressId, Coordinates, StoredAddress};
pub use service::{AddressService, DELETED_MESSAGE};
