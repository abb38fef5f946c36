//! # Address Book HTTP Server Module
//!
//! # Endpoints
//!
//! - `POST /addresses/` - Create an address
//! - `GET /addresses/{id}` - Read an address
//! - `PUT /addresses/{id}` - Overwrite an address
//! - `DELETE /addresses/{id}` - Delete an address
//! - `GET /addresses/?latitude=&longitude=&distance=` - Radius query (km)
//! - `/health` - Health check

pub mod address_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
