//! Address HTTP Routes
//!
//! CRUD endpoints for address records plus the radius query.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::errors::ApiResult;
use crate::address::{
    Address, AddressId, AddressResult, AddressService, Coordinates, StoredAddress,
};

// ==================
// Shared State
// ==================

/// Address state shared across handlers
pub struct AddressState {
    pub service: AddressService,
}

impl AddressState {
    pub fn new(service: AddressService) -> Self {
        Self { service }
    }
}

// ==================
// Request/Response Types
// ==================

/// Query parameters of the radius search, all required
#[derive(Debug, Deserialize)]
pub struct RadiusQuery {
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometres
    pub distance: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Address Routes
// ==================

/// Create address routes
pub fn address_routes(state: Arc<AddressState>) -> Router {
    Router::new()
        .route(
            "/addresses/",
            get(list_within_radius_handler).post(create_address_handler),
        )
        .route(
            "/addresses",
            get(list_within_radius_handler).post(create_address_handler),
        )
        .route(
            "/addresses/:address_id",
            get(read_address_handler)
                .put(update_address_handler)
                .delete(delete_address_handler),
        )
        .with_state(state)
}

/// Run a synchronous service call on the blocking pool
async fn run_blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> AddressResult<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}

// ==================
// Handlers
// ==================

async fn create_address_handler(
    State(state): State<Arc<AddressState>>,
    body: Result<Json<Address>, JsonRejection>,
) -> ApiResult<Json<StoredAddress>> {
    let Json(address) = body?;
    let service = state.service.clone();

    let stored = run_blocking(move || service.create(&address)).await?;
    Ok(Json(stored))
}

async fn read_address_handler(
    State(state): State<Arc<AddressState>>,
    id: Result<Path<AddressId>, PathRejection>,
) -> ApiResult<Json<StoredAddress>> {
    let Path(id) = id?;
    let service = state.service.clone();

    let stored = run_blocking(move || service.read(id)).await?;
    Ok(Json(stored))
}

async fn update_address_handler(
    State(state): State<Arc<AddressState>>,
    id: Result<Path<AddressId>, PathRejection>,
    body: Result<Json<Address>, JsonRejection>,
) -> ApiResult<Json<StoredAddress>> {
    let Path(id) = id?;
    let Json(address) = body?;
    let service = state.service.clone();

    let stored = run_blocking(move || service.update(id, &address)).await?;
    Ok(Json(stored))
}

async fn delete_address_handler(
    State(state): State<Arc<AddressState>>,
    id: Result<Path<AddressId>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let service = state.service.clone();

    let message = run_blocking(move || service.delete(id)).await?;
    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

async fn list_within_radius_handler(
    State(state): State<Arc<AddressState>>,
    query: Result<Query<RadiusQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<StoredAddress>>> {
    let Query(query) = query?;
    let center = Coordinates::new(query.latitude, query.longitude);
    let service = state.service.clone();

    let found = run_blocking(move || service.list_within_radius(center, query.distance)).await?;
    Ok(Json(found))
}
