//! # HTTP Server
//!
//! Combines the address and health routers behind a request trace layer.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::address_routes::{address_routes, AddressState};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use crate::address::AddressService;

/// HTTP server for the address book API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(service: AddressService) -> Self {
        Self::with_config(HttpServerConfig::default(), service)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, service: AddressService) -> Self {
        let router = Self::build_router(service);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(service: AddressService) -> Router {
        let address_state = Arc::new(AddressState::new(service));

        Router::new()
            .merge(health_routes())
            .merge(address_routes(address_state))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Start the HTTP server and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self
            .config
            .parse_socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "address book listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("address book stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
