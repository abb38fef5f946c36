//! Logging setup
//!
//! `RUST_LOG`, when set and valid, wins over the configured level.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{0}': {1}")]
    InvalidFilter(String, String),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter from `RUST_LOG` or the configured level
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    resolve_filter(std::env::var("RUST_LOG").ok().as_deref(), level)
}

/// Prefer `env_directives` when they parse, otherwise fall back to `level`
pub fn resolve_filter(env_directives: Option<&str>, level: &str) -> Result<EnvFilter, LoggingError> {
    if let Some(filter) = env_directives.and_then(|d| EnvFilter::try_new(d).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| LoggingError::InvalidFilter(level.to_string(), e.to_string()))
}

/// Install the global subscriber, plain text or one JSON object per line
pub fn init_logging(level: &str, json: bool) -> Result<(), LoggingError> {
    let filter = build_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}
