//! Configuration file loading
//!
//! The file is optional JSON; every field has a default. Command-line flags
//! are applied on top of whatever the file says.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::args::ConfigArgs;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::store::{AddressStore, MemoryAddressStore, SqliteAddressStore};

/// Which record store backs the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

/// Address book configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file, relative to the working directory unless absolute
    #[serde(default = "default_database_path")]
    pub database_path: String,

    #[serde(default)]
    pub storage: StorageBackend,

    #[serde(flatten)]
    pub http: HttpServerConfig,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit one JSON object per log line
    #[serde(default)]
    pub log_json: bool,
}

fn default_database_path() -> String {
    "address_book.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            storage: StorageBackend::default(),
            http: HttpServerConfig::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        Ok(config)
    }

    /// Load the file named in `args` (if any) and apply flag overrides
    pub fn resolve(args: &ConfigArgs) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(database) = &args.database {
            config.database_path = database.clone();
        }

        Ok(config)
    }

    /// Validate a fully resolved configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.storage == StorageBackend::Sqlite && self.database_path.trim().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        self.http.parse_socket_addr().map_err(|e| {
            CliError::config_error(format!(
                "Invalid listen address '{}': {}",
                self.http.socket_addr(),
                e
            ))
        })?;

        Ok(())
    }

    /// Open the configured record store, creating the schema if needed
    pub fn open_store(&self) -> CliResult<Arc<dyn AddressStore>> {
        match self.storage {
            StorageBackend::Sqlite => Ok(Arc::new(SqliteAddressStore::open(&self.database_path)?)),
            StorageBackend::Memory => Ok(Arc::new(MemoryAddressStore::new())),
        }
    }
}
