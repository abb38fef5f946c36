//! CLI module for the address book
//!
//! Provides command-line interface for:
//! - serve: Open the store and run the HTTP API
//! - init: Create the database and schema

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{init, run, run_command, serve};
pub use config::{Config, StorageBackend};
pub use errors::{CliError, CliErrorCode, CliResult};
