//! CLI command implementations

use tracing::info;

use super::args::{Command, ConfigArgs};
use super::config::{Config, StorageBackend};
use super::errors::{CliError, CliResult};
use crate::address::AddressService;
use crate::http_server::HttpServer;
use crate::observability::init_logging;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(&config, host, port),
        Command::Init { config } => init(&config),
    }
}

/// Create the database file and address table if absent
pub fn init(args: &ConfigArgs) -> CliResult<()> {
    let config = Config::resolve(args)?;
    config.validate()?;

    if config.storage != StorageBackend::Sqlite {
        return Err(CliError::config_error(
            "init only applies to the sqlite storage backend",
        ));
    }

    config.open_store()?;
    println!("Initialized address book at {}", config.database_path);
    Ok(())
}

/// Boot the service and serve HTTP until interrupted
pub fn serve(args: &ConfigArgs, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::resolve(args)?;
    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }
    config.validate()?;

    init_logging(&config.log_level, config.log_json)?;

    let store = config.open_store()?;
    info!(
        storage = ?config.storage,
        database = %config.database_path,
        "address store opened"
    );

    let server = HttpServer::with_config(config.http.clone(), AddressService::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
