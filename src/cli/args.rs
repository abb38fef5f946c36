//! CLI argument definitions using clap
//!
//! Commands:
//! - addressbook serve [--config <path>] [--host <host>] [--port <port>] [--database <path>]
//! - addressbook init [--config <path>] [--database <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Address book service with geodesic radius queries
#[derive(Parser, Debug)]
#[command(name = "addressbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        config: ConfigArgs,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create the database file and address table, then exit
    Init {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database file
    #[arg(long)]
    pub database: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "addressbook",
            "serve",
            "--port",
            "9000",
            "--database",
            "/tmp/book.db",
        ])
        .unwrap();

        match cli.command {
            Command::Serve { config, host, port } => {
                assert_eq!(port, Some(9000));
                assert_eq!(host, None);
                assert_eq!(config.database.as_deref(), Some("/tmp/book.db"));
                assert!(config.config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["addressbook", "init", "--config", "book.json"]).unwrap();
        assert!(matches!(cli.command, Command::Init { .. }));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["addressbook", "serve", "--port", "http"]).is_err());
    }
}
