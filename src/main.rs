//! Address book entry point
//!
//! Parses arguments and hands off to the CLI module; errors go to stderr
//! and the process exits non-zero.

use addressbook::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
