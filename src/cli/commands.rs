//! CLI command implementations
//!
//! Each command renders its output to a string so it can be checked without
//! a terminal; `run_command` prints it.

use std::path::Path;

use crate::backtrace::decode_backtrace;
use crate::config::ClientConfig;
use crate::context::Database;
use crate::datum::Datum;
use crate::ops;
use crate::wire::{build_query_with_config, WireBacktrace};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let output = match cmd {
        Command::Table {
            name,
            db,
            token,
            config,
            frame,
        } => table(&name, db.as_deref(), token, config.as_deref(), frame)?,
        Command::Backtrace { json } => backtrace(&json)?,
    };
    println!("{}", output);
    Ok(())
}

/// Wire query for `table(name)`, as JSON or as a hex frame
pub fn table(
    name: &str,
    db: Option<&str>,
    token: u64,
    config_path: Option<&Path>,
    frame: bool,
) -> CliResult<String> {
    if name.is_empty() {
        return Err(CliError::invalid_input("table name must not be empty"));
    }

    let mut config = match config_path {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(db) = db {
        config.default_database = Database::new(db);
        config.validate()?;
    }
    config.apply_logging()?;

    let query = build_query_with_config(&ops::table(name), token, &config);
    if frame {
        Ok(hex(&query.to_frame()?))
    } else {
        Ok(query.body().to_string())
    }
}

/// Readable path of a JSON backtrace
pub fn backtrace(json: &str) -> CliResult<String> {
    let datum: Datum = serde_json::from_str(json)?;
    Ok(decode_backtrace(&WireBacktrace::new(datum)).to_string())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
