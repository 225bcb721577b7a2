//! CLI module for reqlc
//!
//! Offline diagnostics for the query core:
//! - table: Print the wire query for a table reference
//! - backtrace: Decode a server backtrace into a readable path

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{backtrace, run, run_command, table};
pub use errors::{CliError, CliErrorCode, CliResult};
