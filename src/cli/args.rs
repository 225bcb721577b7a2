//! CLI argument definitions using clap
//!
//! Commands:
//! - reqlc table <name> [--db <db>] [--token <n>] [--config <path>] [--frame]
//! - reqlc backtrace <json>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// reqlc - inspect queries as the server will receive them
#[derive(Parser, Debug)]
#[command(name = "reqlc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the START query for a table reference
    Table {
        /// Table name
        name: String,

        /// Database for the reference, overriding the configuration
        #[arg(long)]
        db: Option<String>,

        /// Correlation token
        #[arg(long, default_value_t = 1)]
        token: u64,

        /// Path to client configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the framed bytes as hex instead of JSON
        #[arg(long)]
        frame: bool,
    },

    /// Decode a backtrace given as JSON
    Backtrace {
        /// Backtrace array, e.g. '[2, "name", 5]'
        json: String,
    },
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
    fn test_parse_table() {
        let cli =
            Cli::try_parse_from(["reqlc", "table", "users", "--db", "blog", "--frame"]).unwrap();
        match cli.command {
            Command::Table {
                name,
                db,
                token,
                config,
                frame,
            } => {
                assert_eq!(name, "users");
                assert_eq!(db.as_deref(), Some("blog"));
                assert_eq!(token, 1);
                assert!(config.is_none());
                assert!(frame);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_backtrace() {
        let cli = Cli::try_parse_from(["reqlc", "backtrace", "[1]"]).unwrap();
        assert!(matches!(cli.command, Command::Backtrace { json } if json == "[1]"));
    }

    #[test]
    fn test_missing_table_name() {
        assert!(Cli::try_parse_from(["reqlc", "table"]).is_err());
    }
}
