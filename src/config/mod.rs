//! Client build configuration
//!
//! Loaded from a JSON file. Every field is optional:
//!
//! ```json
//! {
//!   "default_database": "blog",
//!   "use_outdated": false,
//!   "global_options": { "durability": "soft" },
//!   "log_level": "WARN"
//! }
//! ```

mod errors;

pub use errors::{ConfigError, ConfigResult};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builder::OptArgs;
use crate::context::Database;
use crate::datum::Datum;
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

/// Settings applied to every query built by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Database used for unqualified table references
    #[serde(default)]
    pub default_database: Database,

    /// Legacy read flag attached to table references when set
    #[serde(default)]
    pub use_outdated: Option<bool>,

    /// Global options sent with every `START` query
    #[serde(default)]
    pub global_options: serde_json::Map<String, Datum>,

    /// Minimum severity emitted by the logger
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    Severity::Warn.as_str().to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_database: Database::default(),
            use_outdated: None,
            global_options: serde_json::Map::new(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        let config = Self::from_json_str(&content)?;

        let path_str = path.display().to_string();
        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("path", path_str.as_str()),
                ("default_database", config.default_database.name()),
            ],
        );
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: ClientConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> ConfigResult<()> {
        let name = self.default_database.name();
        if name.is_empty() {
            return Err(ConfigError::invalid("default_database", "must not be empty"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::invalid(
                "default_database",
                format!("'{}' may only contain [A-Za-z0-9_]", name),
            ));
        }

        self.severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> ConfigResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            ConfigError::invalid("log_level", format!("unknown level '{}'", self.log_level))
        })
    }

    /// Install `log_level` as the process-wide logging threshold
    pub fn apply_logging(&self) -> ConfigResult<()> {
        Logger::set_min_severity(self.severity()?);
        Ok(())
    }

    /// Global options as named arguments for the query envelope
    pub fn global_optargs(&self) -> OptArgs {
        self.global_options
            .iter()
            .fold(OptArgs::new(), |opts, (key, value)| opts.with(key.clone(), value.clone()))
    }
}
