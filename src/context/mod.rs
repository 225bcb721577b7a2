//! Query build context
//!
//! State threaded through the construction of exactly one query:
//!
//! - the caller's correlation token
//! - the database used for unqualified table references
//! - the variable counter for function literals
//! - the legacy `use_outdated` read flag
//!
//! A context is created at the start of a build and dropped at its end. It is
//! never shared, so independent builds on independent threads cannot observe
//! each other's variable allocations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::term::VarId;

/// Name of the server's default database
pub const DEFAULT_DATABASE: &str = "test";

/// A database name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Database(String);

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Database {
    fn default() -> Self {
        Self(DEFAULT_DATABASE.to_string())
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Database {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Database {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Mutable state of one query build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    token: u64,
    default_database: Database,
    var_counter: VarId,
    use_outdated: Option<bool>,
}

impl QueryContext {
    /// Fresh context for one build
    pub fn new(token: u64, default_database: impl Into<Database>) -> Self {
        Self {
            token,
            default_database: default_database.into(),
            var_counter: 0,
            use_outdated: None,
        }
    }

    /// Fresh context seeded from client configuration
    pub fn from_config(token: u64, config: &ClientConfig) -> Self {
        let ctx = Self::new(token, config.default_database.clone());
        match config.use_outdated {
            Some(flag) => ctx.with_use_outdated(flag),
            None => ctx,
        }
    }

    /// Sets the legacy read flag for table references
    pub fn with_use_outdated(mut self, flag: bool) -> Self {
        self.use_outdated = Some(flag);
        self
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn default_database(&self) -> &Database {
        &self.default_database
    }

    pub fn use_outdated(&self) -> Option<bool> {
        self.use_outdated
    }

    /// Number of variables allocated so far
    pub fn allocated(&self) -> VarId {
        self.var_counter
    }

    /// Allocate a fresh variable id. Ids start at 1 and are never reused.
    pub fn allocate_variable(&mut self) -> VarId {
        self.var_counter += 1;
        self.var_counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_context() {
        let ctx = QueryContext::new(7, "blog");
        assert_eq!(ctx.token(), 7);
        assert_eq!(ctx.default_database().name(), "blog");
        assert_eq!(ctx.allocated(), 0);
        assert_eq!(ctx.use_outdated(), None);
    }

    #[test]
    fn test_allocation_sequence() {
        let mut ctx = QueryContext::new(1, "test");
        let ids: Vec<VarId> = (0..5).map(|_| ctx.allocate_variable()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(ctx.allocated(), 5);
    }

    #[test]
    fn test_independent_contexts() {
        let mut a = QueryContext::new(1, "test");
        let mut b = QueryContext::new(2, "test");
        a.allocate_variable();
        a.allocate_variable();
        assert_eq!(b.allocate_variable(), 1);
        assert_eq!(a.allocate_variable(), 3);
    }

    #[test]
    fn test_default_database() {
        assert_eq!(QueryContext::default().default_database().name(), "test");
        assert_eq!(Database::default().to_string(), DEFAULT_DATABASE);
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig {
            default_database: Database::new("app"),
            use_outdated: Some(true),
            ..ClientConfig::default()
        };
        let ctx = QueryContext::from_config(9, &config);
        assert_eq!(ctx.token(), 9);
        assert_eq!(ctx.default_database().name(), "app");
        assert_eq!(ctx.use_outdated(), Some(true));
    }
}
