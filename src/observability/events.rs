//! Observable events of the query core

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Client configuration loaded from disk
    ConfigLoaded,
    /// A query envelope was produced
    QueryBuilt,
    /// An immediately-invoked function literal was inlined
    FuncallInlined,
    /// An operation with no server equivalent was requested
    UnsupportedOperator,
    /// A backtrace from the server could not be decoded
    BacktraceMalformed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::QueryBuilt => "QUERY_BUILT",
            Event::FuncallInlined => "FUNCALL_INLINED",
            Event::UnsupportedOperator => "UNSUPPORTED_OPERATOR",
            Event::BacktraceMalformed => "BACKTRACE_MALFORMED",
        }
    }

    /// Severity events of this kind are logged at
    pub fn severity(&self) -> super::Severity {
        use super::Severity;
        match self {
            Event::ConfigLoaded => Severity::Info,
            Event::QueryBuilt | Event::FuncallInlined => Severity::Trace,
            Event::UnsupportedOperator | Event::BacktraceMalformed => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
