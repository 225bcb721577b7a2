//! Observability for the query core
//!
//! Structured JSON log lines for the few events worth seeing from outside:
//! configuration loading, query envelopes, inlining rewrites, unsupported
//! operators and undecodable backtraces.
//!
//! Logging never affects what gets built. Build-path events are TRACE and the
//! default threshold is WARN, so a normal build writes nothing.
//!
//! ```ignore
//! use reql_core::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::QueryBuilt, &[("token", "7")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
