//! Backtrace decoding
//!
//! An error response may locate the failing sub-term with a path of
//! argument positions and optarg names. The path is diagnostic only: if any
//! element is not a nonnegative integer or a string, the whole path decodes
//! to empty so the primary error still reaches the caller.

use std::fmt;

use crate::datum::Datum;
use crate::observability::{log_event_with_fields, Event};
use crate::wire::WireBacktrace;

/// One step into a term tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Frame {
    /// Positional argument index
    Position(u64),
    /// Named argument key
    Key(String),
}

impl Frame {
    fn from_datum(datum: &Datum) -> Option<Frame> {
        match datum {
            Datum::Number(n) => n.as_u64().map(Frame::Position),
            Datum::String(s) => Some(Frame::Key(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Position(i) => write!(f, "[{}]", i),
            Frame::Key(k) => write!(f, ".{}", k),
        }
    }
}

/// Path from the query root to a failing sub-term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Backtrace(Vec<Frame>);

impl Backtrace {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self(frames)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Backtrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, frame) in self.0.iter().enumerate() {
            match frame {
                // no leading dot on the first key
                Frame::Key(k) if i == 0 => f.write_str(k)?,
                frame => write!(f, "{}", frame)?,
            }
        }
        Ok(())
    }
}

/// Decode a backtrace, falling back to an empty one when malformed
pub fn decode_backtrace(wire: &WireBacktrace) -> Backtrace {
    let items = match wire.as_datum() {
        Datum::Null => return Backtrace::default(),
        Datum::Array(items) => items,
        other => return malformed(other),
    };

    match items.iter().map(Frame::from_datum).collect::<Option<Vec<_>>>() {
        Some(frames) => Backtrace(frames),
        None => malformed(wire.as_datum()),
    }
}

fn malformed(datum: &Datum) -> Backtrace {
    let raw = datum.to_string();
    log_event_with_fields(Event::BacktraceMalformed, &[("backtrace", raw.as_str())]);
    Backtrace::default()
}
