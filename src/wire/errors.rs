//! Wire encoding errors
//!
//! Error codes:
//! - REQL_WIRE_PAYLOAD_TOO_LARGE

use thiserror::Error;

/// Result type for wire operations
pub type WireResult<T> = Result<T, WireError>;

/// Errors raised while framing a query for transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The serialized query does not fit the 32-bit length prefix
    #[error("Query payload of {0} bytes exceeds the frame length limit")]
    PayloadTooLarge(usize),
}

impl WireError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            WireError::PayloadTooLarge(_) => "REQL_WIRE_PAYLOAD_TOO_LARGE",
        }
    }
}
