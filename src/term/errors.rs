//! Term construction errors
//!
//! Error codes:
//! - REQL_UNSUPPORTED_OPERATOR
//! - REQL_UNREPRESENTABLE_VALUE

use thiserror::Error;

use crate::datum::DatumError;

/// Result type for term construction
pub type TermResult<T> = Result<T, TermError>;

/// Errors raised while building a term
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    /// The operation has no equivalent on the server
    #[error("Operator '{0}' is not supported by the server")]
    UnsupportedOperator(&'static str),

    /// A host value has no datum representation
    #[error("Value cannot be converted to a term: {0}")]
    Unrepresentable(#[from] DatumError),
}

impl TermError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TermError::UnsupportedOperator(_) => "REQL_UNSUPPORTED_OPERATOR",
            TermError::Unrepresentable(_) => "REQL_UNREPRESENTABLE_VALUE",
        }
    }
}
