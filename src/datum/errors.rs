//! Datum conversion errors

use thiserror::Error;

/// Result type for datum conversions
pub type DatumResult<T> = Result<T, DatumError>;

/// Errors raised at the datum boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatumError {
    /// A host value could not be represented as a datum
    #[error("Cannot encode value as datum: {0}")]
    Encode(String),

    /// A datum did not have the shape the caller asked for
    #[error("Cannot decode datum: {0}")]
    Decode(String),
}

impl DatumError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            DatumError::Encode(_) => "REQL_DATUM_ENCODE",
            DatumError::Decode(_) => "REQL_DATUM_DECODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DatumError::Encode("x".into()).code(), "REQL_DATUM_ENCODE");
        assert_eq!(DatumError::Decode("x".into()).code(), "REQL_DATUM_DECODE");
    }

    #[test]
    fn test_error_display() {
        let err = DatumError::Decode("expected string".into());
        assert_eq!(err.to_string(), "Cannot decode datum: expected string");
    }
}
