//! Datum boundary
//!
//! The scalar/container value exchanged with the server. The query core
//! treats it as an opaque immutable value: it compares datums and lifts them
//! into terms, nothing more. The JSON value model is the datum model, so any
//! serde-serializable host type converts to one.

mod errors;

pub use errors::{DatumError, DatumResult};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A fully evaluated server value
pub type Datum = serde_json::Value;

/// Capability to turn a host value into a datum
pub trait ToDatum {
    fn to_datum(&self) -> DatumResult<Datum>;
}

/// Capability to read a host value back out of a datum
pub trait FromDatum: Sized {
    fn from_datum(datum: Datum) -> DatumResult<Self>;
}

impl<T: Serialize + ?Sized> ToDatum for T {
    fn to_datum(&self) -> DatumResult<Datum> {
        serde_json::to_value(self).map_err(|e| DatumError::Encode(e.to_string()))
    }
}

impl<T: DeserializeOwned> FromDatum for T {
    fn from_datum(datum: Datum) -> DatumResult<Self> {
        serde_json::from_value(datum).map_err(|e| DatumError::Decode(e.to_string()))
    }
}

/// Convert a host value to a datum
pub fn to_datum<T: ToDatum + ?Sized>(value: &T) -> DatumResult<Datum> {
    value.to_datum()
}

/// Decode a datum into a host value
pub fn from_datum<T: FromDatum>(datum: Datum) -> DatumResult<T> {
    T::from_datum(datum)
}
