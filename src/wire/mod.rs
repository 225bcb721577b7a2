//! Wire encoding
//!
//! A term is sent as a JSON tuple `[code, [args...], {optargs...}]`, with the
//! optargs object left out when there are none. Debug labels never reach the
//! wire. Literal arrays are wrapped in `MAKE_ARRAY` because a bare JSON array
//! is itself read as a term by the server.
//!
//! Encoding is a pure function of the term: the same term always encodes to
//! the same bytes, since named arguments and object keys are key-ordered.

mod errors;
mod query;

pub use errors::{WireError, WireResult};
pub use query::{build_query, build_query_in, build_query_with_config, QueryType, WireQuery};

use std::fmt;

use serde::Serialize;

use crate::datum::Datum;
use crate::term::{Term, TermKind};

/// A term in its transport form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WireTerm(Datum);

impl WireTerm {
    pub fn as_datum(&self) -> &Datum {
        &self.0
    }

    pub fn into_datum(self) -> Datum {
        self.0
    }
}

impl fmt::Display for WireTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A backtrace as received in an error response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WireBacktrace(Datum);

impl WireBacktrace {
    pub fn new(datum: Datum) -> Self {
        Self(datum)
    }

    pub fn as_datum(&self) -> &Datum {
        &self.0
    }
}

impl From<Datum> for WireBacktrace {
    fn from(datum: Datum) -> Self {
        Self(datum)
    }
}

/// Encode a term for transport
pub fn encode_term(term: &Term) -> WireTerm {
    WireTerm(encode(term))
}

fn encode(term: &Term) -> Datum {
    match term {
        Term::Literal(value) => encode_literal(value),
        Term::Annotated { inner, .. } => encode(inner),
        Term::Call {
            kind,
            args,
            optargs,
        } => {
            let mut tuple = Vec::with_capacity(3);
            tuple.push(Datum::from(kind.code()));
            tuple.push(Datum::Array(args.iter().map(encode).collect()));
            if !optargs.is_empty() {
                let fields = optargs
                    .iter()
                    .map(|(key, value)| (key.clone(), encode(value)))
                    .collect();
                tuple.push(Datum::Object(fields));
            }
            Datum::Array(tuple)
        }
    }
}

fn encode_literal(value: &Datum) -> Datum {
    match value {
        Datum::Array(items) => Datum::Array(vec![
            Datum::from(TermKind::MakeArray.code()),
            Datum::Array(items.iter().map(encode_literal).collect()),
        ]),
        Datum::Object(fields) => Datum::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), encode_literal(value)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::TermMap;
    use serde_json::json;

    #[test]
    fn test_scalar_literal_passes_through() {
        assert_eq!(encode_term(&Term::literal(5)).into_datum(), json!(5));
        assert_eq!(encode_term(&Term::literal("s")).into_datum(), json!("s"));
        assert_eq!(encode_term(&Term::Literal(Datum::Null)).into_datum(), json!(null));
    }

    #[test]
    fn test_call_without_optargs() {
        let term = Term::call(TermKind::Add, vec![Term::literal(1), Term::literal(2)]);
        assert_eq!(encode_term(&term).into_datum(), json!([24, [1, 2]]));
    }

    #[test]
    fn test_call_with_optargs() {
        let mut optargs = TermMap::new();
        optargs.insert("default".into(), Term::literal(false));
        let term = Term::call_with(TermKind::Filter, vec![Term::var(1)], optargs);
        assert_eq!(
            encode_term(&term).into_datum(),
            json!([39, [[10, [1]]], {"default": false}])
        );
    }

    #[test]
    fn test_annotations_dropped() {
        let term = Term::annotated("outer", Term::call(TermKind::Now, vec![]));
        assert_eq!(encode_term(&term).into_datum(), json!([103, []]));
    }

    #[test]
    fn test_func_params_wrapped() {
        let term = Term::func(&[1, 2], Term::var(2));
        assert_eq!(
            encode_term(&term).into_datum(),
            json!([69, [[2, [1, 2]], [10, [2]]]])
        );
    }

    #[test]
    fn test_nested_literal_containers() {
        let term = Term::literal(json!({"tags": ["a"], "n": {"m": [1]}}));
        assert_eq!(
            encode_term(&term).into_datum(),
            json!({"n": {"m": [2, [1]]}, "tags": [2, ["a"]]})
        );
    }

    #[test]
    fn test_display_is_compact_json() {
        let term = Term::call(TermKind::Db, vec![Term::literal("test")]);
        assert_eq!(encode_term(&term).to_string(), "[14,[\"test\"]]");
    }
}
