//! reql-core - query construction core for a ReQL client
//!
//! Host values and closures become terms, terms become wire tuples, and
//! error backtraces from the server become readable paths:
//!
//! ```ignore
//! use reql_core::{build_query, func, table, OptArgs};
//!
//! let adults = table("users").filter(func(|u| u.bracket("age").ge(18)), OptArgs::new());
//! let query = build_query(&adults, 1, "test", &OptArgs::new());
//! ```

pub mod backtrace;
pub mod bound;
pub mod builder;
pub mod cli;
pub mod config;
pub mod context;
pub mod datum;
pub mod expr;
pub mod inline;
pub mod observability;
pub mod ops;
pub mod term;
pub mod wire;

pub use backtrace::{decode_backtrace, Backtrace, Frame};
pub use bound::{Bound, BoundKind};
pub use builder::{
    attr, build_call, dynamic_attr, object, optional_attr, Attribute, IntoArgs, OptArgs,
    StaticAttr,
};
pub use config::ClientConfig;
pub use context::{Database, QueryContext};
pub use datum::Datum;
pub use expr::{datum, expr, func, func2, pi, var, Expr, ReQL};
pub use ops::{apply, between, branch, db, during, js, now, table, table_in};
pub use term::{Term, TermError, TermKind, TermResult, VarId};
pub use wire::{build_query, encode_term, QueryType, WireBacktrace, WireQuery, WireTerm};
