//! Query envelopes
//!
//! A `START` query carries the encoded term and the global options:
//!
//! ```text
//! [1, <term>, {"db": [14, ["test"]], ...}]
//! ```
//!
//! The other query types carry only their type code. On a connection the
//! envelope is framed as:
//! - Token (u64 LE)
//! - Payload length (u32 LE)
//! - Payload (compact JSON)

use serde::Serialize;

use super::errors::{WireError, WireResult};
use super::encode_term;
use crate::builder::OptArgs;
use crate::config::ClientConfig;
use crate::context::{Database, QueryContext};
use crate::datum::Datum;
use crate::expr::Expr;
use crate::observability::{log_event_with_fields, Event};
use crate::term::{Term, TermKind};

/// Protocol query type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum QueryType {
    Start = 1,
    Continue = 2,
    Stop = 3,
    NoreplyWait = 4,
    ServerInfo = 5,
}

impl QueryType {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns None for unknown codes
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(QueryType::Start),
            2 => Some(QueryType::Continue),
            3 => Some(QueryType::Stop),
            4 => Some(QueryType::NoreplyWait),
            5 => Some(QueryType::ServerInfo),
            _ => None,
        }
    }
}

/// A query envelope bound to its correlation token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireQuery {
    token: u64,
    body: Datum,
}

impl WireQuery {
    fn control(query_type: QueryType, token: u64) -> Self {
        Self {
            token,
            body: Datum::Array(vec![Datum::from(query_type.code())]),
        }
    }

    /// Fetch the next batch of a cursor
    pub fn continue_query(token: u64) -> Self {
        Self::control(QueryType::Continue, token)
    }

    /// Close a cursor
    pub fn stop(token: u64) -> Self {
        Self::control(QueryType::Stop, token)
    }

    /// Wait for outstanding noreply writes
    pub fn noreply_wait(token: u64) -> Self {
        Self::control(QueryType::NoreplyWait, token)
    }

    pub fn server_info(token: u64) -> Self {
        Self::control(QueryType::ServerInfo, token)
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    /// The envelope tuple
    pub fn body(&self) -> &Datum {
        &self.body
    }

    pub fn query_type(&self) -> Option<QueryType> {
        self.body
            .get(0)
            .and_then(Datum::as_u64)
            .and_then(QueryType::from_code)
    }

    /// Compact JSON of the envelope
    pub fn to_bytes(&self) -> Vec<u8> {
        self.body.to_string().into_bytes()
    }

    /// Token, payload length and payload, as written to a connection
    pub fn to_frame(&self) -> WireResult<Vec<u8>> {
        let payload = self.to_bytes();
        let len = u32::try_from(payload.len())
            .map_err(|_| WireError::PayloadTooLarge(payload.len()))?;

        let mut frame = Vec::with_capacity(12 + payload.len());
        frame.extend_from_slice(&self.token.to_le_bytes());
        frame.extend_from_slice(&len.to_le_bytes());
        frame.extend_from_slice(&payload);
        Ok(frame)
    }
}

/// Build a `START` query in a context of its own
pub fn build_query<E>(
    query: &E,
    token: u64,
    default_database: impl Into<Database>,
    global_options: &OptArgs,
) -> WireQuery
where
    E: Expr + ?Sized,
{
    let mut ctx = QueryContext::new(token, default_database);
    build_query_in(&mut ctx, query, global_options)
}

/// Build a `START` query with the settings of a client configuration
pub fn build_query_with_config<E>(query: &E, token: u64, config: &ClientConfig) -> WireQuery
where
    E: Expr + ?Sized,
{
    let mut ctx = QueryContext::from_config(token, config);
    build_query_in(&mut ctx, query, &config.global_optargs())
}

/// Build a `START` query against a caller-prepared context. The context
/// should be fresh; variables already allocated in it are not reused.
pub fn build_query_in<E>(ctx: &mut QueryContext, query: &E, global_options: &OptArgs) -> WireQuery
where
    E: Expr + ?Sized,
{
    let term = query.to_term(ctx);
    let mut options = global_options.to_terms(ctx);
    if !options.contains_key("db") {
        let db = Term::call(
            TermKind::Db,
            vec![Term::literal(ctx.default_database().name())],
        );
        options.insert("db".to_string(), db);
    }

    let encoded_options = options
        .iter()
        .map(|(key, value)| (key.clone(), encode_term(value).into_datum()))
        .collect();

    let body = Datum::Array(vec![
        Datum::from(QueryType::Start.code()),
        encode_term(&term).into_datum(),
        Datum::Object(encoded_options),
    ]);

    let token_str = ctx.token().to_string();
    log_event_with_fields(
        Event::QueryBuilt,
        &[
            ("token", token_str.as_str()),
            ("database", ctx.default_database().name()),
        ],
    );

    WireQuery {
        token: ctx.token(),
        body,
    }
}
