//! Term model
//!
//! A term is one node of the query tree sent to the server:
//!
//! - `Literal`: a fully evaluated datum
//! - `Call`: an operator applied to positional and named arguments
//! - `Annotated`: a debug label around another term, dropped on the wire
//!
//! Two shapes are fixed by the protocol. A `FUNC` call has exactly two
//! arguments, a literal array of variable ids and a body. A `VAR` call has
//! exactly one argument, an integer literal naming the variable.

mod errors;
mod kind;
mod printer;

pub use errors::{TermError, TermResult};
pub use kind::TermKind;
pub use printer::{render, var_name};

use std::collections::BTreeMap;
use std::fmt;

use crate::datum::Datum;

/// Identifier of a bound variable
pub type VarId = u64;

/// Named arguments of a call, ordered by key
pub type TermMap = BTreeMap<String, Term>;

/// A node of the query tree
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Fully evaluated value
    Literal(Datum),
    /// Operator application
    Call {
        kind: TermKind,
        args: Vec<Term>,
        optargs: TermMap,
    },
    /// Debug-only label, transparent to everything but the printer
    Annotated { note: String, inner: Box<Term> },
}

impl Term {
    /// Literal term
    pub fn literal(value: impl Into<Datum>) -> Self {
        Term::Literal(value.into())
    }

    /// Call with positional arguments only
    pub fn call(kind: TermKind, args: Vec<Term>) -> Self {
        Term::Call {
            kind,
            args,
            optargs: TermMap::new(),
        }
    }

    /// Call with positional and named arguments
    pub fn call_with(kind: TermKind, args: Vec<Term>, optargs: TermMap) -> Self {
        Term::Call {
            kind,
            args,
            optargs,
        }
    }

    /// Wrap a term in a debug label
    pub fn annotated(note: impl Into<String>, inner: Term) -> Self {
        Term::Annotated {
            note: note.into(),
            inner: Box::new(inner),
        }
    }

    /// Reference to a bound variable
    pub fn var(id: VarId) -> Self {
        Term::call(TermKind::Var, vec![Term::literal(id)])
    }

    /// Function literal binding `params` in `body`
    pub fn func(params: &[VarId], body: Term) -> Self {
        let ids: Vec<Datum> = params.iter().map(|id| Datum::from(*id)).collect();
        Term::call(TermKind::Func, vec![Term::Literal(Datum::Array(ids)), body])
    }

    /// Peel every debug label off the outside of this term
    pub fn strip_notes(&self) -> &Term {
        let mut term = self;
        while let Term::Annotated { inner, .. } = term {
            term = inner;
        }
        term
    }

    /// Operator of this term, looking through labels
    pub fn kind(&self) -> Option<TermKind> {
        match self.strip_notes() {
            Term::Call { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns true if this is a literal, looking through labels
    pub fn is_literal(&self) -> bool {
        matches!(self.strip_notes(), Term::Literal(_))
    }

    /// Variable id if this is a bare `VAR` reference
    pub fn as_var(&self) -> Option<VarId> {
        match self.strip_notes() {
            Term::Call {
                kind: TermKind::Var,
                args,
                optargs,
            } if optargs.is_empty() => match args.as_slice() {
                [Term::Literal(id)] => id.as_u64(),
                _ => None,
            },
            _ => None,
        }
    }

    /// Parameter ids and body if this is a well-formed `FUNC` literal
    pub fn func_parts(&self) -> Option<(Vec<VarId>, &Term)> {
        match self.strip_notes() {
            Term::Call {
                kind: TermKind::Func,
                args,
                optargs,
            } if optargs.is_empty() => match args.as_slice() {
                [Term::Literal(Datum::Array(ids)), body] => {
                    let params = ids
                        .iter()
                        .map(|id| id.as_u64())
                        .collect::<Option<Vec<_>>>()?;
                    Some((params, body))
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<Datum> for Term {
    fn from(value: Datum) -> Self {
        Term::Literal(value)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
