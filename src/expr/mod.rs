//! Expression conversion
//!
//! `Expr` is the capability of turning a host value into a term under a
//! query context. It is implemented per liftable type, so a value with no
//! conversion is rejected by the compiler rather than at run time.
//!
//! `ReQL` is the deferred expression handle the operator library works with.
//! Building it against a context produces the term; building the same handle
//! twice allocates fresh variables each time.

mod lift;
mod numeric;

pub use numeric::pi;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::context::QueryContext;
use crate::datum::to_datum;
use crate::term::{render, Term, TermResult, VarId};

type BuildFn = dyn Fn(&mut QueryContext) -> Term + Send + Sync;

/// A deferred query expression
#[derive(Clone)]
pub struct ReQL {
    build: Arc<BuildFn>,
}

impl ReQL {
    /// Expression produced by a build closure
    pub fn from_fn<F>(build: F) -> Self
    where
        F: Fn(&mut QueryContext) -> Term + Send + Sync + 'static,
    {
        Self {
            build: Arc::new(build),
        }
    }

    /// Produce the term for this expression
    pub fn build(&self, ctx: &mut QueryContext) -> Term {
        (self.build)(ctx)
    }

    /// Attach a debug label, shown by the printer and dropped on the wire
    pub fn note(&self, label: impl Into<String>) -> ReQL {
        let label = label.into();
        let inner = self.clone();
        ReQL::from_fn(move |ctx| Term::annotated(label.clone(), inner.build(ctx)))
    }

    /// Term built against a scratch context
    pub fn to_term_default(&self) -> Term {
        self.build(&mut QueryContext::default())
    }
}

impl fmt::Debug for ReQL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReQL({})", render(&self.to_term_default()))
    }
}

impl fmt::Display for ReQL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.to_term_default()))
    }
}

/// Conversion of a host value into a term
///
/// Liftable values are `Send + Sync`, so a prepared expression can be
/// handed to another thread and built there.
pub trait Expr: Send + Sync {
    fn to_term(&self, ctx: &mut QueryContext) -> Term;
}

/// Lift any convertible value into a deferred expression
pub fn expr<E: Expr + 'static>(value: E) -> ReQL {
    ReQL::from_fn(move |ctx| value.to_term(ctx))
}

/// Lift an arbitrary serializable value through its datum form
pub fn datum<T: Serialize + ?Sized>(value: &T) -> TermResult<ReQL> {
    Ok(expr(to_datum(value)?))
}

/// Reference to an already bound variable
pub fn var(id: VarId) -> ReQL {
    ReQL::from_fn(move |_| Term::var(id))
}

/// Lift a one-argument host function into a function literal
pub fn func<F, R>(f: F) -> ReQL
where
    F: Fn(ReQL) -> R + Send + Sync + 'static,
    R: Expr,
{
    ReQL::from_fn(move |ctx| {
        let x = ctx.allocate_variable();
        let body = f(var(x)).to_term(ctx);
        Term::func(&[x], body)
    })
}

/// Lift a two-argument host function into a function literal
pub fn func2<F, R>(f: F) -> ReQL
where
    F: Fn(ReQL, ReQL) -> R + Send + Sync + 'static,
    R: Expr,
{
    ReQL::from_fn(move |ctx| {
        let x = ctx.allocate_variable();
        let y = ctx.allocate_variable();
        let body = f(var(x), var(y)).to_term(ctx);
        Term::func(&[x, y], body)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::TermKind;

    #[test]
    fn test_func_allocates_one_variable() {
        let mut ctx = QueryContext::new(1, "test");
        let f = func(|x| x);
        assert_eq!(f.build(&mut ctx), Term::func(&[1], Term::var(1)));
        assert_eq!(ctx.allocated(), 1);
    }

    #[test]
    fn test_func2_allocates_in_order() {
        let mut ctx = QueryContext::new(1, "test");
        let f = func2(|_x, y| y);
        assert_eq!(f.build(&mut ctx), Term::func(&[1, 2], Term::var(2)));
    }

    #[test]
    fn test_nested_functions_get_distinct_ids() {
        let mut ctx = QueryContext::new(1, "test");
        let f = func(|x| func(move |y| x.clone() + y));
        let term = f.build(&mut ctx);
        let expected = Term::func(
            &[1],
            Term::func(&[2], Term::call(TermKind::Add, vec![Term::var(1), Term::var(2)])),
        );
        assert_eq!(term, expected);
    }

    #[test]
    fn test_rebuilding_allocates_again() {
        let mut ctx = QueryContext::new(1, "test");
        let f = func(|x| x);
        f.build(&mut ctx);
        assert_eq!(f.build(&mut ctx), Term::func(&[2], Term::var(2)));
    }

    #[test]
    fn test_note_wraps() {
        let e = expr(5).note("five");
        assert_eq!(e.to_term_default(), Term::annotated("five", Term::literal(5)));
        assert_eq!(e.to_string(), "/* five */ 5");
    }

    #[test]
    fn test_datum_from_serializable() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
        }
        let e = datum(&Point { x: 3 }).unwrap();
        let mut expected = crate::term::TermMap::new();
        expected.insert("x".into(), Term::literal(3));
        assert_eq!(
            e.to_term_default(),
            Term::call_with(TermKind::MakeObj, vec![], expected)
        );
    }

    #[test]
    fn test_debug_renders() {
        assert_eq!(format!("{:?}", expr("a")), "ReQL(\"a\")");
    }
}
