//! Core operators
//!
//! The operators the conversion layer itself relies on, plus the range
//! operators that consume interval bounds. Everything here is written in
//! terms of `build_call`, the way a full operator library would be.

use crate::bound::Bound;
use crate::builder::{build_call, make_call, IntoArgs, OptArgs};
use crate::context::Database;
use crate::expr::{expr, Expr, ReQL};
use crate::term::{Term, TermKind, TermMap};

/// Reference to a database by name
pub fn db(name: impl Into<Database>) -> ReQL {
    let name = name.into();
    ReQL::from_fn(move |_| db_term(&name))
}

fn db_term(name: &Database) -> Term {
    Term::call(TermKind::Db, vec![Term::literal(name.name())])
}

/// Table in the build's default database
pub fn table(name: impl Into<String>) -> ReQL {
    let name = name.into();
    ReQL::from_fn(move |ctx| {
        let database = ctx.default_database().clone();
        table_term(&database, &name, ctx.use_outdated())
    })
}

/// Table in an explicitly named database
pub fn table_in(database: impl Into<Database>, name: impl Into<String>) -> ReQL {
    let database = database.into();
    let name = name.into();
    ReQL::from_fn(move |ctx| table_term(&database, &name, ctx.use_outdated()))
}

// The database is sent as a DB term, not a bare name.
fn table_term(database: &Database, name: &str, use_outdated: Option<bool>) -> Term {
    let mut optargs = TermMap::new();
    if let Some(flag) = use_outdated {
        optargs.insert("use_outdated".to_string(), Term::literal(flag));
    }
    Term::call_with(
        TermKind::Table,
        vec![db_term(database), Term::literal(name)],
        optargs,
    )
}

/// JavaScript source evaluated on the server
pub fn js(code: impl Into<String>) -> ReQL {
    build_call(TermKind::Javascript, (code.into(),), OptArgs::new())
}

/// Call `function` with `args`. Immediately-invoked function literals
/// applied to plain variables are inlined.
pub fn apply<F, A>(function: F, args: A) -> ReQL
where
    F: Expr + 'static,
    A: IntoArgs + 'static,
{
    ReQL::from_fn(move |ctx| {
        let mut terms = vec![function.to_term(ctx)];
        terms.extend(args.to_terms(ctx));
        make_call(TermKind::Funcall, terms, TermMap::new())
    })
}

/// `if test then then_branch else else_branch`
pub fn branch<T, A, B>(test: T, then_branch: A, else_branch: B) -> ReQL
where
    T: Expr + 'static,
    A: Expr + 'static,
    B: Expr + 'static,
{
    build_call(TermKind::Branch, (test, then_branch, else_branch), OptArgs::new())
}

/// Rows of `seq` between two bounds
pub fn between<S, L, U>(seq: S, lower: Bound<L>, upper: Bound<U>, opts: OptArgs) -> ReQL
where
    S: Expr + 'static,
    L: Expr + 'static,
    U: Expr + 'static,
{
    let opts = bound_optargs(opts, lower.tag(), upper.tag());
    build_call(
        TermKind::Between,
        (expr(seq), lower.into_value(), upper.into_value()),
        opts,
    )
}

/// Whether `time` falls between two bounds
pub fn during<T, L, U>(time: T, start: Bound<L>, end: Bound<U>) -> ReQL
where
    T: Expr + 'static,
    L: Expr + 'static,
    U: Expr + 'static,
{
    let opts = bound_optargs(OptArgs::new(), start.tag(), end.tag());
    build_call(
        TermKind::During,
        (expr(time), start.into_value(), end.into_value()),
        opts,
    )
}

fn bound_optargs(
    opts: OptArgs,
    left: Option<&'static str>,
    right: Option<&'static str>,
) -> OptArgs {
    opts.with_opt("left_bound", left).with_opt("right_bound", right)
}

/// Current server time
pub fn now() -> ReQL {
    build_call(TermKind::Now, (), OptArgs::new())
}

impl ReQL {
    /// Field or element access, `self[key]`
    pub fn bracket<K: Expr + 'static>(&self, key: K) -> ReQL {
        build_call(TermKind::Bracket, (self.clone(), key), OptArgs::new())
    }

    /// Field of an object
    pub fn get_field(&self, field: impl Into<String>) -> ReQL {
        build_call(TermKind::GetField, (self.clone(), field.into()), OptArgs::new())
    }

    pub fn eq<E: Expr + 'static>(&self, other: E) -> ReQL {
        build_call(TermKind::Eq, (self.clone(), other), OptArgs::new())
    }

    pub fn ne<E: Expr + 'static>(&self, other: E) -> ReQL {
        build_call(TermKind::Ne, (self.clone(), other), OptArgs::new())
    }

    pub fn lt<E: Expr + 'static>(&self, other: E) -> ReQL {
        build_call(TermKind::Lt, (self.clone(), other), OptArgs::new())
    }

    pub fn le<E: Expr + 'static>(&self, other: E) -> ReQL {
        build_call(TermKind::Le, (self.clone(), other), OptArgs::new())
    }

    pub fn gt<E: Expr + 'static>(&self, other: E) -> ReQL {
        build_call(TermKind::Gt, (self.clone(), other), OptArgs::new())
    }

    pub fn ge<E: Expr + 'static>(&self, other: E) -> ReQL {
        build_call(TermKind::Ge, (self.clone(), other), OptArgs::new())
    }

    pub fn not(&self) -> ReQL {
        build_call(TermKind::Not, (self.clone(),), OptArgs::new())
    }

    pub fn and<E: Expr + 'static>(&self, other: E) -> ReQL {
        build_call(TermKind::And, (self.clone(), other), OptArgs::new())
    }

    pub fn or<E: Expr + 'static>(&self, other: E) -> ReQL {
        build_call(TermKind::Or, (self.clone(), other), OptArgs::new())
    }

    /// Apply `f` to every element
    pub fn map<F: Expr + 'static>(&self, f: F) -> ReQL {
        build_call(TermKind::Map, (self.clone(), f), OptArgs::new())
    }

    /// Keep elements matching `predicate`
    pub fn filter<P: Expr + 'static>(&self, predicate: P, opts: OptArgs) -> ReQL {
        build_call(TermKind::Filter, (self.clone(), predicate), opts)
    }
}
