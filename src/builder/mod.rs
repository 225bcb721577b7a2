//! Argument and attribute builders
//!
//! `build_call` is the single entry point through which operators construct
//! call terms. Positional arguments come from anything implementing
//! `IntoArgs` (tuples up to four elements, vectors, arrays); named arguments
//! come from `OptArgs`. Calls of kind `FUNCALL` go through the inliner.

mod attr;

pub use attr::{attr, dynamic_attr, object, optional_attr, Attribute, OptArgs, StaticAttr};

use crate::context::QueryContext;
use crate::expr::{Expr, ReQL};
use crate::inline;
use crate::term::{Term, TermKind, TermMap};

/// An ordered sequence of operator arguments
pub trait IntoArgs: Send + Sync {
    fn to_terms(&self, ctx: &mut QueryContext) -> Vec<Term>;
}

impl IntoArgs for () {
    fn to_terms(&self, _ctx: &mut QueryContext) -> Vec<Term> {
        Vec::new()
    }
}

macro_rules! tuple_args {
    ($($t:ident $v:ident),+) => {
        impl<$($t: Expr),+> IntoArgs for ($($t,)+) {
            fn to_terms(&self, ctx: &mut QueryContext) -> Vec<Term> {
                let ($($v,)+) = self;
                vec![$($v.to_term(ctx)),+]
            }
        }
    };
}

tuple_args!(A a);
tuple_args!(A a, B b);
tuple_args!(A a, B b, C c);
tuple_args!(A a, B b, C c, D d);

impl<T: Expr> IntoArgs for Vec<T> {
    fn to_terms(&self, ctx: &mut QueryContext) -> Vec<Term> {
        self.iter().map(|item| item.to_term(ctx)).collect()
    }
}

impl<T: Expr, const N: usize> IntoArgs for [T; N] {
    fn to_terms(&self, ctx: &mut QueryContext) -> Vec<Term> {
        self.iter().map(|item| item.to_term(ctx)).collect()
    }
}

/// Deferred call of `kind` on `args` and `optargs`
pub fn build_call<A>(kind: TermKind, args: A, optargs: OptArgs) -> ReQL
where
    A: IntoArgs + 'static,
{
    ReQL::from_fn(move |ctx| {
        let args = args.to_terms(ctx);
        let optargs = optargs.to_terms(ctx);
        make_call(kind, args, optargs)
    })
}

/// Assemble a call from already built parts, inlining where safe
pub fn make_call(kind: TermKind, args: Vec<Term>, optargs: TermMap) -> Term {
    if kind == TermKind::Funcall && optargs.is_empty() {
        if let Some(inlined) = inline::inline_funcall(&args) {
            return inlined;
        }
    }
    Term::call_with(kind, args, optargs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{expr, var};

    fn build(e: &ReQL) -> Term {
        e.build(&mut QueryContext::default())
    }

    #[test]
    fn test_zero_args() {
        let call = build_call(TermKind::Now, (), OptArgs::new());
        assert_eq!(build(&call), Term::call(TermKind::Now, vec![]));
    }

    #[test]
    fn test_tuple_and_vec_converge() {
        let from_tuple = build_call(TermKind::Add, (1, 2, 3), OptArgs::new());
        let from_vec = build_call(TermKind::Add, vec![1, 2, 3], OptArgs::new());
        let from_array = build_call(TermKind::Add, [1, 2, 3], OptArgs::new());
        assert_eq!(build(&from_tuple), build(&from_vec));
        assert_eq!(build(&from_tuple), build(&from_array));
    }

    #[test]
    fn test_mixed_tuple() {
        let call = build_call(TermKind::GetField, (var(1), "name"), OptArgs::new());
        assert_eq!(
            build(&call),
            Term::call(TermKind::GetField, vec![Term::var(1), Term::literal("name")])
        );
    }

    #[test]
    fn test_optargs_attached() {
        let call = build_call(
            TermKind::Filter,
            (expr(vec![1]), true),
            OptArgs::new().with("default", false),
        );
        let mut optargs = TermMap::new();
        optargs.insert("default".into(), Term::literal(false));
        assert_eq!(
            build(&call),
            Term::call_with(
                TermKind::Filter,
                vec![
                    Term::call(TermKind::MakeArray, vec![Term::literal(1)]),
                    Term::literal(true),
                ],
                optargs,
            )
        );
    }

    #[test]
    fn test_make_call_plain() {
        let t = make_call(TermKind::Add, vec![Term::literal(1)], TermMap::new());
        assert_eq!(t, Term::call(TermKind::Add, vec![Term::literal(1)]));
    }
}
