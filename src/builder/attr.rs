//! Attributes for named arguments and object construction
//!
//! Named arguments of an operator must have keys known when the query is
//! written, so `OptArgs` only ever holds `StaticAttr`. Object values may also
//! compute their keys on the server, which `Attribute::Dynamic` expresses.

use std::fmt;

use crate::context::QueryContext;
use crate::expr::{expr, Expr, ReQL};
use crate::term::{Term, TermKind, TermMap};

/// Key known when the query is written, value computed by an expression
#[derive(Clone)]
pub struct StaticAttr {
    key: String,
    value: ReQL,
}

impl StaticAttr {
    pub fn new<E: Expr + 'static>(key: impl Into<String>, value: E) -> Self {
        Self {
            key: key.into(),
            value: expr(value),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &ReQL {
        &self.value
    }
}

impl fmt::Debug for StaticAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.key, self.value)
    }
}

/// One entry of an object under construction
#[derive(Debug, Clone)]
pub enum Attribute {
    /// Literal key
    Static(StaticAttr),
    /// Key computed by an expression
    Dynamic { key: ReQL, value: ReQL },
    /// Omitted optional entry
    Absent,
}

impl From<StaticAttr> for Attribute {
    fn from(attr: StaticAttr) -> Self {
        Attribute::Static(attr)
    }
}

/// Attribute with a literal key
pub fn attr<E: Expr + 'static>(key: impl Into<String>, value: E) -> Attribute {
    Attribute::Static(StaticAttr::new(key, value))
}

/// Attribute whose key is itself an expression
pub fn dynamic_attr<K, V>(key: K, value: V) -> Attribute
where
    K: Expr + 'static,
    V: Expr + 'static,
{
    Attribute::Dynamic {
        key: expr(key),
        value: expr(value),
    }
}

/// Attribute that is absent when `value` is `None`
pub fn optional_attr<E: Expr + 'static>(key: impl Into<String>, value: Option<E>) -> Attribute {
    match value {
        Some(value) => attr(key, value),
        None => Attribute::Absent,
    }
}

/// Named arguments of an operator call. Holds static attributes only.
#[derive(Clone, Default)]
pub struct OptArgs(Vec<StaticAttr>);

impl OptArgs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a named argument; a repeated key replaces the earlier value
    pub fn with<E: Expr + 'static>(mut self, key: impl Into<String>, value: E) -> Self {
        self.push(StaticAttr::new(key, value));
        self
    }

    /// Adds a named argument only when `value` is present
    pub fn with_opt<E: Expr + 'static>(self, key: impl Into<String>, value: Option<E>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn push(&mut self, attr: StaticAttr) {
        self.0.retain(|existing| existing.key != attr.key);
        self.0.push(attr);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|attr| attr.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|attr| attr.key.as_str())
    }

    /// Build every value, in insertion order
    pub fn to_terms(&self, ctx: &mut QueryContext) -> TermMap {
        let mut optargs = TermMap::new();
        for attr in &self.0 {
            optargs.insert(attr.key.clone(), attr.value.build(ctx));
        }
        optargs
    }
}

impl fmt::Debug for OptArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

impl FromIterator<StaticAttr> for OptArgs {
    fn from_iter<I: IntoIterator<Item = StaticAttr>>(iter: I) -> Self {
        let mut opts = OptArgs::new();
        for attr in iter {
            opts.push(attr);
        }
        opts
    }
}

/// Build an object value.
///
/// All-static attribute lists become `MAKE_OBJ`. Once any key is dynamic the
/// object is built with `OBJECT(k1, v1, k2, v2, ...)` instead. Absent
/// attributes are skipped either way.
pub fn object(attrs: Vec<Attribute>) -> ReQL {
    ReQL::from_fn(move |ctx| {
        let all_static = attrs
            .iter()
            .all(|a| matches!(a, Attribute::Static(_) | Attribute::Absent));

        if all_static {
            let mut fields = TermMap::new();
            for a in &attrs {
                if let Attribute::Static(s) = a {
                    fields.insert(s.key.clone(), s.value.build(ctx));
                }
            }
            return Term::call_with(TermKind::MakeObj, Vec::new(), fields);
        }

        let mut args = Vec::with_capacity(attrs.len() * 2);
        for a in &attrs {
            match a {
                Attribute::Static(s) => {
                    args.push(Term::literal(s.key.as_str()));
                    args.push(s.value.build(ctx));
                }
                Attribute::Dynamic { key, value } => {
                    args.push(key.build(ctx));
                    args.push(value.build(ctx));
                }
                Attribute::Absent => {}
            }
        }
        Term::call(TermKind::Object, args)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::func;

    fn build(e: &ReQL) -> Term {
        e.build(&mut QueryContext::default())
    }

    #[test]
    fn test_static_object() {
        let obj = object(vec![attr("a", 1), Attribute::Absent, attr("b", "x")]);
        let mut fields = TermMap::new();
        fields.insert("a".into(), Term::literal(1));
        fields.insert("b".into(), Term::literal("x"));
        assert_eq!(build(&obj), Term::call_with(TermKind::MakeObj, vec![], fields));
    }

    #[test]
    fn test_dynamic_object() {
        let obj = object(vec![
            attr("a", 1),
            optional_attr("skipped", None::<i32>),
            dynamic_attr(expr("k").note("key"), 2),
        ]);
        assert_eq!(
            build(&obj),
            Term::call(
                TermKind::Object,
                vec![
                    Term::literal("a"),
                    Term::literal(1),
                    Term::annotated("key", Term::literal("k")),
                    Term::literal(2),
                ],
            )
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(
            build(&object(vec![])),
            Term::call_with(TermKind::MakeObj, vec![], TermMap::new())
        );
    }

    #[test]
    fn test_optargs_replace_duplicates() {
        let opts = OptArgs::new().with("index", "a").with("index", "b");
        assert_eq!(opts.len(), 1);
        let terms = opts.to_terms(&mut QueryContext::default());
        assert_eq!(terms["index"], Term::literal("b"));
    }

    #[test]
    fn test_optargs_with_opt() {
        let opts = OptArgs::new()
            .with_opt("left_bound", Some("open"))
            .with_opt("right_bound", None::<&str>);
        assert!(opts.contains("left_bound"));
        assert!(!opts.contains("right_bound"));
        assert_eq!(format!("{:?}", opts), "[\"left_bound\"]");
    }

    #[test]
    fn test_optargs_build_in_insertion_order() {
        let opts = OptArgs::new()
            .with("z", func(|x| x))
            .with("a", func(|x| x));
        let terms = opts.to_terms(&mut QueryContext::default());
        assert_eq!(terms["z"], Term::func(&[1], Term::var(1)));
        assert_eq!(terms["a"], Term::func(&[2], Term::var(2)));
    }

    #[test]
    fn test_collect_optargs() {
        let opts: OptArgs = vec![StaticAttr::new("x", 1), StaticAttr::new("y", 2)]
            .into_iter()
            .collect();
        assert_eq!(opts.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
