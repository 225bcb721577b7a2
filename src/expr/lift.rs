//! `Expr` implementations for host types
//!
//! Scalars become literals. Sequences, tuples and datum arrays become
//! `MAKE_ARRAY`; string-keyed maps and datum objects become `MAKE_OBJ`.
//! Timestamps go through the server's time constructors.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Utc};

use super::{Expr, ReQL};
use crate::context::QueryContext;
use crate::datum::Datum;
use crate::term::{Term, TermKind, TermMap};

impl Expr for ReQL {
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        self.build(ctx)
    }
}

impl Expr for Term {
    fn to_term(&self, _ctx: &mut QueryContext) -> Term {
        self.clone()
    }
}

impl Expr for Datum {
    fn to_term(&self, _ctx: &mut QueryContext) -> Term {
        lift_datum(self)
    }
}

fn lift_datum(value: &Datum) -> Term {
    match value {
        Datum::Array(items) => {
            Term::call(TermKind::MakeArray, items.iter().map(lift_datum).collect())
        }
        Datum::Object(fields) => {
            let optargs: TermMap = fields
                .iter()
                .map(|(key, value)| (key.clone(), lift_datum(value)))
                .collect();
            Term::call_with(TermKind::MakeObj, Vec::new(), optargs)
        }
        scalar => Term::Literal(scalar.clone()),
    }
}

impl Expr for () {
    fn to_term(&self, _ctx: &mut QueryContext) -> Term {
        Term::Literal(Datum::Null)
    }
}

macro_rules! literal_expr {
    ($($t:ty),+) => {
        $(
            impl Expr for $t {
                fn to_term(&self, _ctx: &mut QueryContext) -> Term {
                    Term::literal(*self)
                }
            }
        )+
    };
}

literal_expr!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Expr for str {
    fn to_term(&self, _ctx: &mut QueryContext) -> Term {
        Term::literal(self)
    }
}

impl Expr for String {
    fn to_term(&self, _ctx: &mut QueryContext) -> Term {
        Term::literal(self.as_str())
    }
}

impl Expr for char {
    fn to_term(&self, _ctx: &mut QueryContext) -> Term {
        Term::literal(self.to_string())
    }
}

impl<T: Expr + ?Sized> Expr for &T {
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        (**self).to_term(ctx)
    }
}

impl<T: Expr + ?Sized> Expr for Box<T> {
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        (**self).to_term(ctx)
    }
}

impl<T: Expr> Expr for Option<T> {
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        match self {
            Some(value) => value.to_term(ctx),
            None => Term::Literal(Datum::Null),
        }
    }
}

impl<T: Expr> Expr for [T] {
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        let items = self.iter().map(|item| item.to_term(ctx)).collect();
        Term::call(TermKind::MakeArray, items)
    }
}

impl<T: Expr> Expr for Vec<T> {
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        self.as_slice().to_term(ctx)
    }
}

impl<T: Expr, const N: usize> Expr for [T; N] {
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        self.as_slice().to_term(ctx)
    }
}

macro_rules! tuple_expr {
    ($($t:ident $v:ident),+) => {
        impl<$($t: Expr),+> Expr for ($($t,)+) {
            fn to_term(&self, ctx: &mut QueryContext) -> Term {
                let ($($v,)+) = self;
                Term::call(TermKind::MakeArray, vec![$($v.to_term(ctx)),+])
            }
        }
    };
}

tuple_expr!(A a, B b);
tuple_expr!(A a, B b, C c);
tuple_expr!(A a, B b, C c, D d);

fn lift_object<'a, K, V, I>(entries: I, ctx: &mut QueryContext) -> Term
where
    K: AsRef<str> + 'a,
    V: Expr + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    let mut optargs = TermMap::new();
    for (key, value) in entries {
        optargs.insert(AsRef::<str>::as_ref(key).to_string(), value.to_term(ctx));
    }
    Term::call_with(TermKind::MakeObj, Vec::new(), optargs)
}

impl<K: AsRef<str> + Send + Sync, V: Expr> Expr for BTreeMap<K, V> {
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        lift_object(self.iter(), ctx)
    }
}

impl<K, V, S> Expr for HashMap<K, V, S>
where
    K: AsRef<str> + Send + Sync,
    V: Expr,
    S: BuildHasher + Send + Sync,
{
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        // Visit keys in order so variable allocation does not depend on hashing.
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_by(|(ka, _), (kb, _)| {
            AsRef::<str>::as_ref(*ka).cmp(AsRef::<str>::as_ref(*kb))
        });
        lift_object(entries.into_iter(), ctx)
    }
}

impl Expr for DateTime<Utc> {
    fn to_term(&self, _ctx: &mut QueryContext) -> Term {
        let seconds = self.timestamp() as f64 + f64::from(self.timestamp_subsec_nanos()) / 1e9;
        Term::call(TermKind::EpochTime, vec![Term::literal(seconds)])
    }
}

impl Expr for DateTime<FixedOffset> {
    fn to_term(&self, ctx: &mut QueryContext) -> Term {
        // TIME takes a `+hh:mm` offset; keep the instant for sub-minute offsets.
        if self.offset().local_minus_utc() % 60 != 0 {
            return self.with_timezone(&Utc).to_term(ctx);
        }
        let seconds = f64::from(self.second()) + f64::from(self.nanosecond()) / 1e9;
        Term::call(
            TermKind::Time,
            vec![
                Term::literal(self.year()),
                Term::literal(self.month()),
                Term::literal(self.day()),
                Term::literal(self.hour()),
                Term::literal(self.minute()),
                Term::literal(seconds),
                Term::literal(offset_string(self.offset())),
            ],
        )
    }
}

impl Expr for NaiveDate {
    fn to_term(&self, _ctx: &mut QueryContext) -> Term {
        Term::call(
            TermKind::Time,
            vec![
                Term::literal(self.year()),
                Term::literal(self.month()),
                Term::literal(self.day()),
                Term::literal("Z"),
            ],
        )
    }
}

/// Signed `+hh:mm` form of a UTC offset
fn offset_string(offset: &FixedOffset) -> String {
    let total = offset.local_minus_utc();
    let sign = if total < 0 { '-' } else { '+' };
    let abs = total.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}
