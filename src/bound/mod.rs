//! Interval bounds
//!
//! An endpoint of a range query is open, closed, or left to the server's
//! default. Arithmetic on bounds works on the wrapped values and combines the
//! inclusivity: an open side makes the result open, two closed sides stay
//! closed, and a default side takes whatever the other side is.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::expr::ReQL;

/// Inclusivity of a bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    Open,
    Closed,
    Default,
}

impl BoundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundKind::Open => "open",
            BoundKind::Closed => "closed",
            BoundKind::Default => "default",
        }
    }

    /// Flag sent to the server; `None` lets the server decide
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            BoundKind::Default => None,
            kind => Some(kind.as_str()),
        }
    }

    /// Inclusivity of a value computed from two bounds
    pub fn combine(self, other: BoundKind) -> BoundKind {
        match (self, other) {
            (BoundKind::Open, _) | (_, BoundKind::Open) => BoundKind::Open,
            (BoundKind::Default, kind) | (kind, BoundKind::Default) => kind,
            (BoundKind::Closed, BoundKind::Closed) => BoundKind::Closed,
        }
    }
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One endpoint of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound<T> {
    Open(T),
    Closed(T),
    Default(T),
}

impl<T> Bound<T> {
    pub fn new(kind: BoundKind, value: T) -> Self {
        match kind {
            BoundKind::Open => Bound::Open(value),
            BoundKind::Closed => Bound::Closed(value),
            BoundKind::Default => Bound::Default(value),
        }
    }

    pub fn kind(&self) -> BoundKind {
        match self {
            Bound::Open(_) => BoundKind::Open,
            Bound::Closed(_) => BoundKind::Closed,
            Bound::Default(_) => BoundKind::Default,
        }
    }

    /// Wire flag for this bound, `None` for `Default`
    pub fn tag(&self) -> Option<&'static str> {
        self.kind().tag()
    }

    pub fn value(&self) -> &T {
        match self {
            Bound::Open(v) | Bound::Closed(v) | Bound::Default(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Bound::Open(v) | Bound::Closed(v) | Bound::Default(v) => v,
        }
    }

    pub fn by_ref(&self) -> Bound<&T> {
        Bound::new(self.kind(), self.value())
    }

    /// Transform the value, keeping the inclusivity
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Bound<U> {
        let kind = self.kind();
        Bound::new(kind, f(self.into_value()))
    }
}

/// Apply a binary operator to two bounds
pub fn combine<A, B, C, F>(op: F, a: Bound<A>, b: Bound<B>) -> Bound<C>
where
    F: FnOnce(A, B) -> C,
{
    let kind = a.kind().combine(b.kind());
    Bound::new(kind, op(a.into_value(), b.into_value()))
}

macro_rules! bound_op {
    ($($op:ident $method:ident),+) => {
        $(
            impl<T: $op<U>, U> $op<Bound<U>> for Bound<T> {
                type Output = Bound<T::Output>;

                fn $method(self, rhs: Bound<U>) -> Self::Output {
                    combine(<T as $op<U>>::$method, self, rhs)
                }
            }
        )+
    };
}

bound_op!(Add add, Sub sub, Mul mul, Div div);

impl<T: Neg> Neg for Bound<T> {
    type Output = Bound<T::Output>;

    fn neg(self) -> Self::Output {
        self.map(<T as Neg>::neg)
    }
}

impl Bound<ReQL> {
    pub fn abs(&self) -> Bound<ReQL> {
        self.by_ref().map(ReQL::abs)
    }

    pub fn signum(&self) -> Bound<ReQL> {
        self.by_ref().map(ReQL::signum)
    }
}
