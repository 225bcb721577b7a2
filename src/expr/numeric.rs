//! Numeric operators on expressions
//!
//! Arithmetic maps onto the server's native operators. Transcendental
//! functions have no native term, so they are called through the server's
//! JavaScript `Math` object. Hyperbolic functions have neither and are
//! refused when the query is written.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use super::{Expr, ReQL};
use crate::builder::{build_call, IntoArgs, OptArgs};
use crate::observability::{log_event_with_fields, Event};
use crate::ops::{apply, branch, js};
use crate::term::{TermError, TermKind, TermResult};

macro_rules! binary_op {
    ($($op:ident $method:ident => $kind:ident),+ $(,)?) => {
        $(
            impl<R: Expr + 'static> $op<R> for ReQL {
                type Output = ReQL;

                fn $method(self, rhs: R) -> ReQL {
                    build_call(TermKind::$kind, (self, rhs), OptArgs::new())
                }
            }

            impl<R: Expr + 'static> $op<R> for &ReQL {
                type Output = ReQL;

                fn $method(self, rhs: R) -> ReQL {
                    build_call(TermKind::$kind, (self.clone(), rhs), OptArgs::new())
                }
            }
        )+
    };
}

binary_op! {
    Add add => Add,
    Sub sub => Sub,
    Mul mul => Mul,
    Div div => Div,
    Rem rem => Mod,
}

// `1 + x` with a host number on the left
macro_rules! scalar_lhs_op {
    ($($t:ty),+) => {
        $(
            impl Add<ReQL> for $t {
                type Output = ReQL;
                fn add(self, rhs: ReQL) -> ReQL {
                    build_call(TermKind::Add, (self, rhs), OptArgs::new())
                }
            }

            impl Sub<ReQL> for $t {
                type Output = ReQL;
                fn sub(self, rhs: ReQL) -> ReQL {
                    build_call(TermKind::Sub, (self, rhs), OptArgs::new())
                }
            }

            impl Mul<ReQL> for $t {
                type Output = ReQL;
                fn mul(self, rhs: ReQL) -> ReQL {
                    build_call(TermKind::Mul, (self, rhs), OptArgs::new())
                }
            }

            impl Div<ReQL> for $t {
                type Output = ReQL;
                fn div(self, rhs: ReQL) -> ReQL {
                    build_call(TermKind::Div, (self, rhs), OptArgs::new())
                }
            }
        )+
    };
}

scalar_lhs_op!(i32, i64, f64);

impl Neg for ReQL {
    type Output = ReQL;

    fn neg(self) -> ReQL {
        build_call(TermKind::Sub, (0, self), OptArgs::new())
    }
}

impl Neg for &ReQL {
    type Output = ReQL;

    fn neg(self) -> ReQL {
        -self.clone()
    }
}

/// The constant pi, as the server computes it
pub fn pi() -> ReQL {
    js("Math.PI")
}

fn math<A: IntoArgs + 'static>(name: &str, args: A) -> ReQL {
    apply(js(format!("Math.{}", name)), args)
}

fn unsupported(operator: &'static str) -> TermResult<ReQL> {
    log_event_with_fields(Event::UnsupportedOperator, &[("operator", operator)]);
    Err(TermError::UnsupportedOperator(operator))
}

impl ReQL {
    /// `|x|`, as `x < 0 ? -x : x`
    pub fn abs(&self) -> ReQL {
        branch(self.lt(0), -self, self.clone())
    }

    /// `-1`, `0` or `1` by the sign of `x`
    pub fn signum(&self) -> ReQL {
        branch(self.lt(0), -1, branch(self.eq(0), 0, 1))
    }

    pub fn floor(&self) -> ReQL {
        build_call(TermKind::Floor, (self.clone(),), OptArgs::new())
    }

    pub fn ceil(&self) -> ReQL {
        build_call(TermKind::Ceil, (self.clone(),), OptArgs::new())
    }

    pub fn round(&self) -> ReQL {
        build_call(TermKind::Round, (self.clone(),), OptArgs::new())
    }

    pub fn sin(&self) -> ReQL {
        math("sin", (self.clone(),))
    }

    pub fn cos(&self) -> ReQL {
        math("cos", (self.clone(),))
    }

    pub fn tan(&self) -> ReQL {
        math("tan", (self.clone(),))
    }

    pub fn asin(&self) -> ReQL {
        math("asin", (self.clone(),))
    }

    pub fn acos(&self) -> ReQL {
        math("acos", (self.clone(),))
    }

    pub fn atan(&self) -> ReQL {
        math("atan", (self.clone(),))
    }

    /// Angle of the point `(x, self)`
    pub fn atan2<E: Expr + 'static>(&self, x: E) -> ReQL {
        math("atan2", (self.clone(), x))
    }

    pub fn exp(&self) -> ReQL {
        math("exp", (self.clone(),))
    }

    /// Natural logarithm
    pub fn ln(&self) -> ReQL {
        math("log", (self.clone(),))
    }

    /// Logarithm in an arbitrary base, `ln(self) / ln(base)`
    pub fn log_base<E: Expr + 'static>(&self, base: E) -> ReQL {
        self.ln() / math("log", (base,))
    }

    pub fn sqrt(&self) -> ReQL {
        math("sqrt", (self.clone(),))
    }

    pub fn pow<E: Expr + 'static>(&self, exponent: E) -> ReQL {
        math("pow", (self.clone(), exponent))
    }

    pub fn sinh(&self) -> TermResult<ReQL> {
        unsupported("sinh")
    }

    pub fn cosh(&self) -> TermResult<ReQL> {
        unsupported("cosh")
    }

    pub fn tanh(&self) -> TermResult<ReQL> {
        unsupported("tanh")
    }

    pub fn asinh(&self) -> TermResult<ReQL> {
        unsupported("asinh")
    }

    pub fn acosh(&self) -> TermResult<ReQL> {
        unsupported("acosh")
    }

    pub fn atanh(&self) -> TermResult<ReQL> {
        unsupported("atanh")
    }
}
