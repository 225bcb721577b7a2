//! Bound Algebra Tests
//!
//! Test Categories:
//! 1. Combination table
//! 2. Algebraic properties
//! 3. Range operators on the wire

use proptest::prelude::*;
use reql_core::bound::combine;
use reql_core::{between, build_query, during, now, table, var, Bound, BoundKind, OptArgs};
use serde_json::json;

fn arb_kind() -> impl Strategy<Value = BoundKind> {
    prop_oneof![
        Just(BoundKind::Open),
        Just(BoundKind::Closed),
        Just(BoundKind::Default),
    ]
}

// =============================================================================
// COMBINATION TABLE
// =============================================================================

/// Test: all nine pairs under `+`
#[test]
fn test_nine_cases_under_add() {
    use BoundKind::{Closed, Default, Open};
    let cases = [
        (Open, Open, Some("open")),
        (Open, Closed, Some("open")),
        (Open, Default, Some("open")),
        (Closed, Open, Some("open")),
        (Closed, Closed, Some("closed")),
        (Closed, Default, Some("closed")),
        (Default, Open, Some("open")),
        (Default, Closed, Some("closed")),
        (Default, Default, None),
    ];
    for (left, right, tag) in cases {
        let sum = Bound::new(left, 2) + Bound::new(right, 3);
        assert_eq!(sum.tag(), tag, "{} + {}", left, right);
        assert_eq!(sum.into_value(), 5);
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// Inclusivity combination does not depend on operand order
    #[test]
    fn combination_is_commutative(a in arb_kind(), b in arb_kind()) {
        prop_assert_eq!(a.combine(b), b.combine(a));
    }

    /// Default is the identity for inclusivity
    #[test]
    fn default_adopts_other_side(a in arb_kind()) {
        prop_assert_eq!(BoundKind::Default.combine(a), a);
    }

    /// Open absorbs everything
    #[test]
    fn open_is_infectious(a in arb_kind()) {
        prop_assert_eq!(BoundKind::Open.combine(a), BoundKind::Open);
    }

    /// Values are combined by the operator, untouched by the tags
    #[test]
    fn values_follow_operator(
        a in arb_kind(),
        b in arb_kind(),
        x in -1000i64..1000,
        y in -1000i64..1000
    ) {
        let product = combine(|p: i64, q: i64| p * q, Bound::new(a, x), Bound::new(b, y));
        prop_assert_eq!(*product.value(), x * y);
        prop_assert_eq!(product.kind(), a.combine(b));
    }

    /// Unary operators keep the tag
    #[test]
    fn negation_keeps_kind(a in arb_kind(), x in -1000i64..1000) {
        let negated = -Bound::new(a, x);
        prop_assert_eq!(negated.kind(), a);
        prop_assert_eq!(negated.into_value(), -x);
    }
}

// =============================================================================
// RANGE OPERATORS
// =============================================================================

#[test]
fn test_between_sends_bound_flags() {
    let q = between(
        table("scores"),
        Bound::Closed(var(1)) + Bound::Default(1),
        Bound::Default(100),
        OptArgs::new().with("index", "points"),
    );
    let query = build_query(&q, 1, "test", &OptArgs::new());
    assert_eq!(
        query.body()[1],
        json!([182,
            [[15, [[14, ["test"]], "scores"]], [24, [[10, [1]], 1]], 100],
            {"index": "points", "left_bound": "closed"}
        ])
    );
}

#[test]
fn test_during_open_closed() {
    let q = during(now(), Bound::Open(0), Bound::Closed(10));
    let query = build_query(&q, 1, "test", &OptArgs::new());
    assert_eq!(
        query.body()[1],
        json!([105, [[103, []], 0, 10], {"left_bound": "open", "right_bound": "closed"}])
    );
}

#[test]
fn test_expression_bound_abs_keeps_tag() {
    let b = Bound::Open(var(1)).abs();
    assert_eq!(b.tag(), Some("open"));
    let s = (-Bound::Closed(var(2))).signum();
    assert_eq!(s.kind(), BoundKind::Closed);
}
