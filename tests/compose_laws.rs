//! Property-based tests for composition laws.
//!
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Double Negation**: `negate(negate(p)) == p`

#![cfg(feature = "compose")]

use fnkit::compose::{compose, identity, negate};
use proptest::prelude::*;

fn increment(n: i64) -> i64 {
    n.wrapping_add(1)
}

fn triple(n: i64) -> i64 {
    n.wrapping_mul(3)
}

fn square(n: i64) -> i64 {
    n.wrapping_mul(n)
}

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i64>()) {
        prop_assert_eq!(compose(identity, triple)(value), triple(value));
    }

    #[test]
    fn prop_right_identity(value in any::<i64>()) {
        prop_assert_eq!(compose(triple, identity)(value), triple(value));
    }

    #[test]
    fn prop_associativity(value in any::<i64>()) {
        let left = compose(compose(increment, triple), square);
        let right = compose(increment, compose(triple, square));
        prop_assert_eq!(left(value), right(value));
    }

    #[test]
    fn prop_double_negation(value in any::<i64>()) {
        let is_even = |n: i64| n % 2 == 0;
        let twice = negate(negate(is_even));
        prop_assert_eq!(twice(value), is_even(value));
    }
}
