//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`

#![cfg(feature = "typeclass")]

// =============================================================================
// Try<T, E> Property Tests
// =============================================================================

#[cfg(feature = "control")]
mod try_laws {
    use fnkit::control::{Try, TryError};
    use fnkit::typeclass::Functor;
    use proptest::prelude::*;

    fn try_strategy() -> impl Strategy<Value = Try<i32, String>> {
        prop_oneof![
            any::<i32>().prop_map(Try::Success),
            any::<String>().prop_map(Try::Failure),
        ]
    }

    proptest! {
        #[test]
        fn prop_try_identity_law(value in try_strategy()) {
            let result = value.clone().fmap(|x| x);
            prop_assert_eq!(result, value);
        }

        #[test]
        fn prop_try_composition_law(value in try_strategy()) {
            let function1 = |n: i32| n.wrapping_add(1);
            let function2 = |n: i32| i64::from(n) * 3;

            let left = value.clone().fmap(function1).fmap(function2);
            let right = value.fmap(|x| function2(function1(x)));

            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_try_fmap_agrees_with_inherent_map(value in try_strategy()) {
            let function = |n: i32| n.wrapping_sub(7);
            prop_assert_eq!(value.clone().fmap(function), value.map(function));
        }

        #[test]
        fn prop_try_fmap_ref_agrees_with_fmap(value in try_strategy()) {
            let function = |n: &i32| n.to_string();
            prop_assert_eq!(value.fmap_ref(function), value.fmap(|n| n.to_string()));
        }

        #[test]
        fn prop_try_composition_law_with_captured_errors(value in any::<i32>(), message in "[a-z]{1,8}") {
            let start: Try<i32> = if value % 3 == 0 {
                Try::Failure(TryError::new(message))
            } else {
                Try::Success(value)
            };
            let function1 = |n: i32| n.to_string();
            let function2 = |text: String| text.len();

            let left = start.clone().fmap(function1).fmap(function2);
            let right = start.fmap(|x| function2(function1(x)));

            prop_assert_eq!(left, right);
        }
    }
}
