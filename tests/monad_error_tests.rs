//! Tests for `MonadError` on `Try`.

#![cfg(all(feature = "typeclass", feature = "control"))]

use fnkit::control::{Try, TryError};
use fnkit::typeclass::{Applicative, MonadError};
use rstest::rstest;

// =============================================================================
// Laws
// =============================================================================

#[rstest]
#[case("boom")]
#[case("")]
fn catch_error_of_throw_error_applies_handler(#[case] message: &str) {
    let thrown = <Try<usize>>::throw_error::<usize>(TryError::new(message));
    let handled = <Try<usize>>::catch_error(thrown, |error| Try::Success(error.message().len()));
    assert_eq!(handled, Try::Success(message.len()));
}

#[rstest]
fn catch_error_of_pure_is_pure() {
    let pure = <Try<i32>>::pure(7);
    let handled = <Try<i32>>::catch_error(pure, |_| Try::Success(0));
    assert_eq!(handled, Try::Success(7));
}

#[rstest]
fn throw_error_short_circuits_flat_map() {
    let thrown = <Try<i32>>::throw_error::<i32>(TryError::new("stop"));
    assert_eq!(
        thrown.flat_map(|n| Try::Success(n + 1)),
        Try::Failure(TryError::new("stop"))
    );
}

// =============================================================================
// Derived Operations
// =============================================================================

#[rstest]
fn from_result_lifts_both_sides() {
    assert_eq!(<Try<i32>>::from_result(Ok(1)), Try::Success(1));
    assert_eq!(
        <Try<i32>>::from_result::<i32>(Err(TryError::new("e"))),
        Try::Failure(TryError::new("e"))
    );
}

#[rstest]
fn adapt_error_rewrites_failure() {
    let failed: Try<i32> = Try::new(|| panic!("deep"));
    let adapted = <Try<i32>>::adapt_error(failed, |error| {
        TryError::new(format!("while loading: {}", error.message()))
    });
    assert_eq!(adapted, Try::Failure(TryError::new("while loading: deep")));
}

#[rstest]
fn handle_error_turns_failure_into_success() {
    let failed: Try<String> = Try::Failure(TryError::new("missing"));
    let handled = <Try<String>>::handle_error(failed, |error| format!("default ({error})"));
    assert_eq!(handled, Try::Success("default (missing)".to_string()));
}

#[rstest]
fn recover_with_keeps_success() {
    let success: Try<i32> = Try::Success(3);
    assert_eq!(<Try<i32>>::recover_with(success, Try::Success(0)), Try::Success(3));
}

#[rstest]
fn handle_error_matches_lifted_result() {
    let failed: Try<i32> = <Try<i32>>::from_result(Err(TryError::new("e")));
    assert_eq!(failed, Try::Failure(TryError::new("e")));

    let handled = <Try<i32>>::handle_error(failed, |_| -1);
    assert_eq!(handled, <Try<i32>>::from_result(Ok(-1)));
}
