//! Tests for `are_equals`, the structural deep equality over `Value`.

#![cfg(feature = "value")]

use chrono::{TimeZone, Utc};
use fnkit::value::{Function, Object, Symbol, Value, are_equals};
use proptest::prelude::*;
use rstest::rstest;

fn empty_object() -> Value {
    Value::Object(Object::new())
}

// =============================================================================
// Documented Properties
// =============================================================================

#[rstest]
fn nested_arrays_compare_element_wise() {
    let left = Value::array([Value::from(1), Value::array([2, 3])]);
    let same = Value::array([Value::from(1), Value::array([2, 3])]);
    let different = Value::array([Value::from(1), Value::array([2, 4])]);
    assert!(are_equals(&left, &same));
    assert!(!are_equals(&left, &different));
}

#[rstest]
fn number_and_string_are_not_equal() {
    assert!(!are_equals(&Value::from(42), &Value::from("42")));
}

#[rstest]
fn object_with_extra_key_is_not_equal() {
    let larger = Value::object([("a", 1), ("b", 2)]);
    let smaller = Value::object([("a", 1)]);
    assert!(!are_equals(&larger, &smaller));
}

#[rstest]
fn empty_arrays_are_equal() {
    assert!(are_equals(&Value::Array(Vec::new()), &Value::Array(Vec::new())));
}

// Two distinct empty objects compare unequal: an object comparison only
// succeeds when at least one side has a key.
#[rstest]
fn distinct_empty_objects_are_not_equal() {
    assert!(!are_equals(&empty_object(), &empty_object()));
}

#[rstest]
fn empty_object_is_not_equal_to_empty_array() {
    assert!(!are_equals(&empty_object(), &Value::Array(Vec::new())));
}

#[rstest]
#[case(Value::Undefined)]
#[case(Value::Null)]
#[case(Value::from(f64::NAN))]
#[case(empty_object())]
#[case(Value::from(Utc.with_ymd_and_hms(2020, 5, 17, 12, 0, 0).unwrap()))]
#[case(Value::from(Symbol::new(Some("s"))))]
#[case(Value::from(Function::new(|_| Value::Null)))]
#[case(Value::object([("nested", Value::object([("deep", Value::array([1]))]))]))]
fn every_value_equals_itself(#[case] value: Value) {
    assert!(are_equals(&value, &value));
    assert!(value.deep_equals(&value));
}

#[rstest]
fn equal_dates_held_separately_are_not_equal() {
    let instant = Utc.with_ymd_and_hms(2020, 5, 17, 12, 0, 0).unwrap();
    let left = Value::object([("at", Value::from(instant))]);
    let right = Value::object([("at", Value::from(instant))]);
    assert!(!are_equals(&left, &right));
}

#[rstest]
fn shared_function_inside_objects_is_equal() {
    let callback = Function::new(|arguments| arguments.first().cloned().unwrap_or(Value::Undefined));
    let left = Value::object([("on_click", callback.clone())]);
    let right = Value::object([("on_click", callback)]);
    assert!(are_equals(&left, &right));
}

#[rstest]
fn null_and_undefined_fields_are_distinct() {
    let left = Value::object([("a", Value::Null)]);
    let right = Value::object([("a", Value::Undefined)]);
    assert!(!are_equals(&left, &right));
}

#[rstest]
fn big_int_and_number_never_match() {
    assert!(!are_equals(&Value::from(1_i128), &Value::from(1.0)));
}

// =============================================================================
// Properties
// =============================================================================

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        any::<i64>().prop_map(|n| Value::from(i128::from(n))),
        "[a-z]{0,6}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec(("[a-c]", inner), 0..4).prop_map(Value::object),
        ]
    })
}

fn contains_empty_object(value: &Value) -> bool {
    match value {
        Value::Object(entries) => entries.is_empty() || entries.values().any(contains_empty_object),
        Value::Array(values) => values.iter().any(contains_empty_object),
        _ => false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 65_536, ..ProptestConfig::default() })]

    #[test]
    fn prop_reflexive_on_same_reference(value in value_strategy()) {
        prop_assert!(are_equals(&value, &value));
    }

    #[test]
    fn prop_clone_is_equal_unless_an_empty_object_is_inside(value in value_strategy()) {
        let copy = value.clone();
        prop_assert_eq!(are_equals(&value, &copy), !contains_empty_object(&value));
    }

    #[test]
    fn prop_symmetric(left in value_strategy(), right in value_strategy()) {
        prop_assert_eq!(are_equals(&left, &right), are_equals(&right, &left));
    }

    #[test]
    fn prop_different_categories_are_never_equal(left in value_strategy(), right in value_strategy()) {
        prop_assume!(left.category() != right.category());
        prop_assert!(!are_equals(&left, &right));
    }
}
