//! Unit tests for Optional<T>.
//!
//! Optional represents a value or nothing:
//! - `Some(T)`: Contains exactly one value
//! - `None`: Contains nothing

use std::cell::Cell;
use std::collections::HashMap;

use optres::failure::OPTIONAL_UNWRAP_NONE;
use optres::{Optional, Outcome, none, optional_from_ref, some};
use rstest::rstest;

// =============================================================================
// Construction and Type Checking
// =============================================================================

#[rstest]
fn some_is_some() {
    let value = some("SOME");
    assert!(value.is_some());
    assert!(!value.is_none());
}

#[rstest]
fn none_is_none() {
    let value = none::<&str>();
    assert!(value.is_none());
    assert!(!value.is_some());
}

#[rstest]
fn some_of_zero_value_is_still_some() {
    assert!(some(0).is_some());
    assert!(some(Option::<i32>::None).is_some());
    assert!(some(String::new()).is_some());
}

#[rstest]
fn from_ref_present_reference() {
    let value = 10;
    assert_eq!(optional_from_ref(Some(&value)), Optional::Some(10));
}

#[rstest]
fn from_ref_absent_reference() {
    assert_eq!(optional_from_ref::<i32>(None), Optional::None);
}

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
#[case(4, true)]
#[case(3, false)]
fn is_some_and_applies_predicate(#[case] length: usize, #[case] expected: bool) {
    assert_eq!(some("SOME").is_some_and(|value| value.len() == length), expected);
}

#[rstest]
fn is_some_and_never_calls_predicate_on_none() {
    let calls = Cell::new(0);
    let result = none::<i32>().is_some_and(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert!(!result);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn is_none_or_on_none_is_true() {
    assert!(none::<&str>().is_none_or(|_| false));
}

#[rstest]
#[case(4, true)]
#[case(3, false)]
fn is_none_or_applies_predicate(#[case] length: usize, #[case] expected: bool) {
    assert_eq!(some("SOME").is_none_or(|value| value.len() == length), expected);
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn structural_equality_for_comparable_values() {
    assert_eq!(some("hello"), some("hello"));
    assert_ne!(some("hello"), some("world"));
    assert_ne!(some("hello"), none());
    assert_eq!(none::<&str>(), none());
}

/// A payload without `PartialEq`.
struct Registry {
    entries: HashMap<String, i32>,
}

fn registry() -> Registry {
    let mut entries = HashMap::new();
    entries.insert("key".to_string(), 1);
    Registry { entries }
}

#[rstest]
fn identity_eq_same_instance_is_equal() {
    let value = some(registry());
    assert!(value.identity_eq(&value));
}

#[rstest]
fn identity_eq_distinct_instances_are_not_equal() {
    let first = some(registry());
    let second = some(registry());
    assert_eq!(first.as_ref().unwrap().entries, second.as_ref().unwrap().entries);
    assert!(!first.identity_eq(&second));
}

#[rstest]
fn identity_eq_none_values_are_equal() {
    assert!(none::<Registry>().identity_eq(&none()));
}

#[rstest]
fn identity_eq_some_and_none_are_not_equal() {
    assert!(!some(registry()).identity_eq(&none()));
    assert!(!none::<Registry>().identity_eq(&some(registry())));
}

#[rstest]
fn equal_by_uses_comparator() {
    let first = some(registry());
    let second = some(registry());
    assert!(first.equal_by(&second, |left, right| left.entries == right.entries));
    assert!(!first.equal_by(&none(), |_, _| true));
}

// =============================================================================
// Filter and Inspect
// =============================================================================

#[rstest]
fn filter_keeps_matching_value() {
    assert_eq!(some(15).filter(|value| *value > 10), some(15));
}

#[rstest]
fn filter_drops_non_matching_value() {
    assert_eq!(some(5).filter(|value| *value > 10), none());
}

#[rstest]
fn filter_on_none_stays_none() {
    assert_eq!(none::<i32>().filter(|_| true), none());
}

#[rstest]
fn inspect_runs_only_for_some() {
    let calls = Cell::new(0);
    let value = some(3).inspect(|_| calls.set(calls.get() + 1));
    assert_eq!(value, some(3));
    let value = none::<i32>().inspect(|_| calls.set(calls.get() + 1));
    assert_eq!(value, none());
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn expect_returns_value() {
    assert_eq!(some("SOME").expect("oops"), "SOME");
}

#[rstest]
#[should_panic(expected = "test panic")]
fn expect_on_none_panics_with_message() {
    let _ = none::<&str>().expect("test panic");
}

#[rstest]
fn unwrap_returns_value() {
    assert_eq!(some("SOME").unwrap(), "SOME");
}

#[rstest]
#[should_panic(expected = "called `Optional::unwrap()` on a `None` value")]
fn unwrap_on_none_panics_with_default_message() {
    let _ = none::<String>().unwrap();
}

#[rstest]
fn unwrap_panic_payload_is_the_optional_message() {
    let payload = std::panic::catch_unwind(|| none::<String>().unwrap()).unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied());
    assert_eq!(message, Some(OPTIONAL_UNWRAP_NONE));
}

#[rstest]
fn unwrap_or_else_is_lazy() {
    let calls = Cell::new(0);
    let value = some("SOME").unwrap_or_else(|| {
        calls.set(calls.get() + 1);
        "ELSE"
    });
    assert_eq!(value, "SOME");
    assert_eq!(calls.get(), 0);
    assert_eq!(none().unwrap_or_else(|| "ELSE"), "ELSE");
}

#[rstest]
fn unwrap_or_default_uses_default() {
    assert_eq!(some("SOME".to_string()).unwrap_or_default(), "SOME");
    assert_eq!(none::<String>().unwrap_or_default(), "");
    assert_eq!(none::<i32>().unwrap_or_default(), 0);
}

#[rstest]
fn unwrap_or_uses_fallback() {
    assert_eq!(none().unwrap_or(9), 9);
    assert_eq!(some(1).unwrap_or(9), 1);
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
#[case(some("SOME"), some("OTHER"), some("SOME"))]
#[case(none(), some("OTHER"), some("OTHER"))]
#[case(some("SOME"), none(), some("SOME"))]
#[case(none(), none(), none())]
fn and_returns_other_only_for_none(
    #[case] value: Optional<&'static str>,
    #[case] other: Optional<&'static str>,
    #[case] expected: Optional<&'static str>,
) {
    assert_eq!(value.and(other), expected);
}

#[rstest]
fn and_then_chains() {
    let repeat = |count: usize| {
        if count > 0 { some("A".repeat(count)) } else { none() }
    };
    assert_eq!(some(3).and_then(repeat), some("AAA".to_string()));
    assert_eq!(some(0).and_then(repeat), none());
    assert_eq!(none().and_then(repeat), none());
}

#[rstest]
fn map_transforms_value() {
    assert_eq!(some(3).map(|count| "A".repeat(count)), some("AAA".to_string()));
    assert_eq!(none::<usize>().map(|count| "A".repeat(count)), none());
}

#[rstest]
fn map_or_returns_unwrapped_values() {
    assert_eq!(some("abc").map_or(0, str::len), 3);
    assert_eq!(none::<&str>().map_or(0, str::len), 0);
}

#[rstest]
fn map_or_else_is_lazy() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        "OTHER".to_string()
    };
    assert_eq!(some(2).map_or_else(fallback, |value| format!("VALUE={value}")), "VALUE=2");
    assert_eq!(calls.get(), 0);
    assert_eq!(none::<i32>().map_or_else(fallback, |value| format!("VALUE={value}")), "OTHER");
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(some("SOME"), some("OTHER"), some("SOME"))]
#[case(none(), some("OptionB"), some("OptionB"))]
#[case(none(), none(), none())]
fn or_prefers_self(
    #[case] value: Optional<&'static str>,
    #[case] other: Optional<&'static str>,
    #[case] expected: Optional<&'static str>,
) {
    assert_eq!(value.or(other), expected);
}

#[rstest]
fn or_else_is_lazy() {
    let calls = Cell::new(0);
    let result = some("SOME").or_else(|| {
        calls.set(calls.get() + 1);
        some("OTHER")
    });
    assert_eq!(result, some("SOME"));
    assert_eq!(calls.get(), 0);
    assert_eq!(none().or_else(|| some("OTHER")), some("OTHER"));
}

#[rstest]
#[case(some(1), some(2), some(3))]
#[case(some(1), none(), some(1))]
#[case(none(), some(2), some(2))]
#[case(none(), none(), none())]
fn reduce_combines_present_values(
    #[case] value: Optional<i32>,
    #[case] other: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(value.reduce(other, |left, right| left + right), expected);
}

#[rstest]
fn replace_overwrites_none() {
    let mut slot = none();
    slot.replace("NEW");
    assert_eq!(slot, some("NEW"));
}

#[rstest]
fn replace_overwrites_some_and_returns_container() {
    let mut slot = some(1);
    let replaced = slot.replace(2);
    assert_eq!(*replaced, some(2));
    assert_eq!(slot, some(2));
}

#[rstest]
#[case(some(1), some(2), none())]
#[case(some(1), none(), some(1))]
#[case(none(), some(2), some(2))]
#[case(none(), none(), none())]
fn xor_truth_table(
    #[case] value: Optional<i32>,
    #[case] other: Optional<i32>,
    #[case] expected: Optional<i32>,
) {
    assert_eq!(value.xor(other), expected);
}

// =============================================================================
// Conversion to Outcome
// =============================================================================

#[rstest]
fn ok_or_maps_some_to_ok() {
    assert_eq!(some("SOME").ok_or("error"), Outcome::Ok("SOME"));
}

#[rstest]
fn ok_or_maps_none_to_err() {
    assert_eq!(none::<&str>().ok_or("OkOr"), Outcome::Err("OkOr"));
}

#[rstest]
fn ok_or_else_is_lazy() {
    let calls = Cell::new(0);
    let result: Outcome<&str, &str> = some("SOME").ok_or_else(|| {
        calls.set(calls.get() + 1);
        "error"
    });
    assert_eq!(result, Outcome::Ok("SOME"));
    assert_eq!(calls.get(), 0);
    assert_eq!(none::<&str>().ok_or_else(|| "OkOrElse"), Outcome::Err("OkOrElse"));
}

// =============================================================================
// End-to-end Chains
// =============================================================================

#[rstest]
fn filter_then_map_scenario() {
    let result = some(15)
        .filter(|value| *value > 10)
        .map(|value| format!("Value={value}"));
    assert_eq!(result, some("Value=15".to_string()));
}

#[rstest]
fn none_flows_through_chain() {
    let result = none::<String>()
        .map(|text| text.len())
        .map_or("OTHER".to_string(), |length| format!("VALUE={length}"));
    assert_eq!(result, "OTHER");
}
