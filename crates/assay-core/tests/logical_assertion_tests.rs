#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use assay_core::assert::logical;
use assay_core::{AssayError, KeyedComparer, NaturalComparer};
use common::{expect_failure, expect_invalid_argument, record, Record};
use serde::{Serialize, Serializer};
use serde_json::json;

// ===== Equality =====

#[test]
fn test_equal_nested_sequences() {
    assert!(logical::equal(&vec![vec![1, 2], vec![3]], &vec![vec![1, 2], vec![3]]).is_ok());
    let message = expect_failure(
        logical::equal(&vec![vec![1, 2]], &vec![vec![2, 1]]),
        "logical.equal",
    );
    assert_eq!(message, "Expected [[1i32, 2i32]] but was [[2i32, 1i32]]");
}

#[test]
fn test_equal_rejects_cross_width() {
    let message = expect_failure(logical::equal(&1i32, &1i64), "logical.equal");
    assert_eq!(message, "Expected 1i32 but was 1i64");
}

#[test]
fn test_equal_with_absent_values() {
    assert!(logical::equal(&None::<i32>, &None::<i32>).is_ok());
    let message = expect_failure(logical::equal(&Some(1), &None::<i32>), "logical.equal");
    assert_eq!(message, "Expected 1i32 but was None");
}

#[test]
fn test_equal_against_json_fixture() {
    let expected = json!({ "a": 1, "b": null });
    let actual = json!({ "a": 1, "b": null });
    assert!(logical::equal(&expected, &actual).is_ok());
    expect_failure(
        logical::equal(&expected, &json!({ "a": 2, "b": null })),
        "logical.equal",
    );
}

#[test]
fn test_not_equal() {
    assert!(logical::not_equal(&record(1, None), &record(1, Some("x"))).is_ok());
    expect_failure(
        logical::not_equal(&record(1, None), &record(1, None)),
        "logical.not_equal",
    );
    assert!(logical::not_equal(&1u32, &1u64).is_ok());
}

struct Unreflectable;

impl Serialize for Unreflectable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("not reflectable"))
    }
}

#[test]
fn test_unreflectable_values_are_rejected() {
    let err = logical::not_equal(&Unreflectable, &Unreflectable).unwrap_err();
    assert!(matches!(
        err,
        AssayError::InvalidArgument {
            param: "expected",
            ..
        }
    ));
    expect_invalid_argument(logical::equal(&1, &Unreflectable), "actual");
}

#[test]
fn test_equal_using_comparer() {
    let by_a = KeyedComparer::from_key(|r: &Record| r.a);
    assert!(logical::equal_using(&record(1, None), &record(1, Some("x")), &by_a).is_ok());
    expect_failure(
        logical::equal_using(&record(1, None), &record(2, None), &by_a),
        "logical.equal_using",
    );
    assert!(logical::not_equal_using(&record(1, None), &record(2, None), &by_a).is_ok());
    expect_failure(
        logical::not_equal_using(&"a", &"a", &NaturalComparer),
        "logical.not_equal_using",
    );
}

// ===== Ordering =====

#[test]
fn test_ordering_assertions() {
    assert!(logical::greater_than(&2, &1).is_ok());
    expect_failure(logical::greater_than(&1, &1), "logical.greater_than");
    assert!(logical::greater_than_equal(&1, &1).is_ok());
    expect_failure(logical::greater_than_equal(&0, &1), "logical.greater_than_equal");
    assert!(logical::less_than(&"a", &"b").is_ok());
    expect_failure(logical::less_than(&"b", &"b"), "logical.less_than");
    assert!(logical::less_than_equal(&1.5, &1.5).is_ok());
    expect_failure(logical::less_than_equal(&2.0, &1.5), "logical.less_than_equal");
}

#[test]
fn test_nan_fails_every_ordering() {
    expect_failure(logical::greater_than(&f64::NAN, &0.0), "logical.greater_than");
    expect_failure(logical::less_than(&f64::NAN, &0.0), "logical.less_than");
    expect_failure(
        logical::in_range_inclusive(&f64::NAN, &0.0, &1.0),
        "logical.in_range_inclusive",
    );
    expect_failure(
        logical::not_in_range(&f64::NAN, &0.0, &1.0),
        "logical.not_in_range",
    );
}

// ===== Ranges =====

#[test]
fn test_in_range_is_exclusive() {
    assert!(logical::in_range(&5, &1, &10).is_ok());
    let message = expect_failure(logical::in_range(&1, &1, &10), "logical.in_range");
    assert_eq!(message, "Value (1) fell below expected range: more than 1");
    let message = expect_failure(logical::in_range(&10, &1, &10), "logical.in_range");
    assert_eq!(message, "Value (10) rose above expected range: less than 10");
}

#[test]
fn test_in_range_inclusive_accepts_bounds() {
    assert!(logical::in_range_inclusive(&1, &1, &10).is_ok());
    assert!(logical::in_range_inclusive(&10, &1, &10).is_ok());
    let message = expect_failure(
        logical::in_range_inclusive(&0, &1, &10),
        "logical.in_range_inclusive",
    );
    assert_eq!(message, "Value (0) fell below expected range: at least 1");
}

#[test]
fn test_not_in_range_treats_bounds_as_inside() {
    assert!(logical::not_in_range(&0, &1, &10).is_ok());
    assert!(logical::not_in_range(&11, &1, &10).is_ok());
    let message = expect_failure(logical::not_in_range(&1, &1, &10), "logical.not_in_range");
    assert_eq!(message, "Value (1) fell within excluded range [1, 10]");
    expect_failure(logical::not_in_range(&10, &1, &10), "logical.not_in_range");
    expect_failure(logical::not_in_range(&5, &1, &10), "logical.not_in_range");
}

#[test]
fn test_not_in_range_inclusive_accepts_bounds() {
    assert!(logical::not_in_range_inclusive(&0, &1, &10).is_ok());
    assert!(logical::not_in_range_inclusive(&1, &1, &10).is_ok());
    assert!(logical::not_in_range_inclusive(&10, &1, &10).is_ok());
    let message = expect_failure(
        logical::not_in_range_inclusive(&5, &1, &10),
        "logical.not_in_range_inclusive",
    );
    assert_eq!(message, "Value (5) fell within excluded range (1, 10)");
}

#[test]
fn test_inverted_bounds_are_rejected() {
    let reason = expect_invalid_argument(logical::in_range(&5, &10, &1), "low");
    assert_eq!(reason, "Lower bound (10) exceeds upper bound (1)");
    expect_invalid_argument(logical::not_in_range_inclusive(&5, &10, &1), "low");
}

#[test]
fn test_ranges_over_strings() {
    assert!(logical::in_range_inclusive("b", "a", "c").is_ok());
    assert!(matches!(
        logical::in_range("a", "a", "c"),
        Err(AssayError::AssertionFailed { .. })
    ));
}
