//! Equality, ordering and range assertions
//!
//! Equality assertions run the structural equality engine over any
//! serializable values, or a caller-supplied comparer. Ordering and range
//! assertions are generic over `PartialOrd`; a value that does not compare
//! with its bounds (`NaN`) fails every ordering assertion.

use std::cmp::Ordering;
use std::fmt::Debug;

use serde::Serialize;

use super::{check, failed, invalid_argument, pass};
use crate::comparer::EqualityComparer;
use crate::equality::values_equal;
use crate::errors::Result;
use crate::value::{render, to_value, Value};

/// Structural equality of `expected` and `actual`
///
/// # Errors
///
/// Returns `InvalidArgument` when either value fails to serialize,
/// `AssertionFailed` when the values differ.
///
/// # Example
///
/// ```
/// use assay_core::assert::logical;
///
/// assert!(logical::equal(&vec![vec![1, 2]], &vec![vec![1, 2]]).is_ok());
/// assert!(logical::equal(&1i32, &1i64).is_err());
/// ```
pub fn equal<L, R>(expected: &L, actual: &R) -> Result<()>
where
    L: Serialize + ?Sized,
    R: Serialize + ?Sized,
{
    let expected_value = reflect("logical.equal", "expected", expected)?;
    let actual_value = reflect("logical.equal", "actual", actual)?;
    check(
        "logical.equal",
        values_equal(expected_value.as_ref(), actual_value.as_ref()),
        || {
            format!(
                "Expected {} but was {}",
                render(expected_value.as_ref()),
                render(actual_value.as_ref())
            )
        },
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either value fails to serialize,
/// `AssertionFailed` when the values are structurally equal.
pub fn not_equal<L, R>(expected: &L, actual: &R) -> Result<()>
where
    L: Serialize + ?Sized,
    R: Serialize + ?Sized,
{
    let expected_value = reflect("logical.not_equal", "expected", expected)?;
    let actual_value = reflect("logical.not_equal", "actual", actual)?;
    check(
        "logical.not_equal",
        !values_equal(expected_value.as_ref(), actual_value.as_ref()),
        || format!("Expected any value other than {}", render(expected_value.as_ref())),
    )
}

fn reflect<T: Serialize + ?Sized>(
    assertion: &'static str,
    param: &'static str,
    value: &T,
) -> Result<Option<Value>> {
    to_value(value).map_err(|err| invalid_argument(assertion, param, err.to_string()))
}

/// Equality under a caller-supplied comparer
///
/// # Errors
///
/// Returns `AssertionFailed` when the comparer reports the values unequal.
pub fn equal_using<T, C>(expected: &T, actual: &T, comparer: &C) -> Result<()>
where
    T: Debug + ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    check("logical.equal_using", comparer.equals(expected, actual), || {
        format!("Expected {:?} but was {:?}", expected, actual)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when the comparer reports the values equal.
pub fn not_equal_using<T, C>(expected: &T, actual: &T, comparer: &C) -> Result<()>
where
    T: Debug + ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    check(
        "logical.not_equal_using",
        !comparer.equals(expected, actual),
        || format!("Expected any value other than {:?}", expected),
    )
}

/// # Errors
///
/// Returns `AssertionFailed` unless `value > bound`.
pub fn greater_than<T: PartialOrd + Debug + ?Sized>(value: &T, bound: &T) -> Result<()> {
    check("logical.greater_than", value > bound, || {
        format!("Value ({:?}) was not greater than {:?}", value, bound)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` unless `value >= bound`.
pub fn greater_than_equal<T: PartialOrd + Debug + ?Sized>(value: &T, bound: &T) -> Result<()> {
    check("logical.greater_than_equal", value >= bound, || {
        format!("Value ({:?}) was not greater than or equal to {:?}", value, bound)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` unless `value < bound`.
pub fn less_than<T: PartialOrd + Debug + ?Sized>(value: &T, bound: &T) -> Result<()> {
    check("logical.less_than", value < bound, || {
        format!("Value ({:?}) was not less than {:?}", value, bound)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` unless `value <= bound`.
pub fn less_than_equal<T: PartialOrd + Debug + ?Sized>(value: &T, bound: &T) -> Result<()> {
    check("logical.less_than_equal", value <= bound, || {
        format!("Value ({:?}) was not less than or equal to {:?}", value, bound)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Below,
    Within,
    Above,
    Incomparable,
}

fn validate_bounds<T: PartialOrd + Debug + ?Sized>(
    assertion: &'static str,
    low: &T,
    high: &T,
) -> Result<()> {
    if low <= high {
        return Ok(());
    }
    Err(invalid_argument(
        assertion,
        "low",
        format!("Lower bound ({:?}) exceeds upper bound ({:?})", low, high),
    ))
}

fn place<T: PartialOrd + ?Sized>(value: &T, low: &T, high: &T, inclusive: bool) -> Placement {
    let (Some(to_low), Some(to_high)) = (value.partial_cmp(low), value.partial_cmp(high)) else {
        return Placement::Incomparable;
    };
    match (to_low, to_high) {
        (Ordering::Less, _) => Placement::Below,
        (Ordering::Equal, _) if !inclusive => Placement::Below,
        (_, Ordering::Greater) => Placement::Above,
        (_, Ordering::Equal) if !inclusive => Placement::Above,
        _ => Placement::Within,
    }
}

fn assert_in_range<T: PartialOrd + Debug + ?Sized>(
    assertion: &'static str,
    value: &T,
    low: &T,
    high: &T,
    inclusive: bool,
) -> Result<()> {
    validate_bounds(assertion, low, high)?;
    let (lower, upper) = if inclusive {
        ("at least", "at most")
    } else {
        ("more than", "less than")
    };
    match place(value, low, high, inclusive) {
        Placement::Within => pass(assertion),
        Placement::Below => Err(failed(
            assertion,
            format!(
                "Value ({:?}) fell below expected range: {} {:?}",
                value, lower, low
            ),
        )),
        Placement::Above => Err(failed(
            assertion,
            format!(
                "Value ({:?}) rose above expected range: {} {:?}",
                value, upper, high
            ),
        )),
        Placement::Incomparable => Err(failed(
            assertion,
            format!("Value ({:?}) does not compare with the range bounds", value),
        )),
    }
}

fn assert_not_in_range<T: PartialOrd + Debug + ?Sized>(
    assertion: &'static str,
    value: &T,
    low: &T,
    high: &T,
    inclusive: bool,
) -> Result<()> {
    validate_bounds(assertion, low, high)?;
    match place(value, low, high, inclusive) {
        Placement::Below | Placement::Above => pass(assertion),
        Placement::Within => {
            let (open, close) = if inclusive { ("[", "]") } else { ("(", ")") };
            Err(failed(
                assertion,
                format!(
                    "Value ({:?}) fell within excluded range {}{:?}, {:?}{}",
                    value, open, low, high, close
                ),
            ))
        }
        Placement::Incomparable => Err(failed(
            assertion,
            format!("Value ({:?}) does not compare with the range bounds", value),
        )),
    }
}

/// `low < value < high`
///
/// # Errors
///
/// Returns `InvalidArgument` when `low > high`, `AssertionFailed` when the
/// value lies outside the open range.
pub fn in_range<T: PartialOrd + Debug + ?Sized>(value: &T, low: &T, high: &T) -> Result<()> {
    assert_in_range("logical.in_range", value, low, high, false)
}

/// `low <= value <= high`
///
/// # Errors
///
/// Returns `InvalidArgument` when `low > high`, `AssertionFailed` when the
/// value lies outside the closed range.
pub fn in_range_inclusive<T: PartialOrd + Debug + ?Sized>(
    value: &T,
    low: &T,
    high: &T,
) -> Result<()> {
    assert_in_range("logical.in_range_inclusive", value, low, high, true)
}

/// `value` must lie outside the closed range: `value < low` or `value > high`
///
/// # Errors
///
/// Returns `InvalidArgument` when `low > high`, `AssertionFailed` when
/// `low <= value <= high`.
pub fn not_in_range<T: PartialOrd + Debug + ?Sized>(value: &T, low: &T, high: &T) -> Result<()> {
    assert_not_in_range("logical.not_in_range", value, low, high, true)
}

/// `value` must lie outside the open range; either bound itself is accepted
///
/// # Errors
///
/// Returns `InvalidArgument` when `low > high`, `AssertionFailed` when
/// `low < value < high`.
pub fn not_in_range_inclusive<T: PartialOrd + Debug + ?Sized>(
    value: &T,
    low: &T,
    high: &T,
) -> Result<()> {
    assert_not_in_range("logical.not_in_range_inclusive", value, low, high, false)
}
