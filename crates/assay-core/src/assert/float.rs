//! Floating-point special value assertions for `f32` and `f64`

use std::fmt::Debug;

use super::{check, invalid_argument};
use crate::errors::Result;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Primitive float types accepted by the assertions in this module
pub trait FloatValue: sealed::Sealed + Copy + Debug + PartialOrd {
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_finite(self) -> bool;
    fn is_sign_positive(self) -> bool;
    fn distance(self, other: Self) -> Self;
    fn zero() -> Self;
}

macro_rules! impl_float_value {
    ($ty:ty) => {
        impl FloatValue for $ty {
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
            fn is_infinite(self) -> bool {
                <$ty>::is_infinite(self)
            }
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
            fn is_sign_positive(self) -> bool {
                <$ty>::is_sign_positive(self)
            }
            fn distance(self, other: Self) -> Self {
                (self - other).abs()
            }
            fn zero() -> Self {
                0.0
            }
        }
    };
}

impl_float_value!(f32);
impl_float_value!(f64);

fn is_positive_inf<F: FloatValue>(value: F) -> bool {
    value.is_infinite() && value.is_sign_positive()
}

fn is_negative_inf<F: FloatValue>(value: F) -> bool {
    value.is_infinite() && !value.is_sign_positive()
}

/// # Errors
///
/// Returns `AssertionFailed` unless `value` is NaN.
pub fn is_nan<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_nan", value.is_nan(), || {
        format!("Expected NaN but was {:?}", value)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when `value` is NaN.
pub fn is_not_nan<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_not_nan", !value.is_nan(), || {
        "Expected a value other than NaN".to_string()
    })
}

/// Either infinity
///
/// # Errors
///
/// Returns `AssertionFailed` unless `value` is positive or negative infinity.
pub fn is_infinity<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_infinity", value.is_infinite(), || {
        format!("Expected infinity but was {:?}", value)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when `value` is positive or negative infinity.
pub fn is_not_infinity<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_not_infinity", !value.is_infinite(), || {
        format!("Expected a value other than infinity but was {:?}", value)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` unless `value` is positive infinity.
pub fn is_positive_infinity<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_positive_infinity", is_positive_inf(value), || {
        format!("Expected positive infinity but was {:?}", value)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when `value` is positive infinity.
pub fn is_not_positive_infinity<F: FloatValue>(value: F) -> Result<()> {
    check(
        "float.is_not_positive_infinity",
        !is_positive_inf(value),
        || "Expected a value other than positive infinity".to_string(),
    )
}

/// # Errors
///
/// Returns `AssertionFailed` unless `value` is negative infinity.
pub fn is_negative_infinity<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_negative_infinity", is_negative_inf(value), || {
        format!("Expected negative infinity but was {:?}", value)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when `value` is negative infinity.
pub fn is_not_negative_infinity<F: FloatValue>(value: F) -> Result<()> {
    check(
        "float.is_not_negative_infinity",
        !is_negative_inf(value),
        || "Expected a value other than negative infinity".to_string(),
    )
}

/// NaN or either infinity
///
/// # Errors
///
/// Returns `AssertionFailed` when `value` is finite.
pub fn is_special_float_value<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_special_float_value", !value.is_finite(), || {
        format!("Expected NaN or infinity but was {:?}", value)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when `value` is NaN or infinity.
pub fn is_not_special_float_value<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_not_special_float_value", value.is_finite(), || {
        format!("Expected a finite value but was {:?}", value)
    })
}

/// A finite value: neither NaN nor infinity
///
/// # Errors
///
/// Returns `AssertionFailed` when `value` is NaN or infinity.
pub fn is_float_value<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_float_value", value.is_finite(), || {
        format!("Expected a finite value but was {:?}", value)
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when `value` is finite.
pub fn is_not_float_value<F: FloatValue>(value: F) -> Result<()> {
    check("float.is_not_float_value", !value.is_finite(), || {
        format!("Expected NaN or infinity but was {:?}", value)
    })
}

/// `|expected - actual| <= delta`
///
/// Identical infinities are within any delta. NaN is never within a delta.
///
/// # Errors
///
/// Returns `InvalidArgument` when `delta` is negative or NaN,
/// `AssertionFailed` when the values are further apart than `delta`.
pub fn is_within_delta<F: FloatValue>(expected: F, actual: F, delta: F) -> Result<()> {
    if delta.is_nan() || delta < F::zero() {
        return Err(invalid_argument(
            "float.is_within_delta",
            "delta",
            format!("Delta must be a non-negative number but was {:?}", delta),
        ));
    }
    let diff = expected.distance(actual);
    let within = expected == actual || diff <= delta;
    check("float.is_within_delta", within, || {
        format!(
            "Expected {:?} within {:?} of {:?} but the difference was {:?}",
            actual, delta, expected, diff
        )
    })
}
