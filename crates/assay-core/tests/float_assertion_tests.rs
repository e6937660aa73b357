#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use assay_core::assert::float;
use common::{expect_failure, expect_invalid_argument};

#[test]
fn test_nan_assertions() {
    assert!(float::is_nan(f64::NAN).is_ok());
    assert!(float::is_nan(f32::NAN).is_ok());
    expect_failure(float::is_nan(1.0f64), "float.is_nan");
    assert!(float::is_not_nan(f64::INFINITY).is_ok());
    expect_failure(float::is_not_nan(f32::NAN), "float.is_not_nan");
}

#[test]
fn test_infinity_assertions() {
    assert!(float::is_infinity(f64::INFINITY).is_ok());
    assert!(float::is_infinity(f64::NEG_INFINITY).is_ok());
    expect_failure(float::is_infinity(f64::NAN), "float.is_infinity");
    assert!(float::is_not_infinity(f64::MAX).is_ok());
    expect_failure(float::is_not_infinity(f32::NEG_INFINITY), "float.is_not_infinity");
}

#[test]
fn test_signed_infinity_assertions() {
    assert!(float::is_positive_infinity(f32::INFINITY).is_ok());
    expect_failure(
        float::is_positive_infinity(f32::NEG_INFINITY),
        "float.is_positive_infinity",
    );
    assert!(float::is_not_positive_infinity(f64::NEG_INFINITY).is_ok());
    expect_failure(
        float::is_not_positive_infinity(f64::INFINITY),
        "float.is_not_positive_infinity",
    );

    assert!(float::is_negative_infinity(f64::NEG_INFINITY).is_ok());
    expect_failure(
        float::is_negative_infinity(f64::INFINITY),
        "float.is_negative_infinity",
    );
    assert!(float::is_not_negative_infinity(0.0f32).is_ok());
    expect_failure(
        float::is_not_negative_infinity(f32::NEG_INFINITY),
        "float.is_not_negative_infinity",
    );
}

#[test]
fn test_special_and_finite_values() {
    for special in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(float::is_special_float_value(special).is_ok());
        assert!(float::is_not_float_value(special).is_ok());
        expect_failure(
            float::is_not_special_float_value(special),
            "float.is_not_special_float_value",
        );
        expect_failure(float::is_float_value(special), "float.is_float_value");
    }
    for finite in [0.0f32, -1.5, f32::MIN_POSITIVE, f32::MAX] {
        assert!(float::is_float_value(finite).is_ok());
        assert!(float::is_not_special_float_value(finite).is_ok());
        expect_failure(
            float::is_special_float_value(finite),
            "float.is_special_float_value",
        );
        expect_failure(float::is_not_float_value(finite), "float.is_not_float_value");
    }
}

#[test]
fn test_within_delta() {
    assert!(float::is_within_delta(1.0f64, 1.05, 0.1).is_ok());
    assert!(float::is_within_delta(1.0f64, 1.0, 0.0).is_ok());
    assert!(float::is_within_delta(f64::INFINITY, f64::INFINITY, 0.0).is_ok());
    let message = expect_failure(
        float::is_within_delta(1.0f64, 1.5, 0.25),
        "float.is_within_delta",
    );
    assert!(message.contains("difference was 0.5"), "message was: {}", message);
}

#[test]
fn test_within_delta_fails_for_nan() {
    expect_failure(
        float::is_within_delta(f64::NAN, f64::NAN, 1.0),
        "float.is_within_delta",
    );
    expect_failure(
        float::is_within_delta(1.0f32, f32::NAN, f32::INFINITY),
        "float.is_within_delta",
    );
}

#[test]
fn test_within_delta_rejects_bad_delta() {
    expect_invalid_argument(float::is_within_delta(1.0f64, 1.0, -0.1), "delta");
    expect_invalid_argument(float::is_within_delta(1.0f64, 1.0, f64::NAN), "delta");
}
