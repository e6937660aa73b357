use std::fmt::Debug;

use assay_core::{AssayError, Result};
use serde::Serialize;

/// Record fixture with a scalar and an optional field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Record {
    pub a: i32,
    pub b: Option<String>,
}

/// Create a record fixture
#[allow(dead_code)]
pub fn record(a: i32, b: Option<&str>) -> Record {
    Record {
        a,
        b: b.map(str::to_string),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(dead_code)]
pub enum Shape {
    Empty,
    Circle(f64),
    Rect { w: u32, h: u32 },
}

/// Assert that an assertion failed (as opposed to rejecting its arguments)
/// and return the failure message
#[allow(dead_code)]
pub fn expect_failure<T: Debug>(result: Result<T>, assertion: &str) -> String {
    match result {
        Err(AssayError::AssertionFailed {
            assertion: name,
            message,
        }) => {
            assert_eq!(name, assertion, "Failure reported by the wrong assertion");
            message
        }
        other => panic!("Expected AssertionFailed from {}, got {:?}", assertion, other),
    }
}

/// Assert that an assertion rejected one of its arguments
#[allow(dead_code)]
pub fn expect_invalid_argument<T: Debug>(result: Result<T>, param: &str) -> String {
    match result {
        Err(AssayError::InvalidArgument { param: name, reason }) => {
            assert_eq!(name, param, "Wrong parameter rejected");
            reason
        }
        other => panic!("Expected InvalidArgument for {}, got {:?}", param, other),
    }
}
