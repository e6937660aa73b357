//! Assertion families
//!
//! Every assertion returns [`Result`](crate::errors::Result): `Ok` when the
//! condition holds, `AssertionFailed`/`UnexpectedError` when it does not,
//! and `InvalidArgument`/`MissingArgument` when the inputs cannot be
//! evaluated. Each outcome is logged through the logging facility under the
//! assertion's dotted name (`family.function`).
//!
//! Variants taking a custom notion of equality follow one naming scheme:
//! `_by` takes a pairwise predicate, `_by_key` a key extractor and `_using`
//! an [`EqualityComparer`](crate::comparer::EqualityComparer).

pub mod basic;
pub mod collection;
pub mod float;
pub mod logical;
pub mod object;
pub mod reflection;

use serde::Serialize;

use crate::errors::{AssayError, Result};
use crate::value::{render, to_value};
use crate::{log_assert_fail, log_assert_pass};

fn pass(assertion: &'static str) -> Result<()> {
    log_assert_pass!(assertion);
    Ok(())
}

fn failed(assertion: &'static str, message: String) -> AssayError {
    let err = AssayError::AssertionFailed { assertion, message };
    log_assert_fail!(assertion, &err);
    err
}

fn unexpected(assertion: &'static str, message: &str, cause: String) -> AssayError {
    let err = AssayError::UnexpectedError {
        assertion,
        message: message.to_string(),
        cause,
    };
    log_assert_fail!(assertion, &err);
    err
}

fn invalid_argument(
    assertion: &'static str,
    param: &'static str,
    reason: impl Into<String>,
) -> AssayError {
    let err = AssayError::InvalidArgument {
        param,
        reason: reason.into(),
    };
    log_assert_fail!(assertion, &err);
    err
}

fn missing_argument(assertion: &'static str, param: &'static str) -> AssayError {
    let err = AssayError::MissingArgument { param };
    log_assert_fail!(assertion, &err);
    err
}

/// Pass when `condition` holds, fail with the lazily built message otherwise
fn check<M>(assertion: &'static str, condition: bool, message: M) -> Result<()>
where
    M: FnOnce() -> String,
{
    if condition {
        pass(assertion)
    } else {
        Err(failed(assertion, message()))
    }
}

fn require_elements<T>(assertion: &'static str, param: &'static str, sequence: &[T]) -> Result<()> {
    if sequence.is_empty() {
        return Err(invalid_argument(assertion, param, "Expected elements"));
    }
    Ok(())
}

/// Render any serializable value for a failure message
fn describe<T: Serialize + ?Sized>(value: &T) -> String {
    match to_value(value) {
        Ok(value) => render(value.as_ref()),
        Err(err) => format!("<{}>", err),
    }
}
