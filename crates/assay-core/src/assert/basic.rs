//! Truth, unconditional failure, error and panic assertions

use std::any::Any;
use std::error::Error;
use std::fmt::{Debug, Display};
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::{check, failed, pass, unexpected};
use crate::errors::Result;

/// Fail unconditionally
///
/// # Errors
///
/// Always returns `AssertionFailed`.
pub fn fail() -> Result<()> {
    Err(failed("basic.fail", "Assertion failed".to_string()))
}

/// Fail unconditionally, carrying the cause
///
/// # Errors
///
/// Always returns `UnexpectedError` with the rendered cause.
pub fn fail_because(cause: impl Display) -> Result<()> {
    Err(unexpected(
        "basic.fail_because",
        "Assertion failed",
        cause.to_string(),
    ))
}

/// # Errors
///
/// Returns `AssertionFailed` when `condition` is false.
pub fn is_true(condition: bool) -> Result<()> {
    check("basic.is_true", condition, || {
        "Expected true but was false".to_string()
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when `condition` is true.
pub fn is_false(condition: bool) -> Result<()> {
    check("basic.is_false", !condition, || {
        "Expected false but was true".to_string()
    })
}

/// Pass only for `Some(true)`
///
/// # Errors
///
/// Returns `AssertionFailed` for `Some(false)` and for an absent condition.
pub fn is_true_opt(condition: Option<bool>) -> Result<()> {
    check("basic.is_true_opt", condition == Some(true), || {
        format!("Expected true but was {:?}", condition)
    })
}

/// Pass only for `Some(false)`
///
/// # Errors
///
/// Returns `AssertionFailed` for `Some(true)` and for an absent condition.
pub fn is_false_opt(condition: Option<bool>) -> Result<()> {
    check("basic.is_false_opt", condition == Some(false), || {
        format!("Expected false but was {:?}", condition)
    })
}

/// The operation must return `Err`; the error is handed back
///
/// # Errors
///
/// Returns `AssertionFailed` when the operation succeeds.
pub fn errs<T, E, F>(operation: F) -> Result<E>
where
    T: Debug,
    F: FnOnce() -> std::result::Result<T, E>,
{
    match operation() {
        Err(err) => {
            pass("basic.errs")?;
            Ok(err)
        }
        Ok(value) => Err(failed(
            "basic.errs",
            format!("Expected an error but the operation returned {:?}", value),
        )),
    }
}

/// The operation must return an `Err` satisfying `predicate`
///
/// # Errors
///
/// Returns `AssertionFailed` when the operation succeeds or its error does
/// not satisfy the predicate.
pub fn errs_matching<T, E, F, P>(operation: F, predicate: P) -> Result<E>
where
    T: Debug,
    E: Debug,
    F: FnOnce() -> std::result::Result<T, E>,
    P: FnOnce(&E) -> bool,
{
    match operation() {
        Err(err) if predicate(&err) => {
            pass("basic.errs_matching")?;
            Ok(err)
        }
        Err(err) => Err(failed(
            "basic.errs_matching",
            format!("Error did not match the predicate: {:?}", err),
        )),
        Ok(value) => Err(failed(
            "basic.errs_matching",
            format!("Expected an error but the operation returned {:?}", value),
        )),
    }
}

/// The operation must fail with an error of concrete type `E`
///
/// # Errors
///
/// Returns `AssertionFailed` when the operation succeeds or its error is of
/// another type.
pub fn errs_as<E, T, F>(operation: F) -> Result<E>
where
    E: Error + 'static,
    T: Debug,
    F: FnOnce() -> std::result::Result<T, Box<dyn Error + Send + Sync>>,
{
    match operation() {
        Err(err) => match err.downcast::<E>() {
            Ok(err) => {
                pass("basic.errs_as")?;
                Ok(*err)
            }
            Err(other) => Err(failed(
                "basic.errs_as",
                format!(
                    "Expected error of type {} but was: {}",
                    std::any::type_name::<E>(),
                    other
                ),
            )),
        },
        Ok(value) => Err(failed(
            "basic.errs_as",
            format!(
                "Expected error of type {} but the operation returned {:?}",
                std::any::type_name::<E>(),
                value
            ),
        )),
    }
}

/// The operation must return `Ok`; the value is handed back
///
/// # Errors
///
/// Returns `UnexpectedError` carrying the operation's error.
pub fn succeeds<T, E, F>(operation: F) -> Result<T>
where
    E: Display,
    F: FnOnce() -> std::result::Result<T, E>,
{
    match operation() {
        Ok(value) => {
            pass("basic.succeeds")?;
            Ok(value)
        }
        Err(err) => Err(unexpected(
            "basic.succeeds",
            "Expected the operation to succeed",
            err.to_string(),
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// The closure must panic; the panic message is handed back
///
/// # Errors
///
/// Returns `AssertionFailed` when the closure returns normally.
pub fn panics<R, F>(f: F) -> Result<String>
where
    F: FnOnce() -> R,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Err(payload) => {
            pass("basic.panics")?;
            Ok(panic_message(payload.as_ref()))
        }
        Ok(_) => Err(failed(
            "basic.panics",
            "Expected a panic but the closure returned normally".to_string(),
        )),
    }
}

/// The closure must return normally; its value is handed back
///
/// # Errors
///
/// Returns `UnexpectedError` carrying the panic message.
pub fn does_not_panic<R, F>(f: F) -> Result<R>
where
    F: FnOnce() -> R,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => {
            pass("basic.does_not_panic")?;
            Ok(value)
        }
        Err(payload) => Err(unexpected(
            "basic.does_not_panic",
            "Expected the closure not to panic",
            panic_message(payload.as_ref()),
        )),
    }
}
