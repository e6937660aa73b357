//! Presence and identity assertions

use std::fmt::Debug;

use super::{check, failed, pass};
use crate::errors::Result;

/// # Errors
///
/// Returns `AssertionFailed` when `value` is `Some`.
pub fn is_none<T: Debug>(value: Option<T>) -> Result<()> {
    match value {
        None => pass("object.is_none"),
        Some(value) => Err(failed(
            "object.is_none",
            format!("Expected None but was Some({:?})", value),
        )),
    }
}

/// Pass for `Some`, handing back the contained value
///
/// # Errors
///
/// Returns `AssertionFailed` when `value` is `None`.
pub fn is_some<T>(value: Option<T>) -> Result<T> {
    match value {
        Some(value) => {
            pass("object.is_some")?;
            Ok(value)
        }
        None => Err(failed(
            "object.is_some",
            "Expected Some but was None".to_string(),
        )),
    }
}

/// Both references must point at the same object
///
/// # Errors
///
/// Returns `AssertionFailed` when the references point at different objects,
/// even if those objects are equal.
pub fn same<T: ?Sized>(left: &T, right: &T) -> Result<()> {
    check("object.same", std::ptr::eq(left, right), || {
        "Expected both references to point at the same object".to_string()
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when both references point at the same object.
pub fn not_same<T: ?Sized>(left: &T, right: &T) -> Result<()> {
    check("object.not_same", !std::ptr::eq(left, right), || {
        "Expected references to point at different objects".to_string()
    })
}
