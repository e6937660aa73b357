//! Type identity and shape assertions
//!
//! Type identity is decided at compile time through `TypeId`. Shape is read
//! from the value's `Serialize` implementation and classified as a
//! [`TypeKind`].

use std::any::{type_name, TypeId};

use assay_core_types::TypeKind;
use serde::Serialize;

use super::{check, invalid_argument, missing_argument};
use crate::errors::Result;
use crate::value::to_value;

/// The value's static type must be `Expected`
///
/// # Errors
///
/// Returns `AssertionFailed` when the types differ.
///
/// # Example
///
/// ```
/// use assay_core::assert::reflection::is_type;
///
/// assert!(is_type::<String, _>(&String::new()).is_ok());
/// assert!(is_type::<u32, _>(&String::new()).is_err());
/// ```
pub fn is_type<Expected, V>(_value: &V) -> Result<()>
where
    Expected: ?Sized + 'static,
    V: ?Sized + 'static,
{
    check(
        "reflection.is_type",
        TypeId::of::<V>() == TypeId::of::<Expected>(),
        || {
            format!(
                "Expected type {} but was {}",
                type_name::<Expected>(),
                type_name::<V>()
            )
        },
    )
}

/// # Errors
///
/// Returns `AssertionFailed` when the value's static type is `Unexpected`.
pub fn is_not_type<Unexpected, V>(_value: &V) -> Result<()>
where
    Unexpected: ?Sized + 'static,
    V: ?Sized + 'static,
{
    check(
        "reflection.is_not_type",
        TypeId::of::<V>() != TypeId::of::<Unexpected>(),
        || format!("Expected any type other than {}", type_name::<Unexpected>()),
    )
}

fn assert_kind<V: Serialize + ?Sized>(
    assertion: &'static str,
    value: &V,
    kind: TypeKind,
    expected: bool,
) -> Result<()> {
    let actual = match to_value(value) {
        Ok(Some(value)) => value.kind(),
        Ok(None) => return Err(missing_argument(assertion, "value")),
        Err(err) => return Err(invalid_argument(assertion, "value", err.to_string())),
    };
    check(assertion, (actual == kind) == expected, || {
        if expected {
            format!("Expected a value of kind {} but was {}", kind, actual)
        } else {
            format!("Expected a value of any kind other than {}", kind)
        }
    })
}

/// The value's shape must be `kind`
///
/// # Errors
///
/// Returns `MissingArgument` for an absent value, `InvalidArgument` when
/// the value cannot be serialized, `AssertionFailed` for another shape.
pub fn is_kind<V: Serialize + ?Sized>(value: &V, kind: TypeKind) -> Result<()> {
    assert_kind("reflection.is_kind", value, kind, true)
}

/// # Errors
///
/// Returns `MissingArgument` for an absent value, `InvalidArgument` when
/// the value cannot be serialized, `AssertionFailed` when the shape is
/// `kind`.
pub fn is_not_kind<V: Serialize + ?Sized>(value: &V, kind: TypeKind) -> Result<()> {
    assert_kind("reflection.is_not_kind", value, kind, false)
}

/// Vectors, slices, arrays and tuples
///
/// # Errors
///
/// See [`is_kind`].
pub fn is_array_type<V: Serialize + ?Sized>(value: &V) -> Result<()> {
    assert_kind("reflection.is_array_type", value, TypeKind::Sequence, true)
}

/// # Errors
///
/// See [`is_not_kind`].
pub fn is_not_array_type<V: Serialize + ?Sized>(value: &V) -> Result<()> {
    assert_kind("reflection.is_not_array_type", value, TypeKind::Sequence, false)
}

/// # Errors
///
/// See [`is_kind`].
pub fn is_struct_type<V: Serialize + ?Sized>(value: &V) -> Result<()> {
    assert_kind("reflection.is_struct_type", value, TypeKind::Struct, true)
}

/// # Errors
///
/// See [`is_not_kind`].
pub fn is_not_struct_type<V: Serialize + ?Sized>(value: &V) -> Result<()> {
    assert_kind("reflection.is_not_struct_type", value, TypeKind::Struct, false)
}

/// # Errors
///
/// See [`is_kind`].
pub fn is_enum_type<V: Serialize + ?Sized>(value: &V) -> Result<()> {
    assert_kind("reflection.is_enum_type", value, TypeKind::Enum, true)
}

/// # Errors
///
/// See [`is_not_kind`].
pub fn is_not_enum_type<V: Serialize + ?Sized>(value: &V) -> Result<()> {
    assert_kind("reflection.is_not_enum_type", value, TypeKind::Enum, false)
}
