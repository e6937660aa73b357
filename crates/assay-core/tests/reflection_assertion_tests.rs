#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::BTreeMap;

use assay_core::assert::reflection;
use assay_core::assay_core_types::TypeKind;
use assay_core::AssayError;
use common::{expect_failure, record, Record, Shape};

#[test]
fn test_type_identity() {
    assert!(reflection::is_type::<Record, _>(&record(1, None)).is_ok());
    assert!(reflection::is_type::<str, _>("text").is_ok());
    let message = expect_failure(
        reflection::is_type::<i64, _>(&1i32),
        "reflection.is_type",
    );
    assert_eq!(message, "Expected type i64 but was i32");

    assert!(reflection::is_not_type::<i64, _>(&1i32).is_ok());
    expect_failure(
        reflection::is_not_type::<Vec<u8>, _>(&vec![1u8]),
        "reflection.is_not_type",
    );
}

#[test]
fn test_kind_of_scalars() {
    assert!(reflection::is_kind(&true, TypeKind::Bool).is_ok());
    assert!(reflection::is_kind(&7u16, TypeKind::Integer).is_ok());
    assert!(reflection::is_kind(&1.5f32, TypeKind::Float).is_ok());
    assert!(reflection::is_kind("abc", TypeKind::String).is_ok());
    assert!(reflection::is_kind(&'c', TypeKind::Char).is_ok());
    assert!(reflection::is_kind(&(), TypeKind::Unit).is_ok());
    let message = expect_failure(
        reflection::is_kind("abc", TypeKind::Sequence),
        "reflection.is_kind",
    );
    assert_eq!(message, "Expected a value of kind sequence but was string");
}

#[test]
fn test_kind_of_compound_values() {
    let mut map = BTreeMap::new();
    map.insert(1, "one");
    assert!(reflection::is_kind(&map, TypeKind::Map).is_ok());
    assert!(reflection::is_not_kind(&map, TypeKind::Sequence).is_ok());
    expect_failure(
        reflection::is_not_kind(&vec![1], TypeKind::Sequence),
        "reflection.is_not_kind",
    );
}

#[test]
fn test_array_type() {
    assert!(reflection::is_array_type(&vec![1, 2]).is_ok());
    assert!(reflection::is_array_type(&[1, 2]).is_ok());
    assert!(reflection::is_array_type(&(1, "a")).is_ok());
    assert!(reflection::is_not_array_type("not an array").is_ok());
    expect_failure(
        reflection::is_array_type(&record(1, None)),
        "reflection.is_array_type",
    );
    expect_failure(
        reflection::is_not_array_type(&vec![0u8]),
        "reflection.is_not_array_type",
    );
}

#[test]
fn test_struct_and_enum_types() {
    assert!(reflection::is_struct_type(&record(1, None)).is_ok());
    assert!(reflection::is_not_struct_type(&Shape::Empty).is_ok());
    expect_failure(
        reflection::is_struct_type(&Shape::Circle(1.0)),
        "reflection.is_struct_type",
    );
    expect_failure(
        reflection::is_not_struct_type(&record(2, None)),
        "reflection.is_not_struct_type",
    );

    assert!(reflection::is_enum_type(&Shape::Rect { w: 1, h: 1 }).is_ok());
    assert!(reflection::is_not_enum_type(&5).is_ok());
    expect_failure(reflection::is_enum_type(&5), "reflection.is_enum_type");
    expect_failure(
        reflection::is_not_enum_type(&Shape::Empty),
        "reflection.is_not_enum_type",
    );
}

#[test]
fn test_absent_value_is_missing_argument() {
    let err = reflection::is_kind(&None::<i32>, TypeKind::Integer).unwrap_err();
    assert_eq!(err, AssayError::MissingArgument { param: "value" });
    let err = reflection::is_struct_type(&None::<Record>).unwrap_err();
    assert_eq!(err, AssayError::MissingArgument { param: "value" });
}

#[test]
fn test_present_option_reflects_its_content() {
    assert!(reflection::is_kind(&Some(3), TypeKind::Integer).is_ok());
}
