#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use assay_core::assert::object;
use common::{expect_failure, record};

#[test]
fn test_is_none() {
    assert!(object::is_none(None::<u8>).is_ok());
    let message = expect_failure(object::is_none(Some(3)), "object.is_none");
    assert_eq!(message, "Expected None but was Some(3)");
}

#[test]
fn test_is_some_hands_back_value() {
    let value = object::is_some(Some(record(1, None))).unwrap();
    assert_eq!(value.a, 1);
    expect_failure(object::is_some(None::<&str>), "object.is_some");
}

#[test]
fn test_is_some_on_borrowed_option() {
    let stored = Some(String::from("kept"));
    let value = object::is_some(stored.as_ref()).unwrap();
    assert_eq!(value, "kept");
}

#[test]
fn test_same_is_identity_not_equality() {
    let first = record(1, None);
    let second = record(1, None);
    let alias = &first;

    assert!(object::same(&first, alias).is_ok());
    assert!(object::not_same(&first, &second).is_ok());
    expect_failure(object::same(&first, &second), "object.same");
    expect_failure(object::not_same(&first, alias), "object.not_same");
}

#[test]
fn test_same_on_slices() {
    let items = vec![1, 2, 3];
    assert!(object::same(items.as_slice(), &items[..]).is_ok());
    expect_failure(object::same(&items[..2], &items[..]), "object.same");
}
