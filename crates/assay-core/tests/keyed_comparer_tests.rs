#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::HashSet;

use assay_core::comparer::{contains_using, distinct, distinct_count, intersect_count};
use assay_core::{
    AssayError, EqualityComparer, FailureKind, KeyedComparer, NaturalComparer, StructuralComparer,
};
use common::{record, Record};
use proptest::prelude::*;

#[test]
fn test_construction_without_predicate_fails() {
    let predicate: Option<fn(&Record, &Record) -> bool> = None;
    let err = KeyedComparer::try_from_predicate(predicate).unwrap_err();
    assert_eq!(err.kind(), FailureKind::MissingArgument);
    assert_eq!(err, AssayError::MissingArgument { param: "predicate" });
}

#[test]
fn test_construction_without_extractor_fails() {
    let extractor: Option<fn(&Record) -> i32> = None;
    let err = KeyedComparer::try_from_key(extractor).unwrap_err();
    assert_eq!(err.kind(), FailureKind::MissingArgument);
}

#[test]
fn test_construction_with_present_functions() {
    let by_a = KeyedComparer::try_from_key(Some(|r: &Record| r.a)).unwrap();
    assert!(by_a.equals(&record(1, Some("x")), &record(1, None)));

    let same_b =
        KeyedComparer::try_from_predicate(Some(|l: &Record, r: &Record| l.b == r.b)).unwrap();
    assert!(same_b.equals(&record(1, None), &record(2, None)));
}

#[test]
fn test_extractor_equality_and_hash() {
    let by_a = KeyedComparer::from_key(|r: &Record| r.a);
    let left = record(3, Some("left"));
    let right = record(3, Some("right"));
    assert!(by_a.equals(&left, &right));
    assert_eq!(by_a.hash(&left), by_a.hash(&right));
    assert!(!by_a.equals(&left, &record(4, Some("left"))));
}

#[test]
fn test_optional_key_absence_rules() {
    let by_b = KeyedComparer::from_optional_key(|r: &Record| r.b.clone());
    assert!(by_b.equals(&record(1, None), &record(2, None)));
    assert!(!by_b.equals(&record(1, None), &record(1, Some("x"))));
    assert_eq!(by_b.hash(&record(1, None)), 0);
}

#[test]
fn test_colliding_keys_collapse() {
    let items: Vec<Record> = (1..=5).map(|a| record(a, None)).collect();
    let mod_four = KeyedComparer::from_key(|r: &Record| r.a % 4);
    // 1 and 5 share a key
    assert_eq!(distinct_count(&items, &mod_four), 4);
}

#[test]
fn test_pairwise_constant_hash_still_correct() {
    let items = ["apple", "avocado", "banana", "blueberry", "cherry"];
    let first_letter = KeyedComparer::from_predicate(|a: &&str, b: &&str| {
        a.chars().next() == b.chars().next()
    });
    assert_eq!(first_letter.hash(&"apple"), first_letter.hash(&"cherry"));
    assert_eq!(distinct_count(&items, &first_letter), 3);
    assert_eq!(
        distinct(&items, &first_letter),
        vec![&"apple", &"banana", &"cherry"]
    );
}

#[test]
fn test_attached_hasher_is_used() {
    let by_len = KeyedComparer::from_predicate(|a: &String, b: &String| a.len() == b.len())
        .with_hasher(|s: &String| s.len() as u64);
    assert_eq!(by_len.hash(&"abc".to_string()), 3);
    let items = vec!["ab".to_string(), "cd".to_string(), "efg".to_string()];
    assert_eq!(distinct_count(&items, &by_len), 2);
}

#[test]
fn test_structural_comparer_dedups_nested_values() {
    let items = vec![vec![1, 2], vec![2, 1], vec![1, 2]];
    assert_eq!(distinct_count(&items, &StructuralComparer), 2);
}

#[test]
fn test_intersect_and_contains() {
    let values = [1, 2, 2, 9];
    let sequence = [2, 3, 1];
    assert_eq!(intersect_count(&values, &sequence, &NaturalComparer), 2);
    assert!(contains_using(&sequence, &3, &NaturalComparer));
    assert!(!contains_using(&sequence, &9, &NaturalComparer));
}

proptest! {
    #[test]
    fn prop_distinct_count_matches_hash_set(items in prop::collection::vec(any::<u8>(), 0..32)) {
        let expected = items.iter().collect::<HashSet<_>>().len();
        prop_assert_eq!(distinct_count(&items, &NaturalComparer), expected);
    }

    #[test]
    fn prop_keyed_by_identity_matches_natural(items in prop::collection::vec(0i32..8, 0..16)) {
        let identity = KeyedComparer::from_key(|v: &i32| *v);
        prop_assert_eq!(
            distinct_count(&items, &identity),
            distinct_count(&items, &NaturalComparer)
        );
    }
}
