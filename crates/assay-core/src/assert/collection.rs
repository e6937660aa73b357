//! Sequence assertions
//!
//! Every assertion here except `empty` and `not_empty` rejects an empty input
//! sequence as an invalid argument rather than passing vacuously.
//! Uniqueness assertions need at least two elements.
//!
//! Prefix, suffix and count-of checks compare elements structurally,
//! membership uses `PartialEq`, uniqueness and set relations use `Eq + Hash`.
//! The `_using` variants take a comparer instead.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use super::{check, describe, failed, invalid_argument, pass, require_elements};
use crate::comparer::{
    contains_using as seq_contains, distinct_count, intersect_count, EqualityComparer,
    KeyedComparer, NaturalComparer, StructuralComparer,
};
use crate::errors::Result;

// ===== Size =====

/// # Errors
///
/// Returns `AssertionFailed` when the sequence has elements.
pub fn empty<T: Debug>(sequence: &[T]) -> Result<()> {
    check("collection.empty", sequence.is_empty(), || {
        format!(
            "Expected an empty sequence but found {} elements: {:?}",
            sequence.len(),
            sequence
        )
    })
}

/// # Errors
///
/// Returns `AssertionFailed` when the sequence is empty.
pub fn not_empty<T>(sequence: &[T]) -> Result<()> {
    check("collection.not_empty", !sequence.is_empty(), || {
        "Expected a non-empty sequence".to_string()
    })
}

/// The sequence must hold exactly `expected` elements
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` on
/// any other length.
pub fn count<T>(sequence: &[T], expected: usize) -> Result<()> {
    require_elements("collection.count", "sequence", sequence)?;
    check("collection.count", sequence.len() == expected, || {
        format!(
            "Expected {} elements but found {}",
            expected,
            sequence.len()
        )
    })
}

// ===== Quantifiers =====

/// Every element must satisfy `predicate`
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed`
/// naming the first element that does not satisfy the predicate.
pub fn all<T, P>(sequence: &[T], predicate: P) -> Result<()>
where
    T: Debug,
    P: Fn(&T) -> bool,
{
    require_elements("collection.all", "sequence", sequence)?;
    match sequence.iter().position(|item| !predicate(item)) {
        None => pass("collection.all"),
        Some(index) => Err(failed(
            "collection.all",
            format!(
                "Element at index {} ({:?}) did not satisfy the predicate",
                index, sequence[index]
            ),
        )),
    }
}

/// At least one element must satisfy `predicate`
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` when
/// no element satisfies the predicate.
pub fn any<T, P>(sequence: &[T], predicate: P) -> Result<()>
where
    P: Fn(&T) -> bool,
{
    require_elements("collection.any", "sequence", sequence)?;
    check("collection.any", sequence.iter().any(predicate), || {
        format!(
            "None of the {} elements satisfied the predicate",
            sequence.len()
        )
    })
}

fn matching<T, P: Fn(&T) -> bool>(sequence: &[T], predicate: P) -> usize {
    sequence.iter().filter(|item| predicate(item)).count()
}

/// Exactly one element must satisfy `predicate`
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` when
/// zero or several elements satisfy the predicate.
pub fn only<T, P>(sequence: &[T], predicate: P) -> Result<()>
where
    P: Fn(&T) -> bool,
{
    require_elements("collection.only", "sequence", sequence)?;
    let found = matching(sequence, predicate);
    check("collection.only", found == 1, || {
        format!(
            "Expected exactly one element to satisfy the predicate but found {}",
            found
        )
    })
}

/// Exactly `expected` elements must satisfy `predicate`
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` on
/// any other number of matches.
pub fn exactly<T, P>(sequence: &[T], expected: usize, predicate: P) -> Result<()>
where
    P: Fn(&T) -> bool,
{
    require_elements("collection.exactly", "sequence", sequence)?;
    let found = matching(sequence, predicate);
    check("collection.exactly", found == expected, || {
        format!(
            "Expected {} elements to satisfy the predicate but found {}",
            expected, found
        )
    })
}

/// No element may satisfy `predicate`
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed`
/// naming the first element that satisfies the predicate.
pub fn none<T, P>(sequence: &[T], predicate: P) -> Result<()>
where
    T: Debug,
    P: Fn(&T) -> bool,
{
    require_elements("collection.none", "sequence", sequence)?;
    match sequence.iter().position(predicate) {
        None => pass("collection.none"),
        Some(index) => Err(failed(
            "collection.none",
            format!(
                "Element at index {} ({:?}) satisfied the predicate",
                index, sequence[index]
            ),
        )),
    }
}

// ===== Occurrences =====

fn occurrences<T, C>(sequence: &[T], value: &T, comparer: &C) -> usize
where
    C: EqualityComparer<T> + ?Sized,
{
    sequence
        .iter()
        .filter(|item| comparer.equals(item, value))
        .count()
}

/// `value` must occur exactly `expected` times, compared structurally
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` on
/// any other number of occurrences.
pub fn count_of<T: Serialize>(sequence: &[T], value: &T, expected: usize) -> Result<()> {
    require_elements("collection.count_of", "sequence", sequence)?;
    let found = occurrences(sequence, value, &StructuralComparer);
    check("collection.count_of", found == expected, || {
        format!(
            "Expected {} occurrences of {} but found {}",
            expected,
            describe(value),
            found
        )
    })
}

/// `value` must occur exactly `expected` times under `comparer`
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` on
/// any other number of occurrences.
pub fn count_of_using<T, C>(
    sequence: &[T],
    value: &T,
    expected: usize,
    comparer: &C,
) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    require_elements("collection.count_of_using", "sequence", sequence)?;
    let found = occurrences(sequence, value, comparer);
    check("collection.count_of_using", found == expected, || {
        format!(
            "Expected {} occurrences of {:?} but found {}",
            expected, value, found
        )
    })
}

// ===== Membership =====

/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` when
/// no element equals `value`.
pub fn contains<T: PartialEq + Debug>(sequence: &[T], value: &T) -> Result<()> {
    require_elements("collection.contains", "sequence", sequence)?;
    check("collection.contains", sequence.contains(value), || {
        format!("Expected sequence to contain {:?}", value)
    })
}

/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` when
/// no element equals `value` under `comparer`.
pub fn contains_using<T, C>(sequence: &[T], value: &T, comparer: &C) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    require_elements("collection.contains_using", "sequence", sequence)?;
    check(
        "collection.contains_using",
        seq_contains(sequence, value, comparer),
        || format!("Expected sequence to contain {:?}", value),
    )
}

/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` when
/// an element equals `value`.
pub fn does_not_contain<T: PartialEq + Debug>(sequence: &[T], value: &T) -> Result<()> {
    require_elements("collection.does_not_contain", "sequence", sequence)?;
    check("collection.does_not_contain", !sequence.contains(value), || {
        format!("Expected sequence not to contain {:?}", value)
    })
}

/// # Errors
///
/// Returns `InvalidArgument` for an empty sequence, `AssertionFailed` when
/// an element equals `value` under `comparer`.
pub fn does_not_contain_using<T, C>(sequence: &[T], value: &T, comparer: &C) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    require_elements("collection.does_not_contain_using", "sequence", sequence)?;
    check(
        "collection.does_not_contain_using",
        !seq_contains(sequence, value, comparer),
        || format!("Expected sequence not to contain {:?}", value),
    )
}

// ===== Uniqueness =====

fn assert_unique<T, C>(
    assertion: &'static str,
    sequence: &[T],
    comparer: &C,
    expect_unique: bool,
) -> Result<()>
where
    C: EqualityComparer<T> + ?Sized,
{
    if sequence.len() < 2 {
        return Err(invalid_argument(
            assertion,
            "sequence",
            format!(
                "Expected at least two elements but found {}",
                sequence.len()
            ),
        ));
    }
    let distinct = distinct_count(sequence, comparer);
    let unique = distinct == sequence.len();
    check(assertion, unique == expect_unique, || {
        if expect_unique {
            format!(
                "Expected all {} elements to be unique but found {} distinct",
                sequence.len(),
                distinct
            )
        } else {
            format!(
                "Expected duplicate elements but all {} were unique",
                sequence.len()
            )
        }
    })
}

/// All elements must be distinct under their own `Eq`
///
/// # Errors
///
/// Returns `InvalidArgument` for fewer than two elements, `AssertionFailed`
/// when a duplicate exists.
pub fn unique<T: Eq + Hash>(sequence: &[T]) -> Result<()> {
    assert_unique("collection.unique", sequence, &NaturalComparer, true)
}

/// All elements must be distinct under a pairwise predicate
///
/// # Errors
///
/// Returns `InvalidArgument` for fewer than two elements, `AssertionFailed`
/// when two elements satisfy the predicate.
pub fn unique_by<T, P>(sequence: &[T], predicate: P) -> Result<()>
where
    P: Fn(&T, &T) -> bool,
{
    let comparer = KeyedComparer::from_predicate(predicate);
    assert_unique("collection.unique_by", sequence, &comparer, true)
}

/// All elements must have distinct keys
///
/// # Errors
///
/// Returns `InvalidArgument` for fewer than two elements, `AssertionFailed`
/// when two elements share a key.
pub fn unique_by_key<T, K, F>(sequence: &[T], extractor: F) -> Result<()>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let comparer = KeyedComparer::from_key(extractor);
    assert_unique("collection.unique_by_key", sequence, &comparer, true)
}

/// # Errors
///
/// Returns `InvalidArgument` for fewer than two elements, `AssertionFailed`
/// when two elements are equal under `comparer`.
pub fn unique_using<T, C>(sequence: &[T], comparer: &C) -> Result<()>
where
    C: EqualityComparer<T> + ?Sized,
{
    assert_unique("collection.unique_using", sequence, comparer, true)
}

/// At least two elements must be equal under their own `Eq`
///
/// # Errors
///
/// Returns `InvalidArgument` for fewer than two elements, `AssertionFailed`
/// when every element is distinct.
pub fn not_unique<T: Eq + Hash>(sequence: &[T]) -> Result<()> {
    assert_unique("collection.not_unique", sequence, &NaturalComparer, false)
}

/// # Errors
///
/// Returns `InvalidArgument` for fewer than two elements, `AssertionFailed`
/// when no two elements satisfy the predicate.
pub fn not_unique_by<T, P>(sequence: &[T], predicate: P) -> Result<()>
where
    P: Fn(&T, &T) -> bool,
{
    let comparer = KeyedComparer::from_predicate(predicate);
    assert_unique("collection.not_unique_by", sequence, &comparer, false)
}

/// # Errors
///
/// Returns `InvalidArgument` for fewer than two elements, `AssertionFailed`
/// when every key is distinct.
pub fn not_unique_by_key<T, K, F>(sequence: &[T], extractor: F) -> Result<()>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let comparer = KeyedComparer::from_key(extractor);
    assert_unique("collection.not_unique_by_key", sequence, &comparer, false)
}

/// # Errors
///
/// Returns `InvalidArgument` for fewer than two elements, `AssertionFailed`
/// when every element is distinct under `comparer`.
pub fn not_unique_using<T, C>(sequence: &[T], comparer: &C) -> Result<()>
where
    C: EqualityComparer<T> + ?Sized,
{
    assert_unique("collection.not_unique_using", sequence, comparer, false)
}

// ===== Prefix and suffix =====

fn validate_affix<T>(
    assertion: &'static str,
    param: &'static str,
    sequence: &[T],
    affix: &[T],
) -> Result<()> {
    require_elements(assertion, "sequence", sequence)?;
    require_elements(assertion, param, affix)?;
    if affix.len() > sequence.len() {
        return Err(invalid_argument(
            assertion,
            param,
            format!(
                "{} of {} elements is longer than the sequence of {}",
                param,
                affix.len(),
                sequence.len()
            ),
        ));
    }
    Ok(())
}

fn all_equal<T, C>(left: &[T], right: &[T], comparer: &C) -> bool
where
    C: EqualityComparer<T> + ?Sized,
{
    left.iter().zip(right).all(|(l, r)| comparer.equals(l, r))
}

/// The sequence must begin with `prefix`, compared structurally
///
/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `prefix` is
/// longer than the sequence, `AssertionFailed` when the leading elements
/// differ.
pub fn starts_with<T: Serialize>(sequence: &[T], prefix: &[T]) -> Result<()> {
    validate_affix("collection.starts_with", "prefix", sequence, prefix)?;
    check(
        "collection.starts_with",
        all_equal(&sequence[..prefix.len()], prefix, &StructuralComparer),
        || {
            format!(
                "Expected sequence {} to start with {}",
                describe(sequence),
                describe(prefix)
            )
        },
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `prefix` is
/// longer than the sequence, `AssertionFailed` when the leading elements
/// differ under `comparer`.
pub fn starts_with_using<T, C>(sequence: &[T], prefix: &[T], comparer: &C) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    validate_affix("collection.starts_with_using", "prefix", sequence, prefix)?;
    check(
        "collection.starts_with_using",
        all_equal(&sequence[..prefix.len()], prefix, comparer),
        || format!("Expected sequence {:?} to start with {:?}", sequence, prefix),
    )
}

/// The sequence must end with `suffix`, compared structurally
///
/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `suffix` is
/// longer than the sequence, `AssertionFailed` when the trailing elements
/// differ.
pub fn ends_with<T: Serialize>(sequence: &[T], suffix: &[T]) -> Result<()> {
    validate_affix("collection.ends_with", "suffix", sequence, suffix)?;
    let tail = &sequence[sequence.len() - suffix.len()..];
    check(
        "collection.ends_with",
        all_equal(tail, suffix, &StructuralComparer),
        || {
            format!(
                "Expected sequence {} to end with {}",
                describe(sequence),
                describe(suffix)
            )
        },
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `suffix` is
/// longer than the sequence, `AssertionFailed` when the trailing elements
/// differ under `comparer`.
pub fn ends_with_using<T, C>(sequence: &[T], suffix: &[T], comparer: &C) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    validate_affix("collection.ends_with_using", "suffix", sequence, suffix)?;
    let tail = &sequence[sequence.len() - suffix.len()..];
    check(
        "collection.ends_with_using",
        all_equal(tail, suffix, comparer),
        || format!("Expected sequence {:?} to end with {:?}", sequence, suffix),
    )
}

// ===== Set relations =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Subset,
    StrictSubset,
}

impl Relation {
    fn describe(self) -> &'static str {
        match self {
            Relation::Subset => "subset",
            Relation::StrictSubset => "strict subset",
        }
    }
}

/// Reject empty inputs and a `subset` too long to fit in `superset`
///
/// A strict subset must be shorter than its superset.
fn validate_relation<T>(
    assertion: &'static str,
    subset: &[T],
    superset: &[T],
    relation: Relation,
) -> Result<()> {
    require_elements(assertion, "superset", superset)?;
    require_elements(assertion, "subset", subset)?;
    let fits = match relation {
        Relation::Subset => subset.len() <= superset.len(),
        Relation::StrictSubset => subset.len() < superset.len(),
    };
    if fits {
        return Ok(());
    }
    Err(invalid_argument(
        assertion,
        "subset",
        format!(
            "Subset of {} elements cannot be a {} of {} elements",
            subset.len(),
            relation.describe(),
            superset.len()
        ),
    ))
}

/// Whether every element of `subset` is distinct and occurs in `superset`
fn contained<T, C>(subset: &[T], superset: &[T], comparer: &C) -> bool
where
    C: EqualityComparer<T> + ?Sized,
{
    intersect_count(subset, superset, comparer) == subset.len()
}

fn assert_relation<T, C>(
    assertion: &'static str,
    subset: &[T],
    superset: &[T],
    comparer: &C,
    relation: Relation,
    expected: bool,
) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    validate_relation(assertion, subset, superset, relation)?;
    check(
        assertion,
        contained(subset, superset, comparer) == expected,
        || {
            format!(
                "Expected {:?} {} a {} of {:?}",
                subset,
                if expected { "to be" } else { "not to be" },
                relation.describe(),
                superset
            )
        },
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `subset` is
/// longer than `superset`, `AssertionFailed` when an element of `subset` is
/// missing from `superset` or repeated.
pub fn is_subset_of<T: Eq + Hash + Debug>(subset: &[T], superset: &[T]) -> Result<()> {
    assert_relation(
        "collection.is_subset_of",
        subset,
        superset,
        &NaturalComparer,
        Relation::Subset,
        true,
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `subset` is
/// longer than `superset`, `AssertionFailed` when an element of `subset` is
/// missing from `superset` or repeated under `comparer`.
pub fn is_subset_of_using<T, C>(subset: &[T], superset: &[T], comparer: &C) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    assert_relation(
        "collection.is_subset_of_using",
        subset,
        superset,
        comparer,
        Relation::Subset,
        true,
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `subset` is
/// longer than `superset`, `AssertionFailed` when `subset` is a subset of
/// `superset`.
pub fn is_not_subset_of<T: Eq + Hash + Debug>(subset: &[T], superset: &[T]) -> Result<()> {
    assert_relation(
        "collection.is_not_subset_of",
        subset,
        superset,
        &NaturalComparer,
        Relation::Subset,
        false,
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `subset` is
/// longer than `superset`, `AssertionFailed` when `subset` is a subset of
/// `superset` under `comparer`.
pub fn is_not_subset_of_using<T, C>(subset: &[T], superset: &[T], comparer: &C) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    assert_relation(
        "collection.is_not_subset_of_using",
        subset,
        superset,
        comparer,
        Relation::Subset,
        false,
    )
}

/// `subset` must be a subset of a strictly longer `superset`
///
/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `subset` is not
/// shorter than `superset`, `AssertionFailed` when an element of `subset`
/// is missing from `superset` or repeated.
pub fn is_strict_subset_of<T: Eq + Hash + Debug>(subset: &[T], superset: &[T]) -> Result<()> {
    assert_relation(
        "collection.is_strict_subset_of",
        subset,
        superset,
        &NaturalComparer,
        Relation::StrictSubset,
        true,
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `subset` is not
/// shorter than `superset`, `AssertionFailed` unless `subset` is a strict
/// subset of `superset` under `comparer`.
pub fn is_strict_subset_of_using<T, C>(subset: &[T], superset: &[T], comparer: &C) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    assert_relation(
        "collection.is_strict_subset_of_using",
        subset,
        superset,
        comparer,
        Relation::StrictSubset,
        true,
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `subset` is not
/// shorter than `superset`, `AssertionFailed` when `subset` is a strict
/// subset of `superset`.
pub fn is_not_strict_subset_of<T: Eq + Hash + Debug>(subset: &[T], superset: &[T]) -> Result<()> {
    assert_relation(
        "collection.is_not_strict_subset_of",
        subset,
        superset,
        &NaturalComparer,
        Relation::StrictSubset,
        false,
    )
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty or `subset` is not
/// shorter than `superset`, `AssertionFailed` when `subset` is a strict
/// subset of `superset` under `comparer`.
pub fn is_not_strict_subset_of_using<T, C>(
    subset: &[T],
    superset: &[T],
    comparer: &C,
) -> Result<()>
where
    T: Debug,
    C: EqualityComparer<T> + ?Sized,
{
    assert_relation(
        "collection.is_not_strict_subset_of_using",
        subset,
        superset,
        comparer,
        Relation::StrictSubset,
        false,
    )
}

/// Exactly `expected` distinct elements of `values` must occur in
/// `sequence`
///
/// # Errors
///
/// Returns `InvalidArgument` when either input is empty, `AssertionFailed`
/// on any other overlap.
pub fn overlap_count<T: Eq + Hash>(values: &[T], sequence: &[T], expected: usize) -> Result<()> {
    require_elements("collection.overlap_count", "sequence", sequence)?;
    require_elements("collection.overlap_count", "values", values)?;
    let found = intersect_count(values, sequence, &NaturalComparer);
    check("collection.overlap_count", found == expected, || {
        format!("Expected an overlap of {} but found {}", expected, found)
    })
}

/// # Errors
///
/// Returns `InvalidArgument` when either input is empty, `AssertionFailed`
/// on any other overlap under `comparer`.
pub fn overlap_count_using<T, C>(
    values: &[T],
    sequence: &[T],
    expected: usize,
    comparer: &C,
) -> Result<()>
where
    C: EqualityComparer<T> + ?Sized,
{
    require_elements("collection.overlap_count_using", "sequence", sequence)?;
    require_elements("collection.overlap_count_using", "values", values)?;
    let found = intersect_count(values, sequence, comparer);
    check("collection.overlap_count_using", found == expected, || {
        format!("Expected an overlap of {} but found {}", expected, found)
    })
}
