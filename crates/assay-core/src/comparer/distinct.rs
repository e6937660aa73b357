//! Set helpers over any comparer

use std::collections::HashMap;

use super::EqualityComparer;

/// First occurrence of every distinct element, in input order
///
/// Elements are bucketed by the comparer's hash and confirmed with
/// `equals(seen, candidate)`.
pub fn distinct<'t, T, C>(items: &'t [T], comparer: &C) -> Vec<&'t T>
where
    C: EqualityComparer<T> + ?Sized,
{
    let mut buckets: HashMap<u64, Vec<&'t T>> = HashMap::new();
    let mut kept = Vec::new();
    for item in items {
        let bucket = buckets.entry(comparer.hash(item)).or_default();
        if !bucket.iter().any(|seen| comparer.equals(seen, item)) {
            bucket.push(item);
            kept.push(item);
        }
    }
    kept
}

/// Number of elements left after collapsing equal elements
pub fn distinct_count<T, C>(items: &[T], comparer: &C) -> usize
where
    C: EqualityComparer<T> + ?Sized,
{
    distinct(items, comparer).len()
}

/// Whether `sequence` holds an element equal to `value`
pub fn contains_using<T, C>(sequence: &[T], value: &T, comparer: &C) -> bool
where
    C: EqualityComparer<T> + ?Sized,
{
    sequence.iter().any(|item| comparer.equals(item, value))
}

/// Number of distinct `values` that also occur in `sequence`
pub fn intersect_count<T, C>(values: &[T], sequence: &[T], comparer: &C) -> usize
where
    C: EqualityComparer<T> + ?Sized,
{
    distinct(values, comparer)
        .into_iter()
        .filter(|value| contains_using(sequence, value, comparer))
        .count()
}
