//! Equality comparers
//!
//! An [`EqualityComparer`] decides equality and supplies a hash consistent
//! with it: values that compare equal must hash equal. Unequal values may
//! share a hash, so dedup helpers always confirm with `equals`.

mod distinct;
mod keyed;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Serialize;

pub use distinct::{contains_using, distinct, distinct_count, intersect_count};
pub use keyed::KeyedComparer;

/// Equality and hashing over `T`
pub trait EqualityComparer<T: ?Sized> {
    /// Whether `left` and `right` are equal under this comparer
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Hash consistent with [`equals`](EqualityComparer::equals)
    fn hash(&self, value: &T) -> u64;
}

impl<T: ?Sized, C: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &C {
    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }

    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

/// Hash a value with the standard library's default hasher
pub(crate) fn hash_one<K: Hash + ?Sized>(value: &K) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// The type's own `Eq` and `Hash`
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalComparer;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for NaturalComparer {
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    fn hash(&self, value: &T) -> u64 {
        hash_one(value)
    }
}

/// The structural equality engine over any serializable type
///
/// Every value hashes to the same bucket, so dedup with this comparer is
/// quadratic.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralComparer;

impl<T: Serialize + ?Sized> EqualityComparer<T> for StructuralComparer {
    fn equals(&self, left: &T, right: &T) -> bool {
        crate::equality::is_equal(left, right)
    }

    fn hash(&self, _value: &T) -> u64 {
        0
    }
}
