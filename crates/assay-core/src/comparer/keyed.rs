//! Comparer built from a caller-supplied function

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use super::{hash_one, EqualityComparer};
use crate::errors::{AssayError, Result};

type EqualsFn<'a, T> = Box<dyn Fn(&T, &T) -> bool + 'a>;
type HashFn<'a, T> = Box<dyn Fn(&T) -> u64 + 'a>;

/// Equality and hashing derived from a pairwise predicate or a key extractor
///
/// In pairwise mode the predicate decides equality. Unless a hash function
/// is attached with [`with_hasher`](KeyedComparer::with_hasher), every value
/// hashes to the same constant, which is always consistent but degrades
/// dedup to pairwise checks.
///
/// In key mode two values are equal when their extracted keys are equal,
/// and the hash is the hash of the key.
///
/// # Example
///
/// ```
/// use assay_core::{EqualityComparer, KeyedComparer};
///
/// let by_len = KeyedComparer::from_key(|s: &String| s.len());
/// assert!(by_len.equals(&"abc".to_string(), &"xyz".to_string()));
/// ```
pub struct KeyedComparer<'a, T: ?Sized> {
    equals: EqualsFn<'a, T>,
    hasher: HashFn<'a, T>,
}

impl<'a, T: ?Sized + 'a> KeyedComparer<'a, T> {
    /// Build from a pairwise equality predicate
    pub fn from_predicate<P>(predicate: P) -> Self
    where
        P: Fn(&T, &T) -> bool + 'a,
    {
        Self {
            equals: Box::new(predicate),
            hasher: Box::new(|_: &T| 0),
        }
    }

    /// Build from a predicate that may be absent
    ///
    /// # Errors
    ///
    /// Returns `MissingArgument` when `predicate` is `None`.
    pub fn try_from_predicate<P>(predicate: Option<P>) -> Result<Self>
    where
        P: Fn(&T, &T) -> bool + 'a,
    {
        predicate
            .map(Self::from_predicate)
            .ok_or(AssayError::MissingArgument { param: "predicate" })
    }

    /// Build from a key extractor using the key's natural equality and hash
    pub fn from_key<K, F>(extractor: F) -> Self
    where
        K: Eq + Hash + 'a,
        F: Fn(&T) -> K + 'a,
    {
        Self::from_optional_key(move |value: &T| Some(extractor(value)))
    }

    /// Build from an extractor whose key may be absent
    ///
    /// Two absent keys are equal, an absent and a present key are not. An
    /// absent key hashes to `0`.
    pub fn from_optional_key<K, F>(extractor: F) -> Self
    where
        K: Eq + Hash + 'a,
        F: Fn(&T) -> Option<K> + 'a,
    {
        let extractor = Rc::new(extractor);
        let for_hash = Rc::clone(&extractor);
        Self {
            equals: Box::new(move |left: &T, right: &T| extractor(left) == extractor(right)),
            hasher: Box::new(move |value: &T| for_hash(value).map_or(0, |key| hash_one(&key))),
        }
    }

    /// Build from a key extractor that may be absent
    ///
    /// # Errors
    ///
    /// Returns `MissingArgument` when `extractor` is `None`.
    pub fn try_from_key<K, F>(extractor: Option<F>) -> Result<Self>
    where
        K: Eq + Hash + 'a,
        F: Fn(&T) -> K + 'a,
    {
        extractor
            .map(Self::from_key)
            .ok_or(AssayError::MissingArgument { param: "extractor" })
    }

    /// Replace the hash function
    ///
    /// The caller guarantees that values equal under this comparer hash to
    /// the same value.
    pub fn with_hasher<H>(mut self, hasher: H) -> Self
    where
        H: Fn(&T) -> u64 + 'a,
    {
        self.hasher = Box::new(hasher);
        self
    }
}

impl<T: ?Sized> EqualityComparer<T> for KeyedComparer<'_, T> {
    fn equals(&self, left: &T, right: &T) -> bool {
        (self.equals)(left, right)
    }

    fn hash(&self, value: &T) -> u64 {
        (self.hasher)(value)
    }
}

impl<T: ?Sized> fmt::Debug for KeyedComparer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedComparer").finish_non_exhaustive()
    }
}
