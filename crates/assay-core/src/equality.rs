//! Structural equality engine
//!
//! Decides whether two reflected values are equal for assertion purposes.
//! The procedure, in strict priority order:
//!
//! 1. both absent: equal
//! 2. exactly one absent: not equal
//! 3. both ordered sequences: equal length and every positional pair equal
//!    under this same procedure
//! 4. otherwise natural equality of the runtime variants
//!
//! Maps compare as unordered collections of entries, so a `HashMap` equals
//! another with the same contents whatever their iteration order. A
//! `HashSet` serializes exactly like a `Vec` and is therefore compared as an
//! ordered sequence.
//!
//! Natural equality never coerces: `1i32` and `1i64` are different values.
//! The engine is total and never errors.

use serde::Serialize;

use crate::comparer::EqualityComparer;
use crate::value::{to_value, Fields, Value};

/// Compare two possibly-absent values structurally
pub fn values_equal(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(left), Some(right)) => match (left.as_sequence(), right.as_sequence()) {
            (Some(lhs), Some(rhs)) => sequences_equal(lhs, rhs),
            _ => natural_equal(left, right),
        },
    }
}

fn sequences_equal(left: &[Option<Value>], right: &[Option<Value>]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| values_equal(l.as_ref(), r.as_ref()))
}

fn natural_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Unit, Value::Unit) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::I8(l), Value::I8(r)) => l == r,
        (Value::I16(l), Value::I16(r)) => l == r,
        (Value::I32(l), Value::I32(r)) => l == r,
        (Value::I64(l), Value::I64(r)) => l == r,
        (Value::I128(l), Value::I128(r)) => l == r,
        (Value::U8(l), Value::U8(r)) => l == r,
        (Value::U16(l), Value::U16(r)) => l == r,
        (Value::U32(l), Value::U32(r)) => l == r,
        (Value::U64(l), Value::U64(r)) => l == r,
        (Value::U128(l), Value::U128(r)) => l == r,
        // NaN is equal to itself
        (Value::F32(l), Value::F32(r)) => l == r || (l.is_nan() && r.is_nan()),
        (Value::F64(l), Value::F64(r)) => l == r || (l.is_nan() && r.is_nan()),
        (Value::Char(l), Value::Char(r)) => l == r,
        (Value::Str(l), Value::Str(r)) => l == r,
        (Value::Map(l), Value::Map(r)) => maps_equal(l, r),
        (
            Value::Struct {
                name: ln,
                fields: lf,
            },
            Value::Struct {
                name: rn,
                fields: rf,
            },
        ) => ln == rn && fields_equal(lf, rf),
        (
            Value::Variant {
                name: ln,
                variant: lv,
                fields: lf,
            },
            Value::Variant {
                name: rn,
                variant: rv,
                fields: rf,
            },
        ) => ln == rn && lv == rv && fields_equal(lf, rf),
        _ => false,
    }
}

type Entry = (Option<Value>, Option<Value>);

/// Every left entry pairs with exactly one right entry, in any order
fn maps_equal(left: &[Entry], right: &[Entry]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut taken = vec![false; right.len()];
    left.iter().all(|(lk, lv)| {
        let found = (0..right.len()).find(|&index| {
            let (rk, rv) = &right[index];
            !taken[index]
                && values_equal(lk.as_ref(), rk.as_ref())
                && values_equal(lv.as_ref(), rv.as_ref())
        });
        match found {
            Some(index) => {
                taken[index] = true;
                true
            }
            None => false,
        }
    })
}

fn fields_equal(left: &Fields, right: &Fields) -> bool {
    match (left, right) {
        (Fields::Unit, Fields::Unit) => true,
        (Fields::Unnamed(l), Fields::Unnamed(r)) => sequences_equal(l, r),
        (Fields::Named(l), Fields::Named(r)) => {
            l.len() == r.len()
                && l.iter().zip(r).all(|((lname, lval), (rname, rval))| {
                    lname == rname && values_equal(lval.as_ref(), rval.as_ref())
                })
        }
        _ => false,
    }
}

/// Compare any two serializable values structurally
///
/// A value whose `Serialize` impl fails compares as not equal.
pub fn is_equal<L, R>(left: &L, right: &R) -> bool
where
    L: Serialize + ?Sized,
    R: Serialize + ?Sized,
{
    match (to_value(left), to_value(right)) {
        (Ok(left), Ok(right)) => values_equal(left.as_ref(), right.as_ref()),
        _ => false,
    }
}

/// Compare two values with a caller-supplied comparer
///
/// The comparer is the sole equality authority; it is applied to the
/// top-level values only.
pub fn is_equal_using<T, C>(left: &T, right: &T, comparer: &C) -> bool
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    comparer.equals(left, right)
}
