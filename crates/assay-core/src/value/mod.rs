//! Reflected value model
//!
//! A [`Value`] is the shape-aware snapshot of an arbitrary Rust value taken
//! through its `serde::Serialize` implementation. Absence is never a value
//! variant: every position that may be empty (the root, sequence elements,
//! map entries, fields) holds an `Option<Value>`.

mod serializer;

use std::fmt;

use assay_core_types::TypeKind;

pub use serializer::{to_value, ValueError, ValueSerializer};

/// Field layout shared by structs and enum variants
#[derive(Debug, Clone)]
pub enum Fields {
    /// `struct Marker;` or `Enum::Variant`
    Unit,
    /// `struct Id(u32);` or `Enum::Variant(a, b)`
    Unnamed(Vec<Option<Value>>),
    /// `struct Point { x, y }` or `Enum::Variant { x, y }`
    Named(Vec<(&'static str, Option<Value>)>),
}

/// Reflected value of unknown shape
///
/// Integer and float widths are kept distinct so that `1i32` and `1i64`
/// never compare equal.
#[derive(Debug, Clone)]
pub enum Value {
    Unit,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    /// Vectors, slices and byte buffers
    Seq(Vec<Option<Value>>),
    /// Tuples and fixed-size arrays
    Tuple(Vec<Option<Value>>),
    /// Map entries in iteration order
    Map(Vec<(Option<Value>, Option<Value>)>),
    Struct {
        name: &'static str,
        fields: Fields,
    },
    Variant {
        name: &'static str,
        variant: &'static str,
        fields: Fields,
    },
}

impl Value {
    /// Shape of this value
    pub fn kind(&self) -> TypeKind {
        match self {
            Value::Unit => TypeKind::Unit,
            Value::Bool(_) => TypeKind::Bool,
            Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::I128(_)
            | Value::U8(_)
            | Value::U16(_)
            | Value::U32(_)
            | Value::U64(_)
            | Value::U128(_) => TypeKind::Integer,
            Value::F32(_) | Value::F64(_) => TypeKind::Float,
            Value::Char(_) => TypeKind::Char,
            Value::Str(_) => TypeKind::String,
            Value::Seq(_) | Value::Tuple(_) => TypeKind::Sequence,
            Value::Map(_) => TypeKind::Map,
            Value::Struct { .. } => TypeKind::Struct,
            Value::Variant { .. } => TypeKind::Enum,
        }
    }

    /// Elements of an ordered sequence
    ///
    /// Returns `None` for everything that is not a sequence or tuple. A
    /// string is a scalar, never a sequence of characters.
    pub fn as_sequence(&self) -> Option<&[Option<Value>]> {
        match self {
            Value::Seq(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }
}

/// Render a possibly-absent value for failure messages
pub fn render(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "None".to_string(),
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Option<Value>]) -> fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        f.write_str(&render(item.as_ref()))?;
    }
    Ok(())
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &Fields) -> fmt::Result {
    match fields {
        Fields::Unit => Ok(()),
        Fields::Unnamed(items) => {
            f.write_str("(")?;
            write_list(f, items)?;
            f.write_str(")")
        }
        Fields::Named(named) => {
            f.write_str(" { ")?;
            for (idx, (field, value)) in named.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {}", field, render(value.as_ref()))?;
            }
            f.write_str(" }")
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::I8(v) => write!(f, "{}i8", v),
            Value::I16(v) => write!(f, "{}i16", v),
            Value::I32(v) => write!(f, "{}i32", v),
            Value::I64(v) => write!(f, "{}i64", v),
            Value::I128(v) => write!(f, "{}i128", v),
            Value::U8(v) => write!(f, "{}u8", v),
            Value::U16(v) => write!(f, "{}u16", v),
            Value::U32(v) => write!(f, "{}u32", v),
            Value::U64(v) => write!(f, "{}u64", v),
            Value::U128(v) => write!(f, "{}u128", v),
            Value::F32(v) => write!(f, "{:?}f32", v),
            Value::F64(v) => write!(f, "{:?}f64", v),
            Value::Char(v) => write!(f, "{:?}", v),
            Value::Str(v) => write!(f, "{:?}", v),
            Value::Seq(items) => {
                f.write_str("[")?;
                write_list(f, items)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_list(f, items)?;
                f.write_str(")")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", render(key.as_ref()), render(value.as_ref()))?;
                }
                f.write_str("}")
            }
            Value::Struct { name, fields } => {
                f.write_str(name)?;
                write_fields(f, fields)
            }
            Value::Variant {
                name,
                variant,
                fields,
            } => {
                write!(f, "{}::{}", name, variant)?;
                write_fields(f, fields)
            }
        }
    }
}

/// Structural equality, see [`crate::equality::values_equal`]
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::equality::values_equal(Some(self), Some(other))
    }
}
