//! Shape taxonomy for reflected values
//!
//! Rust has no runtime type metadata, so shape questions ("is this an
//! array?", "is this an enum?") are answered from the serialized form of a
//! value. Each reflected value maps to exactly one `TypeKind`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a reflected value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// `()`
    Unit,
    /// `bool`
    Bool,
    /// Any signed or unsigned integer width
    Integer,
    /// `f32` or `f64`
    Float,
    /// `char`
    Char,
    /// `String` or `&str`
    String,
    /// Vectors, slices, arrays, tuples and byte buffers
    Sequence,
    /// Key/value collections
    Map,
    /// Named, tuple, newtype and unit structs
    Struct,
    /// Enum variants of any shape
    Enum,
}

impl TypeKind {
    /// Stable lowercase name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Unit => "unit",
            TypeKind::Bool => "bool",
            TypeKind::Integer => "integer",
            TypeKind::Float => "float",
            TypeKind::Char => "char",
            TypeKind::String => "string",
            TypeKind::Sequence => "sequence",
            TypeKind::Map => "map",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
        }
    }

    /// Whether values of this kind are scalars (compared by natural equality)
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            TypeKind::Unit
                | TypeKind::Bool
                | TypeKind::Integer
                | TypeKind::Float
                | TypeKind::Char
                | TypeKind::String
        )
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
