//! Assay Core - reflection-driven assertions for unit tests
//!
//! This crate provides:
//! - A reflected value model built on `serde::Serialize`
//! - A structural equality engine with deep, order-sensitive sequence comparison
//! - Equality comparers (natural, structural, keyed) and set helpers over them
//! - Assertion families: basic, object, logical, collection, float, reflection
//! - A structured error facility and a `tracing` logging facility
//! - A Windows command-line argument escaper
//!
//! Every assertion returns [`Result`]: `Ok` when the condition holds, an
//! [`AssayError`] otherwise.

pub mod assert;
pub mod cmdline;
pub mod comparer;
pub mod equality;
pub mod errors;
pub mod logging_facility;
pub mod value;

pub use assay_core_types;

#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use cmdline::{ArgumentEscaper, WindowsArgumentEscaper};
pub use comparer::{EqualityComparer, KeyedComparer, NaturalComparer, StructuralComparer};
pub use equality::{is_equal, is_equal_using, values_equal};
pub use errors::{AssayError, Failure, FailureKind, Result, ResultExt};
pub use value::{to_value, Value};
