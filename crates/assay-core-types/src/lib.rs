//! Core types shared across Assay facilities
//!
//! This crate provides the vocabulary used by both the assertion library
//! and its logging facility:
//!
//! - **Schema constants**: Canonical field keys and event names
//! - **Type kinds**: Shape taxonomy used by the reflection assertions

pub mod kind;
pub mod schema;

pub use kind::TypeKind;
