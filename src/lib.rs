//! Runtime representation and accessor protocol for oneof groups.
//!
//! A oneof group is a discriminated union of named fields where at most
//! one field is active at a time. Statically-typed groups are plain Rust
//! enums wired into the shared [`OneofGroup`] protocol; groups whose field
//! names are only known at runtime use [`UnknownOneofGroup`]. The
//! structural shape of an untyped group (for example, freshly parsed JSON)
//! is checked with [`is_oneof_group`] before its contents are trusted.

mod error;
mod group;
mod shape;
mod unknown;

/// Reflective mutation failures.
pub use error::OneofError;
/// Shared accessor protocol over both group flavors.
pub use group::OneofGroup;
/// Structural shape contract for untyped groups.
pub use shape::{KIND_KEY, is_oneof_group};
/// Dynamic oneof group with runtime field names.
pub use unknown::UnknownOneofGroup;
