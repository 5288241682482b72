//! # Error Types
//!
//! Errors raised by the foundational types. Field-level validation failures
//! live in `docs-schema`; this crate only reports malformed primitives.

use thiserror::Error;

/// Error constructing a core type from untrusted input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The string is not one of the declared category names.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}
