//! # docs-core — Foundational Types for the Documentation Site
//!
//! Defines the closed category vocabulary and the validated entry type that
//! every other crate in the workspace builds on. It depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Category` enum.** Nine variants, declared in display order.
//!    Exhaustive `match` everywhere; no bare strings for group names once
//!    front matter has been validated.
//!
//! 2. **`DocumentEntry` is post-validation only.** Construct it through
//!    `docs_schema::validate`, never from raw front matter directly.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `docs-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod entry;
pub mod error;

pub use category::{categories, Category, CATEGORY_COUNT};
pub use entry::DocumentEntry;
pub use error::CoreError;
