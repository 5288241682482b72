//! # docs-schema — Front Matter Validation & Content Collection
//!
//! Validates documentation front matter against the `DocumentEntry`
//! contract and assembles the content collection consumed by page
//! templates.
//!
//! ## Validation (`validate`)
//!
//! [`validate()`] is a pure, total checker: it inspects every field of a raw
//! record and returns either a `DocumentEntry` or the complete list of
//! [`SchemaViolation`]s. It never stops at the first failure.
//!
//! ## Loading (`frontmatter`, `collection`, `config`)
//!
//! - [`frontmatter`] splits a content file into YAML front matter and body.
//! - [`collection::load_collection`] walks the configured content directory
//!   and validates each file independently.
//! - [`Collection::navigation`] groups entries in fixed category order.
//! - [`SiteConfig`] reads `docs.yaml`.
//!
//! ## Crate Policy
//!
//! - Depends only on `docs-core` internally.
//! - Validation is a build gate: any violation rejects the entry, and the
//!   diagnostic names every offending field with the expected constraint.

pub mod collection;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod validate;

pub use collection::{
    find_content_files, load_collection, load_entry, slug_for, Collection, CollectionReport,
    ContentEntry, EntryFailure, NavSection,
};
pub use config::{ConfigError, SiteConfig, UngroupedPlacement, DEFAULT_CONFIG_FILE};
pub use error::SchemaError;
pub use frontmatter::FrontMatterError;
pub use validate::{validate, SchemaViolation, SchemaViolations, ViolationReason, ROOT_FIELD};
