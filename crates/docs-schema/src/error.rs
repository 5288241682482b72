//! # Schema Errors
//!
//! Per-file failures raised while loading a content collection. Each carries
//! the offending path so the build diagnostic points at the file to fix.

use thiserror::Error;

use crate::frontmatter::FrontMatterError;
use crate::validate::SchemaViolations;

/// Error loading or validating one content file, or the collection itself.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The front matter did not satisfy the entry contract.
    #[error("front matter validation failed for '{path}':\n{violations}")]
    ValidationFailed {
        /// Path of the content file.
        path: String,
        /// Every offending field.
        violations: SchemaViolations,
    },

    /// The front matter block could not be extracted or parsed.
    #[error("front matter error in '{path}': {source}")]
    FrontMatter {
        /// Path of the content file.
        path: String,
        /// Extraction failure.
        source: FrontMatterError,
    },

    /// Two files map to the same slug.
    #[error("duplicate slug '{slug}' in '{path}' (already used by '{first}')")]
    DuplicateSlug {
        /// The colliding slug.
        slug: String,
        /// The later file, which is rejected.
        path: String,
        /// The file that claimed the slug first.
        first: String,
    },

    /// The content file or directory could not be read.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoadError {
        /// Path that failed to load.
        path: String,
        /// Reason the path could not be loaded.
        reason: String,
    },

    /// IO error while walking the content directory.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchemaError {
    /// The field violations, if this is a validation failure.
    pub fn violations(&self) -> Option<&SchemaViolations> {
        match self {
            Self::ValidationFailed { violations, .. } => Some(violations),
            _ => None,
        }
    }
}
