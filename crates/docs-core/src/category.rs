//! # Category Taxonomy — Single Source of Truth
//!
//! Defines the `Category` enum with the nine documentation groups. This is
//! the ONE definition of the group vocabulary. Every `match` on `Category`
//! must be exhaustive, so adding a group forces every consumer (navigation,
//! validation messages, templates) to handle it at compile time.
//!
//! ## Ordering Invariant
//!
//! The declaration order of the variants is the display order of groups in
//! the rendered site. It is neither alphabetical nor insertion order, and
//! [`categories()`] must return it identically on every call.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Documentation groups, in display order.
///
/// | # | Category | Typical content |
/// |---|----------|-----------------|
/// | 1 | Overview | Landing pages, introductions |
/// | 2 | General | Everyday usage guides |
/// | 3 | Errors | Error model and handling |
/// | 4 | Codes | Error code reference |
/// | 5 | Internals | Implementation notes |
/// | 6 | Diagnostics | Reporting and rendering diagnostics |
/// | 7 | Interactive | Live playgrounds |
/// | 8 | Advanced | Advanced patterns |
/// | 9 | Case | Case studies |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Overview,
    General,
    Errors,
    Codes,
    Internals,
    Diagnostics,
    Interactive,
    Advanced,
    Case,
}

/// Total number of categories.
pub const CATEGORY_COUNT: usize = 9;

const ALL_CATEGORIES: [Category; CATEGORY_COUNT] = [
    Category::Overview,
    Category::General,
    Category::Errors,
    Category::Codes,
    Category::Internals,
    Category::Diagnostics,
    Category::Interactive,
    Category::Advanced,
    Category::Case,
];

/// Returns every category in display order.
pub fn categories() -> &'static [Category] {
    &ALL_CATEGORIES
}

impl Category {
    /// Returns all categories in display order. Same as [`categories()`].
    pub fn all() -> &'static [Category] {
        &ALL_CATEGORIES
    }

    /// Zero-based rank of this category in display order.
    pub fn position(&self) -> usize {
        *self as usize
    }

    /// The exact name authors write in front matter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::General => "General",
            Self::Errors => "Errors",
            Self::Codes => "Codes",
            Self::Internals => "Internals",
            Self::Diagnostics => "Diagnostics",
            Self::Interactive => "Interactive",
            Self::Advanced => "Advanced",
            Self::Case => "Case",
        }
    }

    /// Names of all categories in display order, for diagnostics.
    pub fn names() -> Vec<&'static str> {
        ALL_CATEGORIES.iter().map(Category::as_str).collect()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Parse a category from its exact, case-sensitive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}
