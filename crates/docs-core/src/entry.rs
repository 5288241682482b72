//! # Document Entry
//!
//! The validated front matter of one documentation page. Values of this type
//! only come out of the schema validator, so holders may rely on `title` and
//! `description` being non-empty and `group` being a declared category.

use std::cmp::Ordering;

use serde::Serialize;

use crate::category::Category;

/// One validated documentation page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentEntry {
    /// Page title. Never empty.
    pub title: String,
    /// One-line summary. Never empty.
    pub description: String,
    /// Navigation group. `None` means the page is ungrouped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Category>,
    /// Intra-group ordering key. Lower sorts first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
}

impl DocumentEntry {
    /// Returns true if the entry has no group.
    pub fn is_ungrouped(&self) -> bool {
        self.group.is_none()
    }

    /// Intra-group display order: entries with a priority come first in
    /// ascending order, entries without one follow, ties fall back to title.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        let by_priority = match (self.priority, other.priority) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_priority.then_with(|| self.title.cmp(&other.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, priority: Option<f64>) -> DocumentEntry {
        DocumentEntry {
            title: title.to_string(),
            description: "d".to_string(),
            group: None,
            priority,
        }
    }

    #[test]
    fn test_priority_orders_ascending() {
        let a = entry("B", Some(1.0));
        let b = entry("A", Some(2.5));
        assert_eq!(a.display_cmp(&b), Ordering::Less);
    }

    #[test]
    fn test_missing_priority_sorts_after() {
        let a = entry("A", None);
        let b = entry("Z", Some(100.0));
        assert_eq!(a.display_cmp(&b), Ordering::Greater);
    }

    #[test]
    fn test_title_breaks_ties() {
        assert_eq!(entry("A", None).display_cmp(&entry("B", None)), Ordering::Less);
        assert_eq!(
            entry("B", Some(1.0)).display_cmp(&entry("A", Some(1.0))),
            Ordering::Greater
        );
    }

    #[test]
    fn test_ungrouped_serializes_without_group() {
        let json = serde_json::to_value(entry("T", None)).unwrap();
        assert!(json.get("group").is_none());
        assert!(json.get("priority").is_none());
    }
}
