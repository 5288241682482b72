//! # Content Collection
//!
//! Discovers content files under the configured directory, validates each
//! one independently, and assembles the typed [`Collection`] that page
//! templates consume: the validated entries plus the fixed category order.
//!
//! ## Failure Isolation
//!
//! A failure in one file never stops the others from being checked. The
//! [`CollectionReport`] lists every failing file with all of its violations,
//! and the [`Collection`] inside it only ever holds valid entries.
//!
//! ## Navigation Order
//!
//! Sections follow [`categories()`] order, never lexical order. Empty groups
//! are omitted. Ungrouped entries form a single section placed according to
//! [`UngroupedPlacement`]. Within a section, entries sort by ascending
//! priority, entries without priority last, then by title and slug.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use docs_core::{categories, Category, DocumentEntry};
use serde::Serialize;

use crate::config::{SiteConfig, UngroupedPlacement};
use crate::error::SchemaError;
use crate::frontmatter;
use crate::validate::validate;

/// A validated content file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentEntry {
    /// Path relative to the content root, `/`-separated.
    pub id: String,
    /// URL path derived from the id.
    pub slug: String,
    /// Location on disk.
    #[serde(skip)]
    pub path: PathBuf,
    /// Validated front matter.
    pub data: DocumentEntry,
    /// Markdown after the front matter block.
    pub body: String,
}

/// The validated content collection handed to page templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    /// Collection name.
    pub name: String,
    categories: Vec<Category>,
    entries: Vec<ContentEntry>,
}

/// One navigation section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavSection<'a> {
    /// The group, or `None` for the ungrouped section.
    pub group: Option<Category>,
    /// Entries in display order.
    pub entries: Vec<&'a ContentEntry>,
}

impl Collection {
    /// Build a collection from validated entries. Entries are kept in id
    /// order.
    pub fn new(name: impl Into<String>, mut entries: Vec<ContentEntry>) -> Self {
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            name: name.into(),
            categories: categories().to_vec(),
            entries,
        }
    }

    /// Category display order, as exposed to templates.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All entries, in id order.
    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by slug.
    pub fn get(&self, slug: &str) -> Option<&ContentEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Entries of one group (or the ungrouped entries), in display order.
    pub fn in_group(&self, group: Option<Category>) -> Vec<&ContentEntry> {
        let mut entries: Vec<&ContentEntry> = self
            .entries
            .iter()
            .filter(|e| e.data.group == group)
            .collect();
        entries.sort_by(|a, b| a.data.display_cmp(&b.data).then_with(|| a.slug.cmp(&b.slug)));
        entries
    }

    /// Grouped navigation in display order.
    pub fn navigation(&self, ungrouped: UngroupedPlacement) -> Vec<NavSection<'_>> {
        let mut sections: Vec<NavSection<'_>> = categories()
            .iter()
            .map(|c| NavSection {
                group: Some(*c),
                entries: self.in_group(Some(*c)),
            })
            .filter(|s| !s.entries.is_empty())
            .collect();

        let rest = self.in_group(None);
        if !rest.is_empty() {
            let section = NavSection {
                group: None,
                entries: rest,
            };
            match ungrouped {
                UngroupedPlacement::First => sections.insert(0, section),
                UngroupedPlacement::Last => sections.push(section),
            }
        }

        sections
    }
}

/// A file that failed to load or validate.
#[derive(Debug)]
pub struct EntryFailure {
    /// Path of the content file.
    pub path: PathBuf,
    /// Why it failed.
    pub error: SchemaError,
}

/// Outcome of loading a content collection.
#[derive(Debug)]
pub struct CollectionReport {
    /// Number of content files discovered.
    pub total: usize,
    /// Number of files that validated.
    pub passed: usize,
    /// Number of files that failed.
    pub failed: usize,
    /// Details for each failure, in path order.
    pub failures: Vec<EntryFailure>,
    /// The valid entries.
    pub collection: Collection,
}

impl CollectionReport {
    /// Returns true if every discovered file validated.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The collection if every file validated, otherwise the failures.
    pub fn into_result(self) -> Result<Collection, Vec<EntryFailure>> {
        if self.failures.is_empty() {
            Ok(self.collection)
        } else {
            Err(self.failures)
        }
    }
}

/// Load and validate one content file.
///
/// `content_root` determines the entry's id and slug.
///
/// # Errors
///
/// Returns [`SchemaError::DocumentLoadError`] if the file cannot be read,
/// [`SchemaError::FrontMatter`] if its front matter cannot be extracted, and
/// [`SchemaError::ValidationFailed`] with every violation otherwise.
pub fn load_entry(path: &Path, content_root: &Path) -> Result<ContentEntry, SchemaError> {
    let display = path.display().to_string();
    let source = std::fs::read_to_string(path).map_err(|e| SchemaError::DocumentLoadError {
        path: display.clone(),
        reason: format!("cannot read file: {e}"),
    })?;

    let parsed = frontmatter::parse(&source).map_err(|e| SchemaError::FrontMatter {
        path: display.clone(),
        source: e,
    })?;

    let data = validate(&parsed.data).map_err(|violations| SchemaError::ValidationFailed {
        path: display,
        violations,
    })?;

    let id = entry_id(path, content_root);
    let slug = slug_for(&id);
    Ok(ContentEntry {
        id,
        slug,
        path: path.to_path_buf(),
        data,
        body: parsed.body.to_string(),
    })
}

/// Recursively collect content files under `dir`, sorted by path.
///
/// Names starting with `_` or `.` are skipped, files and directories alike.
/// Symlinked directories are not followed; symlinked files are kept.
///
/// # Errors
///
/// Returns [`SchemaError::Io`] if a directory cannot be read.
pub fn find_content_files(dir: &Path, config: &SiteConfig) -> Result<Vec<PathBuf>, SchemaError> {
    let mut results = Vec::new();
    walk_for_content(dir, config, &mut results)?;
    results.sort();
    Ok(results)
}

fn walk_for_content(
    dir: &Path,
    config: &SiteConfig,
    acc: &mut Vec<PathBuf>,
) -> Result<(), SchemaError> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('_') || n.starts_with('.'));
        if hidden {
            continue;
        }
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk_for_content(&path, config, acc)?;
        } else if file_type.is_symlink() && path.is_dir() {
            tracing::debug!(path = %path.display(), "skipping symlinked directory");
        } else if config.is_content_file(&path) {
            acc.push(path);
        }
    }
    Ok(())
}

/// Load every content file under `config.content_dir`.
///
/// # Errors
///
/// Returns [`SchemaError::DocumentLoadError`] if the content directory does
/// not exist and [`SchemaError::Io`] if it cannot be walked. Per-file
/// failures are collected in the report, not returned.
pub fn load_collection(config: &SiteConfig) -> Result<CollectionReport, SchemaError> {
    let root = &config.content_dir;
    if !root.is_dir() {
        return Err(SchemaError::DocumentLoadError {
            path: root.display().to_string(),
            reason: "content directory not found".to_string(),
        });
    }

    let files = find_content_files(root, config)?;
    let total = files.len();
    let mut entries: Vec<ContentEntry> = Vec::new();
    let mut failures: Vec<EntryFailure> = Vec::new();
    let mut slugs: HashMap<String, String> = HashMap::new();

    for path in files {
        match load_entry(&path, root) {
            Ok(entry) => {
                if let Some(first) = slugs.get(&entry.slug) {
                    tracing::warn!(slug = %entry.slug, id = %entry.id, "duplicate slug");
                    failures.push(EntryFailure {
                        error: SchemaError::DuplicateSlug {
                            slug: entry.slug.clone(),
                            path: path.display().to_string(),
                            first: first.clone(),
                        },
                        path,
                    });
                    continue;
                }
                tracing::debug!(id = %entry.id, group = ?entry.data.group, "validated entry");
                slugs.insert(entry.slug.clone(), entry.id.clone());
                entries.push(entry);
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), "entry rejected");
                failures.push(EntryFailure { path, error });
            }
        }
    }

    tracing::info!(
        collection = %config.collection,
        total,
        passed = entries.len(),
        failed = failures.len(),
        "loaded content collection"
    );

    Ok(CollectionReport {
        total,
        passed: entries.len(),
        failed: failures.len(),
        failures,
        collection: Collection::new(config.collection.clone(), entries),
    })
}

fn entry_id(path: &Path, content_root: &Path) -> String {
    let relative = path.strip_prefix(content_root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Derive the URL slug from an entry id.
///
/// The extension is dropped, each segment is lowercased with whitespace
/// runs replaced by `-`, and a trailing `index` collapses into its parent.
pub fn slug_for(id: &str) -> String {
    let stem = match id.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') && !stem.is_empty() => stem,
        _ => id,
    };
    let mut segments: Vec<String> = stem
        .split('/')
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join("-").to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if segments.last().is_some_and(|s| s == "index") {
        segments.pop();
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str, group: Option<Category>, priority: Option<f64>) -> ContentEntry {
        ContentEntry {
            id: id.to_string(),
            slug: slug_for(id),
            path: PathBuf::from(id),
            data: DocumentEntry {
                title: title.to_string(),
                description: "d".to_string(),
                group,
                priority,
            },
            body: String::new(),
        }
    }

    fn sample() -> Collection {
        Collection::new(
            "docs",
            vec![
                entry("misc.md", "Misc", None, None),
                entry("codes/e001.md", "E001", Some(Category::Codes), Some(2.0)),
                entry("codes/e000.md", "E000", Some(Category::Codes), Some(1.0)),
                entry("codes/notes.md", "Notes", Some(Category::Codes), None),
                entry("case/study.md", "Study", Some(Category::Case), None),
                entry("index.md", "Welcome", Some(Category::Overview), None),
            ],
        )
    }

    #[test]
    fn test_slug_for() {
        assert_eq!(slug_for("intro.md"), "intro");
        assert_eq!(slug_for("guides/Getting Started.mdx"), "guides/getting-started");
        assert_eq!(slug_for("guides/index.md"), "guides");
        assert_eq!(slug_for("index.md"), "");
        assert_eq!(slug_for("v1.2/notes.md"), "v1.2/notes");
    }

    #[test]
    fn test_entry_id_is_relative_and_slash_separated() {
        let root = Path::new("/site/content");
        let path = root.join("guides").join("intro.md");
        assert_eq!(entry_id(&path, root), "guides/intro.md");
    }

    #[test]
    fn test_navigation_follows_category_order_ungrouped_last() {
        let collection = sample();
        let nav = collection.navigation(UngroupedPlacement::Last);
        let groups: Vec<Option<Category>> = nav.iter().map(|s| s.group).collect();
        assert_eq!(
            groups,
            vec![
                Some(Category::Overview),
                Some(Category::Codes),
                Some(Category::Case),
                None
            ]
        );
    }

    #[test]
    fn test_navigation_ungrouped_first() {
        let collection = sample();
        let nav = collection.navigation(UngroupedPlacement::First);
        assert_eq!(nav[0].group, None);
        assert_eq!(nav[1].group, Some(Category::Overview));
    }

    #[test]
    fn test_navigation_intra_group_order() {
        let collection = sample();
        let titles: Vec<&str> = collection
            .in_group(Some(Category::Codes))
            .iter()
            .map(|e| e.data.title.as_str())
            .collect();
        assert_eq!(titles, vec!["E000", "E001", "Notes"]);
    }

    #[test]
    fn test_collection_exposes_category_order() {
        let collection = sample();
        assert_eq!(collection.categories(), categories());
        assert_eq!(collection.len(), 6);
        assert_eq!(collection.get("codes/e000").unwrap().data.title, "E000");
        assert_eq!(collection.get("").unwrap().data.title, "Welcome");
    }

    #[test]
    fn test_collection_serializes_for_templates() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "docs");
        assert_eq!(json["categories"][0], "Overview");
        assert_eq!(json["categories"][8], "Case");
        assert!(json["entries"][0].get("path").is_none());
    }
}
