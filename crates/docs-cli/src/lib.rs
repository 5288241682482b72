//! # docs-cli — Build-Time Gate for the Documentation Site
//!
//! Provides the `docs` command-line interface. The external site build runs
//! `docs validate` before rendering, so malformed front matter fails the
//! build with a diagnostic naming every offending field.
//!
//! ## Subcommands
//!
//! - `docs validate [PATH]` — Validate the whole collection or one file.
//! - `docs categories` — Print the fixed category order.
//! - `docs nav` — Print the grouped navigation of a valid collection.
//!
//! ## Exit Codes
//!
//! `0` when everything validated, `1` when any entry failed, `2` on an
//! operational error such as an unreadable directory or a bad config file.
//!
//! ```bash
//! docs validate
//! docs validate src/content/docs/codes/e0001.mdx
//! docs --config site/docs.yaml nav --json
//! ```

pub mod categories;
pub mod nav;
pub mod validate;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use docs_schema::{SchemaError, SiteConfig};

/// Resolve the site configuration.
///
/// An explicit path must exist. Otherwise `docs.yaml` is looked up in
/// `site_root`, falling back to defaults when it is absent.
pub fn load_config(explicit: Option<&Path>, site_root: &Path) -> Result<SiteConfig> {
    match explicit {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => SiteConfig::discover(site_root)
            .with_context(|| format!("failed to load config from {}", site_root.display())),
    }
}

/// Write one failed entry, listing each violation on its own line.
pub fn write_failure(
    out: &mut impl Write,
    path: &Path,
    error: &SchemaError,
    content_root: &Path,
) -> io::Result<()> {
    let rel = path.strip_prefix(content_root).unwrap_or(path);
    match error {
        SchemaError::ValidationFailed { violations, .. } => {
            writeln!(out, "  FAIL: {}", rel.display())?;
            for v in violations.violations() {
                writeln!(out, "    {}: {}", v.field, v.reason)?;
            }
            Ok(())
        }
        SchemaError::FrontMatter { source, .. } => {
            writeln!(out, "  FAIL: {}: {source}", rel.display())
        }
        other => writeln!(out, "  FAIL: {}: {other}", rel.display()),
    }
}
