//! # Validate Subcommand
//!
//! Validates content front matter against the entry schema.
//!
//! Schema validation is the gate in front of rendering. Every content file
//! must pass before the site build may proceed; a failing file is reported
//! with all of its violations, never silently skipped.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use docs_schema::{load_collection, load_entry, SchemaError, SiteConfig};

use crate::write_failure;

/// Arguments for the `docs validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Content file or directory to validate. Defaults to the configured
    /// content directory.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure.
pub fn run_validate(args: &ValidateArgs, config: &SiteConfig, out: &mut impl Write) -> Result<u8> {
    match &args.path {
        Some(path) if path.is_file() => validate_single_file(path, config, out),
        Some(dir) => {
            let mut scoped = config.clone();
            scoped.content_dir = dir.clone();
            validate_collection(&scoped, out)
        }
        None => validate_collection(config, out),
    }
}

fn validate_collection(config: &SiteConfig, out: &mut impl Write) -> Result<u8> {
    let report = load_collection(config)
        .with_context(|| format!("failed to load collection '{}'", config.collection))?;

    tracing::info!(collection = %config.collection, "validated collection");
    writeln!(out, "Entries: {}/{} passed", report.passed, report.total)?;

    for failure in &report.failures {
        write_failure(out, &failure.path, &failure.error, &config.content_dir)?;
    }

    if report.failed > 0 {
        writeln!(
            out,
            "\n{} entry(s) failed validation out of {} total.",
            report.failed, report.total
        )?;
        Ok(1)
    } else {
        Ok(0)
    }
}

fn validate_single_file(path: &Path, config: &SiteConfig, out: &mut impl Write) -> Result<u8> {
    // Relative and absolute spellings of the same file must share one id.
    let file = path
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", path.display()))?;
    let content_dir = config.content_dir.canonicalize().ok();
    let root = match content_dir {
        Some(dir) if file.starts_with(&dir) => dir,
        _ => file
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
    };

    match load_entry(&file, &root) {
        Ok(entry) => {
            let group = entry.data.group.map_or("ungrouped", |g| g.as_str());
            writeln!(out, "OK: {} ({group})", entry.id)?;
            Ok(0)
        }
        Err(err @ SchemaError::DocumentLoadError { .. }) => {
            Err(err).with_context(|| format!("failed to read {}", path.display()))
        }
        Err(err) => {
            write_failure(out, &file, &err, &root)?;
            Ok(1)
        }
    }
}
