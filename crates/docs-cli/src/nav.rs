//! # Nav Subcommand
//!
//! Validates the collection and prints its grouped navigation. Navigation is
//! only produced for a fully valid collection.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use docs_schema::{load_collection, NavSection, SiteConfig, UngroupedPlacement};

use crate::write_failure;

/// Placement of the ungrouped section, overriding `docs.yaml`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementArg {
    First,
    Last,
}

impl From<PlacementArg> for UngroupedPlacement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::First => UngroupedPlacement::First,
            PlacementArg::Last => UngroupedPlacement::Last,
        }
    }
}

/// Arguments for the `docs nav` subcommand.
#[derive(Args, Debug)]
pub struct NavArgs {
    /// Emit JSON instead of an indented outline.
    #[arg(long)]
    pub json: bool,

    /// Where to place entries without a group.
    #[arg(long, value_enum)]
    pub ungrouped: Option<PlacementArg>,
}

#[derive(Serialize)]
struct NavOutput<'a> {
    collection: &'a str,
    sections: Vec<NavSection<'a>>,
}

/// Execute the nav subcommand.
///
/// Returns exit code: 0 on success, 1 if any entry failed validation.
pub fn run_nav(args: &NavArgs, config: &SiteConfig, out: &mut impl Write) -> Result<u8> {
    let report = load_collection(config)
        .with_context(|| format!("failed to load collection '{}'", config.collection))?;

    if !report.is_clean() {
        writeln!(
            out,
            "Navigation not generated: {} of {} entries failed validation.",
            report.failed, report.total
        )?;
        for failure in &report.failures {
            write_failure(out, &failure.path, &failure.error, &config.content_dir)?;
        }
        return Ok(1);
    }

    let placement = args.ungrouped.map_or(config.ungrouped, UngroupedPlacement::from);
    let collection = report.collection;
    let sections = collection.navigation(placement);
    tracing::debug!(sections = sections.len(), ?placement, "built navigation");

    if args.json {
        let output = NavOutput {
            collection: &collection.name,
            sections,
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        return Ok(0);
    }

    for section in &sections {
        match section.group {
            Some(group) => writeln!(out, "{group}")?,
            None => writeln!(out, "(ungrouped)")?,
        }
        for entry in &section.entries {
            writeln!(out, "  {}  /{}", entry.data.title, entry.slug)?;
        }
    }
    Ok(0)
}
