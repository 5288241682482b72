//! # Categories Subcommand
//!
//! Prints the category names in display order, for templates and scripts
//! that need the same ordering the navigation uses.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use docs_core::categories;

/// Arguments for the `docs categories` subcommand.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Emit a JSON array instead of one name per line.
    #[arg(long)]
    pub json: bool,
}

/// Execute the categories subcommand.
pub fn run_categories(args: &CategoriesArgs, out: &mut impl Write) -> Result<u8> {
    if args.json {
        serde_json::to_writer(&mut *out, categories())?;
        writeln!(out)?;
    } else {
        for category in categories() {
            writeln!(out, "{category}")?;
        }
    }
    Ok(0)
}
