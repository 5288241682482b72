//! # docs CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docs_cli::categories::{run_categories, CategoriesArgs};
use docs_cli::nav::{run_nav, NavArgs};
use docs_cli::validate::{run_validate, ValidateArgs};

/// Documentation site toolchain.
///
/// Validates content front matter against the entry schema and prints the
/// category order and grouped navigation.
#[derive(Parser, Debug)]
#[command(name = "docs", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the site configuration file (default: ./docs.yaml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate content front matter against the entry schema.
    Validate(ValidateArgs),

    /// Print the category names in display order.
    Categories(CategoriesArgs),

    /// Print the grouped navigation of the collection.
    Nav(NavArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("docs CLI starting");

    match run(cli.command, cli.config.as_deref()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Commands, config_path: Option<&Path>) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Commands::Categories(args) = &command {
        return run_categories(args, &mut out);
    }

    let site_root = std::env::current_dir()?;
    let config = docs_cli::load_config(config_path, &site_root)?;
    tracing::debug!(content_dir = %config.content_dir.display(), "resolved content directory");

    match command {
        Commands::Validate(args) => run_validate(&args, &config, &mut out),
        Commands::Nav(args) => run_nav(&args, &config, &mut out),
        Commands::Categories(args) => run_categories(&args, &mut out),
    }
}
