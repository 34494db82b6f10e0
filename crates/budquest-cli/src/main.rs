//! # budquest CLI entry point
//!
//! Parses command-line arguments, initializes tracing, loads the catalog
//! once, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budquest_cli::browse::{run_browse, BrowseArgs};
use budquest_cli::search::{run_search, SearchArgs};
use budquest_cli::show::{run_show, ShowArgs};
use budquest_cli::validate::{run_validate, ValidateArgs};

/// BudQuest — the world cannabis-travel guide browser.
///
/// Browse the destination catalog continent by continent, search it by
/// country or city name, jump straight to a guide page, or validate a
/// catalog file before shipping it.
#[derive(Parser, Debug)]
#[command(name = "budquest", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a catalog YAML file. Defaults to the built-in world dataset.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search the catalog by country name, description, or city name.
    Search(SearchArgs),

    /// Jump straight to a continent, country, or region view.
    Show(ShowArgs),

    /// Browse interactively: drill down with numbers, search with /text.
    Browse(BrowseArgs),

    /// Check a catalog's structural invariants.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let catalog = match budquest_cli::load_catalog(cli.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Search(args) => run_search(&args, catalog),
        Commands::Show(args) => run_show(&args, catalog),
        Commands::Browse(args) => run_browse(&args, catalog),
        Commands::Validate(args) => run_validate(&args, catalog),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
