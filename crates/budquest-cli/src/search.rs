//! # Search Subcommand
//!
//! Runs the filter stage over the catalog and prints the matching
//! continents, or the explicit no-results state. Exit code follows the
//! grep convention: 0 when something matched, 1 when nothing did.

use anyhow::Result;
use clap::Args;

use budquest_browser::{Browser, ViewModel};
use budquest_core::Catalog;

use crate::render::format_view;

/// Arguments for the `budquest search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query: country name, description text, or city name.
    pub query: String,

    /// Emit the view model as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the search subcommand.
pub fn run_search(args: &SearchArgs, catalog: Catalog) -> Result<u8> {
    let mut browser = Browser::new(catalog);
    browser.set_query(&args.query);
    let view = browser.render();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_view(&view));
    }

    Ok(match view {
        ViewModel::NoResults(_) => 1,
        _ => 0,
    })
}
