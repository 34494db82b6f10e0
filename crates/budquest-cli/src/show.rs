//! # Show Subcommand
//!
//! Drills straight to a view by path — continent, optional country,
//! optional region — and prints it. The same validation as interactive
//! navigation applies: each path component must be a child of the one
//! before it.

use anyhow::{Context, Result};
use clap::Args;

use budquest_browser::Browser;
use budquest_core::{Catalog, ContinentId, CountrySlug, RegionSlug};

use crate::render::format_view;

/// Arguments for the `budquest show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Continent id (e.g., `europe`).
    pub continent: String,

    /// Country slug within the continent (e.g., `netherlands`).
    pub country: Option<String>,

    /// Region slug within the country (e.g., `north-holland`).
    pub region: Option<String>,

    /// Emit the view model as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs, catalog: Catalog) -> Result<u8> {
    let mut browser = Browser::new(catalog);

    let continent = ContinentId::new(&args.continent)?;
    browser
        .select_continent(continent)
        .with_context(|| format!("showing continent {}", args.continent))?;

    if let Some(country) = &args.country {
        let slug = CountrySlug::new(country)?;
        browser
            .select_country(slug)
            .with_context(|| format!("showing country {country}"))?;
    }

    if let Some(region) = &args.region {
        let slug = RegionSlug::new(region)?;
        browser
            .select_region(slug)
            .with_context(|| format!("showing region {region}"))?;
    }

    let view = browser.render();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", format_view(&view));
    }
    Ok(0)
}
