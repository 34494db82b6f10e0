//! # Validate Subcommand
//!
//! The strict surface for catalog authors: prints every structural
//! defect the integrity check finds and exits non-zero if there are any.
//! (Loading itself is tolerant — see `budquest-catalog` — so a defective
//! catalog still browses; this command is how you find out it is
//! defective.)

use anyhow::Result;
use clap::Args;

use budquest_core::Catalog;

/// Arguments for the `budquest validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Emit the defect list as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, catalog: Catalog) -> Result<u8> {
    let defects = catalog.integrity();

    if args.json {
        let messages: Vec<String> = defects.iter().map(|d| d.to_string()).collect();
        println!("{}", serde_json::to_string_pretty(&messages)?);
    } else if defects.is_empty() {
        println!(
            "catalog OK: {} continents, {} countries, {} cities",
            catalog.continent_count(),
            catalog.country_count(),
            catalog.city_count()
        );
    } else {
        for defect in &defects {
            eprintln!("defect: {defect}");
        }
        eprintln!("{} defect(s) found", defects.len());
    }

    Ok(if defects.is_empty() { 0 } else { 1 })
}
