//! # Browse Subcommand — Interactive Drill-Down
//!
//! A line-oriented REPL over the browser state machine. Every input line
//! is one discrete, atomic state update; the view re-renders after each.
//!
//! ## Commands
//!
//! - `1`, `2`, … — select the Nth child of the current view
//! - `/denver`  — set the search query (top-level filter)
//! - `/`        — clear the query
//! - `b`        — back one level
//! - `?`        — help
//! - `q`        — quit

use std::io::BufRead;

use anyhow::Result;
use clap::Args;

use budquest_browser::{Browser, ViewModel};
use budquest_core::Catalog;

use crate::render::format_view;

/// Arguments for the `budquest browse` subcommand.
#[derive(Args, Debug)]
pub struct BrowseArgs {}

const HELP: &str = "\
commands: <number> select · /text search · / clear search · b back · ? help · q quit";

/// One parsed REPL input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Select the 1-based Nth child of the current view.
    Select(usize),
    /// Set the search query.
    Query(String),
    /// Clear the search query.
    ClearQuery,
    /// Pop one level.
    Back,
    /// Show the command help.
    Help,
    /// Leave the REPL.
    Quit,
    /// Blank line: just re-render.
    Redraw,
    /// Anything else.
    Unknown(String),
}

/// What applying a command asks the loop to do next.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplEffect {
    /// Re-render the view and keep reading.
    Continue,
    /// Print a message, then keep reading without re-rendering.
    Message(String),
    /// Stop the loop.
    Quit,
}

/// Parse one input line.
pub fn parse_command(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    match trimmed {
        "" => ReplCommand::Redraw,
        "b" | "back" => ReplCommand::Back,
        "q" | "quit" | "exit" => ReplCommand::Quit,
        "?" | "help" => ReplCommand::Help,
        "/" => ReplCommand::ClearQuery,
        _ => {
            if let Some(query) = trimmed.strip_prefix('/') {
                ReplCommand::Query(query.trim().to_string())
            } else if let Ok(n) = trimmed.parse::<usize>() {
                ReplCommand::Select(n)
            } else {
                ReplCommand::Unknown(trimmed.to_string())
            }
        }
    }
}

/// Apply one command to the browser.
pub fn apply_command(browser: &mut Browser, command: &ReplCommand) -> ReplEffect {
    match command {
        ReplCommand::Redraw => ReplEffect::Continue,
        ReplCommand::Help => ReplEffect::Message(HELP.to_string()),
        ReplCommand::Quit => ReplEffect::Quit,
        ReplCommand::Back => {
            if browser.back() {
                ReplEffect::Continue
            } else {
                ReplEffect::Message("already at the top level".to_string())
            }
        }
        ReplCommand::Query(query) => {
            browser.set_query(query.clone());
            ReplEffect::Continue
        }
        ReplCommand::ClearQuery => {
            browser.clear_query();
            ReplEffect::Continue
        }
        ReplCommand::Select(n) => select_nth(browser, *n),
        ReplCommand::Unknown(input) => {
            ReplEffect::Message(format!("unrecognized input {input:?} — try ? for help"))
        }
    }
}

/// Select the Nth child of whatever is currently rendered. Selection
/// targets come from the rendered view, so the filter applies at the top
/// level exactly as displayed.
fn select_nth(browser: &mut Browser, n: usize) -> ReplEffect {
    if n == 0 {
        return ReplEffect::Message("selection starts at 1".to_string());
    }
    let index = n - 1;
    let result = match browser.render() {
        ViewModel::Continents(view) => match view.cards.get(index) {
            Some(card) => browser.select_continent(card.id.clone()),
            None => return out_of_range(view.cards.len()),
        },
        ViewModel::Countries(view) => match view.cards.get(index) {
            Some(card) => browser.select_country(card.slug.clone()),
            None => return out_of_range(view.cards.len()),
        },
        ViewModel::CountryDetail(view) => match view.regions.get(index) {
            Some(region) => browser.select_region(region.slug.clone()),
            None => return out_of_range(view.regions.len()),
        },
        ViewModel::RegionDetail(_) | ViewModel::NoResults(_) => {
            return ReplEffect::Message("nothing to select here".to_string());
        }
    };
    match result {
        Ok(()) => ReplEffect::Continue,
        // Selections come from the rendered view, so this indicates the
        // catalog changed underneath us; the browser has already clamped.
        Err(err) => ReplEffect::Message(err.to_string()),
    }
}

fn out_of_range(len: usize) -> ReplEffect {
    ReplEffect::Message(format!("pick a number between 1 and {len}"))
}

/// Execute the browse subcommand: read stdin line by line until quit/EOF.
pub fn run_browse(_args: &BrowseArgs, catalog: Catalog) -> Result<u8> {
    let mut browser = Browser::new(catalog);
    println!("{HELP}\n");
    print!("{}", format_view(&browser.render()));

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match apply_command(&mut browser, &parse_command(&line)) {
            ReplEffect::Continue => {
                println!();
                print!("{}", format_view(&browser.render()));
            }
            ReplEffect::Message(message) => println!("{message}"),
            ReplEffect::Quit => break,
        }
    }
    Ok(0)
}
