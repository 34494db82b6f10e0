//! # budquest-cli — Command Handlers
//!
//! One module per subcommand, each exposing an `Args` struct (clap
//! derive) and a `run_*` handler returning the process exit code.
//! `main` parses, loads the catalog once, and dispatches.

use std::path::Path;

use anyhow::Context;
use budquest_core::Catalog;

pub mod browse;
pub mod render;
pub mod search;
pub mod show;
pub mod validate;

/// Load the catalog the command will browse: an operator-supplied file
/// when `--catalog` was given, the built-in world dataset otherwise.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => budquest_catalog::load_file(path)
            .with_context(|| format!("loading catalog from {}", path.display())),
        None => budquest_catalog::builtin().context("loading built-in catalog"),
    }
}
