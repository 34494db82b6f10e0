//! # Catalog Acquisition Errors
//!
//! Errors raised while parsing or loading catalog data. Integrity
//! *defects* are deliberately not errors — a defective catalog still
//! loads (see [`crate::from_yaml_str`]) and the defects are reported
//! through logging and the `validate` command instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from catalog parsing and file loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog YAML could not be parsed into the data model.
    #[error("failed to parse catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
