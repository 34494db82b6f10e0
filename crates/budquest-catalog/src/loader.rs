//! # Catalog Loading
//!
//! Parses catalogs from YAML and exposes the built-in world dataset.
//!
//! ## Degrade, Don't Abort
//!
//! Structural invariant violations (a country with no regions, duplicate
//! sibling slugs) are data defects, not load failures. Loading logs one
//! warning per defect and returns the catalog anyway; the browser's
//! presentation stage renders around defective nodes. The CLI `validate`
//! command is the strict surface for catalog authors.

use std::path::Path;

use budquest_core::Catalog;

use crate::error::CatalogError;

/// The world destination dataset shipped with the crate.
const WORLD_YAML: &str = include_str!("../data/world.yaml");

/// Parse a catalog from a YAML string.
///
/// Integrity defects are logged at `warn` level and do not fail the
/// parse.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the YAML does not deserialize into
/// the catalog data model.
pub fn from_yaml_str(yaml: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yaml::from_str(yaml)?;
    for defect in catalog.integrity() {
        tracing::warn!(%defect, "catalog integrity defect");
    }
    tracing::debug!(
        continents = catalog.continent_count(),
        countries = catalog.country_count(),
        cities = catalog.city_count(),
        "catalog parsed"
    );
    Ok(catalog)
}

/// Load a catalog from a YAML file on disk.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read, or
/// [`CatalogError::Parse`] if its contents do not deserialize.
pub fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_yaml_str(&yaml)
}

/// The built-in world catalog.
///
/// Parses the dataset embedded at compile time. The host application
/// constructs this once and hands it to the browser; the browser itself
/// holds no global data.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] only if the embedded dataset is
/// malformed, which the test suite rules out.
pub fn builtin() -> Result<Catalog, CatalogError> {
    from_yaml_str(WORLD_YAML)
}
