//! # Search/Filter Stage
//!
//! A pure function from `(catalog, query)` to the subset of continents
//! relevant to the query. Filtering happens at country granularity only:
//! a matched country keeps every region and city it started with, and a
//! continent survives only if at least one of its countries matched.
//!
//! ## Matching
//!
//! A non-empty query matches a country when, after trimming and
//! lowercasing, it is a substring of the country name, the country
//! description, or the name of any city nested anywhere under the
//! country. Legal-status classifications, rules, and tips are display
//! metadata and are never searched.
//!
//! ## Algebra
//!
//! - Empty or whitespace-only queries are the identity: the result
//!   equals the source catalog, no country dropped.
//! - Filtering is idempotent for a fixed query.
//! - Relative ordering of everything that survives matches the source.

use budquest_core::{Catalog, Continent, Country};

/// Filter a catalog down to the continents and countries relevant to a
/// free-text query. Returns a new catalog value; the source is untouched.
pub fn filter(catalog: &Catalog, query: &str) -> Catalog {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.clone();
    }

    let continents = catalog
        .continents
        .iter()
        .filter_map(|continent| {
            let countries: Vec<Country> = continent
                .countries
                .iter()
                .filter(|country| country_matches(country, &needle))
                .cloned()
                .collect();
            if countries.is_empty() {
                None
            } else {
                Some(Continent {
                    countries,
                    ..continent.clone()
                })
            }
        })
        .collect();

    Catalog { continents }
}

/// Case-insensitive substring match over a country's searched text.
/// `needle` must already be trimmed and lowercased.
fn country_matches(country: &Country, needle: &str) -> bool {
    country.name.to_lowercase().contains(needle)
        || country.description.to_lowercase().contains(needle)
        || country
            .regions
            .iter()
            .flat_map(|region| &region.cities)
            .any(|city| city.name.to_lowercase().contains(needle))
}
