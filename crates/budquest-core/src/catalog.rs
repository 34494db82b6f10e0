//! # Destination Catalog — Immutable Nested Data Model
//!
//! The catalog is the single root of the browser's data: an ordered
//! sequence of continents, each holding countries, regions, and cities.
//! It is constructed once by the host application (from the built-in
//! dataset or an injected catalog file) and read for the lifetime of a
//! browsing session. Nothing in this module mutates a catalog.
//!
//! ```text
//! Catalog
//! └── continents (ordered)
//!     └── Continent { id, name, glyph, description }
//!         └── countries (ordered)
//!             └── Country { slug, name, legal_status, rules, description, … }
//!                 └── regions (ordered, non-empty)
//!                     └── Region { slug, name }
//!                         └── cities (ordered, non-empty)
//!                             └── City { slug, name, facts (ordered) }
//! ```
//!
//! ## Invariants
//!
//! - Identifiers are unique among siblings (not globally).
//! - Every `regions` and `cities` sequence is non-empty.
//! - `facts` order is display order and is preserved verbatim.
//!
//! Violations are *data* defects, not programming errors:
//! [`Catalog::integrity`] reports them as structured [`IntegrityDefect`]s
//! and rendering degrades gracefully around them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::{CitySlug, ContinentId, CountrySlug, RegionSlug};
use crate::status::LegalStatus;

// ---------------------------------------------------------------------------
// Node Types
// ---------------------------------------------------------------------------

/// A city: the leaf of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City identifier, unique among its region's cities.
    pub slug: CitySlug,
    /// Display name.
    pub name: String,
    /// At-a-glance facts, shown verbatim in display order.
    #[serde(default)]
    pub facts: Vec<String>,
}

/// A state or region within a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region identifier, unique among its country's regions.
    pub slug: RegionSlug,
    /// Display name.
    pub name: String,
    /// Cities in display order. Must be non-empty in valid data.
    pub cities: Vec<City>,
}

/// A country and its traveler-facing legal metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Country identifier, unique among its continent's countries.
    pub slug: CountrySlug,
    /// Display name.
    pub name: String,
    /// Legal-status classification for the badge. Display metadata only.
    pub legal_status: LegalStatus,
    /// What travelers may carry.
    pub possession_rule: String,
    /// What applies at airports and borders.
    pub airport_rule: String,
    /// One practical tip for visitors.
    pub traveler_tip: String,
    /// Full description shown on the country page.
    pub description: String,
    /// Reference to the card image asset. Presentation-only decoration;
    /// never part of identity or matching.
    #[serde(default)]
    pub image_ref: String,
    /// Flag glyph shown next to the name.
    #[serde(default)]
    pub flag: String,
    /// Regions in display order. Must be non-empty in valid data.
    pub regions: Vec<Region>,
}

impl Country {
    /// Look up a region by slug.
    pub fn region(&self, slug: &RegionSlug) -> Option<&Region> {
        self.regions.iter().find(|r| r.slug == *slug)
    }

    /// Total number of cities across all regions.
    pub fn city_count(&self) -> usize {
        self.regions.iter().map(|r| r.cities.len()).sum()
    }
}

impl Region {
    /// Look up a city by slug.
    pub fn city(&self, slug: &CitySlug) -> Option<&City> {
        self.cities.iter().find(|c| c.slug == *slug)
    }
}

/// A continent grouping countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    /// Continent identifier, unique across the catalog.
    pub id: ContinentId,
    /// Display name.
    pub name: String,
    /// Glyph shown on the continent card.
    #[serde(default)]
    pub glyph: String,
    /// Short description shown on the continent card.
    pub description: String,
    /// Countries in display order. May be empty (a continent with no
    /// coverage yet), though such a continent never survives filtering.
    #[serde(default)]
    pub countries: Vec<Country>,
}

impl Continent {
    /// Look up a country by slug.
    pub fn country(&self, slug: &CountrySlug) -> Option<&Country> {
        self.countries.iter().find(|c| c.slug == *slug)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The full destination catalog: the ordered sequence of all continents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Continents in display order.
    pub continents: Vec<Continent>,
}

impl Catalog {
    /// Look up a continent by id.
    pub fn continent(&self, id: &ContinentId) -> Option<&Continent> {
        self.continents.iter().find(|c| c.id == *id)
    }

    /// Number of continents.
    pub fn continent_count(&self) -> usize {
        self.continents.len()
    }

    /// Total number of countries across all continents.
    pub fn country_count(&self) -> usize {
        self.continents.iter().map(|c| c.countries.len()).sum()
    }

    /// Total number of cities across the whole catalog.
    pub fn city_count(&self) -> usize {
        self.continents
            .iter()
            .flat_map(|c| &c.countries)
            .map(Country::city_count)
            .sum()
    }

    /// Check the catalog's structural invariants and report every
    /// violation found. An empty report means the catalog is well-formed.
    ///
    /// Integrity checking never mutates and never panics; a defective
    /// node stays in the catalog and the presentation stage degrades
    /// around it.
    pub fn integrity(&self) -> Vec<IntegrityDefect> {
        let mut defects = Vec::new();

        let mut continent_ids = HashSet::new();
        for continent in &self.continents {
            if !continent_ids.insert(&continent.id) {
                defects.push(IntegrityDefect::DuplicateContinentId {
                    id: continent.id.clone(),
                });
            }

            let mut country_slugs = HashSet::new();
            for country in &continent.countries {
                if !country_slugs.insert(&country.slug) {
                    defects.push(IntegrityDefect::DuplicateCountrySlug {
                        continent: continent.id.clone(),
                        slug: country.slug.clone(),
                    });
                }
                if country.regions.is_empty() {
                    defects.push(IntegrityDefect::CountryWithoutRegions {
                        continent: continent.id.clone(),
                        slug: country.slug.clone(),
                    });
                }

                let mut region_slugs = HashSet::new();
                for region in &country.regions {
                    if !region_slugs.insert(&region.slug) {
                        defects.push(IntegrityDefect::DuplicateRegionSlug {
                            country: country.slug.clone(),
                            slug: region.slug.clone(),
                        });
                    }
                    if region.cities.is_empty() {
                        defects.push(IntegrityDefect::RegionWithoutCities {
                            country: country.slug.clone(),
                            slug: region.slug.clone(),
                        });
                    }

                    let mut city_slugs = HashSet::new();
                    for city in &region.cities {
                        if !city_slugs.insert(&city.slug) {
                            defects.push(IntegrityDefect::DuplicateCitySlug {
                                region: region.slug.clone(),
                                slug: city.slug.clone(),
                            });
                        }
                    }
                }
            }
        }

        defects
    }
}

// ---------------------------------------------------------------------------
// Integrity Defects
// ---------------------------------------------------------------------------

/// A structural invariant violation found in catalog data.
///
/// Defects are reported, not thrown: the browser keeps working with a
/// defective catalog and the `validate` command surfaces the report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityDefect {
    /// Two continents share an id.
    #[error("duplicate continent id: {id}")]
    DuplicateContinentId {
        /// The repeated identifier.
        id: ContinentId,
    },

    /// Two countries in the same continent share a slug.
    #[error("duplicate country slug {slug} in continent {continent}")]
    DuplicateCountrySlug {
        /// Continent containing the collision.
        continent: ContinentId,
        /// The repeated slug.
        slug: CountrySlug,
    },

    /// Two regions in the same country share a slug.
    #[error("duplicate region slug {slug} in country {country}")]
    DuplicateRegionSlug {
        /// Country containing the collision.
        country: CountrySlug,
        /// The repeated slug.
        slug: RegionSlug,
    },

    /// Two cities in the same region share a slug.
    #[error("duplicate city slug {slug} in region {region}")]
    DuplicateCitySlug {
        /// Region containing the collision.
        region: RegionSlug,
        /// The repeated slug.
        slug: CitySlug,
    },

    /// A country has an empty `regions` sequence.
    #[error("country {slug} in continent {continent} has no regions")]
    CountryWithoutRegions {
        /// Continent containing the country.
        continent: ContinentId,
        /// The empty country.
        slug: CountrySlug,
    },

    /// A region has an empty `cities` sequence.
    #[error("region {slug} in country {country} has no cities")]
    RegionWithoutCities {
        /// Country containing the region.
        country: CountrySlug,
        /// The empty region.
        slug: RegionSlug,
    },
}
