//! # Presentation Stage
//!
//! Pure mapping from `(navigation state, filtered catalog)` to a view
//! model. View models are plain serializable data — no fetching, no
//! filtering beyond what the filter stage already computed, no mutation.
//! A host renders them however it likes (the CLI prints text or JSON).
//!
//! ## No-Results Is a State
//!
//! A non-empty query that filters the catalog to nothing produces the
//! explicit [`ViewModel::NoResults`] variant, never an empty continents
//! list that a host could mistake for a valid-but-sparse catalog.

use serde::Serialize;

use budquest_core::{
    CitySlug, Continent, ContinentId, Country, CountrySlug, LegalStatus, Region, RegionSlug,
};

use crate::filter::filter;
use crate::nav::{Browser, View};

/// Maximum characters in the short description on a country card.
pub const SUMMARY_MAX_CHARS: usize = 120;

// ---------------------------------------------------------------------------
// View Models
// ---------------------------------------------------------------------------

/// A rendered view: exactly one variant per navigation state, plus the
/// explicit no-results state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    /// The top-level continent grid.
    Continents(ContinentsView),
    /// A non-empty query matched nothing.
    NoResults(NoResultsView),
    /// Countries of the selected continent.
    Countries(CountriesView),
    /// One country's guide page.
    CountryDetail(CountryDetailView),
    /// One region's city list.
    RegionDetail(RegionDetailView),
}

/// The continent grid, post-filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentsView {
    /// The active query (possibly empty).
    pub query: String,
    /// One card per continent with at least one matching country.
    pub cards: Vec<ContinentCard>,
}

/// The explicit empty-result state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoResultsView {
    /// The query that matched nothing, trimmed.
    pub query: String,
}

/// One continent card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentCard {
    /// Continent identifier (drill-down target).
    pub id: ContinentId,
    /// Display name.
    pub name: String,
    /// Card glyph.
    pub glyph: String,
    /// Card description.
    pub description: String,
    /// Count of countries currently matching the filter — not the
    /// continent's full count.
    pub matching_countries: usize,
}

/// Link back to the ancestor view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Human label for the link (e.g., the parent's display name).
    pub label: String,
    /// Canonical name of the view the link returns to.
    pub target: &'static str,
}

/// The country list of one continent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountriesView {
    /// Back to the continent grid.
    pub breadcrumb: Breadcrumb,
    /// Selected continent's display name.
    pub continent: String,
    /// Selected continent's glyph.
    pub glyph: String,
    /// One card per country, in catalog order.
    pub cards: Vec<CountryCard>,
}

/// One country card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCard {
    /// Country identifier (drill-down target).
    pub slug: CountrySlug,
    /// Display name.
    pub name: String,
    /// Flag glyph.
    pub flag: String,
    /// Legal-status classification.
    pub status: LegalStatus,
    /// Badge label derived from the classification.
    pub badge: &'static str,
    /// Description truncated to [`SUMMARY_MAX_CHARS`].
    pub summary: String,
    /// Card image asset reference. Decoration only.
    pub image_ref: String,
}

/// One country's guide page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDetailView {
    /// Back to the continent's country list.
    pub breadcrumb: Breadcrumb,
    /// Display name.
    pub name: String,
    /// Flag glyph.
    pub flag: String,
    /// Legal-status classification.
    pub status: LegalStatus,
    /// Badge label derived from the classification.
    pub badge: &'static str,
    /// Full description.
    pub description: String,
    /// What travelers may carry.
    pub possession_rule: String,
    /// What applies at airports and borders.
    pub airport_rule: String,
    /// One practical tip.
    pub traveler_tip: String,
    /// The country's regions with their city counts, in catalog order.
    pub regions: Vec<RegionSummary>,
}

/// One region row on the country page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    /// Region identifier (drill-down target).
    pub slug: RegionSlug,
    /// Display name.
    pub name: String,
    /// Number of cities in the region.
    pub city_count: usize,
}

/// One region's city list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionDetailView {
    /// Back to the country page.
    pub breadcrumb: Breadcrumb,
    /// The country's display name.
    pub country: String,
    /// The region's display name.
    pub region: String,
    /// Cities with their facts, in catalog order.
    pub cities: Vec<CityView>,
}

/// One city entry with its at-a-glance facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityView {
    /// City identifier.
    pub slug: CitySlug,
    /// Display name.
    pub name: String,
    /// Facts in display order, verbatim.
    pub facts: Vec<String>,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

impl Browser {
    /// Render the current state to a view model.
    ///
    /// Goes through [`Browser::resolved_view`], so a selection that no
    /// longer dereferences renders its nearest valid ancestor instead of
    /// failing.
    pub fn render(&self) -> ViewModel {
        match self.resolved_view() {
            View::Continents => self.render_continents(),
            View::Countries { continent } => match self.catalog().continent(&continent) {
                Some(cont) => render_countries(cont),
                None => self.render_continents(),
            },
            View::CountryDetail { continent, country } => {
                match self.catalog().continent(&continent) {
                    Some(cont) => match cont.country(&country) {
                        Some(ctry) => render_country_detail(cont, ctry),
                        None => render_countries(cont),
                    },
                    None => self.render_continents(),
                }
            }
            View::RegionDetail {
                continent,
                country,
                region,
            } => match self.catalog().continent(&continent) {
                Some(cont) => match cont.country(&country) {
                    Some(ctry) => match ctry.region(&region) {
                        Some(reg) => render_region_detail(ctry, reg),
                        None => render_country_detail(cont, ctry),
                    },
                    None => render_countries(cont),
                },
                None => self.render_continents(),
            },
        }
    }

    /// The top-level grid: filter, then either cards or the explicit
    /// no-results state.
    fn render_continents(&self) -> ViewModel {
        let filtered = filter(self.catalog(), self.query());
        let trimmed = self.query().trim();
        if !trimmed.is_empty() && filtered.continents.is_empty() {
            return ViewModel::NoResults(NoResultsView {
                query: trimmed.to_string(),
            });
        }
        let cards = filtered
            .continents
            .iter()
            .map(|continent| ContinentCard {
                id: continent.id.clone(),
                name: continent.name.clone(),
                glyph: continent.glyph.clone(),
                description: continent.description.clone(),
                matching_countries: continent.countries.len(),
            })
            .collect();
        ViewModel::Continents(ContinentsView {
            query: self.query().to_string(),
            cards,
        })
    }
}

fn render_countries(continent: &Continent) -> ViewModel {
    let cards = continent
        .countries
        .iter()
        .map(|country| CountryCard {
            slug: country.slug.clone(),
            name: country.name.clone(),
            flag: country.flag.clone(),
            status: country.legal_status,
            badge: country.legal_status.badge(),
            summary: summarize(&country.description, SUMMARY_MAX_CHARS),
            image_ref: country.image_ref.clone(),
        })
        .collect();
    ViewModel::Countries(CountriesView {
        breadcrumb: Breadcrumb {
            label: "All continents".to_string(),
            target: "continents",
        },
        continent: continent.name.clone(),
        glyph: continent.glyph.clone(),
        cards,
    })
}

fn render_country_detail(continent: &Continent, country: &Country) -> ViewModel {
    let regions = country
        .regions
        .iter()
        .map(|region| RegionSummary {
            slug: region.slug.clone(),
            name: region.name.clone(),
            city_count: region.cities.len(),
        })
        .collect();
    ViewModel::CountryDetail(CountryDetailView {
        breadcrumb: Breadcrumb {
            label: continent.name.clone(),
            target: "countries",
        },
        name: country.name.clone(),
        flag: country.flag.clone(),
        status: country.legal_status,
        badge: country.legal_status.badge(),
        description: country.description.clone(),
        possession_rule: country.possession_rule.clone(),
        airport_rule: country.airport_rule.clone(),
        traveler_tip: country.traveler_tip.clone(),
        regions,
    })
}

fn render_region_detail(country: &Country, region: &Region) -> ViewModel {
    let cities = region
        .cities
        .iter()
        .map(|city| CityView {
            slug: city.slug.clone(),
            name: city.name.clone(),
            facts: city.facts.clone(),
        })
        .collect();
    ViewModel::RegionDetail(RegionDetailView {
        breadcrumb: Breadcrumb {
            label: country.name.clone(),
            target: "country-detail",
        },
        country: country.name.clone(),
        region: region.name.clone(),
        cities,
    })
}

/// Truncate a description on a char boundary, appending an ellipsis when
/// anything was cut.
fn summarize(description: &str, max_chars: usize) -> String {
    if description.chars().count() <= max_chars {
        return description.to_string();
    }
    let cut: String = description.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
