//! # Navigation State Machine
//!
//! The drill-down state of the browser as a single tagged union. Each
//! variant carries exactly the path components valid for that view, so
//! "country selected while the view says continents" is unrepresentable.
//!
//! ## States and Transitions
//!
//! ```text
//! Continents ──select continent──▶ Countries ──select country──▶ CountryDetail
//!     ▲                               │  ▲                           │   ▲
//!     └───────────back────────────────┘  └──────────back─────────────┘   │
//!                                                                        │
//!                               CountryDetail ──select region──▶ RegionDetail
//!                                        ▲                           │
//!                                        └──────────back────────────┘
//! ```
//!
//! `back` from `Continents` is a no-op; there is no terminal state.
//!
//! ## Invariants
//!
//! - Selections are validated against the catalog and the current view:
//!   a child that does not belong to the current selection is rejected
//!   and the view is left unchanged.
//! - The state machine holds only the path and the catalog reference;
//!   all displayed content is derived by dereferencing the catalog.
//! - A path that stops resolving (catalog swapped underneath the
//!   browser) falls back to the nearest valid ancestor view instead of
//!   dangling — see [`Browser::resolved_view`].

use serde::Serialize;
use thiserror::Error;

use budquest_core::{Catalog, ContinentId, CountrySlug, RegionSlug};

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// The active view plus the selection path that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// The top level: all continents (subject to the search filter).
    Continents,
    /// Countries of one continent.
    Countries {
        /// The selected continent.
        continent: ContinentId,
    },
    /// One country's full guide page.
    CountryDetail {
        /// The selected continent.
        continent: ContinentId,
        /// The selected country.
        country: CountrySlug,
    },
    /// One region's city list.
    RegionDetail {
        /// The selected continent.
        continent: ContinentId,
        /// The selected country.
        country: CountrySlug,
        /// The selected region.
        region: RegionSlug,
    },
}

impl View {
    /// The canonical name of this view (e.g., `continents`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Continents => "continents",
            Self::Countries { .. } => "countries",
            Self::CountryDetail { .. } => "country-detail",
            Self::RegionDetail { .. } => "region-detail",
        }
    }

    /// The view one level up, or `None` at the root.
    ///
    /// Popping discards exactly the deepest path component; ancestors
    /// are retained.
    pub fn parent(&self) -> Option<View> {
        match self {
            Self::Continents => None,
            Self::Countries { .. } => Some(Self::Continents),
            Self::CountryDetail { continent, .. } => Some(Self::Countries {
                continent: continent.clone(),
            }),
            Self::RegionDetail {
                continent, country, ..
            } => Some(Self::CountryDetail {
                continent: continent.clone(),
                country: country.clone(),
            }),
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from navigation operations.
///
/// All selections originate from rendering the current view's own
/// children, so these indicate a programming error in the host — the
/// browser rejects the input and keeps its state unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    /// The selection kind is not a child of the current view (e.g.,
    /// selecting a region from the continents view).
    #[error("cannot select a {expected} from the {view} view")]
    InvalidSelection {
        /// Name of the view the selection was attempted from.
        view: &'static str,
        /// The kind of node the caller tried to select.
        expected: &'static str,
    },

    /// The selected child does not exist under the current selection.
    #[error("no {kind} named {slug} under the current selection")]
    UnknownTarget {
        /// The kind of node that was looked up.
        kind: &'static str,
        /// The identifier that failed to resolve.
        slug: String,
    },
}

// ---------------------------------------------------------------------------
// Browser
// ---------------------------------------------------------------------------

/// The hierarchical region browser: one catalog, one query, one view.
///
/// The catalog is injected at construction and treated as read-only;
/// the query and the view are the only mutable state, and each event
/// handler updates them to completion before the next event (the
/// browser is single-threaded and synchronous by design).
#[derive(Debug, Clone)]
pub struct Browser {
    catalog: Catalog,
    query: String,
    view: View,
}

impl Browser {
    /// Create a browser over a catalog, starting at the continents view
    /// with no filter.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            query: String::new(),
            view: View::Continents,
        }
    }

    /// The catalog this browser reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current free-text query (possibly empty).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The stored view. Prefer [`Browser::resolved_view`] when reading
    /// for display.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Set the search query. Independent of navigation: changing the
    /// query never moves the view, and navigating never clears the query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clear the search query.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Drill into a continent. Valid only from the continents view.
    ///
    /// # Errors
    ///
    /// [`BrowseError::InvalidSelection`] if the current view is not
    /// `Continents`; [`BrowseError::UnknownTarget`] if the continent is
    /// not in the catalog. The view is unchanged on error.
    pub fn select_continent(&mut self, id: ContinentId) -> Result<(), BrowseError> {
        if !matches!(self.view, View::Continents) {
            return Err(BrowseError::InvalidSelection {
                view: self.view.name(),
                expected: "continent",
            });
        }
        if self.catalog.continent(&id).is_none() {
            return Err(BrowseError::UnknownTarget {
                kind: "continent",
                slug: id.to_string(),
            });
        }
        tracing::debug!(continent = %id, "drill into continent");
        self.view = View::Countries { continent: id };
        Ok(())
    }

    /// Drill into a country of the selected continent. Valid only from
    /// the countries view.
    ///
    /// # Errors
    ///
    /// [`BrowseError::InvalidSelection`] if the current view is not
    /// `Countries`; [`BrowseError::UnknownTarget`] if the country is not
    /// a child of the selected continent. The view is unchanged on error.
    pub fn select_country(&mut self, slug: CountrySlug) -> Result<(), BrowseError> {
        let continent = match &self.view {
            View::Countries { continent } => continent.clone(),
            other => {
                return Err(BrowseError::InvalidSelection {
                    view: other.name(),
                    expected: "country",
                });
            }
        };
        let exists = self
            .catalog
            .continent(&continent)
            .and_then(|c| c.country(&slug))
            .is_some();
        if !exists {
            return Err(BrowseError::UnknownTarget {
                kind: "country",
                slug: slug.to_string(),
            });
        }
        tracing::debug!(continent = %continent, country = %slug, "drill into country");
        self.view = View::CountryDetail {
            continent,
            country: slug,
        };
        Ok(())
    }

    /// Drill into a region of the selected country. Valid only from the
    /// country-detail view.
    ///
    /// # Errors
    ///
    /// [`BrowseError::InvalidSelection`] if the current view is not
    /// `CountryDetail`; [`BrowseError::UnknownTarget`] if the region is
    /// not a child of the selected country. The view is unchanged on error.
    pub fn select_region(&mut self, slug: RegionSlug) -> Result<(), BrowseError> {
        let (continent, country) = match &self.view {
            View::CountryDetail { continent, country } => {
                (continent.clone(), country.clone())
            }
            other => {
                return Err(BrowseError::InvalidSelection {
                    view: other.name(),
                    expected: "region",
                });
            }
        };
        let exists = self
            .catalog
            .continent(&continent)
            .and_then(|c| c.country(&country))
            .and_then(|c| c.region(&slug))
            .is_some();
        if !exists {
            return Err(BrowseError::UnknownTarget {
                kind: "region",
                slug: slug.to_string(),
            });
        }
        tracing::debug!(country = %country, region = %slug, "drill into region");
        self.view = View::RegionDetail {
            continent,
            country,
            region: slug,
        };
        Ok(())
    }

    /// Pop one level. Returns `false` (and does nothing) at the root.
    pub fn back(&mut self) -> bool {
        match self.view.parent() {
            Some(parent) => {
                tracing::debug!(from = %self.view, to = %parent, "navigate back");
                self.view = parent;
                true
            }
            None => false,
        }
    }

    /// Replace the catalog, clamping the view to the nearest ancestor
    /// that still resolves against the new data.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        let resolved = self.resolved_view();
        if resolved != self.view {
            tracing::warn!(
                stale = %self.view,
                fallback = %resolved,
                "selection no longer resolves; falling back to ancestor view"
            );
            self.view = resolved;
        }
    }

    /// The deepest prefix of the stored view that resolves against the
    /// catalog. Rendering goes through this, so a dangling selection can
    /// degrade but never crash.
    pub fn resolved_view(&self) -> View {
        let mut view = self.view.clone();
        loop {
            if self.resolves(&view) {
                return view;
            }
            view = match view.parent() {
                Some(parent) => parent,
                None => View::Continents,
            };
        }
    }

    /// Whether every path component of `view` dereferences in the catalog.
    fn resolves(&self, view: &View) -> bool {
        match view {
            View::Continents => true,
            View::Countries { continent } => self.catalog.continent(continent).is_some(),
            View::CountryDetail { continent, country } => self
                .catalog
                .continent(continent)
                .and_then(|c| c.country(country))
                .is_some(),
            View::RegionDetail {
                continent,
                country,
                region,
            } => self
                .catalog
                .continent(continent)
                .and_then(|c| c.country(country))
                .and_then(|c| c.region(region))
                .is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budquest_core::{City, CitySlug, Continent, Country, LegalStatus, Region};

    fn catalog() -> Catalog {
        let city = |slug: &str, name: &str| City {
            slug: CitySlug::new(slug).unwrap(),
            name: name.to_string(),
            facts: vec![],
        };
        Catalog {
            continents: vec![Continent {
                id: ContinentId::new("europa").unwrap(),
                name: "Europa".to_string(),
                glyph: String::new(),
                description: "Fixture.".to_string(),
                countries: vec![Country {
                    slug: CountrySlug::new("lowlands").unwrap(),
                    name: "Lowlands".to_string(),
                    legal_status: LegalStatus::Other,
                    possession_rule: "n/a".to_string(),
                    airport_rule: "n/a".to_string(),
                    traveler_tip: "n/a".to_string(),
                    description: "Fixture country.".to_string(),
                    image_ref: String::new(),
                    flag: String::new(),
                    regions: vec![Region {
                        slug: RegionSlug::new("polder").unwrap(),
                        name: "Polder".to_string(),
                        cities: vec![city("canalport", "Canalport")],
                    }],
                }],
            }],
        }
    }

    fn continent() -> ContinentId {
        ContinentId::new("europa").unwrap()
    }

    fn country() -> CountrySlug {
        CountrySlug::new("lowlands").unwrap()
    }

    fn region() -> RegionSlug {
        RegionSlug::new("polder").unwrap()
    }

    // -- Drill-down and back --

    #[test]
    fn initial_view_is_continents() {
        let browser = Browser::new(catalog());
        assert_eq!(*browser.view(), View::Continents);
        assert_eq!(browser.view().name(), "continents");
    }

    #[test]
    fn full_drilldown_and_back_out() {
        let mut browser = Browser::new(catalog());
        browser.select_continent(continent()).unwrap();
        browser.select_country(country()).unwrap();
        browser.select_region(region()).unwrap();
        assert_eq!(browser.view().name(), "region-detail");

        assert!(browser.back());
        assert_eq!(browser.view().name(), "country-detail");
        assert!(browser.back());
        assert_eq!(browser.view().name(), "countries");
        assert!(browser.back());
        assert_eq!(*browser.view(), View::Continents);
    }

    #[test]
    fn back_at_root_is_noop() {
        let mut browser = Browser::new(catalog());
        assert!(!browser.back());
        assert_eq!(*browser.view(), View::Continents);
    }

    #[test]
    fn select_then_back_restores_initial_state() {
        let mut browser = Browser::new(catalog());
        let initial = browser.view().clone();
        browser.select_continent(continent()).unwrap();
        browser.back();
        assert_eq!(*browser.view(), initial);
    }

    #[test]
    fn back_retains_ancestors() {
        let mut browser = Browser::new(catalog());
        browser.select_continent(continent()).unwrap();
        browser.select_country(country()).unwrap();
        browser.select_region(region()).unwrap();
        browser.back();
        assert_eq!(
            *browser.view(),
            View::CountryDetail {
                continent: continent(),
                country: country(),
            }
        );
    }

    // -- Rejected selections --

    #[test]
    fn select_country_from_root_is_rejected() {
        let mut browser = Browser::new(catalog());
        let err = browser.select_country(country()).unwrap_err();
        assert_eq!(
            err,
            BrowseError::InvalidSelection {
                view: "continents",
                expected: "country",
            }
        );
        assert_eq!(*browser.view(), View::Continents);
    }

    #[test]
    fn select_region_from_countries_is_rejected() {
        let mut browser = Browser::new(catalog());
        browser.select_continent(continent()).unwrap();
        assert!(browser.select_region(region()).is_err());
        assert_eq!(browser.view().name(), "countries");
    }

    #[test]
    fn select_unknown_continent_is_rejected() {
        let mut browser = Browser::new(catalog());
        let err = browser
            .select_continent(ContinentId::new("atlantis").unwrap())
            .unwrap_err();
        assert!(matches!(err, BrowseError::UnknownTarget { .. }));
        assert_eq!(*browser.view(), View::Continents);
    }

    #[test]
    fn select_country_outside_parent_is_rejected() {
        let mut browser = Browser::new(catalog());
        browser.select_continent(continent()).unwrap();
        let err = browser
            .select_country(CountrySlug::new("elsewhere").unwrap())
            .unwrap_err();
        assert!(matches!(err, BrowseError::UnknownTarget { .. }));
        assert_eq!(browser.view().name(), "countries");
    }

    // -- Query independence --

    #[test]
    fn navigation_does_not_reset_query() {
        let mut browser = Browser::new(catalog());
        browser.set_query("canal");
        browser.select_continent(continent()).unwrap();
        assert_eq!(browser.query(), "canal");
        browser.back();
        assert_eq!(browser.query(), "canal");
    }

    #[test]
    fn query_does_not_move_view() {
        let mut browser = Browser::new(catalog());
        browser.select_continent(continent()).unwrap();
        browser.set_query("anything");
        assert_eq!(browser.view().name(), "countries");
        browser.clear_query();
        assert_eq!(browser.query(), "");
    }

    // -- Dangling selections --

    #[test]
    fn catalog_swap_falls_back_to_nearest_ancestor() {
        let mut browser = Browser::new(catalog());
        browser.select_continent(continent()).unwrap();
        browser.select_country(country()).unwrap();
        browser.select_region(region()).unwrap();

        // Shrink the catalog: the region disappears, the country stays.
        let mut shrunk = catalog();
        shrunk.continents[0].countries[0].regions.clear();
        browser.set_catalog(shrunk);

        assert_eq!(
            *browser.view(),
            View::CountryDetail {
                continent: continent(),
                country: country(),
            }
        );
    }

    #[test]
    fn catalog_swap_removing_everything_falls_back_to_root() {
        let mut browser = Browser::new(catalog());
        browser.select_continent(continent()).unwrap();
        browser.set_catalog(Catalog { continents: vec![] });
        assert_eq!(*browser.view(), View::Continents);
    }

    #[test]
    fn resolved_view_does_not_mutate() {
        let mut browser = Browser::new(catalog());
        browser.select_continent(continent()).unwrap();
        let resolved = browser.resolved_view();
        assert_eq!(resolved, *browser.view());
    }

    // -- View helpers --

    #[test]
    fn view_parent_chain() {
        let deep = View::RegionDetail {
            continent: continent(),
            country: country(),
            region: region(),
        };
        let up1 = deep.parent().unwrap();
        let up2 = up1.parent().unwrap();
        let up3 = up2.parent().unwrap();
        assert_eq!(up3, View::Continents);
        assert!(up3.parent().is_none());
    }
}
