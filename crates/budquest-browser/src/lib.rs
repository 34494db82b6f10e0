//! # budquest-browser — The Hierarchical Region Browser
//!
//! The browser is three stages wired around one injected, read-only
//! [`budquest_core::Catalog`]:
//!
//! 1. **Filter** ([`filter::filter`]) — a pure function from
//!    `(catalog, query)` to the matching subset, at country granularity.
//! 2. **Navigation** ([`nav::Browser`]) — a state machine over the
//!    tagged-union [`nav::View`]: drill in by selecting a child, pop
//!    with back, query state independent of the path.
//! 3. **Presentation** ([`view::ViewModel`]) — pure rendering of the
//!    active view into serializable view models, including the explicit
//!    no-results state.
//!
//! Every operation is a discrete, synchronous state update: no I/O, no
//! background work, no shared mutable state beyond the browser value the
//! host owns.

pub mod filter;
pub mod nav;
pub mod view;

// Re-export primary types for ergonomic imports.
pub use filter::filter;
pub use nav::{BrowseError, Browser, View};
pub use view::{
    Breadcrumb, CityView, ContinentCard, ContinentsView, CountriesView, CountryCard,
    CountryDetailView, NoResultsView, RegionDetailView, RegionSummary, ViewModel,
    SUMMARY_MAX_CHARS,
};
