//! End-to-end browser flows over the built-in world catalog: search
//! scenarios, full drill-down paths, and the filter algebra.

use budquest_browser::{filter, Browser, View, ViewModel};
use budquest_core::{Catalog, ContinentId, CountrySlug, RegionSlug};

fn world() -> Catalog {
    budquest_catalog::builtin().expect("built-in catalog parses")
}

fn id(s: &str) -> ContinentId {
    ContinentId::new(s).unwrap()
}

// ---------------------------------------------------------------------------
// Search scenarios
// ---------------------------------------------------------------------------

#[test]
fn amsterdam_query_surfaces_the_netherlands_via_its_city() {
    let result = filter(&world(), "amsterdam");

    // Only Europe survives; every other continent has zero matches.
    let ids: Vec<&str> = result.continents.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["europe"]);

    // The Netherlands matched through its city, not its own name or
    // description, and arrives with all regions and cities intact.
    let netherlands = result.continents[0]
        .country(&CountrySlug::new("netherlands").unwrap())
        .expect("netherlands present");
    assert!(!netherlands.name.to_lowercase().contains("amsterdam"));
    assert!(!netherlands.description.to_lowercase().contains("amsterdam"));
    let full = world();
    let original = full
        .continent(&id("europe"))
        .unwrap()
        .country(&CountrySlug::new("netherlands").unwrap())
        .unwrap();
    assert_eq!(netherlands.regions, original.regions);
}

#[test]
fn classification_word_matches_nothing_and_renders_no_results() {
    // "recreational" names a classification, which is metadata, not
    // searched text: no country name, description, or city matches it.
    let result = filter(&world(), "recreational");
    assert!(result.continents.is_empty());

    let mut browser = Browser::new(world());
    browser.set_query("recreational");
    match browser.render() {
        ViewModel::NoResults(view) => assert_eq!(view.query, "recreational"),
        other => panic!("expected the explicit no-results state, got {other:?}"),
    }
}

#[test]
fn filter_preserves_continent_order() {
    let full = world();
    // "a" matches broadly; whatever survives must keep catalog order.
    let result = filter(&full, "a");
    let source_order: Vec<&str> = full.continents.iter().map(|c| c.id.as_str()).collect();
    let result_order: Vec<&str> = result.continents.iter().map(|c| c.id.as_str()).collect();
    let filtered_positions: Vec<usize> = result_order
        .iter()
        .map(|rid| source_order.iter().position(|sid| sid == rid).unwrap())
        .collect();
    let mut sorted = filtered_positions.clone();
    sorted.sort_unstable();
    assert_eq!(filtered_positions, sorted);
}

#[test]
fn empty_query_returns_the_catalog_unchanged() {
    let full = world();
    assert_eq!(filter(&full, ""), full);
    assert_eq!(filter(&full, "  \t "), full);
}

#[test]
fn filtering_the_world_is_idempotent() {
    let full = world();
    for query in ["amsterdam", "coast", "a", "ZZZ", ""] {
        let once = filter(&full, query);
        assert_eq!(filter(&once, query), once, "query {query:?}");
    }
}

// ---------------------------------------------------------------------------
// Drill-down scenarios
// ---------------------------------------------------------------------------

#[test]
fn colorado_shows_denver_then_boulder_with_their_facts() {
    let mut browser = Browser::new(world());
    browser.select_continent(id("north-america")).unwrap();
    browser
        .select_country(CountrySlug::new("united-states").unwrap())
        .unwrap();
    browser
        .select_region(RegionSlug::new("colorado").unwrap())
        .unwrap();

    match browser.render() {
        ViewModel::RegionDetail(view) => {
            let names: Vec<&str> = view.cities.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, ["Denver", "Boulder"]);
            assert!(view.cities[0].facts[0].starts_with("Pioneer state"));
            assert!(!view.cities[1].facts.is_empty());
        }
        other => panic!("expected region detail, got {other:?}"),
    }
}

#[test]
fn select_and_back_returns_to_an_observably_identical_initial_state() {
    let mut browser = Browser::new(world());
    let initial_view = browser.view().clone();
    let initial_render = browser.render();

    browser.select_continent(id("europe")).unwrap();
    assert!(browser.back());

    assert_eq!(*browser.view(), initial_view);
    assert_eq!(browser.render(), initial_render);
}

#[test]
fn triple_drilldown_then_triple_back_lands_on_continents() {
    let mut browser = Browser::new(world());
    browser.select_continent(id("europe")).unwrap();
    browser
        .select_country(CountrySlug::new("netherlands").unwrap())
        .unwrap();
    browser
        .select_region(RegionSlug::new("north-holland").unwrap())
        .unwrap();

    assert!(browser.back());
    assert!(browser.back());
    assert!(browser.back());
    assert_eq!(*browser.view(), View::Continents);
    assert!(!browser.back());
}

#[test]
fn query_survives_a_full_drilldown() {
    let mut browser = Browser::new(world());
    browser.set_query("amsterdam");
    browser.select_continent(id("europe")).unwrap();
    browser
        .select_country(CountrySlug::new("netherlands").unwrap())
        .unwrap();
    assert_eq!(browser.query(), "amsterdam");

    browser.back();
    browser.back();
    // Back at the top, the filter is still in force.
    match browser.render() {
        ViewModel::Continents(view) => {
            assert_eq!(view.query, "amsterdam");
            assert_eq!(view.cards.len(), 1);
            assert_eq!(view.cards[0].id.as_str(), "europe");
            assert_eq!(view.cards[0].matching_countries, 1);
        }
        other => panic!("expected continents view, got {other:?}"),
    }
}

#[test]
fn continent_cards_report_post_filter_counts() {
    let mut browser = Browser::new(world());
    browser.set_query("amsterdam");
    match browser.render() {
        ViewModel::Continents(view) => {
            // Europe holds several countries, but only one matches.
            assert_eq!(view.cards[0].matching_countries, 1);
            let full = world();
            let europe = full.continent(&id("europe")).unwrap();
            assert!(europe.countries.len() > 1);
        }
        other => panic!("expected continents view, got {other:?}"),
    }
}

#[test]
fn countries_view_carries_badges_for_every_card() {
    let mut browser = Browser::new(world());
    browser.select_continent(id("europe")).unwrap();
    match browser.render() {
        ViewModel::Countries(view) => {
            assert!(!view.cards.is_empty());
            for card in &view.cards {
                assert!(!card.badge.is_empty());
                assert_eq!(card.badge, card.status.badge());
            }
        }
        other => panic!("expected countries view, got {other:?}"),
    }
}
