//! # Text Rendering
//!
//! Formats view models for the terminal. The view models themselves are
//! the contract; this module is one possible skin over them (the `--json`
//! flag is the other).

use budquest_browser::ViewModel;

/// Render a view model as terminal text.
pub fn format_view(view: &ViewModel) -> String {
    match view {
        ViewModel::Continents(v) => {
            let mut out = String::new();
            if !v.query.trim().is_empty() {
                out.push_str(&format!("Matches for \"{}\":\n\n", v.query.trim()));
            }
            for card in &v.cards {
                let noun = if card.matching_countries == 1 {
                    "country"
                } else {
                    "countries"
                };
                out.push_str(&format!(
                    "{} {} — {} {}\n    {}\n",
                    card.glyph, card.name, card.matching_countries, noun, card.description
                ));
            }
            out
        }
        ViewModel::NoResults(v) => {
            format!("No destinations match \"{}\". Try a country or city name.\n", v.query)
        }
        ViewModel::Countries(v) => {
            let mut out = format!("← {}\n{} {}\n\n", v.breadcrumb.label, v.glyph, v.continent);
            for card in &v.cards {
                out.push_str(&format!(
                    "{} {} [{}]\n    {}\n",
                    card.flag, card.name, card.badge, card.summary
                ));
            }
            out
        }
        ViewModel::CountryDetail(v) => {
            let mut out = format!(
                "← {}\n{} {} [{}]\n\n{}\n\nPossession: {}\nAirports:   {}\nTip:        {}\n",
                v.breadcrumb.label,
                v.flag,
                v.name,
                v.badge,
                v.description,
                v.possession_rule,
                v.airport_rule,
                v.traveler_tip
            );
            if v.regions.is_empty() {
                out.push_str("\nNo region guides yet.\n");
            } else {
                out.push_str("\nRegions:\n");
                for region in &v.regions {
                    let noun = if region.city_count == 1 { "city" } else { "cities" };
                    out.push_str(&format!(
                        "  {} ({} {})\n",
                        region.name, region.city_count, noun
                    ));
                }
            }
            out
        }
        ViewModel::RegionDetail(v) => {
            let mut out = format!("← {}\n{}\n", v.breadcrumb.label, v.region);
            if v.cities.is_empty() {
                out.push_str("\nNo city guides yet.\n");
            }
            for city in &v.cities {
                out.push_str(&format!("\n{}\n", city.name));
                for fact in &city.facts {
                    out.push_str(&format!("  • {fact}\n"));
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budquest_browser::Browser;
    use budquest_core::{ContinentId, CountrySlug, RegionSlug};

    fn world_browser() -> Browser {
        Browser::new(budquest_catalog::builtin().unwrap())
    }

    #[test]
    fn continents_text_lists_every_card() {
        let text = format_view(&world_browser().render());
        assert!(text.contains("North America"));
        assert!(text.contains("Caribbean"));
        assert!(!text.contains("Matches for"));
    }

    #[test]
    fn filtered_continents_text_names_the_query() {
        let mut browser = world_browser();
        browser.set_query("amsterdam");
        let text = format_view(&browser.render());
        assert!(text.contains("Matches for \"amsterdam\""));
        assert!(text.contains("1 country"));
    }

    #[test]
    fn no_results_text_is_explicit() {
        let mut browser = world_browser();
        browser.set_query("recreational");
        let text = format_view(&browser.render());
        assert!(text.contains("No destinations match \"recreational\""));
    }

    #[test]
    fn country_detail_text_labels_the_rules() {
        let mut browser = world_browser();
        browser
            .select_continent(ContinentId::new("europe").unwrap())
            .unwrap();
        browser
            .select_country(CountrySlug::new("netherlands").unwrap())
            .unwrap();
        let text = format_view(&browser.render());
        assert!(text.contains("Possession:"));
        assert!(text.contains("Airports:"));
        assert!(text.contains("Tip:"));
        assert!(text.contains("North Holland (2 cities)"));
    }

    #[test]
    fn region_detail_text_bullets_facts_in_order() {
        let mut browser = world_browser();
        browser
            .select_continent(ContinentId::new("north-america").unwrap())
            .unwrap();
        browser
            .select_country(CountrySlug::new("united-states").unwrap())
            .unwrap();
        browser
            .select_region(RegionSlug::new("colorado").unwrap())
            .unwrap();
        let text = format_view(&browser.render());
        let denver = text.find("Denver").unwrap();
        let boulder = text.find("Boulder").unwrap();
        assert!(denver < boulder);
        assert!(text.contains("• Pioneer state"));
    }
}
