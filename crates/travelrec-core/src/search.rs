// crates/travelrec-core/src/search.rs

//! # Search Engine
//!
//! Keyword routing over the catalog with a full-text fallback.
//!
//! A query is folded (trim + lowercase) and routed by substring containment
//! against three fixed tokens, first match wins: `beach` → beaches,
//! `temple` → temples, `country` → all cities grouped under countries.
//! Anything else scans every item's concatenated text. The routing is
//! intentionally crude; callers depend on its quirks (`"countryside"` hits
//! the country branch, `"beach house"` the beach branch).

use crate::model::{Catalog, Category, Item};
use crate::text::fold_text;

pub const MSG_EMPTY_QUERY: &str = "Please enter a valid search query.";
pub const MSG_NO_RESULTS: &str = "No recommendations found.";

/// Result of one search call: either items to render or a status message.
///
/// Exactly one of the two is meaningful: a non-empty `message` always comes
/// with empty `items`, and a non-empty item list with an empty `message`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub items: Vec<Item>,
    pub message: String,
}

impl SearchOutcome {
    fn message(text: &str) -> Self {
        SearchOutcome {
            items: Vec::new(),
            message: text.to_string(),
        }
    }
}

/// Every city of every country, flattened in document order.
///
/// Each item carries `category = Country` and the owning country's name.
pub fn cities_from_countries(catalog: &Catalog) -> Vec<Item> {
    let mut out = Vec::new();
    for country in &catalog.countries {
        for city in &country.cities {
            out.push(Item {
                category: Category::Country,
                country: country.name.clone(),
                name: city.name.clone(),
                description: city.description.clone(),
                image_url: city.image_url.clone(),
            });
        }
    }
    out
}

/// Items of one flat collection. `key` selects `"temples"` or `"beaches"`;
/// any other key labels the (empty) result as `Place`.
pub fn items_from_category(catalog: &Catalog, key: &str) -> Vec<Item> {
    let (entries, category) = match key {
        "temples" => (catalog.temples.as_slice(), Category::Temple),
        "beaches" => (catalog.beaches.as_slice(), Category::Beach),
        _ => (&[][..], Category::Place),
    };

    entries
        .iter()
        .map(|place| Item {
            category,
            country: String::new(),
            name: place.name.clone(),
            description: place.description.clone(),
            image_url: place.image_url.clone(),
        })
        .collect()
}

/// Concatenation of cities, then temples, then beaches. Used only as the
/// full-text fallback pool.
pub fn all_searchable_items(catalog: &Catalog) -> Vec<Item> {
    let mut out = cities_from_countries(catalog);
    out.extend(items_from_category(catalog, "temples"));
    out.extend(items_from_category(catalog, "beaches"));
    out
}

fn haystack(item: &Item) -> String {
    fold_text(&format!(
        "{} {} {} {}",
        item.name, item.description, item.country, item.category
    ))
}

impl Catalog {
    /// Map a free-text query to a result set.
    ///
    /// Never fails: the empty-query and no-results cases are ordinary
    /// outcomes carrying a message.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let q = fold_text(query);

        if q.is_empty() {
            return SearchOutcome::message(MSG_EMPTY_QUERY);
        }

        let items = if q.contains("beach") {
            items_from_category(self, "beaches")
        } else if q.contains("temple") {
            items_from_category(self, "temples")
        } else if q.contains("country") {
            cities_from_countries(self)
        } else {
            all_searchable_items(self)
                .into_iter()
                .filter(|item| haystack(item).contains(&q))
                .collect()
        };

        if items.is_empty() {
            return SearchOutcome::message(MSG_NO_RESULTS);
        }

        SearchOutcome {
            items,
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;

    fn sample_catalog() -> Catalog {
        Catalog::from_json(
            r#"{
            "countries": [
                {"name": "Japan", "cities": [
                    {"name": "Tokyo", "description": "Neon and shrines", "imageUrl": "tokyo.jpg"},
                    {"name": "Kyoto", "description": "Temples and gardens", "imageUrl": "kyoto.jpg"}
                ]},
                {"name": "Brazil", "cities": [
                    {"name": "Foz do Iguacu", "description": "Giant waterfall on the border", "imageUrl": "foz.jpg"}
                ]}
            ],
            "temples": [
                {"name": "Angkor Wat", "description": "Khmer temple complex", "imageUrl": "angkor.jpg"}
            ],
            "beaches": [
                {"name": "Bora Bora", "description": "Lagoon and overwater bungalows", "imageUrl": "bora.jpg"},
                {"name": "Copacabana", "description": "Rio shoreline", "imageUrl": "copa.jpg"},
                {"name": "Whitehaven", "description": "Silica sand", "imageUrl": "white.jpg"}
            ]
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn normalizer_lengths_and_order() {
        let catalog = sample_catalog();
        let cities = cities_from_countries(&catalog);
        assert_eq!(cities.len(), 3);
        assert_eq!(cities[0].name, "Tokyo");
        assert_eq!(cities[1].name, "Kyoto");
        assert_eq!(cities[2].country, "Brazil");

        let all = all_searchable_items(&catalog);
        assert_eq!(all.len(), 3 + 1 + 3);
        // cities first, then temples, then beaches
        assert_eq!(all[3].category, Category::Temple);
        assert_eq!(all[4].category, Category::Beach);
    }

    #[test]
    fn unknown_category_key_falls_back_to_place() {
        let catalog = sample_catalog();
        assert!(items_from_category(&catalog, "mountains").is_empty());
    }

    #[test]
    fn empty_query_prompts() {
        let catalog = sample_catalog();
        let outcome = catalog.search("");
        assert!(outcome.items.is_empty());
        assert_eq!(outcome.message, MSG_EMPTY_QUERY);
        // Whitespace-only is treated as empty.
        assert_eq!(catalog.search("   ").message, MSG_EMPTY_QUERY);
    }

    #[test]
    fn beach_keyword_routes_to_beaches() {
        let catalog = sample_catalog();
        let outcome = catalog.search("beach resort");
        assert_eq!(outcome.items.len(), 3);
        assert!(outcome.items.iter().all(|i| i.category == Category::Beach));
        assert!(outcome.message.is_empty());
    }

    #[test]
    fn mixed_case_query_matches() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("Beach").items.len(), 3);
    }

    #[test]
    fn countryside_hits_the_country_branch() {
        let catalog = sample_catalog();
        let outcome = catalog.search("countryside");
        assert_eq!(outcome.items.len(), 3);
        assert!(outcome.items.iter().all(|i| i.category == Category::Country));
    }

    #[test]
    fn country_query_lists_cities_with_owner() {
        let catalog = Catalog::from_json(
            r#"{"countries": [{"name": "Japan", "cities": [
                {"name": "Tokyo"}, {"name": "Kyoto"}
            ]}]}"#,
        )
        .unwrap();
        let outcome = catalog.search("country");
        assert_eq!(outcome.items.len(), 2);
        for item in &outcome.items {
            assert_eq!(item.category, Category::Country);
            assert_eq!(item.country, "Japan");
        }
    }

    #[test]
    fn routed_but_empty_category_reports_no_results() {
        let catalog = Catalog::from_json(
            r#"{"beaches": [{"name": "A"}, {"name": "B"}, {"name": "C"}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.search("beach resort").items.len(), 3);
        // The temple keyword matched, but the pool is empty.
        let outcome = catalog.search("temple");
        assert!(outcome.items.is_empty());
        assert_eq!(outcome.message, MSG_NO_RESULTS);
    }

    #[test]
    fn fallback_scans_descriptions() {
        let catalog = sample_catalog();
        let outcome = catalog.search("waterfall");
        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].name, "Foz do Iguacu");
    }

    #[test]
    fn fallback_miss_reports_no_results() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("zzz-nowhere").message, MSG_NO_RESULTS);
    }
}
