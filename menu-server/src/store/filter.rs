//! Menu filtering
//!
//! Filtering is a derived read over the current snapshot, not a store
//! operation: category equality AND case-insensitive substring containment
//! on the localized name. The customer menu additionally matches the
//! localized description. Input order is preserved.

use shared::models::{Language, MenuItem};

/// Filter criteria for a menu projection
#[derive(Debug, Clone, Copy)]
pub struct MenuFilter<'a> {
    pub language: Language,
    /// `None` means all categories
    pub category: Option<&'a str>,
    /// Empty query matches everything
    pub query: &'a str,
    /// Customer menu also searches the localized description
    pub match_description: bool,
}

/// Project the filtered view of `items`, preserving their order
pub fn filter_items<'a>(items: &'a [MenuItem], filter: &MenuFilter<'_>) -> Vec<&'a MenuItem> {
    let needle = filter.query.to_lowercase();

    items
        .iter()
        .filter(|item| {
            let category_ok = filter
                .category
                .is_none_or(|category| item.category_id == category);

            let query_ok = needle.is_empty()
                || item.name(filter.language).to_lowercase().contains(&needle)
                || (filter.match_description
                    && item
                        .description(filter.language)
                        .to_lowercase()
                        .contains(&needle));

            category_ok && query_ok
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str, name_en: &str, description_en: &str) -> MenuItem {
        MenuItem {
            id: id.into(),
            category_id: category.into(),
            name_ar: name_en.to_string(),
            name_en: name_en.into(),
            description_ar: description_en.to_string(),
            description_en: description_en.into(),
            price: 50_000,
            image_url: String::new(),
            is_popular: false,
            is_veg: false,
            spice_level: 0,
            is_available: true,
        }
    }

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            item("1", "saj", "Saj Chicken", "grilled chicken wrap"),
            item("2", "saj", "Zaatar Manousheh", "thyme and olive oil"),
            item("3", "wraps", "Chicken Wrap", "with garlic sauce"),
            item("4", "drinks", "Ayran", "salted yogurt drink"),
        ]
    }

    #[test]
    fn category_and_query_combine() {
        let menu = sample_menu();
        let filtered = filter_items(
            &menu,
            &MenuFilter {
                language: Language::En,
                category: Some("saj"),
                query: "chick",
                match_description: false,
            },
        );
        let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let menu = sample_menu();
        let filtered = filter_items(
            &menu,
            &MenuFilter {
                language: Language::En,
                category: None,
                query: "ZAATAR",
                match_description: false,
            },
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn description_matching_is_opt_in() {
        let menu = sample_menu();
        let base = MenuFilter {
            language: Language::En,
            category: None,
            query: "garlic",
            match_description: false,
        };

        assert!(filter_items(&menu, &base).is_empty());

        let customer = MenuFilter {
            match_description: true,
            ..base
        };
        let filtered = filter_items(&menu, &customer);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
    }

    #[test]
    fn empty_filter_returns_all_in_order() {
        let menu = sample_menu();
        let filtered = filter_items(
            &menu,
            &MenuFilter {
                language: Language::En,
                category: None,
                query: "",
                match_description: true,
            },
        );
        let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn order_preserved_across_categories() {
        let menu = sample_menu();
        let filtered = filter_items(
            &menu,
            &MenuFilter {
                language: Language::En,
                category: None,
                query: "chicken",
                match_description: false,
            },
        );
        let ids: Vec<&str> = filtered.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
