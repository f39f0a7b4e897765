//! Evaluates a [`Selection`] against listing items.

use super::listing::Listing;
use super::search::{fold_case, text_contains};
use super::selection::{CategorySelector, Selection};

/// Evaluates a selection against items.
///
/// The search term is case-folded once on construction, so filtering a whole
/// catalog lowercases the term only once.
#[derive(Debug)]
pub struct FilterEvaluator<'a> {
    selection: &'a Selection,
    folded_term: String,
}

impl<'a> FilterEvaluator<'a> {
    pub fn new(selection: &'a Selection) -> Self {
        Self {
            selection,
            folded_term: fold_case(selection.search_term()),
        }
    }

    pub fn selection(&self) -> &Selection {
        self.selection
    }

    /// Returns true if the item passes the category, flag and search rules.
    pub fn matches<T: Listing + ?Sized>(&self, item: &T) -> bool {
        self.category_matches(item) && self.flag_matches(item) && self.search_matches(item)
    }

    /// Filters a slice of items, keeping catalog order.
    pub fn filter_items<'b, T: Listing>(&self, items: &'b [T]) -> Vec<&'b T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    fn category_matches<T: Listing + ?Sized>(&self, item: &T) -> bool {
        match self.selection.category() {
            CategorySelector::All => true,
            CategorySelector::Named(name) => item.in_category(name),
        }
    }

    fn flag_matches<T: Listing + ?Sized>(&self, item: &T) -> bool {
        if !self.selection.only_flagged() {
            return true;
        }
        // Listings without a flag ignore the toggle.
        item.flag().unwrap_or(true)
    }

    fn search_matches<T: Listing + ?Sized>(&self, item: &T) -> bool {
        if self.folded_term.is_empty() {
            return true;
        }
        text_contains(&item.searchable_text(), &self.folded_term)
    }
}

/// Returns true if `item` passes `selection`.
pub fn matches<T: Listing + ?Sized>(item: &T, selection: &Selection) -> bool {
    FilterEvaluator::new(selection).matches(item)
}

/// Returns the items of `items` that pass `selection`, in order.
pub fn filter_items<'b, T: Listing>(items: &'b [T], selection: &Selection) -> Vec<&'b T> {
    FilterEvaluator::new(selection).filter_items(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: u32,
        category: &'static str,
        flag: Option<bool>,
        text: &'static str,
    }

    impl Listing for Item {
        const NOUN: &'static str = "item";
        const PLURAL: &'static str = "items";

        fn id(&self) -> u32 {
            self.id
        }
        fn title(&self) -> &str {
            self.text
        }
        fn slug(&self) -> &str {
            ""
        }
        fn category_keys(&self) -> Vec<&str> {
            vec![self.category]
        }
        fn flag(&self) -> Option<bool> {
            self.flag
        }
        fn searchable_text(&self) -> String {
            self.text.to_string()
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, category: "a", flag: Some(true), text: "Rust Workshop" },
            Item { id: 2, category: "b", flag: Some(false), text: "Go meetup" },
            Item { id: 3, category: "a", flag: Some(false), text: "rust challenge" },
            Item { id: 4, category: "c", flag: None, text: "Zig" },
        ]
    }

    fn ids(found: &[&Item]) -> Vec<u32> {
        found.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_identity_selection_keeps_all() {
        let items = items();
        let found = filter_items(&items, &Selection::default());
        assert_eq!(ids(&found), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_rule() {
        let items = items();
        let found = filter_items(&items, &Selection::default().with_category("a"));
        assert_eq!(ids(&found), vec![1, 3]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let items = items();
        let found = filter_items(&items, &Selection::default().with_category("zzz"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_flag_rule_ignores_flagless_items() {
        let items = items();
        let found = filter_items(&items, &Selection::default().with_only_flagged(true));
        assert_eq!(ids(&found), vec![1, 4]);
    }

    #[test]
    fn test_search_rule_case_insensitive() {
        let items = items();
        let found = filter_items(&items, &Selection::default().with_search_term("RUST"));
        assert_eq!(ids(&found), vec![1, 3]);
    }

    #[test]
    fn test_rules_are_anded() {
        let items = items();
        let selection = Selection::new("a", true, "rust");
        assert_eq!(ids(&filter_items(&items, &selection)), vec![1]);
        assert!(matches(&items[0], &selection));
        assert!(!matches(&items[2], &selection));
    }

    #[test]
    fn test_empty_catalog() {
        let items: Vec<Item> = vec![];
        assert!(filter_items(&items, &Selection::new("a", true, "x")).is_empty());
    }
}
