//! Tests for listing filters over the bundled catalog.

use std::collections::HashSet;

use cpf_content::models::{Course, Event, Post, Project};
use cpf_content::Content;

use super::*;

fn content() -> Content {
    Content::bundled().unwrap()
}

fn ids<T: Listing>(items: &[&T]) -> Vec<u32> {
    items.iter().map(|i| i.id()).collect()
}

fn id_set<T: Listing>(items: &[&T]) -> HashSet<u32> {
    items.iter().map(|i| i.id()).collect()
}

/// Asserts `found` is a subsequence of `catalog` in the same order.
fn assert_preserves_order<T: Listing>(catalog: &[T], found: &[&T]) {
    let positions: Vec<usize> = found
        .iter()
        .map(|f| catalog.iter().position(|c| c.id() == f.id()).unwrap())
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "order not preserved: {:?}",
        positions
    );
}

// ==================== Identity ====================

#[test]
fn test_identity_returns_full_catalog_in_order() {
    let content = content();
    let state = SelectionState::new(&content.events);
    assert_eq!(ids(state.filtered_items()), vec![1, 2, 3, 4, 5, 6]);

    let state = SelectionState::new(&content.projects);
    assert_eq!(state.len(), content.projects.len());
    assert_preserves_order(&content.projects, state.filtered_items());
}

#[test]
fn test_identity_via_explicit_all() {
    let content = content();
    let selection = Selection::new("all", false, "");
    assert!(selection.is_identity());
    let found = filter_items(&content.posts, &selection);
    assert_eq!(found.len(), content.posts.len());
}

// ==================== Category exclusivity ====================

#[test]
fn test_every_result_is_in_selected_category() {
    let content = content();
    for kind in cpf_content::models::EventKind::ALL {
        let selection = Selection::default().with_category(kind.as_str());
        let found = filter_items(&content.events, &selection);
        assert!(found.iter().all(|e| e.kind == kind), "kind {}", kind);
    }

    for category in known_categories(&content.projects) {
        let selection = Selection::default().with_category(category);
        let found = filter_items(&content.projects, &selection);
        assert!(!found.is_empty());
        assert!(found.iter().all(|p| p.category.as_str() == category));
    }
}

#[test]
fn test_category_partitions_catalog() {
    let content = content();
    let total: usize = known_categories(&content.events)
        .into_iter()
        .map(|c| filter_items(&content.events, &Selection::default().with_category(c)).len())
        .sum();
    assert_eq!(total, content.events.len());
}

#[test]
fn test_category_match_is_case_sensitive() {
    let content = content();
    let found = filter_items(
        &content.events,
        &Selection::default().with_category("Workshop"),
    );
    assert!(found.is_empty());
}

// ==================== Flag monotonicity ====================

fn assert_flag_monotone<T: Listing>(catalog: &[T], base: &Selection) {
    let loose = id_set(&filter_items(catalog, &base.with_only_flagged(false)));
    let strict = id_set(&filter_items(catalog, &base.with_only_flagged(true)));
    assert!(strict.is_subset(&loose), "flagged results grew for {}", base);
}

#[test]
fn test_flag_only_narrows_results() {
    let content = content();
    let selections = [
        Selection::default(),
        Selection::default().with_category("hackathon"),
        Selection::default().with_category("workshop"),
        Selection::default().with_search_term("a"),
        Selection::default().with_search_term("zzz"),
    ];
    for selection in &selections {
        assert_flag_monotone(&content.events, selection);
        assert_flag_monotone(&content.projects, selection);
        assert_flag_monotone(&content.posts, selection);
        assert_flag_monotone(&content.courses, selection);
    }
}

#[test]
fn test_flag_only_is_noop_for_flagless_listings() {
    let content = content();
    let flagged = Selection::default().with_only_flagged(true);
    assert_eq!(
        filter_items(&content.posts, &flagged).len(),
        content.posts.len()
    );
    assert_eq!(
        filter_items(&content.courses, &flagged).len(),
        content.courses.len()
    );
}

// ==================== Search case-insensitivity ====================

#[test]
fn test_search_ignores_case() {
    let content = content();
    let mut state = SelectionState::new(&content.events);

    state.set_search_term("REACT");
    let upper = ids(state.filtered_items());
    state.set_search_term("react");
    let lower = ids(state.filtered_items());
    state.set_search_term("ReAcT");
    let mixed = ids(state.filtered_items());

    assert_eq!(upper, lower);
    assert_eq!(lower, mixed);
    assert!(!lower.is_empty());
}

#[test]
fn test_search_with_accented_uppercase() {
    let content = content();
    let found = filter_items(
        &content.events,
        &Selection::default().with_search_term("INTRODUCCIÓN"),
    );
    assert_eq!(ids(&found), vec![2]);
}

#[test]
fn test_search_term_is_not_trimmed() {
    let content = content();
    let found = filter_items(
        &content.events,
        &Selection::default().with_search_term("  react"),
    );
    assert!(found.is_empty());
}

// ==================== AND composition ====================

#[test]
fn test_combined_selection_is_intersection() {
    let content = content();
    let categories = ["all", "hackathon", "workshop", "meetup", "challenge"];
    let terms = ["", "react", "taller", "soluciones", "a", "zzz"];

    for category in categories {
        for term in terms {
            let by_category = id_set(&filter_items(
                &content.events,
                &Selection::default().with_category(category),
            ));
            let by_term = id_set(&filter_items(
                &content.events,
                &Selection::default().with_search_term(term),
            ));
            let combined = id_set(&filter_items(
                &content.events,
                &Selection::new(category, false, term),
            ));
            let expected: HashSet<u32> = by_category.intersection(&by_term).copied().collect();
            assert_eq!(combined, expected, "category={} term={}", category, term);
        }
    }
}

// ==================== Stability ====================

#[test]
fn test_results_keep_catalog_order() {
    let content = content();
    let selections = [
        Selection::default().with_only_flagged(true),
        Selection::default().with_search_term("e"),
        Selection::default().with_category("web"),
        Selection::new("all", true, "a"),
    ];
    for selection in &selections {
        assert_preserves_order(&content.events, &filter_items(&content.events, selection));
        assert_preserves_order(
            &content.projects,
            &filter_items(&content.projects, selection),
        );
        assert_preserves_order(&content.posts, &filter_items(&content.posts, selection));
    }
}

// ==================== Scenarios ====================

#[test]
fn test_workshop_category_ignores_upcoming_status() {
    let content = content();
    let found = filter_items(&content.events, &Selection::new("workshop", false, ""));
    assert_eq!(ids(&found), vec![2, 5]);
    let flags: Vec<bool> = found.iter().map(|e| e.is_upcoming).collect();
    assert_eq!(flags, vec![true, false]);
}

#[test]
fn test_only_upcoming_preserves_order() {
    let content = content();
    let found = filter_items(&content.events, &Selection::new("all", true, ""));
    assert_eq!(ids(&found), vec![1, 2, 3]);
    assert!(found.iter().all(|e| e.is_upcoming));
}

#[test]
fn test_search_react_matches_title_not_algorithms() {
    let content = content();
    let found = filter_items(&content.events, &Selection::new("all", false, "react"));
    let titles: Vec<&str> = found.iter().map(|e| e.title.as_str()).collect();
    assert!(titles.contains(&"Workshop: Introducción a React"));
    assert!(!titles.iter().any(|t| t.contains("Algoritmos")));
}

#[test]
fn test_hackathon_upcoming_sosten_intersection() {
    let content = content();
    let found = filter_items(
        &content.events,
        &Selection::new("hackathon", true, "sosten"),
    );
    assert_eq!(ids(&found), vec![1]);
    assert_eq!(found[0].title, "Hackathon: Soluciones Sostenibles");
}

#[test]
fn test_no_match_and_empty_catalog_yield_empty() {
    let content = content();
    let mut state = SelectionState::new(&content.events);
    state.set_search_term("blockchain cuántico");
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);

    let empty: Vec<Event> = Vec::new();
    let state = SelectionState::with_selection(&empty, Selection::new("hackathon", true, "x"));
    assert!(state.filtered_items().is_empty());
}

// ==================== Selection state ====================

#[test]
fn test_setters_replace_selection_and_recompute() {
    let content = content();
    let mut state = SelectionState::new(&content.events);

    state.set_category("hackathon");
    assert_eq!(ids(state.filtered_items()), vec![1, 6]);

    state.toggle_flag_only();
    assert!(state.selection().only_flagged());
    assert_eq!(ids(state.filtered_items()), vec![1]);

    state.toggle_flag_only();
    assert_eq!(ids(state.filtered_items()), vec![1, 6]);

    state.set_search_term("salud");
    assert_eq!(ids(state.filtered_items()), vec![6]);

    state.reset();
    assert!(state.selection().is_identity());
    assert_eq!(state.len(), content.events.len());
}

#[test]
fn test_set_selection_matches_pure_filter() {
    let content = content();
    let selection = Selection::new("web", true, "react");
    let mut state = SelectionState::new(&content.projects);
    state.set_selection(selection.clone());

    let direct = filter_items(&content.projects, &selection);
    assert_eq!(ids(state.filtered_items()), ids(&direct));
    assert_eq!(ids(&direct), vec![1]);
}

#[test]
fn test_blog_tag_filter() {
    let content = content();
    let mut state: SelectionState<'_, Post> = SelectionState::new(&content.posts);
    state.set_category("Tutoriales");
    assert_eq!(ids(state.filtered_items()), vec![1, 4, 5]);

    state.set_search_term("python");
    assert_eq!(ids(state.filtered_items()), vec![4]);
}

#[test]
fn test_course_level_filter() {
    let content = content();
    let mut state: SelectionState<'_, Course> = SelectionState::new(&content.courses);
    state.set_category("intermediate");
    assert_eq!(ids(state.filtered_items()), vec![2, 4, 5, 6]);

    state.set_search_term("javascript");
    assert_eq!(ids(state.filtered_items()), vec![2, 6]);
}

#[test]
fn test_project_featured_and_tag_search() {
    let content = content();
    let mut state: SelectionState<'_, Project> = SelectionState::new(&content.projects);
    state.toggle_flag_only();
    assert_eq!(ids(state.filtered_items()), vec![1, 2, 5]);

    state.set_search_term("python");
    assert_eq!(ids(state.filtered_items()), vec![2]);
}
