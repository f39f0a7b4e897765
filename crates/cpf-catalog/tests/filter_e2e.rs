//! End-to-end tests for listing filters through the public catalog API.
//!
//! These walk a user through the listing pages: open a view, narrow it step
//! by step, and check what the page would show.

use chrono::NaiveDate;
use cpf_catalog::filter::{known_categories, FilterEvaluator, Selection, SelectionState};
use cpf_catalog::{find_similar_name, Catalog, Listing, UpcomingPolicy};
use cpf_content::Content;

fn catalog() -> Catalog {
    Catalog::bundled().unwrap()
}

fn titles<T: Listing>(items: &[&T]) -> Vec<String> {
    items.iter().map(|i| i.title().to_string()).collect()
}

// ============================================================================
// Events page
// ============================================================================

#[test]
fn test_events_page_session() {
    let catalog = catalog();
    let mut view = SelectionState::new(catalog.events());
    assert_eq!(view.len(), 6);

    // Click the "Workshop" tab.
    view.set_category("workshop");
    assert_eq!(
        titles(view.filtered_items()),
        vec![
            "Workshop: Introducción a React",
            "Workshop: Desarrollo de APIs con Node.js"
        ]
    );

    // Tick "only upcoming".
    view.toggle_flag_only();
    assert_eq!(titles(view.filtered_items()), vec!["Workshop: Introducción a React"]);

    // Type a term that only matches the past workshop.
    view.set_search_term("node");
    assert!(view.is_empty());

    // Back to "Todos".
    view.set_category("all");
    view.set_search_term("");
    assert_eq!(view.len(), 3);
}

#[test]
fn test_typing_search_term_character_by_character() {
    let catalog = catalog();
    let mut view = SelectionState::new(catalog.events());
    let mut previous = view.len();
    let mut term = String::new();
    for ch in "hackathon".chars() {
        term.push(ch);
        view.set_search_term(term.clone());
        assert!(view.len() <= previous, "results grew at '{}'", term);
        previous = view.len();
    }
    assert_eq!(view.len(), 2);
}

#[test]
fn test_date_policy_changes_upcoming_view() {
    let content = Content::bundled().unwrap();
    let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    let catalog = Catalog::with_policy(content, UpcomingPolicy::FromDate, today).unwrap();

    let view = SelectionState::with_selection(
        catalog.events(),
        Selection::default().with_only_flagged(true),
    );
    assert!(view.is_empty());
}

// ============================================================================
// Other listings
// ============================================================================

#[test]
fn test_projects_page_featured_web() {
    let catalog = catalog();
    let selection = Selection::new("web", true, "");
    let found = FilterEvaluator::new(&selection).filter_items(catalog.projects());
    assert_eq!(
        titles(&found),
        vec!["Sistema de Gestión Académica", "Plataforma de Aprendizaje Online"]
    );
}

#[test]
fn test_blog_search_matches_excerpt_not_author() {
    let catalog = catalog();
    let mut view = SelectionState::new(catalog.posts());

    view.set_search_term("mejores prácticas");
    assert_eq!(
        titles(view.filtered_items()),
        vec!["Desarrollando con React y TypeScript en 2024"]
    );

    view.set_search_term("Rodríguez");
    assert!(view.is_empty());
}

#[test]
fn test_courses_page_advanced() {
    let catalog = catalog();
    let mut view = SelectionState::new(catalog.courses());
    view.set_category("advanced");
    assert_eq!(titles(view.filtered_items()), vec!["Algoritmos para Competencias"]);
}

// ============================================================================
// Unknown categories
// ============================================================================

#[test]
fn test_unknown_category_yields_empty_view_with_suggestion() {
    let catalog = catalog();
    let mut view = SelectionState::new(catalog.events());
    view.set_category("hackaton");
    assert!(view.is_empty());

    let suggestion = find_similar_name("hackaton", known_categories(catalog.events()).into_iter());
    assert_eq!(suggestion.as_deref(), Some("hackathon"));
}
