//! Holds the current selection for one listing view.

use tracing::debug;

use super::evaluator::FilterEvaluator;
use super::listing::Listing;
use super::selection::{CategorySelector, Selection};

/// The selection behind a listing view and the items it currently shows.
///
/// Every change swaps in a new [`Selection`] and recomputes the visible items
/// immediately, so [`filtered_items`](Self::filtered_items) always agrees with
/// [`selection`](Self::selection).
///
/// ```
/// use cpf_catalog::filter::SelectionState;
/// use cpf_content::Content;
///
/// let content = Content::bundled().unwrap();
/// let mut state = SelectionState::new(&content.events);
/// assert_eq!(state.len(), content.events.len());
///
/// state.set_category("workshop");
/// assert!(state.filtered_items().iter().all(|e| e.kind.as_str() == "workshop"));
/// ```
#[derive(Debug)]
pub struct SelectionState<'a, T> {
    catalog: &'a [T],
    selection: Selection,
    visible: Vec<&'a T>,
}

impl<'a, T: Listing> SelectionState<'a, T> {
    /// Starts with the default selection, showing the whole catalog.
    pub fn new(catalog: &'a [T]) -> Self {
        Self::with_selection(catalog, Selection::default())
    }

    pub fn with_selection(catalog: &'a [T], selection: Selection) -> Self {
        let mut state = Self {
            catalog,
            selection,
            visible: Vec::new(),
        };
        state.recompute();
        state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &'a [T] {
        self.catalog
    }

    pub fn set_category(&mut self, category: impl Into<CategorySelector>) {
        let next = self.selection.with_category(category);
        self.set_selection(next);
    }

    pub fn toggle_flag_only(&mut self) {
        let next = self.selection.toggled_flag_only();
        self.set_selection(next);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let next = self.selection.with_search_term(term);
        self.set_selection(next);
    }

    /// Replaces the whole selection.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.recompute();
    }

    /// Returns to the default selection.
    pub fn reset(&mut self) {
        self.set_selection(Selection::default());
    }

    /// Items passing the current selection, in catalog order.
    pub fn filtered_items(&self) -> &[&'a T] {
        &self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    fn recompute(&mut self) {
        self.visible = FilterEvaluator::new(&self.selection).filter_items(self.catalog);
        debug!(
            listing = T::PLURAL,
            selection = %self.selection,
            visible = self.visible.len(),
            total = self.catalog.len(),
            "recomputed listing"
        );
    }
}
