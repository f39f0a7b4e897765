//! Multi-criteria listing filters.
//!
//! Every listing page (events, projects, blog, courses) narrows its catalog
//! with the same three rules, combined with AND:
//!
//! - **category**: the selector is `all`, or the item belongs to the named
//!   category (exact, case-sensitive match on the category key; posts match
//!   on tags);
//! - **flag**: the "only flagged" toggle is off, or the item's flag is set
//!   (upcoming events, featured projects). Listings without a flag ignore
//!   the toggle;
//! - **search**: the term is empty, or its lowercase form is a substring of
//!   the item's lowercase searchable text.
//!
//! Filtering is pure and stable: the result keeps catalog order and depends
//! only on the catalog and the current [`Selection`].
//!
//! # Example
//!
//! ```
//! use cpf_catalog::filter::{FilterEvaluator, Selection};
//! use cpf_content::Content;
//!
//! let content = Content::bundled().unwrap();
//!
//! let selection = Selection::default()
//!     .with_category("hackathon")
//!     .with_only_flagged(true)
//!     .with_search_term("sosten");
//!
//! let evaluator = FilterEvaluator::new(&selection);
//! let results = evaluator.filter_items(&content.events);
//! assert_eq!(results.len(), 1);
//! ```

mod evaluator;
mod listing;
mod search;
mod selection;
mod state;

pub use evaluator::{filter_items, matches, FilterEvaluator};
pub use listing::{known_categories, Listing};
pub use search::{fold_case, text_contains};
pub use selection::{CategorySelector, Selection};
pub use state::SelectionState;

#[cfg(test)]
mod tests;
