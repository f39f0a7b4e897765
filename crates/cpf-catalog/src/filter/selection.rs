//! The user's current filter choices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category part of a [`Selection`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    /// No category restriction.
    #[default]
    All,
    /// Only items in this category.
    Named(String),
}

impl CategorySelector {
    /// Returns true for the unrestricted selector.
    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelector::All)
    }

    /// The category name, if one is selected.
    pub fn name(&self) -> Option<&str> {
        match self {
            CategorySelector::All => None,
            CategorySelector::Named(name) => Some(name),
        }
    }
}

impl From<&str> for CategorySelector {
    /// `"all"` (any case) is the unrestricted selector; anything else names a
    /// category verbatim.
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            CategorySelector::All
        } else {
            CategorySelector::Named(value.to_string())
        }
    }
}

impl From<String> for CategorySelector {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("all") {
            CategorySelector::All
        } else {
            CategorySelector::Named(value)
        }
    }
}

impl<T: Into<CategorySelector>> From<Option<T>> for CategorySelector {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => f.write_str("all"),
            CategorySelector::Named(name) => f.write_str(name),
        }
    }
}

impl Serialize for CategorySelector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategorySelector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(CategorySelector::from)
    }
}

/// An immutable snapshot of the filter controls.
///
/// Changing a control produces a new `Selection`; nothing is mutated in
/// place.
///
/// ```
/// use cpf_catalog::filter::{CategorySelector, Selection};
///
/// let base = Selection::default();
/// let narrowed = base.with_category("workshop").with_search_term("react");
///
/// assert!(base.is_identity());
/// assert_eq!(narrowed.category(), &CategorySelector::Named("workshop".into()));
/// assert_eq!(narrowed.search_term(), "react");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    category: CategorySelector,
    only_flagged: bool,
    search_term: String,
}

impl Selection {
    pub fn new(
        category: impl Into<CategorySelector>,
        only_flagged: bool,
        search_term: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            only_flagged,
            search_term: search_term.into(),
        }
    }

    pub fn category(&self) -> &CategorySelector {
        &self.category
    }

    pub fn only_flagged(&self) -> bool {
        self.only_flagged
    }

    /// The raw search term, untrimmed.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn with_category(&self, category: impl Into<CategorySelector>) -> Self {
        Self {
            category: category.into(),
            ..self.clone()
        }
    }

    pub fn with_only_flagged(&self, only_flagged: bool) -> Self {
        Self {
            only_flagged,
            ..self.clone()
        }
    }

    /// Returns a copy with the flag toggle inverted.
    pub fn toggled_flag_only(&self) -> Self {
        self.with_only_flagged(!self.only_flagged)
    }

    pub fn with_search_term(&self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self.clone()
        }
    }

    /// Returns true if this selection lets every item through.
    pub fn is_identity(&self) -> bool {
        self.category.is_all() && !self.only_flagged && self.search_term.is_empty()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "category={} only_flagged={} search={:?}",
            self.category, self.only_flagged, self.search_term
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let selection = Selection::default();
        assert_eq!(selection.category(), &CategorySelector::All);
        assert!(!selection.only_flagged());
        assert_eq!(selection.search_term(), "");
        assert!(selection.is_identity());
    }

    #[test]
    fn test_all_selector_is_case_insensitive() {
        assert_eq!(CategorySelector::from("all"), CategorySelector::All);
        assert_eq!(CategorySelector::from("ALL"), CategorySelector::All);
        assert_eq!(
            CategorySelector::from("Workshop"),
            CategorySelector::Named("Workshop".to_string())
        );
        assert_eq!(CategorySelector::from(None::<&str>), CategorySelector::All);
    }

    #[test]
    fn test_with_methods_do_not_mutate() {
        let base = Selection::default();
        let changed = base
            .with_category("web")
            .with_only_flagged(true)
            .with_search_term("  React ");

        assert!(base.is_identity());
        assert_eq!(changed.category().name(), Some("web"));
        assert!(changed.only_flagged());
        assert_eq!(changed.search_term(), "  React ");
    }

    #[test]
    fn test_toggled_flag_only() {
        let s = Selection::default().toggled_flag_only();
        assert!(s.only_flagged());
        assert!(!s.toggled_flag_only().only_flagged());
    }

    #[test]
    fn test_selection_serializes_category_as_string() {
        let s = Selection::new("hackathon", true, "sosten");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["category"], "hackathon");
        assert_eq!(json["only_flagged"], true);

        let back: Selection = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_display() {
        let s = Selection::new("all", false, "x");
        assert_eq!(s.to_string(), r#"category=all only_flagged=false search="x""#);
    }
}
