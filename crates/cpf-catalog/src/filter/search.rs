//! Case-insensitive substring search.

/// Lowercases `text` using Unicode case mapping.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Returns true if `folded_term` occurs in `text` ignoring case.
///
/// `folded_term` must already be lowercased with [`fold_case`]. An empty term
/// matches any text.
pub fn text_contains(text: &str, folded_term: &str) -> bool {
    folded_term.is_empty() || fold_case(text).contains(folded_term)
}
