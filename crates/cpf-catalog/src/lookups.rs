//! Detail lookups by slug, id or name, with "did you mean" suggestions.

use strsim::levenshtein;

use cpf_content::models::{Course, Event, Instructor, Post, Project};

use crate::filter::Listing;
use crate::Catalog;

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("{}", format_not_found_error(resource_type, identifier, suggestion.as_deref()))]
    NotFound {
        /// What was searched for, e.g. "event".
        resource_type: &'static str,
        /// The slug, id or name given.
        identifier: String,
        suggestion: Option<String>,
    },
}

impl LookupError {
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            LookupError::NotFound { suggestion, .. } => suggestion.as_deref(),
        }
    }
}

/// Formats the "not found" message, optionally including a suggestion.
pub fn format_not_found_error(
    resource_type: &str,
    identifier: &str,
    suggestion: Option<&str>,
) -> String {
    let base = format!("{} '{}' not found.", resource_type, identifier);
    match suggestion {
        Some(s) => format!("{} Did you mean '{}'?", base, s),
        None => base,
    }
}

/// Finds the closest candidate to `query` by case-insensitive edit distance.
///
/// Returns `None` when nothing is within [`MAX_SUGGESTION_DISTANCE`] or when
/// `query` is itself one of the candidates.
pub fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let mut best: Option<(&str, usize)> = None;
    for name in candidates.filter(|name| !name.is_empty()) {
        if name == query {
            return None;
        }
        let distance = levenshtein(&query_lower, &name.to_lowercase());
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((name, distance));
        }
    }

    best.filter(|(_, d)| *d <= MAX_SUGGESTION_DISTANCE)
        .map(|(name, _)| name.to_string())
}

/// Finds an item by exact slug or numeric id.
fn find_by_key<'a, T: Listing>(items: &'a [T], key: &str) -> Option<&'a T> {
    let id = key.parse::<u32>().ok();
    items
        .iter()
        .find(|item| item.slug() == key || Some(item.id()) == id)
}

fn lookup<'a, T: Listing>(items: &'a [T], key: &str) -> Result<&'a T, LookupError> {
    find_by_key(items, key).ok_or_else(|| LookupError::NotFound {
        resource_type: T::NOUN,
        identifier: key.to_string(),
        suggestion: find_similar_name(key, items.iter().map(Listing::slug)),
    })
}

impl Catalog {
    /// Looks up an event by slug or id.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`], with the closest slug as a
    /// suggestion when one is near enough.
    pub fn event_by_key(&self, key: &str) -> Result<&Event, LookupError> {
        lookup(self.events(), key)
    }

    pub fn project_by_key(&self, key: &str) -> Result<&Project, LookupError> {
        lookup(self.projects(), key)
    }

    pub fn post_by_key(&self, key: &str) -> Result<&Post, LookupError> {
        lookup(self.posts(), key)
    }

    pub fn course_by_key(&self, key: &str) -> Result<&Course, LookupError> {
        lookup(self.courses(), key)
    }

    /// Event with exactly this slug.
    pub fn event_by_slug(&self, slug: &str) -> Option<&Event> {
        self.events().iter().find(|e| e.slug == slug)
    }

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects().iter().find(|p| p.slug == slug)
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts().iter().find(|p| p.slug == slug)
    }

    pub fn course_by_slug(&self, slug: &str) -> Option<&Course> {
        self.courses().iter().find(|c| c.slug == slug)
    }

    /// Looks up an instructor by name (case-insensitive).
    pub fn instructor_by_name(&self, name: &str) -> Result<&Instructor, LookupError> {
        let name_lower = name.to_lowercase();
        self.instructors()
            .iter()
            .find(|i| i.name.to_lowercase() == name_lower)
            .ok_or_else(|| LookupError::NotFound {
                resource_type: "instructor",
                identifier: name.to_string(),
                suggestion: find_similar_name(
                    name,
                    self.instructors().iter().map(|i| i.name.as_str()),
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    #[test]
    fn test_event_by_slug_and_id() {
        let catalog = catalog();
        let by_slug = catalog.event_by_key("workshop-introduccion-react").unwrap();
        let by_id = catalog.event_by_key("2").unwrap();
        assert_eq!(by_slug.id, 2);
        assert_eq!(by_slug, by_id);
        assert!(catalog.event_by_slug("2").is_none());
    }

    #[test]
    fn test_missing_slug_suggests_closest() {
        let catalog = catalog();
        let err = catalog.project_by_key("bot-asistente-discrd").unwrap_err();
        assert_eq!(err.suggestion(), Some("bot-asistente-discord"));
        assert_eq!(
            err.to_string(),
            "project 'bot-asistente-discrd' not found. Did you mean 'bot-asistente-discord'?"
        );
    }

    #[test]
    fn test_far_miss_has_no_suggestion() {
        let err = catalog().post_by_key("kubernetes").unwrap_err();
        assert_eq!(err.suggestion(), None);
        assert_eq!(err.to_string(), "post 'kubernetes' not found.");
    }

    #[test]
    fn test_unknown_id_not_found() {
        assert!(catalog().course_by_key("99").is_err());
        assert_eq!(catalog().course_by_key("1").unwrap().slug, "introduccion-python");
    }

    #[test]
    fn test_instructor_by_name_case_insensitive() {
        let catalog = catalog();
        let instructor = catalog.instructor_by_name("oscar alderete").unwrap();
        assert_eq!(instructor.name, "Oscar Alderete");

        let err = catalog.instructor_by_name("Oscar Aldrete").unwrap_err();
        assert_eq!(err.suggestion(), Some("Oscar Alderete"));
    }

    #[test]
    fn test_find_similar_name() {
        let names = ["hackathon", "workshop", "meetup", "challenge"];
        assert_eq!(
            find_similar_name("hackaton", names.iter().copied()),
            Some("hackathon".to_string())
        );
        assert_eq!(
            find_similar_name("Workshop", names.iter().copied()),
            Some("workshop".to_string())
        );
        assert_eq!(find_similar_name("workshop", names.iter().copied()), None);
        assert_eq!(find_similar_name("conference", names.iter().copied()), None);
        assert_eq!(find_similar_name("x", std::iter::empty()), None);
    }
}
