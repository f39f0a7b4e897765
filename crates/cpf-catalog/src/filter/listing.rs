//! The filterable view of a catalog item.

use cpf_content::models::{Course, Event, Post, Project};

/// A catalog item that can be narrowed by a [`Selection`](super::Selection).
pub trait Listing {
    /// Singular noun used in messages, e.g. "event".
    const NOUN: &'static str;

    /// Plural noun used in messages, e.g. "events".
    const PLURAL: &'static str;

    fn id(&self) -> u32;

    fn title(&self) -> &str;

    fn slug(&self) -> &str;

    /// Category keys this item belongs to.
    fn category_keys(&self) -> Vec<&str>;

    /// Returns true if the item belongs to `category` (exact match).
    fn in_category(&self, category: &str) -> bool {
        self.category_keys().contains(&category)
    }

    /// The item's boolean flag, or `None` if the listing has none.
    fn flag(&self) -> Option<bool>;

    /// Text the search term is matched against.
    fn searchable_text(&self) -> String;
}

/// Every distinct category key across `items`, in first-seen order.
///
/// Only categories that actually occur are returned.
pub fn known_categories<T: Listing>(items: &[T]) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for key in items.iter().flat_map(Listing::category_keys) {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

impl Listing for Event {
    const NOUN: &'static str = "event";
    const PLURAL: &'static str = "events";

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn category_keys(&self) -> Vec<&str> {
        vec![self.kind.as_str()]
    }

    fn in_category(&self, category: &str) -> bool {
        self.kind.as_str() == category
    }

    fn flag(&self) -> Option<bool> {
        Some(self.is_upcoming)
    }

    fn searchable_text(&self) -> String {
        format!("{}\n{}", self.title, self.description)
    }
}

impl Listing for Project {
    const NOUN: &'static str = "project";
    const PLURAL: &'static str = "projects";

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn category_keys(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }

    fn in_category(&self, category: &str) -> bool {
        self.category.as_str() == category
    }

    fn flag(&self) -> Option<bool> {
        Some(self.featured)
    }

    fn searchable_text(&self) -> String {
        let mut text = format!("{}\n{}", self.title, self.description);
        for tag in &self.tags {
            text.push('\n');
            text.push_str(tag);
        }
        text
    }
}

impl Listing for Post {
    const NOUN: &'static str = "post";
    const PLURAL: &'static str = "posts";

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    // The blog filters by tag.
    fn category_keys(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }

    fn in_category(&self, category: &str) -> bool {
        self.has_tag(category)
    }

    fn flag(&self) -> Option<bool> {
        None
    }

    fn searchable_text(&self) -> String {
        format!("{}\n{}", self.title, self.excerpt)
    }
}

impl Listing for Course {
    const NOUN: &'static str = "course";
    const PLURAL: &'static str = "courses";

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn category_keys(&self) -> Vec<&str> {
        vec![self.level.as_str()]
    }

    fn flag(&self) -> Option<bool> {
        None
    }

    fn searchable_text(&self) -> String {
        let mut text = format!("{}\n{}", self.title, self.description);
        for tag in &self.tags {
            text.push('\n');
            text.push_str(tag);
        }
        text
    }
}
