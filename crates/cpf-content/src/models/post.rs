//! Blog post model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post.
///
/// Posts have no category enumeration of their own; the blog filter selects
/// by tag instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,

    pub title: String,

    pub slug: String,

    /// Short summary shown on the blog index.
    pub excerpt: String,

    pub date: NaiveDate,

    pub author: String,

    /// Estimated reading time in minutes.
    #[serde(default)]
    pub read_time_minutes: u32,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Full text of the post; plain text paragraphs separated by blank lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Post {
    /// Returns true if the post carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Paragraphs of the body, skipping blank runs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body
            .as_deref()
            .unwrap_or_default()
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
