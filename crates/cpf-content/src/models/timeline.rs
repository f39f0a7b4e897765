//! Club history and news.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A milestone in the club's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: i32,
    pub title: String,
    pub description: String,
}

/// A news headline shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    /// Display category, e.g. "Cursos" or "Eventos".
    pub category: String,
    /// Site-relative link to the full item.
    pub link: String,
}
