//! Course model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A course offered by the club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,

    pub title: String,

    pub slug: String,

    pub description: String,

    pub level: CourseLevel,

    /// Human-readable duration, e.g. "6 semanas".
    pub duration: String,

    /// Instructor name; may match an [`Instructor`](super::Instructor) record.
    pub instructor: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syllabus: Vec<SyllabusWeek>,
}

/// One block of a course syllabus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusWeek {
    pub title: String,
    pub topics: Vec<String>,
}

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [
        CourseLevel::Beginner,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Principiante",
            CourseLevel::Intermediate => "Intermedio",
            CourseLevel::Advanced => "Avanzado",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown course level: {}", s))
    }
}

impl Course {
    /// Total number of topics across the syllabus.
    pub fn topic_count(&self) -> usize {
        self.syllabus.iter().map(|week| week.topics.len()).sum()
    }
}
