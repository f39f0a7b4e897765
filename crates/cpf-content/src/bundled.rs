//! Bundled sample datasets and the [`Content`] aggregate.
//!
//! The sample data ships inside the binary; a content directory on disk can
//! replace any dataset file by file (see `cpf_catalog::store`).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::models::{
    Course, Event, Instructor, MediaKit, NewsItem, Post, PrivacyPolicy, Project, SiteInfo,
    TeamMember, TimelineEntry,
};

/// One dataset of the content directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Events,
    Projects,
    Posts,
    Courses,
    Instructors,
    Team,
    Timeline,
    News,
    Site,
    MediaKit,
    Privacy,
}

impl Dataset {
    pub const ALL: [Dataset; 11] = [
        Dataset::Events,
        Dataset::Projects,
        Dataset::Posts,
        Dataset::Courses,
        Dataset::Instructors,
        Dataset::Team,
        Dataset::Timeline,
        Dataset::News,
        Dataset::Site,
        Dataset::MediaKit,
        Dataset::Privacy,
    ];

    /// Short name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Events => "events",
            Dataset::Projects => "projects",
            Dataset::Posts => "posts",
            Dataset::Courses => "courses",
            Dataset::Instructors => "instructors",
            Dataset::Team => "team",
            Dataset::Timeline => "timeline",
            Dataset::News => "news",
            Dataset::Site => "site",
            Dataset::MediaKit => "media-kit",
            Dataset::Privacy => "privacy",
        }
    }

    /// File name inside a content directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Events => "events.json",
            Dataset::Projects => "projects.json",
            Dataset::Posts => "posts.json",
            Dataset::Courses => "courses.json",
            Dataset::Instructors => "instructors.json",
            Dataset::Team => "team.json",
            Dataset::Timeline => "timeline.json",
            Dataset::News => "news.json",
            Dataset::Site => "site.json",
            Dataset::MediaKit => "media-kit.json",
            Dataset::Privacy => "privacy.json",
        }
    }

    /// The JSON compiled into the crate for this dataset.
    pub fn bundled_json(self) -> &'static str {
        match self {
            Dataset::Events => include_str!("../data/events.json"),
            Dataset::Projects => include_str!("../data/projects.json"),
            Dataset::Posts => include_str!("../data/posts.json"),
            Dataset::Courses => include_str!("../data/courses.json"),
            Dataset::Instructors => include_str!("../data/instructors.json"),
            Dataset::Team => include_str!("../data/team.json"),
            Dataset::Timeline => include_str!("../data/timeline.json"),
            Dataset::News => include_str!("../data/news.json"),
            Dataset::Site => include_str!("../data/site.json"),
            Dataset::MediaKit => include_str!("../data/media-kit.json"),
            Dataset::Privacy => include_str!("../data/privacy.json"),
        }
    }

    /// Parses `json` as this dataset's record type.
    pub fn parse<T: DeserializeOwned>(self, json: &str) -> Result<T> {
        serde_json::from_str(json).map_err(|source| ContentError::Parse {
            dataset: self.name(),
            source,
        })
    }

    /// Parses the bundled copy of this dataset.
    pub fn parse_bundled<T: DeserializeOwned>(self) -> Result<T> {
        self.parse(self.bundled_json())
    }
}

/// Every dataset the site renders, as loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub events: Vec<Event>,
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
    pub courses: Vec<Course>,
    pub instructors: Vec<Instructor>,
    pub team: Vec<TeamMember>,
    pub timeline: Vec<TimelineEntry>,
    pub news: Vec<NewsItem>,
    pub site: SiteInfo,
    pub media_kit: MediaKit,
    pub privacy: PrivacyPolicy,
}

impl Content {
    /// Loads the sample data compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_source(|dataset| Ok(dataset.bundled_json().to_string()))
    }

    /// Builds content from a per-dataset JSON source.
    ///
    /// `source` is called once per dataset, in [`Dataset::ALL`] order, and
    /// returns the raw JSON for that dataset.
    pub fn from_source<F, E>(mut source: F) -> std::result::Result<Self, E>
    where
        F: FnMut(Dataset) -> std::result::Result<String, E>,
        E: From<ContentError>,
    {
        Ok(Self {
            events: Dataset::Events.parse(&source(Dataset::Events)?)?,
            projects: Dataset::Projects.parse(&source(Dataset::Projects)?)?,
            posts: Dataset::Posts.parse(&source(Dataset::Posts)?)?,
            courses: Dataset::Courses.parse(&source(Dataset::Courses)?)?,
            instructors: Dataset::Instructors.parse(&source(Dataset::Instructors)?)?,
            team: Dataset::Team.parse(&source(Dataset::Team)?)?,
            timeline: Dataset::Timeline.parse(&source(Dataset::Timeline)?)?,
            news: Dataset::News.parse(&source(Dataset::News)?)?,
            site: Dataset::Site.parse(&source(Dataset::Site)?)?,
            media_kit: Dataset::MediaKit.parse(&source(Dataset::MediaKit)?)?,
            privacy: Dataset::Privacy.parse(&source(Dataset::Privacy)?)?,
        })
    }

    /// Serializes one dataset back to pretty JSON.
    pub fn dataset_json(&self, dataset: Dataset) -> serde_json::Result<String> {
        match dataset {
            Dataset::Events => serde_json::to_string_pretty(&self.events),
            Dataset::Projects => serde_json::to_string_pretty(&self.projects),
            Dataset::Posts => serde_json::to_string_pretty(&self.posts),
            Dataset::Courses => serde_json::to_string_pretty(&self.courses),
            Dataset::Instructors => serde_json::to_string_pretty(&self.instructors),
            Dataset::Team => serde_json::to_string_pretty(&self.team),
            Dataset::Timeline => serde_json::to_string_pretty(&self.timeline),
            Dataset::News => serde_json::to_string_pretty(&self.news),
            Dataset::Site => serde_json::to_string_pretty(&self.site),
            Dataset::MediaKit => serde_json::to_string_pretty(&self.media_kit),
            Dataset::Privacy => serde_json::to_string_pretty(&self.privacy),
        }
    }

    /// Every distinct post tag, in first-seen order.
    pub fn post_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.posts.iter().flat_map(|p| p.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }
}
