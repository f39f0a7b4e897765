//! Validated content catalog for the FIUNA programming club.
//!
//! A [`Catalog`] is built once from [`Content`] (bundled or loaded through a
//! [`CatalogStore`]), checked for duplicate ids, blank titles and malformed
//! brand colors, and then only read. Listing views narrow it with the
//! [`filter`] module.

pub mod filter;
mod lookups;
pub mod store;
pub mod upcoming;

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use cpf_content::models::{
    CommunityChannel, Course, Event, Instructor, MediaKit, NewsItem, Post, PrivacyPolicy, Project,
    SiteInfo, TeamGroup, TeamMember, TimelineEntry,
};
use cpf_content::Content;
use thiserror::Error;
use tracing::debug;

pub use filter::{Listing, Selection, SelectionState};
pub use lookups::{find_similar_name, format_not_found_error, LookupError};
pub use store::{CatalogStore, CatalogStoreError};
pub use upcoming::UpcomingPolicy;

/// Errors raised while validating content into a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two items of one listing share an id.
    #[error("duplicate {listing} id {id}")]
    DuplicateId { listing: &'static str, id: u32 },

    /// An item has a blank title.
    #[error("{listing} {id} has an empty title")]
    EmptyTitle { listing: &'static str, id: u32 },

    /// A media kit color is not `#rrggbb`.
    #[error("brand color {name} has invalid hex value '{hex}'")]
    InvalidColor { name: String, hex: String },
}

/// Result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// The read-only content catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    content: Content,
    policy: UpcomingPolicy,
    /// `is_upcoming` of each event as curated, before the policy ran.
    stored_upcoming: Vec<bool>,
}

impl Catalog {
    /// Validates `content` and keeps the curated upcoming flags.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a listing has duplicate ids or blank
    /// titles, or a brand color is malformed.
    pub fn new(content: Content) -> Result<Self> {
        Self::with_policy(content, UpcomingPolicy::Stored, Local::now().date_naive())
    }

    /// Validates `content` and applies `policy` to the events relative to `today`.
    pub fn with_policy(
        mut content: Content,
        policy: UpcomingPolicy,
        today: NaiveDate,
    ) -> Result<Self> {
        validate_listing(&content.events)?;
        validate_listing(&content.projects)?;
        validate_listing(&content.posts)?;
        validate_listing(&content.courses)?;
        validate_colors(&content.media_kit)?;

        let stored_upcoming = content.events.iter().map(|e| e.is_upcoming).collect();
        let changed = policy.apply(&mut content.events, today);
        debug!(
            events = content.events.len(),
            projects = content.projects.len(),
            posts = content.posts.len(),
            courses = content.courses.len(),
            policy = %policy,
            changed_flags = changed,
            "catalog built"
        );

        Ok(Self {
            content,
            policy,
            stored_upcoming,
        })
    }

    /// Builds a catalog from the bundled sample data.
    pub fn bundled() -> std::result::Result<Self, CatalogStoreError> {
        Ok(Self::new(Content::bundled()?)?)
    }

    pub fn policy(&self) -> UpcomingPolicy {
        self.policy
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn into_content(self) -> Content {
        self.content
    }

    /// The content with every event's curated upcoming flag, whatever the
    /// policy. Used when writing the catalog back to disk.
    pub fn curated_content(&self) -> Content {
        let mut content = self.content.clone();
        for (event, stored) in content.events.iter_mut().zip(&self.stored_upcoming) {
            event.is_upcoming = *stored;
        }
        content
    }

    pub fn events(&self) -> &[Event] {
        &self.content.events
    }

    pub fn projects(&self) -> &[Project] {
        &self.content.projects
    }

    pub fn posts(&self) -> &[Post] {
        &self.content.posts
    }

    pub fn courses(&self) -> &[Course] {
        &self.content.courses
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.content.instructors
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.content.team
    }

    /// Team members of one group, in dataset order.
    pub fn team_group(&self, group: TeamGroup) -> impl Iterator<Item = &TeamMember> {
        self.content.team.iter().filter(move |m| m.group == group)
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.content.timeline
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.content.news
    }

    pub fn site(&self) -> &SiteInfo {
        &self.content.site
    }

    /// Community channels from the site info.
    pub fn community(&self) -> &[CommunityChannel] {
        &self.content.site.community
    }

    pub fn media_kit(&self) -> &MediaKit {
        &self.content.media_kit
    }

    pub fn privacy(&self) -> &PrivacyPolicy {
        &self.content.privacy
    }

    /// Courses taught by the named instructor.
    pub fn courses_by_instructor<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Course> {
        self.content
            .courses
            .iter()
            .filter(move |c| c.instructor == name)
    }
}

fn validate_listing<T: Listing>(items: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id()) {
            return Err(CatalogError::DuplicateId {
                listing: T::NOUN,
                id: item.id(),
            });
        }
        if item.title().trim().is_empty() {
            return Err(CatalogError::EmptyTitle {
                listing: T::NOUN,
                id: item.id(),
            });
        }
    }
    Ok(())
}

fn validate_colors(kit: &MediaKit) -> Result<()> {
    match kit.colors.iter().find(|c| c.rgb().is_none()) {
        Some(color) => Err(CatalogError::InvalidColor {
            name: color.name.clone(),
            hex: color.hex.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.events().len(), 6);
        assert_eq!(catalog.policy(), UpcomingPolicy::Stored);
        assert_eq!(catalog.site().short_name, "CPF");
        assert_eq!(catalog.community()[3].name, "Discord");
        assert_eq!(catalog.privacy().contact_email, "privacidad@cpf.com.py");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut content = Content::bundled().unwrap();
        content.projects[3].id = content.projects[0].id;
        let err = Catalog::new(content).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                listing: "project",
                id: 1
            }
        );
        assert_eq!(err.to_string(), "duplicate project id 1");
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut content = Content::bundled().unwrap();
        content.posts[2].title = "   ".to_string();
        let err = Catalog::new(content).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyTitle {
                listing: "post",
                id: 3
            }
        );
    }

    #[test]
    fn test_invalid_brand_color_rejected() {
        let mut content = Content::bundled().unwrap();
        content.media_kit.colors[1].hex = "7E69AB".to_string();
        let err = Catalog::new(content).unwrap_err();
        assert_eq!(
            err.to_string(),
            "brand color Secundario has invalid hex value '7E69AB'"
        );
    }

    #[test]
    fn test_ids_only_unique_within_listing() {
        let content = Content::bundled().unwrap();
        // Event 1 and project 1 coexist.
        assert_eq!(content.events[0].id, content.projects[0].id);
        assert!(Catalog::new(content).is_ok());
    }

    #[test]
    fn test_date_policy_applied_once_at_build() {
        let content = Content::bundled().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let catalog = Catalog::with_policy(content, UpcomingPolicy::FromDate, today).unwrap();
        let upcoming: Vec<u32> = catalog
            .events()
            .iter()
            .filter(|e| e.is_upcoming)
            .map(|e| e.id)
            .collect();
        assert_eq!(upcoming, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_curated_content_ignores_date_policy() {
        let content = Content::bundled().unwrap();
        let curated: Vec<bool> = content.events.iter().map(|e| e.is_upcoming).collect();
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let catalog =
            Catalog::with_policy(content.clone(), UpcomingPolicy::FromDate, today).unwrap();
        assert_ne!(
            catalog.events().iter().map(|e| e.is_upcoming).collect::<Vec<_>>(),
            curated
        );

        assert_eq!(catalog.curated_content(), content);
    }

    #[test]
    fn test_team_group_and_instructor_courses() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.team_group(TeamGroup::Secretariat).count(), 4);
        let titles: Vec<_> = catalog
            .courses_by_instructor("Daniel Villalba")
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Introducción a Python"]);
    }
}
