//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types from the cpf-content crate so that
//! consumers can pull in the models and the bundled dataset with a single
//! use statement.
//!
//! # Example
//!
//! ```
//! use cpf_content::prelude::*;
//!
//! // Now you have access to:
//! // - Content (bundled or loaded datasets)
//! // - Event, Project, Post, Course and their enums
//! // - Instructor, TeamMember, TimelineEntry, NewsItem, SiteInfo
// - MediaKit, PrivacyPolicy and the community channels
//! // - ContactClient, ContactForm, ContactReceipt
//! // - ContentError, ContactError
//! ```

pub use crate::bundled::Content;

pub use crate::contact::{ContactClient, ContactClientBuilder, ContactForm, ContactReceipt};

pub use crate::error::{ContactError, ContentError, Result};

pub use crate::models::{
    AgendaSlot, BrandColor, CommunityChannel, Contributor, Course, CourseLevel, Event, EventKind,
    Instructor, MediaKit, NewsItem, PolicySection, Post, PrivacyPolicy, Project, ProjectCategory,
    ProjectStatus, SiteInfo, SocialLinks, SyllabusWeek, TeamGroup, TeamMember, TimelineEntry,
};
