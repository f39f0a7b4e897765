//! Output formatting utilities for the cpf CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by entity type:
//!
//! - [`events`] - Event listing and detail view
//! - [`projects`] - Project listing and detail view
//! - [`posts`] - Blog listing, tag list and detail view
//! - [`courses`] - Course listing and detail view
//! - [`club`] - Team, instructors, history and news
//! - [`pages`] - Community channels, media kit and privacy policy
//! - [`contact`] - Contact form receipts
//! - [`helpers`] - Common formatting utilities (truncation, dates, empty state)
//!
//! Filtered listings never fail to render: an empty result prints an
//! explicit empty-state message, or `"empty": true` with an empty array in
//! JSON.

mod club;
mod contact;
mod courses;
mod events;
pub mod helpers;
mod pages;
mod posts;
mod projects;

// Events
pub use events::{
    format_event_details_json, format_event_details_table, format_events_json,
    format_events_table,
};

// Projects
pub use projects::{
    format_project_details_json, format_project_details_table, format_projects_json,
    format_projects_table,
};

// Posts
pub use posts::{
    format_post_details_json, format_post_details_table, format_posts_json, format_posts_table,
    format_tags_json, format_tags_table, tag_counts,
};

// Courses
pub use courses::{
    format_course_details_json, format_course_details_table, format_courses_json,
    format_courses_table,
};

// Club pages
pub use club::{
    format_instructors_json, format_instructors_table, format_news_json, format_news_table,
    format_team_json, format_team_table, format_timeline_json, format_timeline_table,
    InstructorOutput,
};
pub use pages::{
    format_community_json, format_community_table, format_media_kit_json, format_media_kit_table,
    format_privacy_json, format_privacy_table,
};

// Contact
pub use contact::{format_receipt, format_receipt_json};
