//! Data types for the club's content.
//!
//! Listing models (events, projects, posts, courses) carry a closed category
//! enumeration; the remaining records back the static pages, including the
//! media kit and the privacy policy.

mod common;
mod course;
mod event;
mod pages;
mod people;
mod post;
mod project;
mod timeline;

pub use common::*;
pub use course::*;
pub use event::*;
pub use pages::*;
pub use people::*;
pub use post::*;
pub use project::*;
pub use timeline::*;
