//! Content models and bundled datasets for the FIUNA programming club.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use cpf_content::prelude::*;
//!
//! let content = Content::bundled().unwrap();
//! assert!(!content.events.is_empty());
//! ```
//!
//! This re-exports the listing models ([`Event`](models::Event),
//! [`Project`](models::Project), [`Post`](models::Post),
//! [`Course`](models::Course)), the supporting records, the [`Content`]
//! aggregate and the simulated [`ContactClient`](contact::ContactClient).

pub mod bundled;
pub mod contact;
pub mod error;
pub mod models;
pub mod prelude;

pub use bundled::Content;
