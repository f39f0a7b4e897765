//! Error types for content parsing and contact submission.

use thiserror::Error;

/// Errors raised while decoding a dataset.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A dataset did not match its model.
    #[error("failed to parse {dataset} dataset: {source}")]
    Parse {
        /// Dataset name, e.g. "events".
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// Returns the name of the dataset that failed to parse.
    pub fn dataset(&self) -> &'static str {
        match self {
            ContentError::Parse { dataset, .. } => dataset,
        }
    }
}

/// Errors produced by the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// A required form field was left blank.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// The sender address is not a plausible email.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The message could not be handed to the recipient.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

impl ContactError {
    /// Returns true if the error is caused by the form contents rather than delivery.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContactError::MissingField { .. } | ContactError::InvalidEmail(_)
        )
    }
}

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
