//! Common model types shared across the content records.

use serde::{Deserialize, Serialize};

/// Social profile links for a person.
///
/// Every link is optional; an empty value serializes to `{}`.
///
/// ```
/// use cpf_content::models::SocialLinks;
///
/// let links = SocialLinks::default();
/// assert!(links.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SocialLinks {
    /// Returns true if no link is set.
    pub fn is_empty(&self) -> bool {
        self.github.is_none()
            && self.linkedin.is_none()
            && self.instagram.is_none()
            && self.email.is_none()
    }

    /// Iterates over the links that are set, paired with a short label.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("github", self.github.as_deref()),
            ("linkedin", self.linkedin.as_deref()),
            ("instagram", self.instagram.as_deref()),
            ("email", self.email.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, link)| link.map(|l| (label, l)))
    }
}

/// Club-wide contact details shown in the footer and on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Full club name.
    pub name: String,

    /// Abbreviation used in headings.
    pub short_name: String,

    /// Public contact address; also the default contact-form recipient.
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    /// Channels listed on the community page, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub community: Vec<CommunityChannel>,
}

/// A social channel where the community gathers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityChannel {
    pub name: String,
    pub url: String,
    /// What members find there.
    pub description: String,
}
