//! Media kit and privacy policy pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Brand resources for designers, sponsors and collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaKit {
    pub summary: String,
    pub logo: LogoAsset,
    pub colors: Vec<BrandColor>,
    pub typography: Vec<Typeface>,
    /// Usage rules to follow.
    pub dos: Vec<String>,
    /// Usage rules to avoid.
    pub donts: Vec<String>,
    /// Attribution line; `{year}` is replaced with the current year.
    pub attribution: String,
    /// Site-relative path of the complete download.
    pub package: String,
}

impl MediaKit {
    /// The attribution line for `year`.
    ///
    /// ```
    /// use cpf_content::Content;
    ///
    /// let kit = Content::bundled().unwrap().media_kit;
    /// assert!(kit.attribution_for(2025).starts_with("© 2025 "));
    /// ```
    pub fn attribution_for(&self, year: i32) -> String {
        self.attribution.replace("{year}", &year.to_string())
    }
}

/// The club logo and the formats it is published in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoAsset {
    pub guidance: String,
    /// Lowercase file formats, e.g. "svg".
    pub formats: Vec<String>,
}

impl LogoAsset {
    /// Site-relative download path for one format.
    pub fn download_path(&self, format: &str) -> String {
        format!("/media-kit/logo/{}", format)
    }
}

/// A named brand color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColor {
    pub name: String,
    /// `#rrggbb`, either case.
    pub hex: String,
}

impl BrandColor {
    /// The color's red, green and blue channels, or `None` when `hex` is
    /// not a `#rrggbb` value.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let digits = self.hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// A typeface and where it is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typeface {
    /// e.g. "Titulares".
    pub role: String,
    pub family: String,
    pub guidance: String,
}

/// The site's privacy policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyPolicy {
    pub title: String,
    pub summary: String,
    /// Date of the last revision.
    pub updated: NaiveDate,
    pub contact_email: String,
    pub address: String,
    pub sections: Vec<PolicySection>,
}

impl PrivacyPolicy {
    /// Finds the first section whose heading contains `term`, ignoring case.
    pub fn find_section(&self, term: &str) -> Option<&PolicySection> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.sections
            .iter()
            .find(|s| s.heading.to_lowercase().contains(&needle))
    }
}

/// One heading of the privacy policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySection {
    pub heading: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<PolicyItem>,
}

/// A bullet under a policy section, optionally titled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
}
