//! Project model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A project built by club members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,

    pub title: String,

    pub slug: String,

    pub description: String,

    /// Technologies used; searched alongside title and description.
    #[serde(default)]
    pub tags: Vec<String>,

    pub category: ProjectCategory,

    /// Highlighted on the landing page.
    #[serde(default)]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,

    #[serde(default)]
    pub status: ProjectStatus,

    #[serde(default)]
    pub stars: u32,

    #[serde(default)]
    pub forks: u32,

    #[serde(default)]
    pub open_issues: u32,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Contributor>,
}

/// A person who worked on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

/// Category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Data,
    Ml,
    Tools,
    Game,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Data,
        ProjectCategory::Ml,
        ProjectCategory::Tools,
        ProjectCategory::Game,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Data => "data",
            ProjectCategory::Ml => "ml",
            ProjectCategory::Tools => "tools",
            ProjectCategory::Game => "game",
        }
    }

    /// Returns the label shown on the category tabs.
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Web => "Desarrollo Web",
            ProjectCategory::Mobile => "Apps Móviles",
            ProjectCategory::Data => "Ciencia de Datos",
            ProjectCategory::Ml => "Machine Learning",
            ProjectCategory::Tools => "Herramientas",
            ProjectCategory::Game => "Juegos",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown project category: {}", s))
    }
}

/// Development status of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// Serialized key, e.g. `"in-progress"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "En desarrollo",
            ProjectStatus::Completed => "Completado",
            ProjectStatus::OnHold => "En pausa",
        }
    }
}

impl Project {
    /// Returns true if the project carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
