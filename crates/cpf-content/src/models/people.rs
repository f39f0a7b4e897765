//! Team members and instructors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::SocialLinks;

/// A course instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub bio: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    /// Years of experience as displayed, e.g. "4+ años".
    pub experience: String,
}

/// A member of the club's organizing team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub group: TeamGroup,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub social: SocialLinks,
}

/// Which part of the team a member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamGroup {
    Board,
    Secretariat,
}

impl TeamGroup {
    pub fn label(self) -> &'static str {
        match self {
            TeamGroup::Board => "Comisión Directiva",
            TeamGroup::Secretariat => "Secretarías",
        }
    }
}

impl fmt::Display for TeamGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamGroup::Board => f.write_str("board"),
            TeamGroup::Secretariat => f.write_str("secretariat"),
        }
    }
}
