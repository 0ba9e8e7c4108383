//! Portfolio aggregate and section catalogue.

use serde::{Deserialize, Serialize};

use super::profile::{ContactInfo, Profile};
use super::showcase::{
    Achievement, Certification, CodingProfile, Education, Project, SkillCategory,
};
use crate::domain::errors::ContentError;

const DEFAULT_CONTENT: &str = include_str!("../../../assets/portfolio.toml");

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Hero content.
    pub profile: Profile,
    /// Skill groups.
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    /// Education history.
    #[serde(default)]
    pub education: Vec<Education>,
    /// Certifications.
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// Project cards.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Smaller projects listed below the cards.
    #[serde(default)]
    pub other_projects: Vec<Project>,
    /// Awards.
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    /// Competitive programming profiles.
    #[serde(default)]
    pub coding_profiles: Vec<CodingProfile>,
    /// Contact details.
    pub contact: ContactInfo,
}

impl Portfolio {
    /// Parses a portfolio from TOML.
    ///
    /// # Errors
    /// Returns [`ContentError::Parse`] if the document is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the portfolio bundled with the binary.
    ///
    /// # Panics
    /// Panics if the bundled document is malformed.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn bundled() -> Self {
        Self::from_toml(DEFAULT_CONTENT).expect("bundled portfolio.toml must parse")
    }
}

/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Hero.
    Home,
    /// Skills grid.
    Skills,
    /// Education and certifications.
    Education,
    /// Projects.
    Projects,
    /// Achievements and coding profiles.
    Achievements,
    /// Contact info and form.
    Contact,
    /// Footer.
    Footer,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Skills,
        Self::Education,
        Self::Projects,
        Self::Achievements,
        Self::Contact,
        Self::Footer,
    ];

    /// Sections linked from the header navigation.
    pub const NAV: [Self; 4] = [
        Self::Home,
        Self::Education,
        Self::Projects,
        Self::Achievements,
    ];

    /// Returns heading text.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Skills => "Technical Skills",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Contact => "Get In Touch",
            Self::Footer => "footer",
        }
    }

    /// Returns the position used for staggered reveal.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}
