//! Owner profile and contact details.

use serde::{Deserialize, Serialize};

/// Kind of social link, used to pick an icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    /// GitHub profile.
    Github,
    /// LinkedIn profile.
    Linkedin,
    /// E-mail address.
    Email,
    /// Anything else.
    #[default]
    Website,
}

impl SocialKind {
    /// Returns a terminal-safe glyph for the link.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Github => "gh",
            Self::Linkedin => "in",
            Self::Email => "@",
            Self::Website => "↗",
        }
    }
}

/// External profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Display label.
    pub label: String,
    /// Target URL (`mailto:` allowed).
    pub url: String,
    /// Link kind.
    #[serde(default)]
    pub kind: SocialKind,
}

/// Hero section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name.
    pub name: String,
    /// Short headline under the name on the loading screen.
    pub headline: String,
    /// Roles cycled by the hero typewriter.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Biography paragraph.
    pub bio: String,
    /// Resume location (path or URL).
    #[serde(default)]
    pub resume: Option<String>,
    /// Social links.
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Profile {
    /// Returns initials used in the loading screen signature.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Contact section details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Public e-mail address.
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Location line.
    #[serde(default)]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            headline: String::new(),
            roles: Vec::new(),
            bio: String::new(),
            resume: None,
            socials: Vec::new(),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(profile("Pavan Devmurari").initials(), "PD");
        assert_eq!(profile("ada lovelace byron").initials(), "AL");
        assert_eq!(profile("").initials(), "");
    }
}
