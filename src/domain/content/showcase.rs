//! Skills, education, projects and achievements.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// Group of related skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

/// Degree or school entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

/// Certification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Award or competition result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Competitive programming profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingProfile {
    pub platform: String,
    pub username: String,
    #[serde(default)]
    pub rating: Option<String>,
    pub link: String,
}
