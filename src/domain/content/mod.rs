//! Portfolio content entities.

mod portfolio;
mod profile;
mod showcase;

pub use portfolio::{Portfolio, Section};
pub use profile::{ContactInfo, Profile, SocialKind, SocialLink};
pub use showcase::{Achievement, Certification, CodingProfile, Education, Project, SkillCategory};
