#![allow(dead_code)]

//! The resume aggregate and its section entities.
//!
//! Empty string is the canonical "unset" value for every scalar field.
//! The JSON shape (camelCase keys, all fields always present on export)
//! is the interchange format for import/export — field names are load-bearing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a fresh list-item identifier.
///
/// UUID v4 rather than a short random token, so id collisions within a list
/// are off the table. Ids stay `String` because imported documents may carry
/// arbitrary id text ("1", "abc123", ...).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Semantically 0–100. Not clamped on write.
    pub proficiency: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    /// Free text ("Jan 2022 - Present"), not a date range.
    pub duration: String,
    /// Free text, may contain line breaks.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Single comma-delimited string, not a list.
    pub technologies: String,
    pub link: String,
}

/// The four fixed social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKey {
    Github,
    Linkedin,
    Portfolio,
    Twitter,
}

impl SocialKey {
    pub const ALL: [SocialKey; 4] = [
        SocialKey::Github,
        SocialKey::Linkedin,
        SocialKey::Portfolio,
        SocialKey::Twitter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialKey::Github => "github",
            SocialKey::Linkedin => "linkedin",
            SocialKey::Portfolio => "portfolio",
            SocialKey::Twitter => "twitter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialKey::Github => "GitHub",
            SocialKey::Linkedin => "LinkedIn",
            SocialKey::Portfolio => "Portfolio",
            SocialKey::Twitter => "Twitter/X",
        }
    }

    pub fn parse(s: &str) -> Option<SocialKey> {
        match s.to_lowercase().as_str() {
            "github" => Some(SocialKey::Github),
            "linkedin" => Some(SocialKey::Linkedin),
            "portfolio" => Some(SocialKey::Portfolio),
            "twitter" => Some(SocialKey::Twitter),
            _ => None,
        }
    }
}

/// Fixed record of four URL strings. Values are free text, unvalidated at
/// write time — the social links editor reports validity separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub portfolio: String,
    pub twitter: String,
}

impl SocialLinks {
    pub fn get(&self, key: SocialKey) -> &str {
        match key {
            SocialKey::Github => &self.github,
            SocialKey::Linkedin => &self.linkedin,
            SocialKey::Portfolio => &self.portfolio,
            SocialKey::Twitter => &self.twitter,
        }
    }

    pub fn set(&mut self, key: SocialKey, value: String) {
        match key {
            SocialKey::Github => self.github = value,
            SocialKey::Linkedin => self.linkedin = value,
            SocialKey::Portfolio => self.portfolio = value,
            SocialKey::Twitter => self.twitter = value,
        }
    }

    pub fn any_set(&self) -> bool {
        !self.github.is_empty()
            || !self.linkedin.is_empty()
            || !self.portfolio.is_empty()
            || !self.twitter.is_empty()
    }
}

/// The whole resume aggregate, owned exclusively by the store for the
/// lifetime of the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    // Header
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub phone: String,

    // Profile
    pub summary: String,

    // Section lists (insertion order is the only ordering signal)
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,

    pub social_links: SocialLinks,
}

// ────────────────────────────────────────────────────────────────────────────
// Partial updates
// ────────────────────────────────────────────────────────────────────────────

/// Field subset for `update_skill`. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub proficiency: Option<u8>,
}

impl SkillPatch {
    pub fn apply(self, skill: &mut Skill) {
        if let Some(name) = self.name {
            skill.name = name;
        }
        if let Some(proficiency) = self.proficiency {
            skill.proficiency = proficiency;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub role: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

impl ExperiencePatch {
    pub fn apply(self, exp: &mut Experience) {
        if let Some(role) = self.role {
            exp.role = role;
        }
        if let Some(company) = self.company {
            exp.company = company;
        }
        if let Some(duration) = self.duration {
            exp.duration = duration;
        }
        if let Some(description) = self.description {
            exp.description = description;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
}

impl EducationPatch {
    pub fn apply(self, edu: &mut Education) {
        if let Some(degree) = self.degree {
            edu.degree = degree;
        }
        if let Some(institution) = self.institution {
            edu.institution = institution;
        }
        if let Some(year) = self.year {
            edu.year = year;
        }
        if let Some(description) = self.description {
            edu.description = description;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub link: Option<String>,
}

impl ProjectPatch {
    pub fn apply(self, proj: &mut Project) {
        if let Some(name) = self.name {
            proj.name = name;
        }
        if let Some(description) = self.description {
            proj.description = description;
        }
        if let Some(technologies) = self.technologies {
            proj.technologies = technologies;
        }
        if let Some(link) = self.link {
            proj.link = link;
        }
    }
}
