//! Skills section editor.
//!
//! The one place where validation blocks a write: empty and duplicate names
//! (case-insensitive) are rejected before mutation, with a local error that
//! clears on the next input change. Also offers a fixed suggestion list
//! filtered against the skills already present.

use thiserror::Error;

use crate::store::ResumeStore;

/// Fixed quick-add suggestions shown below the input.
pub const SUGGESTED_SKILLS: [&str; 15] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "AWS",
    "Docker",
    "Git",
    "SQL",
    "GraphQL",
    "Next.js",
    "Tailwind CSS",
    "MongoDB",
    "PostgreSQL",
    "Redis",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkillAddError {
    #[error("Skill name cannot be empty")]
    Empty,
    #[error("Skill already exists")]
    Duplicate,
}

/// Editor-local state: the pending input error. The store itself carries no
/// validation state.
#[derive(Debug, Default)]
pub struct SkillsEditor {
    error: Option<SkillAddError>,
}

impl SkillsEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current inline error, if the last add was rejected.
    pub fn error(&self) -> Option<SkillAddError> {
        self.error
    }

    /// Called on every input keystroke; clears any pending error.
    pub fn input_changed(&mut self) {
        self.error = None;
    }

    /// Adds a skill after the empty/duplicate checks. Rejection leaves the
    /// store untouched and records the inline error.
    pub fn add(&mut self, store: &mut ResumeStore, name: &str) -> Result<String, SkillAddError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.error = Some(SkillAddError::Empty);
            return Err(SkillAddError::Empty);
        }
        if contains_name(store, trimmed) {
            self.error = Some(SkillAddError::Duplicate);
            return Err(SkillAddError::Duplicate);
        }
        self.error = None;
        Ok(store.add_skill(trimmed, None))
    }

    /// Quick-add from the suggestion list; silently skips names already
    /// present instead of raising an error.
    pub fn add_suggested(&mut self, store: &mut ResumeStore, name: &str) {
        if !contains_name(store, name) {
            store.add_skill(name, None);
            self.error = None;
        }
    }

    /// Suggestions not yet present in the skills list (case-insensitive).
    pub fn suggestions(&self, store: &ResumeStore) -> Vec<&'static str> {
        available_suggestions(store)
    }
}

fn contains_name(store: &ResumeStore, name: &str) -> bool {
    store
        .data()
        .skills
        .iter()
        .any(|s| s.name.eq_ignore_ascii_case(name))
}

/// The suggestion list filtered to exclude skills already added.
pub fn available_suggestions(store: &ResumeStore) -> Vec<&'static str> {
    SUGGESTED_SKILLS
        .iter()
        .copied()
        .filter(|s| !contains_name(store, s))
        .collect()
}
