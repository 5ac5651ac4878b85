//! Store-level completion scoring.
//!
//! Seven equally-weighted boolean checks, rounded to the nearest percent:
//! name, role, email (one check each), summary longer than 50 characters,
//! at least 3 skills, at least one experience with role AND company AND
//! description all set, and at least one social link set.
//!
//! The preview toolbar computes its own simpler six-category score
//! (`preview::preview_completion`); the two metrics serve different UI
//! surfaces and must stay independent.

use crate::models::ResumeData;

/// Summary must be longer than this many characters to count.
const SUMMARY_MIN_CHARS: usize = 50;
/// Minimum number of skills for the skills check to pass.
const SKILLS_MIN_COUNT: usize = 3;

/// Returns the 0–100 completion score for the aggregate.
pub fn completion_percentage(data: &ResumeData) -> u8 {
    let mut completed = 0usize;
    let mut total = 0usize;

    // Header fields, one check each
    for field in [&data.name, &data.role, &data.email] {
        total += 1;
        if !field.is_empty() {
            completed += 1;
        }
    }

    // Summary
    total += 1;
    if data.summary.chars().count() > SUMMARY_MIN_CHARS {
        completed += 1;
    }

    // Skills
    total += 1;
    if data.skills.len() >= SKILLS_MIN_COUNT {
        completed += 1;
    }

    // At least one complete experience entry
    total += 1;
    let has_complete_experience = data
        .experiences
        .iter()
        .any(|exp| !exp.role.is_empty() && !exp.company.is_empty() && !exp.description.is_empty());
    if has_complete_experience {
        completed += 1;
    }

    // At least one social link
    total += 1;
    if data.social_links.any_set() {
        completed += 1;
    }

    ((completed as f64 / total as f64) * 100.0).round() as u8
}
