//! Preview projection — derives section visibility from the aggregate and
//! renders the visible sections as a plain-text document.
//!
//! The toolbar completion score here is a six-category presence average,
//! deliberately independent from the store's seven-check metric.

use std::fmt::Write as _;

use crate::models::ResumeData;

/// Per-section "has content" flags, derived from the current aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    pub header: bool,
    pub contact: bool,
    pub social: bool,
    pub summary: bool,
    pub skills: bool,
    pub experience: bool,
    pub education: bool,
    pub projects: bool,
}

impl SectionVisibility {
    pub fn derive(data: &ResumeData) -> Self {
        Self {
            header: !data.name.is_empty() || !data.role.is_empty(),
            contact: !data.email.is_empty() || !data.phone.is_empty() || !data.location.is_empty(),
            social: data.social_links.any_set(),
            summary: !data.summary.trim().is_empty(),
            skills: !data.skills.is_empty(),
            experience: data
                .experiences
                .iter()
                .any(|exp| !exp.role.is_empty() || !exp.company.is_empty()),
            education: data
                .education
                .iter()
                .any(|edu| !edu.degree.is_empty() || !edu.institution.is_empty()),
            projects: data.projects.iter().any(|proj| !proj.name.is_empty()),
        }
    }

    /// The preview shows its call to action when every content section is
    /// absent (contact and social alone don't count).
    pub fn is_empty(&self) -> bool {
        !self.header
            && !self.summary
            && !self.skills
            && !self.experience
            && !self.education
            && !self.projects
    }
}

/// Toolbar completion: the share of six section categories with content.
pub fn preview_completion(data: &ResumeData) -> u8 {
    let vis = SectionVisibility::derive(data);
    let categories = [
        vis.header,
        vis.contact,
        vis.summary,
        vis.skills,
        vis.experience,
        vis.education,
    ];
    let present = categories.iter().filter(|c| **c).count();
    ((present as f64 / categories.len() as f64) * 100.0).round() as u8
}

/// Shown in place of the document when the aggregate is empty.
pub const EMPTY_PREVIEW_HINT: &str = "Your resume preview is empty.\n\
    Fill in your details or load the sample data to get started.";

/// Renders the visible sections in document order as plain text.
pub fn render_text(data: &ResumeData) -> String {
    let vis = SectionVisibility::derive(data);
    if vis.is_empty() {
        return EMPTY_PREVIEW_HINT.to_string();
    }

    let mut out = String::new();

    if vis.header {
        if !data.name.is_empty() {
            let _ = writeln!(out, "{}", data.name.to_uppercase());
        }
        if !data.role.is_empty() {
            let _ = writeln!(out, "{}", data.role);
        }
        out.push('\n');
    }

    if vis.contact || vis.social {
        let mut contact_parts = Vec::new();
        for value in [&data.email, &data.phone, &data.location] {
            if !value.is_empty() {
                contact_parts.push(value.clone());
            }
        }
        if !contact_parts.is_empty() {
            let _ = writeln!(out, "{}", contact_parts.join(" | "));
        }
        let links = &data.social_links;
        for (label, value) in [
            ("GitHub", &links.github),
            ("LinkedIn", &links.linkedin),
            ("Portfolio", &links.portfolio),
            ("Twitter", &links.twitter),
        ] {
            if !value.is_empty() {
                let _ = writeln!(out, "{label}: {value}");
            }
        }
        out.push('\n');
    }

    if vis.summary {
        section_title(&mut out, "PROFESSIONAL SUMMARY");
        let _ = writeln!(out, "{}", data.summary);
        out.push('\n');
    }

    if vis.skills {
        section_title(&mut out, "TECHNICAL SKILLS");
        for skill in &data.skills {
            let _ = writeln!(out, "  {:<24} {:>3}%", skill.name, skill.proficiency);
        }
        out.push('\n');
    }

    if vis.experience {
        section_title(&mut out, "PROFESSIONAL EXPERIENCE");
        for exp in data
            .experiences
            .iter()
            .filter(|e| !e.role.is_empty() || !e.company.is_empty())
        {
            let _ = writeln!(out, "  {}", heading_with_date(&exp.role, &exp.duration));
            if !exp.company.is_empty() {
                let _ = writeln!(out, "  {}", exp.company);
            }
            if !exp.description.is_empty() {
                for line in exp.description.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
            out.push('\n');
        }
    }

    if vis.education {
        section_title(&mut out, "EDUCATION");
        for edu in data
            .education
            .iter()
            .filter(|e| !e.degree.is_empty() || !e.institution.is_empty())
        {
            let _ = writeln!(out, "  {}", heading_with_date(&edu.degree, &edu.year));
            if !edu.institution.is_empty() {
                let _ = writeln!(out, "  {}", edu.institution);
            }
            if !edu.description.is_empty() {
                let _ = writeln!(out, "    {}", edu.description);
            }
            out.push('\n');
        }
    }

    if vis.projects {
        section_title(&mut out, "NOTABLE PROJECTS");
        for proj in data.projects.iter().filter(|p| !p.name.is_empty()) {
            if proj.link.is_empty() {
                let _ = writeln!(out, "  {}", proj.name);
            } else {
                let _ = writeln!(out, "  {} ({})", proj.name, proj.link);
            }
            if !proj.description.is_empty() {
                for line in proj.description.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            }
            if !proj.technologies.is_empty() {
                let tags: Vec<String> = proj
                    .technologies
                    .split(',')
                    .map(|t| format!("[{}]", t.trim()))
                    .collect();
                let _ = writeln!(out, "    {}", tags.join(" "));
            }
            out.push('\n');
        }
    }

    out.trim_end().to_string()
}

fn section_title(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
}

fn heading_with_date(heading: &str, date: &str) -> String {
    if date.is_empty() {
        heading.to_string()
    } else {
        format!("{heading}  ({date})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_resume;
    use crate::models::{Experience, Project};

    #[test]
    fn test_empty_aggregate_is_empty_and_renders_hint() {
        let data = ResumeData::default();
        assert!(SectionVisibility::derive(&data).is_empty());
        assert_eq!(render_text(&data), EMPTY_PREVIEW_HINT);
    }

    #[test]
    fn test_experience_visible_with_role_or_company_only() {
        let mut data = ResumeData::default();
        data.experiences.push(Experience {
            id: "1".to_string(),
            company: "Acme".to_string(),
            ..Experience::default()
        });
        assert!(SectionVisibility::derive(&data).experience);
    }

    #[test]
    fn test_nameless_projects_are_invisible_and_unrendered() {
        let mut data = ResumeData::default();
        data.projects.push(Project {
            id: "1".to_string(),
            description: "orphan".to_string(),
            ..Project::default()
        });
        assert!(!SectionVisibility::derive(&data).projects);
    }

    #[test]
    fn test_preview_completion_is_independent_six_category_average() {
        let mut data = ResumeData::default();
        data.name = "Ada".to_string();
        // Header only: 1 of 6 categories.
        assert_eq!(preview_completion(&data), 17);
        data.email = "ada@engine.dev".to_string();
        assert_eq!(preview_completion(&data), 33);
        // Store metric disagrees by design: 2 of 7 checks.
        assert_eq!(crate::store::completion_percentage(&data), 29);
    }

    #[test]
    fn test_sample_preview_completion_is_full() {
        assert_eq!(preview_completion(&sample_resume()), 100);
    }

    #[test]
    fn test_render_includes_sections_in_document_order() {
        let text = render_text(&sample_resume());
        let summary_at = text.find("PROFESSIONAL SUMMARY").unwrap();
        let skills_at = text.find("TECHNICAL SKILLS").unwrap();
        let experience_at = text.find("PROFESSIONAL EXPERIENCE").unwrap();
        let education_at = text.find("EDUCATION").unwrap();
        let projects_at = text.find("NOTABLE PROJECTS").unwrap();
        assert!(summary_at < skills_at);
        assert!(skills_at < experience_at);
        assert!(experience_at < education_at);
        assert!(education_at < projects_at);
    }

    #[test]
    fn test_render_splits_technologies_into_tags() {
        let text = render_text(&sample_resume());
        assert!(text.contains("[React] [Node.js] [MongoDB] [Stripe]"));
    }

    #[test]
    fn test_render_skips_incomplete_list_entries() {
        let mut data = sample_resume();
        data.experiences.push(Experience {
            id: "ghost".to_string(),
            duration: "2020".to_string(),
            ..Experience::default()
        });
        let text = render_text(&data);
        // The blank entry contributes nothing; both real entries render.
        assert!(text.contains("TechCorp Inc."));
        assert!(text.contains("StartupXYZ"));
        assert!(!text.contains("2020\n  \n"));
    }
}
