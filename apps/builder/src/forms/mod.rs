// Section editors: thin read/write adapters over the store.
// Validation here is advisory — it renders as inline text and never blocks
// a write. The one exception is the skills editor, which rejects empty and
// duplicate names before mutation.

pub mod header;
pub mod skills;
pub mod social;
pub mod validate;

use crate::models::ResumeData;

pub use skills::{SkillsEditor, SUGGESTED_SKILLS};

/// A single advisory issue attached to a section field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub section: &'static str,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.section, self.field, self.message)
    }
}

/// Builds the full advisory report for the aggregate: required-field and
/// shape checks across every section. Used by the `check` command; the
/// interactive editors surface the same issues inline as fields change.
pub fn advisories(data: &ResumeData) -> Vec<Advisory> {
    let mut issues = Vec::new();

    issues.extend(header::advisories(data));

    for (index, exp) in data.experiences.iter().enumerate() {
        if exp.role.is_empty() && exp.company.is_empty() {
            issues.push(Advisory {
                section: "experience",
                field: format!("entry {}", index + 1),
                message: "Role and company are both empty; the entry will not render"
                    .to_string(),
            });
        }
    }

    for (index, edu) in data.education.iter().enumerate() {
        if edu.degree.is_empty() && edu.institution.is_empty() {
            issues.push(Advisory {
                section: "education",
                field: format!("entry {}", index + 1),
                message: "Degree and institution are both empty; the entry will not render"
                    .to_string(),
            });
        }
    }

    for (index, proj) in data.projects.iter().enumerate() {
        if proj.name.is_empty() {
            issues.push(Advisory {
                section: "projects",
                field: format!("entry {}", index + 1),
                message: "Project name is empty; the entry will not render".to_string(),
            });
        } else if !proj.link.is_empty() && !validate::is_valid_url(&proj.link) {
            issues.push(Advisory {
                section: "projects",
                field: proj.name.clone(),
                message: "Link is not a parseable URL".to_string(),
            });
        }
    }

    issues.extend(social::advisories(data));

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_resume;
    use crate::store::ResumeStore;

    #[test]
    fn test_sample_data_has_no_advisories() {
        assert!(advisories(&sample_resume()).is_empty());
    }

    #[test]
    fn test_blank_added_entries_are_flagged() {
        let mut store = ResumeStore::new();
        store.set_name("Ada");
        store.set_email("ada@analytical.engine");
        store.add_experience();
        store.add_education();
        store.add_project();
        let issues = advisories(store.data());
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.message.contains("will not render"))
                .count(),
            3
        );
    }

    #[test]
    fn test_bad_project_link_is_flagged() {
        let mut store = ResumeStore::new();
        store.set_name("Ada");
        let id = store.add_project();
        store.update_project(
            &id,
            crate::models::ProjectPatch {
                name: Some("Engine".to_string()),
                link: Some("not a url".to_string()),
                ..Default::default()
            },
        );
        let issues = advisories(store.data());
        assert!(issues.iter().any(|i| i.message.contains("parseable URL")));
    }
}
