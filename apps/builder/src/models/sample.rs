//! Bundled sample dataset, used for demos and the empty-preview call to action.

use super::resume::{Education, Experience, Project, ResumeData, Skill, SocialLinks};

/// Returns the fixed illustrative resume loaded by `load_sample_data`.
pub fn sample_resume() -> ResumeData {
    ResumeData {
        name: "Alex Johnson".to_string(),
        role: "Full Stack Developer".to_string(),
        location: "San Francisco, CA".to_string(),
        email: "alex.johnson@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        summary: "Passionate full-stack developer with 5+ years of experience building \
                  scalable web applications. Proficient in React, Node.js, and cloud \
                  technologies. Committed to writing clean, maintainable code and \
                  delivering exceptional user experiences."
            .to_string(),
        skills: vec![
            skill("1", "React", 90),
            skill("2", "TypeScript", 85),
            skill("3", "Node.js", 80),
            skill("4", "Python", 75),
            skill("5", "AWS", 70),
            skill("6", "PostgreSQL", 75),
        ],
        experiences: vec![
            Experience {
                id: "1".to_string(),
                role: "Senior Full Stack Developer".to_string(),
                company: "TechCorp Inc.".to_string(),
                duration: "Jan 2022 - Present".to_string(),
                description: "Led development of microservices architecture serving 1M+ \
                              users. Implemented CI/CD pipelines reducing deployment time \
                              by 60%. Mentored junior developers and conducted code reviews."
                    .to_string(),
            },
            Experience {
                id: "2".to_string(),
                role: "Full Stack Developer".to_string(),
                company: "StartupXYZ".to_string(),
                duration: "Jun 2019 - Dec 2021".to_string(),
                description: "Built and maintained React-based dashboard applications. \
                              Developed RESTful APIs using Node.js and Express. Optimized \
                              database queries improving performance by 40%."
                    .to_string(),
            },
        ],
        education: vec![Education {
            id: "1".to_string(),
            degree: "B.S. Computer Science".to_string(),
            institution: "University of California, Berkeley".to_string(),
            year: "2019".to_string(),
            description: "GPA: 3.8/4.0. Relevant coursework: Data Structures, Algorithms, \
                          Web Development, Database Systems."
                .to_string(),
        }],
        projects: vec![
            Project {
                id: "1".to_string(),
                name: "E-Commerce Platform".to_string(),
                description: "Built a full-featured e-commerce platform with real-time \
                              inventory management, payment processing, and admin dashboard."
                    .to_string(),
                technologies: "React, Node.js, MongoDB, Stripe".to_string(),
                link: "https://github.com/alexj/ecommerce".to_string(),
            },
            Project {
                id: "2".to_string(),
                name: "Task Management App".to_string(),
                description: "Developed a collaborative task management application with \
                              real-time updates and team features."
                    .to_string(),
                technologies: "Next.js, TypeScript, PostgreSQL, Socket.io".to_string(),
                link: "https://github.com/alexj/taskmanager".to_string(),
            },
        ],
        social_links: SocialLinks {
            github: "https://github.com/alexjohnson".to_string(),
            linkedin: "https://linkedin.com/in/alexjohnson".to_string(),
            portfolio: "https://alexjohnson.dev".to_string(),
            twitter: "https://twitter.com/alexjdev".to_string(),
        },
    }
}

fn skill(id: &str, name: &str, proficiency: u8) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        proficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_all_sections_populated() {
        let data = sample_resume();
        assert!(!data.name.is_empty());
        assert!(data.summary.len() > 50);
        assert!(data.skills.len() >= 3);
        assert_eq!(data.experiences.len(), 2);
        assert_eq!(data.education.len(), 1);
        assert_eq!(data.projects.len(), 2);
        assert!(data.social_links.any_set());
    }

    #[test]
    fn test_sample_experience_entries_are_complete() {
        let data = sample_resume();
        assert!(data
            .experiences
            .iter()
            .all(|e| !e.role.is_empty() && !e.company.is_empty() && !e.description.is_empty()));
    }
}
