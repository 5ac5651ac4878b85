#![allow(dead_code)]

//! Template substitution core for summary generation.
//!
//! Three fixed templates per experience tier. `{role}` and `{skills}` are
//! substituted once each; a closing sentence is appended based on a
//! case-insensitive keyword match against the role.

use rand::Rng;

use super::Tier;

const ENTRY_LEVEL_TEMPLATES: [&str; 3] = [
    "Motivated {role} with a strong foundation in {skills}. Eager to apply academic \
     knowledge and recent project experience to contribute to innovative teams. Quick \
     learner with excellent problem-solving abilities and a passion for continuous growth.",
    "Recent graduate and aspiring {role} with hands-on experience in {skills}. Committed \
     to delivering high-quality work and learning from experienced professionals. Strong \
     communicator with a collaborative mindset.",
    "Enthusiastic {role} seeking to leverage skills in {skills} to drive impactful \
     solutions. Demonstrated ability to quickly adapt to new technologies and contribute \
     meaningfully to team projects.",
];

const MID_LEVEL_TEMPLATES: [&str; 3] = [
    "Results-driven {role} with proven expertise in {skills}. Experienced in delivering \
     scalable solutions and collaborating with cross-functional teams. Passionate about \
     writing clean, maintainable code and mentoring junior developers.",
    "Versatile {role} bringing solid experience with {skills}. Track record of \
     successfully delivering projects on time while maintaining high code quality. Strong \
     advocate for best practices and continuous improvement.",
    "Detail-oriented {role} skilled in {skills}. Known for translating complex \
     requirements into elegant technical solutions. Committed to staying current with \
     industry trends and emerging technologies.",
];

const SENIOR_TEMPLATES: [&str; 3] = [
    "Seasoned {role} with extensive expertise in {skills}. Proven track record of \
     architecting scalable systems and leading high-performing teams. Strategic thinker \
     who balances technical excellence with business objectives.",
    "Accomplished {role} bringing deep knowledge of {skills}. Expert in designing robust \
     architectures and driving technical decisions that impact organizational success. \
     Dedicated mentor committed to team growth and knowledge sharing.",
    "Distinguished {role} with comprehensive experience in {skills}. History of \
     delivering mission-critical systems and fostering engineering excellence. Skilled \
     at bridging technical and business stakeholders to achieve common goals.",
];

/// Closing sentences keyed by role-family keyword, first match wins.
const ROLE_ADDITIONS: [(&str, &str); 5] = [
    (
        "developer",
        "Passionate about building user-centric applications and optimizing performance.",
    ),
    (
        "engineer",
        "Committed to engineering excellence and solving complex technical challenges.",
    ),
    (
        "designer",
        "Eye for detail with a focus on creating intuitive and visually appealing experiences.",
    ),
    (
        "manager",
        "Strong leadership skills with experience in agile methodologies and team coordination.",
    ),
    (
        "analyst",
        "Analytical mindset with expertise in data-driven decision making.",
    ),
];

const DEFAULT_ADDITION: &str = "Dedicated professional committed to delivering exceptional results.";

/// Number of skills substituted into `{skills}` before truncation.
const MAX_SKILLS: usize = 5;

pub fn templates_for(tier: Tier) -> &'static [&'static str; 3] {
    match tier {
        Tier::EntryLevel => &ENTRY_LEVEL_TEMPLATES,
        Tier::MidLevel => &MID_LEVEL_TEMPLATES,
        Tier::Senior => &SENIOR_TEMPLATES,
    }
}

/// Picks a random template for the tier and substitutes it.
pub fn compose(role: &str, skills: &[String], tier: Tier) -> String {
    let pool = templates_for(tier);
    let template = pool[rand::rng().random_range(0..pool.len())];
    render(template, role, skills)
}

/// Substitutes the first `{role}` and `{skills}` occurrence and appends the
/// role-matched closing sentence.
pub fn render(template: &str, role: &str, skills: &[String]) -> String {
    let formatted_role = if role.is_empty() { "professional" } else { role };
    let formatted_skills = if skills.is_empty() {
        "modern technologies".to_string()
    } else {
        skills
            .iter()
            .take(MAX_SKILLS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let body = template
        .replacen("{role}", formatted_role, 1)
        .replacen("{skills}", &formatted_skills, 1);

    format!("{body} {}", closing_for_role(role))
}

/// Closing sentence for the role, by case-insensitive substring match.
pub fn closing_for_role(role: &str) -> &'static str {
    let role_lower = role.to_lowercase();
    ROLE_ADDITIONS
        .iter()
        .find(|(keyword, _)| role_lower.contains(keyword))
        .map(|(_, addition)| *addition)
        .unwrap_or(DEFAULT_ADDITION)
}

/// Suggested keywords for the role family, generic fallback otherwise.
pub fn role_keywords(role: &str) -> Vec<&'static str> {
    const ROLE_KEYWORDS: [(&str, [&str; 5]); 5] = [
        (
            "developer",
            ["problem-solving", "agile", "code quality", "testing", "debugging"],
        ),
        (
            "engineer",
            ["system design", "optimization", "scalability", "architecture", "performance"],
        ),
        (
            "designer",
            ["user research", "prototyping", "visual design", "accessibility", "design systems"],
        ),
        (
            "manager",
            ["leadership", "stakeholder management", "project delivery", "team building", "strategy"],
        ),
        (
            "analyst",
            ["data analysis", "reporting", "insights", "visualization", "forecasting"],
        ),
    ];

    let role_lower = role.to_lowercase();
    for (keyword, keywords) in ROLE_KEYWORDS {
        if role_lower.contains(keyword) {
            return keywords.to_vec();
        }
    }
    vec![
        "communication",
        "teamwork",
        "adaptability",
        "critical thinking",
        "attention to detail",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_substitutes_role_and_skills() {
        let out = render(
            "A {role} who knows {skills}.",
            "Backend Developer",
            &skills(&["Rust", "Postgres"]),
        );
        assert!(out.contains("Backend Developer"));
        assert!(out.contains("Rust, Postgres"));
    }

    #[test]
    fn test_render_falls_back_for_empty_inputs() {
        let out = render("A {role} who knows {skills}.", "", &[]);
        assert!(out.contains("professional"));
        assert!(out.contains("modern technologies"));
        // No keyword match: generic closing sentence.
        assert!(out.ends_with(DEFAULT_ADDITION));
    }

    #[test]
    fn test_render_takes_at_most_five_skills() {
        let out = render(
            "{skills}",
            "",
            &skills(&["a", "b", "c", "d", "e", "f", "g"]),
        );
        assert!(out.contains("a, b, c, d, e"));
        assert!(!out.contains(", f"));
    }

    #[test]
    fn test_closing_matches_role_keyword_case_insensitively() {
        assert!(closing_for_role("Software ENGINEER").contains("engineering excellence"));
        assert!(closing_for_role("Product Designer").contains("visually appealing"));
        assert_eq!(closing_for_role("Astronaut"), DEFAULT_ADDITION);
    }

    #[test]
    fn test_first_keyword_match_wins() {
        // "developer" precedes "engineer" in the table.
        assert!(closing_for_role("developer engineer").contains("user-centric"));
    }

    #[test]
    fn test_every_tier_has_three_templates_with_placeholders() {
        for tier in [Tier::EntryLevel, Tier::MidLevel, Tier::Senior] {
            let pool = templates_for(tier);
            assert_eq!(pool.len(), 3);
            for template in pool {
                assert!(template.contains("{role}"));
                assert!(template.contains("{skills}"));
            }
        }
    }

    #[test]
    fn test_compose_always_contains_role_and_a_skill() {
        for _ in 0..20 {
            let out = compose("Software Engineer", &skills(&["React", "Node.js"]), Tier::MidLevel);
            assert!(out.contains("Software Engineer"));
            assert!(out.contains("React"));
            assert!(out.contains("engineering excellence"));
        }
    }

    #[test]
    fn test_role_keywords_match_and_fall_back() {
        assert!(role_keywords("Data Analyst").contains(&"forecasting"));
        assert!(role_keywords("Barista").contains(&"communication"));
    }
}
