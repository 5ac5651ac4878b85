// Resume data model: the single aggregate every view reads and writes,
// plus the bundled sample dataset used for demos and empty-state prompts.

pub mod resume;
pub mod sample;

pub use resume::{
    generate_id, Education, EducationPatch, Experience, ExperiencePatch, Project, ProjectPatch,
    ResumeData, Skill, SkillPatch, SocialKey, SocialLinks,
};
