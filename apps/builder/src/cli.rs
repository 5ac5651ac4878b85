//! CLI front: the command surface over the builder core.
//!
//! `edit` is the interactive counterpart of the form panel — line-oriented
//! commands drive the section editors, and a store subscription prints the
//! completion score after every mutation (the live preview readout).

use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::errors::AppError;
use crate::export;
use crate::forms::{self, header, social, SkillsEditor};
use crate::models::{
    EducationPatch, ExperiencePatch, ProjectPatch, ResumeData, SkillPatch, SocialKey,
};
use crate::prefs::{AccentColor, StylePreset};
use crate::preview;
use crate::state::AppState;
use crate::store::{completion_percentage, ResumeStore};
use crate::summary::Tier;

#[derive(Parser)]
#[command(
    name = "builder",
    version,
    about = "Resume builder: edit, preview and export resumes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the bundled sample resume
    Sample {
        /// Target file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render the text preview with both completion scores
    Show { file: PathBuf },
    /// Report advisory validation issues without blocking anything
    Check { file: PathBuf },
    /// Re-serialize a resume file canonically (lossless round-trip)
    Export {
        file: PathBuf,
        /// Target file (named after the person when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate a professional summary from a resume file or explicit inputs
    Summarize {
        /// Derive role, skills and tier from this resume file
        #[arg(long, conflicts_with_all = ["role", "skills", "experience"])]
        file: Option<PathBuf>,
        #[arg(long, default_value = "")]
        role: String,
        /// Comma-separated skill names
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        /// Number of experience entries (tier derivation)
        #[arg(long, default_value_t = 0)]
        experience: usize,
        /// Write the generated summary back into --file
        #[arg(long, requires = "file")]
        write: bool,
    },
    /// Interactive line-oriented editor with a live completion readout
    Edit { file: Option<PathBuf> },
    /// Show or change theme preferences
    Theme {
        /// Flip light/dark
        #[arg(long)]
        toggle: bool,
        /// blue | purple | green | orange | rose
        #[arg(long)]
        accent: Option<String>,
        /// minimal | modern | creative
        #[arg(long)]
        preset: Option<String>,
    },
}

pub async fn run(cli: Cli, mut state: AppState) -> Result<(), AppError> {
    match cli.command {
        Command::Sample { out } => run_sample(out),
        Command::Show { file } => run_show(&file),
        Command::Check { file } => run_check(&file),
        Command::Export { file, out } => run_export(&file, out),
        Command::Summarize {
            file,
            role,
            skills,
            experience,
            write,
        } => run_summarize(&state, file, role, skills, experience, write).await,
        Command::Edit { file } => run_edit(&state, file).await,
        Command::Theme {
            toggle,
            accent,
            preset,
        } => run_theme(&mut state, toggle, accent, preset),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// File-based commands
// ────────────────────────────────────────────────────────────────────────────

fn load_data(path: &Path) -> Result<ResumeData, AppError> {
    let contents = std::fs::read_to_string(path)?;
    export::from_json(&contents)
}

fn run_sample(out: Option<PathBuf>) -> Result<(), AppError> {
    let mut store = ResumeStore::new();
    store.load_sample_data();
    let json = export::to_json(store.data())?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)?;
            info!("Sample resume written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_show(file: &Path) -> Result<(), AppError> {
    let data = load_data(file)?;
    println!("{}", preview::render_text(&data));
    println!();
    println!(
        "Completion: {}% (store) / {}% (preview)",
        completion_percentage(&data),
        preview::preview_completion(&data)
    );
    Ok(())
}

fn run_check(file: &Path) -> Result<(), AppError> {
    let data = load_data(file)?;
    let issues = forms::advisories(&data);
    if issues.is_empty() {
        println!("No issues found.");
    } else {
        for issue in &issues {
            println!("{issue}");
        }
        println!("{} issue(s). All values were kept as written.", issues.len());
    }
    Ok(())
}

fn run_export(file: &Path, out: Option<PathBuf>) -> Result<(), AppError> {
    let data = load_data(file)?;
    let json = export::to_json(&data)?;
    let target = out.unwrap_or_else(|| PathBuf::from(export::export_file_name(&data)));
    std::fs::write(&target, json)?;
    info!("Resume exported to {}", target.display());
    Ok(())
}

async fn run_summarize(
    state: &AppState,
    file: Option<PathBuf>,
    role: String,
    skills: Vec<String>,
    experience: usize,
    write: bool,
) -> Result<(), AppError> {
    let (role, skills, tier, data) = match &file {
        Some(path) => {
            let data = load_data(path)?;
            let skills: Vec<String> = data.skills.iter().map(|s| s.name.clone()).collect();
            let tier = Tier::from_experience_count(data.experiences.len());
            (data.role.clone(), skills, tier, Some(data))
        }
        None => (role, skills, Tier::from_experience_count(experience), None),
    };

    info!("Generating {tier} summary for role '{role}'");
    let summary = state.summary.generate(&role, &skills, tier).await;
    println!("{summary}");

    // --write requires --file (enforced by clap), so both are present here.
    if write {
        if let (Some(path), Some(mut data)) = (file, data) {
            data.summary = summary;
            std::fs::write(&path, export::to_json(&data)?)?;
            info!("Summary written back to {}", path.display());
        }
    }
    Ok(())
}

fn run_theme(
    state: &mut AppState,
    toggle: bool,
    accent: Option<String>,
    preset: Option<String>,
) -> Result<(), AppError> {
    if toggle {
        state.theme.toggle_theme()?;
    }
    if let Some(raw) = accent {
        let accent = AccentColor::parse(&raw)
            .ok_or_else(|| AppError::Validation(format!("Unknown accent color '{raw}'")))?;
        state.theme.set_accent(accent)?;
    }
    if let Some(raw) = preset {
        let preset = StylePreset::parse(&raw)
            .ok_or_else(|| AppError::Validation(format!("Unknown style preset '{raw}'")))?;
        state.theme.set_preset(preset)?;
    }
    println!(
        "theme: {}  accent: {}  preset: {}",
        state.theme.theme().as_str(),
        state.theme.accent().as_str(),
        state.theme.preset().as_str()
    );
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Interactive editor
// ────────────────────────────────────────────────────────────────────────────

const EDIT_HELP: &str = "\
commands:
  name|role|email|phone|location|summary <text>   set a header/profile field
  skill add <name>                                add a skill (rejects duplicates)
  skill level <name> <0-100>                      set a skill's proficiency
  skill rm <name>                                 remove a skill
  exp add | exp set <n> <field> <text> | exp rm <n>       edit experience entries
  edu add | edu set <n> <field> <text> | edu rm <n>       edit education entries
  project add | project set <n> <field> <text> | project rm <n>
  link <github|linkedin|portfolio|twitter> <url>  set a social link
  suggest                                         list quick-add skill suggestions
  generate                                        generate the summary
  show                                            render the preview
  sample | reset                                  load sample data / start over
  save [file]                                     write the resume JSON
  quit                                            leave (unsaved changes are lost)";

async fn run_edit(state: &AppState, file: Option<PathBuf>) -> Result<(), AppError> {
    let mut store = match &file {
        Some(path) if path.exists() => ResumeStore::with_data(load_data(path)?),
        _ => ResumeStore::new(),
    };

    // Live readout: re-derived and printed after every mutation.
    store.subscribe(|data| {
        println!("  completion: {}%", completion_percentage(data));
    });

    let mut skills = SkillsEditor::new();
    println!("{EDIT_HELP}");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (cmd, rest) = match trimmed.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        match cmd {
            "help" => println!("{EDIT_HELP}"),
            "name" => {
                if let Some(issue) = header::set_name(&mut store, rest) {
                    println!("  ! {}", issue.message());
                }
            }
            "email" => {
                if let Some(issue) = header::set_email(&mut store, rest) {
                    println!("  ! {}", issue.message());
                }
            }
            "role" => header::set_role(&mut store, rest),
            "phone" => header::set_phone(&mut store, rest),
            "location" => header::set_location(&mut store, rest),
            "summary" => store.set_summary(rest),
            "skill" => handle_skill_command(&mut store, &mut skills, rest),
            "exp" => handle_experience_command(&mut store, rest),
            "edu" => handle_education_command(&mut store, rest),
            "project" => handle_project_command(&mut store, rest),
            "link" => handle_link_command(&mut store, rest),
            "suggest" => {
                for name in skills.suggestions(&store) {
                    println!("  + {name}");
                }
            }
            "generate" => {
                let data = store.data().clone();
                let tier = Tier::from_experience_count(data.experiences.len());
                let names: Vec<String> = data.skills.iter().map(|s| s.name.clone()).collect();
                println!("  generating a {tier} summary...");
                let summary = state.summary.generate(&data.role, &names, tier).await;
                store.set_summary(summary);
            }
            "show" => println!("{}", preview::render_text(store.data())),
            "sample" => store.load_sample_data(),
            "reset" => store.reset_resume(),
            "save" => {
                let target = if rest.is_empty() {
                    file.clone()
                        .unwrap_or_else(|| PathBuf::from(export::export_file_name(store.data())))
                } else {
                    PathBuf::from(rest)
                };
                std::fs::write(&target, export::to_json(store.data())?)?;
                println!("  saved {}", target.display());
            }
            "quit" | "exit" => break,
            other => println!("  ? unknown command '{other}' — type 'help'"),
        }
    }
    Ok(())
}

fn handle_skill_command(store: &mut ResumeStore, skills: &mut SkillsEditor, rest: &str) {
    skills.input_changed();
    let (action, value) = match rest.split_once(' ') {
        Some((action, value)) => (action, value.trim()),
        None => (rest, ""),
    };
    match action {
        "add" => {
            if let Err(e) = skills.add(store, value) {
                println!("  ! {e}");
            }
        }
        "level" => {
            let Some((name, level_raw)) = value.rsplit_once(' ') else {
                println!("  ? usage: skill level <name> <0-100>");
                return;
            };
            let Ok(level) = level_raw.parse::<u8>() else {
                println!("  ? proficiency must be a number");
                return;
            };
            match find_skill_id(store, name.trim()) {
                Some(id) => store.update_skill(
                    &id,
                    SkillPatch {
                        proficiency: Some(level),
                        ..SkillPatch::default()
                    },
                ),
                None => println!("  ? no skill named '{}'", name.trim()),
            }
        }
        "rm" => match find_skill_id(store, value) {
            Some(id) => store.remove_skill(&id),
            None => println!("  ? no skill named '{value}'"),
        },
        _ => println!("  ? usage: skill add|level|rm ..."),
    }
}

/// Splits `"set <n> <field> <text>"`-style input into its parts.
/// Returns the 1-based entry index, the field name, and the value text.
fn parse_entry_edit(value: &str) -> Option<(usize, &str, &str)> {
    let (index_raw, after) = value.split_once(' ')?;
    let index: usize = index_raw.parse().ok()?;
    let (field, text) = match after.trim().split_once(' ') {
        Some((field, text)) => (field, text.trim()),
        None => (after.trim(), ""),
    };
    Some((index, field, text))
}

fn nth_id<'a>(mut ids: impl Iterator<Item = &'a String>, index: usize) -> Option<String> {
    index.checked_sub(1).and_then(|i| ids.nth(i).cloned())
}

fn handle_experience_command(store: &mut ResumeStore, rest: &str) {
    let (action, value) = match rest.split_once(' ') {
        Some((action, value)) => (action, value.trim()),
        None => (rest, ""),
    };
    match action {
        "add" => {
            store.add_experience();
        }
        "set" => {
            let Some((index, field, text)) = parse_entry_edit(value) else {
                println!("  ? usage: exp set <n> <role|company|duration|description> <text>");
                return;
            };
            let Some(id) = nth_id(store.data().experiences.iter().map(|e| &e.id), index) else {
                println!("  ? no experience entry {index}");
                return;
            };
            let mut patch = ExperiencePatch::default();
            match field {
                "role" => patch.role = Some(text.to_string()),
                "company" => patch.company = Some(text.to_string()),
                "duration" => patch.duration = Some(text.to_string()),
                "description" => patch.description = Some(text.to_string()),
                other => {
                    println!("  ? unknown experience field '{other}'");
                    return;
                }
            }
            store.update_experience(&id, patch);
        }
        "rm" => match value
            .parse()
            .ok()
            .and_then(|n| nth_id(store.data().experiences.iter().map(|e| &e.id), n))
        {
            Some(id) => store.remove_experience(&id),
            None => println!("  ? no experience entry '{value}'"),
        },
        _ => println!("  ? usage: exp add|set|rm ..."),
    }
}

fn handle_education_command(store: &mut ResumeStore, rest: &str) {
    let (action, value) = match rest.split_once(' ') {
        Some((action, value)) => (action, value.trim()),
        None => (rest, ""),
    };
    match action {
        "add" => {
            store.add_education();
        }
        "set" => {
            let Some((index, field, text)) = parse_entry_edit(value) else {
                println!("  ? usage: edu set <n> <degree|institution|year|description> <text>");
                return;
            };
            let Some(id) = nth_id(store.data().education.iter().map(|e| &e.id), index) else {
                println!("  ? no education entry {index}");
                return;
            };
            let mut patch = EducationPatch::default();
            match field {
                "degree" => patch.degree = Some(text.to_string()),
                "institution" => patch.institution = Some(text.to_string()),
                "year" => patch.year = Some(text.to_string()),
                "description" => patch.description = Some(text.to_string()),
                other => {
                    println!("  ? unknown education field '{other}'");
                    return;
                }
            }
            store.update_education(&id, patch);
        }
        "rm" => match value
            .parse()
            .ok()
            .and_then(|n| nth_id(store.data().education.iter().map(|e| &e.id), n))
        {
            Some(id) => store.remove_education(&id),
            None => println!("  ? no education entry '{value}'"),
        },
        _ => println!("  ? usage: edu add|set|rm ..."),
    }
}

fn handle_project_command(store: &mut ResumeStore, rest: &str) {
    let (action, value) = match rest.split_once(' ') {
        Some((action, value)) => (action, value.trim()),
        None => (rest, ""),
    };
    match action {
        "add" => {
            store.add_project();
        }
        "set" => {
            let Some((index, field, text)) = parse_entry_edit(value) else {
                println!("  ? usage: project set <n> <name|description|technologies|link> <text>");
                return;
            };
            let Some(id) = nth_id(store.data().projects.iter().map(|p| &p.id), index) else {
                println!("  ? no project entry {index}");
                return;
            };
            let mut patch = ProjectPatch::default();
            match field {
                "name" => patch.name = Some(text.to_string()),
                "description" => patch.description = Some(text.to_string()),
                "technologies" => patch.technologies = Some(text.to_string()),
                "link" => patch.link = Some(text.to_string()),
                other => {
                    println!("  ? unknown project field '{other}'");
                    return;
                }
            }
            store.update_project(&id, patch);
        }
        "rm" => match value
            .parse()
            .ok()
            .and_then(|n| nth_id(store.data().projects.iter().map(|p| &p.id), n))
        {
            Some(id) => store.remove_project(&id),
            None => println!("  ? no project entry '{value}'"),
        },
        _ => println!("  ? usage: project add|set|rm ..."),
    }
}

fn handle_link_command(store: &mut ResumeStore, rest: &str) {
    let (key_raw, value) = match rest.split_once(' ') {
        Some((key, value)) => (key, value.trim()),
        None => (rest, ""),
    };
    match SocialKey::parse(key_raw) {
        Some(key) => {
            if social::set_link(store, key, value) == social::LinkStatus::Invalid {
                println!("  ! Invalid URL (kept anyway)");
            }
        }
        None => println!("  ? unknown platform '{key_raw}' (github|linkedin|portfolio|twitter)"),
    }
}

fn find_skill_id(store: &ResumeStore, name_or_id: &str) -> Option<String> {
    store
        .data()
        .skills
        .iter()
        .find(|s| s.id == name_or_id || s.name.eq_ignore_ascii_case(name_or_id))
        .map(|s| s.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_entry_edit_splits_index_field_and_text() {
        assert_eq!(
            parse_entry_edit("2 role Senior Engineer"),
            Some((2, "role", "Senior Engineer"))
        );
        assert_eq!(parse_entry_edit("1 duration"), Some((1, "duration", "")));
        assert_eq!(parse_entry_edit("x role text"), None);
        assert_eq!(parse_entry_edit(""), None);
    }

    #[test]
    fn test_nth_id_is_one_based() {
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(nth_id(ids.iter(), 1), Some("a".to_string()));
        assert_eq!(nth_id(ids.iter(), 2), Some("b".to_string()));
        assert_eq!(nth_id(ids.iter(), 0), None);
        assert_eq!(nth_id(ids.iter(), 3), None);
    }

    #[test]
    fn test_find_skill_id_matches_name_case_insensitively() {
        let mut store = ResumeStore::new();
        let id = store.add_skill("React", None);
        assert_eq!(find_skill_id(&store, "react"), Some(id.clone()));
        assert_eq!(find_skill_id(&store, &id), Some(id));
        assert_eq!(find_skill_id(&store, "Vue"), None);
    }

    #[test]
    fn test_summarize_args_parse_with_skill_list() {
        let cli = Cli::try_parse_from([
            "builder",
            "summarize",
            "--role",
            "Software Engineer",
            "--skills",
            "React,Node.js",
            "--experience",
            "2",
        ])
        .unwrap();
        match cli.command {
            Command::Summarize {
                role,
                skills,
                experience,
                ..
            } => {
                assert_eq!(role, "Software Engineer");
                assert_eq!(skills, vec!["React", "Node.js"]);
                assert_eq!(experience, 2);
            }
            _ => panic!("expected summarize"),
        }
    }

    #[test]
    fn test_summarize_write_requires_file() {
        assert!(Cli::try_parse_from(["builder", "summarize", "--write"]).is_err());
    }
}
