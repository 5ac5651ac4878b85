//! JSON interchange: the aggregate's exact shape, all fields always present
//! on export, tolerant of missing fields on import.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::ResumeData;
use crate::store::ResumeStore;

/// Serializes the full aggregate, pretty-printed. Every field is emitted
/// even when empty so exports are self-describing.
pub fn to_json(data: &ResumeData) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Parses a full aggregate from interchange JSON. Missing fields become
/// their empty defaults; unknown fields are ignored. No further shape
/// validation happens — whatever parsed, renders.
pub fn from_json(input: &str) -> Result<ResumeData, AppError> {
    Ok(serde_json::from_str(input)?)
}

/// Atomic import: parse first, replace only on success. A malformed file
/// leaves the store exactly as it was.
pub fn import_into(store: &mut ResumeStore, input: &str) -> Result<(), AppError> {
    let data = from_json(input)?;
    debug!(
        "Imported resume aggregate ({} skills, {} experiences)",
        data.skills.len(),
        data.experiences.len()
    );
    store.set_resume_data(data);
    info!("Resume aggregate replaced from import");
    Ok(())
}

/// Download name for the JSON export: `<name-or-"resume">.json`.
pub fn export_file_name(data: &ResumeData) -> String {
    if data.name.is_empty() {
        "resume.json".to_string()
    } else {
        format!("{}.json", data.name)
    }
}
