#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type shared across the builder core.
///
/// Advisory form validation never produces an `AppError` — invalid field
/// values are still written to the store and surfaced as inline issues
/// (see `forms`). This type is for real failures: broken import files,
/// filesystem problems, export collaborators falling over.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Summary error: {0}")]
    Summary(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
