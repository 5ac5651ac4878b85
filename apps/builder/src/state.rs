use crate::prefs::ThemeState;
use crate::summary::SummaryBackend;

/// Shared handles wired up at startup and threaded through the CLI commands.
pub struct AppState {
    pub theme: ThemeState,
    /// Configured summary backend (local templates, or remote with template
    /// fallback).
    pub summary: Box<dyn SummaryBackend>,
}
