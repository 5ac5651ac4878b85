mod cli;
mod config;
mod errors;
mod export;
mod forms;
mod llm_client;
mod models;
mod prefs;
mod preview;
mod state;
mod store;
mod summary;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::prefs::{FilePreferences, MemoryPreferences, PreferenceStore, ThemeState};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (everything is optional)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    // Theme preferences: read once at startup, written through on change.
    // Without a usable config directory, preferences live for this run only.
    let pref_store: Box<dyn PreferenceStore> = match FilePreferences::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Preference file unavailable ({e}); using in-memory preferences");
            Box::new(MemoryPreferences::new())
        }
    };
    let theme = ThemeState::load(pref_store, prefs::system_prefers_dark());

    // Summary backend: local templates, or remote with template fallback.
    let summary = summary::backend_from_config(&config);

    let state = AppState { theme, summary };

    cli::run(Cli::parse(), state).await?;

    Ok(())
}
