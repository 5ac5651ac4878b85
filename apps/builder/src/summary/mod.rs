//! Summary generation — one configurable component behind `SummaryBackend`.
//!
//! `LocalBackend` is pure template substitution behind a simulated delay.
//! `RemoteBackend` asks the LLM first and falls back to the same templating
//! on ANY failure (missing credential, transport error, empty response) —
//! callers never observe a generation failure.

pub mod templates;

use async_trait::async_trait;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::{Config, SummaryBackendKind};
use crate::llm_client::LlmClient;

pub use templates::role_keywords;

/// Experience-level bucket used to select the template pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    EntryLevel,
    MidLevel,
    Senior,
}

impl Tier {
    /// Caller-side derivation: 0 experiences → entry, 1–2 → mid, 3+ → senior.
    pub fn from_experience_count(count: usize) -> Self {
        match count {
            0 => Tier::EntryLevel,
            1..=2 => Tier::MidLevel,
            _ => Tier::Senior,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::EntryLevel => "entry-level",
            Tier::MidLevel => "mid-level",
            Tier::Senior => "senior",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary generation backend. Implementations must not surface errors —
/// degraded output (the local template) is always preferred over failure.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    async fn generate(&self, role: &str, skills: &[String], tier: Tier) -> String;
}

// ────────────────────────────────────────────────────────────────────────────
// Local backend — template substitution with a simulated delay
// ────────────────────────────────────────────────────────────────────────────

/// Simulated generation latency: 1500 ms plus up to 1000 ms of jitter.
const SIMULATED_DELAY_BASE_MS: u64 = 1500;
const SIMULATED_DELAY_JITTER_MS: u64 = 1000;

pub struct LocalBackend;

#[async_trait]
impl SummaryBackend for LocalBackend {
    async fn generate(&self, role: &str, skills: &[String], tier: Tier) -> String {
        let jitter = rand::rng().random_range(0..SIMULATED_DELAY_JITTER_MS);
        tokio::time::sleep(std::time::Duration::from_millis(
            SIMULATED_DELAY_BASE_MS + jitter,
        ))
        .await;
        templates::compose(role, skills, tier)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Remote backend — LLM first, template fallback
// ────────────────────────────────────────────────────────────────────────────

pub struct RemoteBackend {
    client: Option<LlmClient>,
}

impl RemoteBackend {
    /// Without a credential the remote path is skipped silently and every
    /// call takes the template fallback.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: api_key.map(LlmClient::new),
        }
    }

    fn build_prompt(role: &str, skills: &[String], tier: Tier) -> String {
        let role = if role.is_empty() { "professional" } else { role };
        let skills = if skills.is_empty() {
            "modern technologies".to_string()
        } else {
            skills.join(", ")
        };
        format!(
            "Write a professional resume summary for a {tier} {role} skilled in {skills}. \
             Use 3-4 sentences, first person omitted, no headings. Return only the summary text."
        )
    }
}

const SUMMARY_SYSTEM: &str =
    "You are a resume-writing assistant. You write concise, confident professional summaries.";

#[async_trait]
impl SummaryBackend for RemoteBackend {
    async fn generate(&self, role: &str, skills: &[String], tier: Tier) -> String {
        let Some(client) = &self.client else {
            debug!("No text-generation credential configured; using template fallback");
            return templates::compose(role, skills, tier);
        };

        let prompt = Self::build_prompt(role, skills, tier);
        match client.complete(SUMMARY_SYSTEM, &prompt).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                warn!("Remote summary came back empty; using template fallback");
                templates::compose(role, skills, tier)
            }
            Err(e) => {
                warn!("Remote summary generation failed ({e}); using template fallback");
                templates::compose(role, skills, tier)
            }
        }
    }
}

/// Selects the backend from configuration. `remote` without a credential
/// still constructs the remote backend — it degrades to the template path
/// per call, which keeps the selection logic in one place.
pub fn backend_from_config(config: &Config) -> Box<dyn SummaryBackend> {
    match config.summary_backend {
        SummaryBackendKind::Local => Box::new(LocalBackend),
        SummaryBackendKind::Remote => Box::new(RemoteBackend::new(config.anthropic_api_key.clone())),
    }
}
