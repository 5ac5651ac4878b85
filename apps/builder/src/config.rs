use anyhow::Result;
use tracing::warn;

/// Which summary generation path to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryBackendKind {
    /// Template substitution with a simulated delay.
    Local,
    /// Generative-text API first, template fallback on any failure.
    Remote,
}

/// Application configuration loaded from environment variables.
/// Everything is optional — the builder starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the remote summary path. Absence silently forces the
    /// template fallback.
    pub anthropic_api_key: Option<String>,
    pub summary_backend: SummaryBackendKind,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            summary_backend: parse_backend(std::env::var("SUMMARY_BACKEND").ok().as_deref()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_backend(raw: Option<&str>) -> SummaryBackendKind {
    match raw {
        None | Some("local") => SummaryBackendKind::Local,
        Some("remote") => SummaryBackendKind::Remote,
        Some(other) => {
            warn!("Unknown SUMMARY_BACKEND '{other}', using local templates");
            SummaryBackendKind::Local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults_to_local() {
        assert_eq!(parse_backend(None), SummaryBackendKind::Local);
        assert_eq!(parse_backend(Some("local")), SummaryBackendKind::Local);
    }

    #[test]
    fn test_backend_remote_is_opt_in() {
        assert_eq!(parse_backend(Some("remote")), SummaryBackendKind::Remote);
    }

    #[test]
    fn test_unknown_backend_falls_back_to_local() {
        assert_eq!(parse_backend(Some("cloud")), SummaryBackendKind::Local);
    }
}
