//! Field-shape validation primitives shared by the section editors.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile"));

/// Loose email shape check: something@something.something, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// URL parse-ability, matching the browser's `new URL(...)` behavior:
/// a bare host without a scheme does not parse.
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
