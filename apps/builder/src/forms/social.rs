#![allow(dead_code)]

//! Social links editor: four fixed platforms, each validated independently
//! via URL parsing. The status indicator never blocks a write.

use crate::forms::validate::is_valid_url;
use crate::forms::Advisory;
use crate::models::{ResumeData, SocialKey};
use crate::store::ResumeStore;

/// Per-link status shown next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Empty,
    Valid,
    Invalid,
}

/// Writes the link and returns its status for display.
pub fn set_link(store: &mut ResumeStore, key: SocialKey, value: &str) -> LinkStatus {
    store.set_social_link(key, value);
    link_status(value)
}

pub fn link_status(value: &str) -> LinkStatus {
    if value.is_empty() {
        LinkStatus::Empty
    } else if is_valid_url(value) {
        LinkStatus::Valid
    } else {
        LinkStatus::Invalid
    }
}

/// Status of all four platforms, in fixed display order.
pub fn statuses(data: &ResumeData) -> [(SocialKey, LinkStatus); 4] {
    SocialKey::ALL.map(|key| (key, link_status(data.social_links.get(key))))
}

/// Number of links currently filled in (valid or not).
pub fn filled_count(data: &ResumeData) -> usize {
    SocialKey::ALL
        .iter()
        .filter(|key| !data.social_links.get(**key).is_empty())
        .count()
}

pub fn advisories(data: &ResumeData) -> Vec<Advisory> {
    SocialKey::ALL
        .iter()
        .filter(|key| link_status(data.social_links.get(**key)) == LinkStatus::Invalid)
        .map(|key| Advisory {
            section: "social",
            field: key.label().to_string(),
            message: "Invalid URL".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_written_with_invalid_status() {
        let mut store = ResumeStore::new();
        let status = set_link(&mut store, SocialKey::Github, "github.com/me");
        assert_eq!(status, LinkStatus::Invalid);
        assert_eq!(store.data().social_links.github, "github.com/me");
    }

    #[test]
    fn test_statuses_cover_all_four_platforms() {
        let mut store = ResumeStore::new();
        set_link(&mut store, SocialKey::Twitter, "https://twitter.com/me");
        let statuses = statuses(store.data());
        assert_eq!(statuses.len(), 4);
        assert!(statuses
            .iter()
            .any(|(k, s)| *k == SocialKey::Twitter && *s == LinkStatus::Valid));
        assert!(statuses
            .iter()
            .any(|(k, s)| *k == SocialKey::Github && *s == LinkStatus::Empty));
    }

    #[test]
    fn test_filled_count_ignores_validity() {
        let mut store = ResumeStore::new();
        set_link(&mut store, SocialKey::Github, "https://github.com/me");
        set_link(&mut store, SocialKey::Linkedin, "not a url");
        assert_eq!(filled_count(store.data()), 2);
    }

    #[test]
    fn test_only_invalid_links_produce_advisories() {
        let mut store = ResumeStore::new();
        set_link(&mut store, SocialKey::Portfolio, "https://me.dev");
        set_link(&mut store, SocialKey::Twitter, "twitter dot com");
        let issues = advisories(store.data());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "Twitter/X");
    }
}
