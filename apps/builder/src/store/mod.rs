#![allow(dead_code)]

//! State store — the single mutable resume aggregate behind a
//! publish-on-change interface.
//!
//! Every view (section editors, preview, exporters) reads from and writes to
//! this one store; there are no per-view copies. Mutations run synchronously
//! on the calling thread and notify all subscribers with the post-mutation
//! aggregate before returning. Setters perform no validation — advisory
//! checks live in `forms` and never block a write.

pub mod completion;

use tracing::debug;

use crate::models::{
    generate_id, Education, EducationPatch, Experience, ExperiencePatch, Project, ProjectPatch,
    ResumeData, Skill, SkillPatch, SocialKey,
};

pub use completion::completion_percentage;

/// Handle returned by `subscribe`, used to detach the listener later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&ResumeData) + Send>;

/// Default proficiency assigned when `add_skill` is called without one.
const DEFAULT_PROFICIENCY: u8 = 50;

pub struct ResumeStore {
    data: ResumeData,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeStore {
    /// Creates a store holding the all-empty default aggregate.
    pub fn new() -> Self {
        Self::with_data(ResumeData::default())
    }

    pub fn with_data(data: ResumeData) -> Self {
        Self {
            data,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current aggregate. Single source of truth — callers must not
    /// retain clones across mutations and expect them to stay current.
    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    // ────────────────────────────────────────────────────────────────────
    // Subscriptions
    // ────────────────────────────────────────────────────────────────────

    /// Registers a listener invoked after every mutation with the
    /// post-mutation aggregate.
    pub fn subscribe(&mut self, listener: impl Fn(&ResumeData) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Detaches a listener. No-op if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn notify(&self) {
        let data = &self.data;
        for (_, listener) in &self.subscribers {
            listener(data);
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Scalar setters — replace unconditionally, no validation at this layer
    // ────────────────────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
        self.notify();
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.data.role = role.into();
        self.notify();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.data.location = location.into();
        self.notify();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.data.email = email.into();
        self.notify();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.data.phone = phone.into();
        self.notify();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.data.summary = summary.into();
        self.notify();
    }

    pub fn set_social_link(&mut self, key: SocialKey, value: impl Into<String>) {
        self.data.social_links.set(key, value.into());
        self.notify();
    }

    // ────────────────────────────────────────────────────────────────────
    // Skills
    // ────────────────────────────────────────────────────────────────────

    /// Appends a skill and returns its fresh id.
    pub fn add_skill(&mut self, name: impl Into<String>, proficiency: Option<u8>) -> String {
        let id = generate_id();
        self.data.skills.push(Skill {
            id: id.clone(),
            name: name.into(),
            proficiency: proficiency.unwrap_or(DEFAULT_PROFICIENCY),
        });
        self.notify();
        id
    }

    /// Applies a partial update to the matching skill. No-op if the id is absent.
    pub fn update_skill(&mut self, id: &str, patch: SkillPatch) {
        if let Some(skill) = self.data.skills.iter_mut().find(|s| s.id == id) {
            patch.apply(skill);
            self.notify();
        }
    }

    /// Drops the matching skill. No-op if the id is absent.
    pub fn remove_skill(&mut self, id: &str) {
        let before = self.data.skills.len();
        self.data.skills.retain(|s| s.id != id);
        if self.data.skills.len() != before {
            self.notify();
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Experiences
    // ────────────────────────────────────────────────────────────────────

    /// Appends a blank experience entry and returns its fresh id.
    pub fn add_experience(&mut self) -> String {
        let id = generate_id();
        self.data.experiences.push(Experience {
            id: id.clone(),
            ..Experience::default()
        });
        self.notify();
        id
    }

    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) {
        if let Some(exp) = self.data.experiences.iter_mut().find(|e| e.id == id) {
            patch.apply(exp);
            self.notify();
        }
    }

    pub fn remove_experience(&mut self, id: &str) {
        let before = self.data.experiences.len();
        self.data.experiences.retain(|e| e.id != id);
        if self.data.experiences.len() != before {
            self.notify();
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Education
    // ────────────────────────────────────────────────────────────────────

    pub fn add_education(&mut self) -> String {
        let id = generate_id();
        self.data.education.push(Education {
            id: id.clone(),
            ..Education::default()
        });
        self.notify();
        id
    }

    pub fn update_education(&mut self, id: &str, patch: EducationPatch) {
        if let Some(edu) = self.data.education.iter_mut().find(|e| e.id == id) {
            patch.apply(edu);
            self.notify();
        }
    }

    pub fn remove_education(&mut self, id: &str) {
        let before = self.data.education.len();
        self.data.education.retain(|e| e.id != id);
        if self.data.education.len() != before {
            self.notify();
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Projects
    // ────────────────────────────────────────────────────────────────────

    pub fn add_project(&mut self) -> String {
        let id = generate_id();
        self.data.projects.push(Project {
            id: id.clone(),
            ..Project::default()
        });
        self.notify();
        id
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) {
        if let Some(proj) = self.data.projects.iter_mut().find(|p| p.id == id) {
            patch.apply(proj);
            self.notify();
        }
    }

    pub fn remove_project(&mut self, id: &str) {
        let before = self.data.projects.len();
        self.data.projects.retain(|p| p.id != id);
        if self.data.projects.len() != before {
            self.notify();
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Bulk replacement
    // ────────────────────────────────────────────────────────────────────

    /// Replaces the entire aggregate with the all-empty default.
    pub fn reset_resume(&mut self) {
        debug!("Resetting resume aggregate");
        self.data = ResumeData::default();
        self.notify();
    }

    /// Replaces the entire aggregate with the bundled sample dataset.
    pub fn load_sample_data(&mut self) {
        debug!("Loading sample resume data");
        self.data = crate::models::sample::sample_resume();
        self.notify();
    }

    /// Replaces the entire aggregate with an externally supplied one.
    /// No shape validation — whatever parsed, renders.
    pub fn set_resume_data(&mut self, data: ResumeData) {
        self.data = data;
        self.notify();
    }

    /// Store-level completion score. Distinct from the preview toolbar's
    /// metric (`preview::preview_completion`) — the two are kept as
    /// independent functions on purpose.
    pub fn completion_percentage(&self) -> u8 {
        completion::completion_percentage(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_scalar_setters_replace_unconditionally() {
        let mut store = ResumeStore::new();
        store.set_name("Ada Lovelace");
        store.set_email("not-an-email");
        assert_eq!(store.data().name, "Ada Lovelace");
        // Invalid values are written anyway — validation is advisory only.
        assert_eq!(store.data().email, "not-an-email");
    }

    #[test]
    fn test_add_skill_defaults_proficiency_to_50() {
        let mut store = ResumeStore::new();
        store.add_skill("Rust", None);
        store.add_skill("SQL", Some(80));
        assert_eq!(store.data().skills[0].proficiency, 50);
        assert_eq!(store.data().skills[1].proficiency, 80);
    }

    #[test]
    fn test_skill_ids_stay_unique_across_mutations() {
        let mut store = ResumeStore::new();
        let mut ids = Vec::new();
        for i in 0..20 {
            ids.push(store.add_skill(format!("skill-{i}"), None));
        }
        store.remove_skill(&ids[3]);
        store.remove_skill(&ids[7]);
        ids.push(store.add_skill("another", None));

        let mut seen = std::collections::HashSet::new();
        for skill in &store.data().skills {
            assert!(seen.insert(skill.id.clone()), "duplicate id {}", skill.id);
        }
    }

    #[test]
    fn test_update_with_unknown_id_is_noop() {
        let mut store = ResumeStore::new();
        store.add_skill("React", Some(90));
        let before = store.data().clone();
        store.update_skill(
            "no-such-id",
            SkillPatch {
                name: Some("Vue".to_string()),
                proficiency: Some(1),
            },
        );
        assert_eq!(store.data(), &before);
    }

    #[test]
    fn test_remove_with_unknown_id_is_noop() {
        let mut store = ResumeStore::new();
        let id = store.add_experience();
        store.remove_experience("no-such-id");
        assert_eq!(store.data().experiences.len(), 1);
        store.remove_experience(&id);
        assert!(store.data().experiences.is_empty());
    }

    #[test]
    fn test_add_experience_appends_blank_entry() {
        let mut store = ResumeStore::new();
        let id = store.add_experience();
        let exp = &store.data().experiences[0];
        assert_eq!(exp.id, id);
        assert!(exp.role.is_empty());
        assert!(exp.company.is_empty());
    }

    #[test]
    fn test_update_experience_patches_only_given_fields() {
        let mut store = ResumeStore::new();
        let id = store.add_experience();
        store.update_experience(
            &id,
            ExperiencePatch {
                role: Some("Engineer".to_string()),
                ..ExperiencePatch::default()
            },
        );
        store.update_experience(
            &id,
            ExperiencePatch {
                company: Some("Acme".to_string()),
                ..ExperiencePatch::default()
            },
        );
        let exp = &store.data().experiences[0];
        assert_eq!(exp.role, "Engineer");
        assert_eq!(exp.company, "Acme");
        assert!(exp.duration.is_empty());
    }

    #[test]
    fn test_lists_preserve_insertion_order() {
        let mut store = ResumeStore::new();
        store.add_skill("first", None);
        store.add_skill("second", None);
        store.add_skill("third", None);
        let names: Vec<_> = store.data().skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_reset_resume_reads_back_all_empty_default() {
        let mut store = ResumeStore::new();
        store.load_sample_data();
        store.reset_resume();
        assert_eq!(store.data(), &ResumeData::default());
    }

    #[test]
    fn test_set_resume_data_replaces_wholesale() {
        let mut store = ResumeStore::new();
        store.set_name("old");
        let mut replacement = ResumeData::default();
        replacement.name = "new".to_string();
        store.set_resume_data(replacement.clone());
        assert_eq!(store.data(), &replacement);
    }

    #[test]
    fn test_subscribers_fire_on_every_mutation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut store = ResumeStore::new();
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.set_name("a");
        store.add_skill("Rust", None);
        store.reset_resume();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_subscriber_sees_post_mutation_state() {
        let seen = Arc::new(std::sync::Mutex::new(String::new()));
        let sink = Arc::clone(&seen);
        let mut store = ResumeStore::new();
        store.subscribe(move |data| {
            *sink.lock().unwrap() = data.name.clone();
        });
        store.set_name("Grace Hopper");
        assert_eq!(*seen.lock().unwrap(), "Grace Hopper");
    }

    #[test]
    fn test_unsubscribe_detaches_listener() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut store = ResumeStore::new();
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.set_name("a");
        store.unsubscribe(id);
        store.set_name("b");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
