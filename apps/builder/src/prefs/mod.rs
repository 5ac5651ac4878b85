#![allow(dead_code)]

//! Theme preferences: mode, accent color and style preset, persisted across
//! sessions through a small key-value store.
//!
//! The backing store is a trait so the file-backed default can be swapped
//! for an in-memory double in tests. Preferences are read once at startup
//! and written through on every change. Absent or unrecognized values fall
//! back to: mode from the system appearance, accent "blue", preset
//! "modern".

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::errors::AppError;

pub const THEME_KEY: &str = "resume-theme";
pub const ACCENT_KEY: &str = "resume-accent";
pub const PRESET_KEY: &str = "resume-preset";

const PREFS_FILE: &str = "preferences.json";

// ────────────────────────────────────────────────────────────────────────────
// Preference values
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentColor {
    Blue,
    Purple,
    Green,
    Orange,
    Rose,
}

impl AccentColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Purple => "purple",
            AccentColor::Green => "green",
            AccentColor::Orange => "orange",
            AccentColor::Rose => "rose",
        }
    }

    pub fn parse(s: &str) -> Option<AccentColor> {
        match s {
            "blue" => Some(AccentColor::Blue),
            "purple" => Some(AccentColor::Purple),
            "green" => Some(AccentColor::Green),
            "orange" => Some(AccentColor::Orange),
            "rose" => Some(AccentColor::Rose),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    Minimal,
    Modern,
    Creative,
}

impl StylePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreset::Minimal => "minimal",
            StylePreset::Modern => "modern",
            StylePreset::Creative => "creative",
        }
    }

    pub fn parse(s: &str) -> Option<StylePreset> {
        match s {
            "minimal" => Some(StylePreset::Minimal),
            "modern" => Some(StylePreset::Modern),
            "creative" => Some(StylePreset::Creative),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backing stores
// ────────────────────────────────────────────────────────────────────────────

/// String key-value persistence for preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// File-backed store: one JSON object in the platform config directory.
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Opens the store at the platform's config location for this app.
    pub fn open_default() -> Result<Self, AppError> {
        let dirs = ProjectDirs::from("", "", "resume-builder").ok_or_else(|| {
            AppError::Preferences("Could not determine a config directory".to_string())
        })?;
        Ok(Self::at(dirs.config_dir().join(PREFS_FILE)))
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, AppError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(map) => Ok(map),
            Err(e) => {
                // A corrupt preference file should not take the app down.
                warn!("Preference file {:?} is unreadable ({e}); starting fresh", self.path);
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

/// In-memory store for tests and environments without a config directory.
#[derive(Default)]
pub struct MemoryPreferences {
    map: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let map = self
            .map
            .lock()
            .map_err(|_| AppError::Preferences("preference map lock poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut map = self
            .map
            .lock()
            .map_err(|_| AppError::Preferences("preference map lock poisoned".to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Theme state
// ────────────────────────────────────────────────────────────────────────────

/// The three persisted selections plus write-through persistence.
pub struct ThemeState {
    theme: Theme,
    accent: AccentColor,
    preset: StylePreset,
    store: Box<dyn PreferenceStore>,
}

impl ThemeState {
    /// Reads the persisted selections once. Missing or unrecognized values
    /// fall back: theme from the system appearance, accent blue, preset
    /// modern.
    pub fn load(store: Box<dyn PreferenceStore>, system_prefers_dark: bool) -> Self {
        let theme = read_enum(store.as_ref(), THEME_KEY, Theme::parse).unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        });
        let accent =
            read_enum(store.as_ref(), ACCENT_KEY, AccentColor::parse).unwrap_or(AccentColor::Blue);
        let preset = read_enum(store.as_ref(), PRESET_KEY, StylePreset::parse)
            .unwrap_or(StylePreset::Modern);
        debug!(
            "Theme preferences loaded: {} / {} / {}",
            theme.as_str(),
            accent.as_str(),
            preset.as_str()
        );
        Self {
            theme,
            accent,
            preset,
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn accent(&self) -> AccentColor {
        self.accent
    }

    pub fn preset(&self) -> StylePreset {
        self.preset
    }

    /// Flips light/dark and persists immediately.
    pub fn toggle_theme(&mut self) -> Result<Theme, AppError> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }

    pub fn set_accent(&mut self, accent: AccentColor) -> Result<(), AppError> {
        self.accent = accent;
        self.store.set(ACCENT_KEY, accent.as_str())
    }

    pub fn set_preset(&mut self, preset: StylePreset) -> Result<(), AppError> {
        self.preset = preset;
        self.store.set(PRESET_KEY, preset.as_str())
    }
}

fn read_enum<T>(
    store: &dyn PreferenceStore,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => {
            let parsed = parse(&raw);
            if parsed.is_none() {
                warn!("Ignoring unrecognized preference {key}={raw}");
            }
            parsed
        }
        Ok(None) => None,
        Err(e) => {
            warn!("Could not read preference {key}: {e}");
            None
        }
    }
}

/// System appearance probe. Terminals advertise their palette through
/// `COLORFGBG` ("<fg>;<bg>", low background numbers mean dark); absent or
/// unparseable values count as a light preference.
pub fn system_prefers_dark() -> bool {
    match std::env::var("COLORFGBG") {
        Ok(value) => colorfgbg_is_dark(&value),
        Err(_) => false,
    }
}

fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_store_is_empty() {
        let state = ThemeState::load(Box::new(MemoryPreferences::new()), false);
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.accent(), AccentColor::Blue);
        assert_eq!(state.preset(), StylePreset::Modern);
    }

    #[test]
    fn test_system_dark_preference_applies_only_without_saved_theme() {
        let state = ThemeState::load(Box::new(MemoryPreferences::new()), true);
        assert_eq!(state.theme(), Theme::Dark);

        let store = MemoryPreferences::new();
        store.set(THEME_KEY, "light").unwrap();
        let state = ThemeState::load(Box::new(store), true);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_unrecognized_values_fall_back() {
        let store = MemoryPreferences::new();
        store.set(ACCENT_KEY, "chartreuse").unwrap();
        let state = ThemeState::load(Box::new(store), false);
        assert_eq!(state.accent(), AccentColor::Blue);
    }

    #[test]
    fn test_changes_persist_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut state = ThemeState::load(Box::new(FilePreferences::at(path.clone())), false);
        state.toggle_theme().unwrap();
        state.set_accent(AccentColor::Rose).unwrap();
        state.set_preset(StylePreset::Creative).unwrap();

        // A later session reads back what this one wrote.
        let state = ThemeState::load(Box::new(FilePreferences::at(path)), false);
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.accent(), AccentColor::Rose);
        assert_eq!(state.preset(), StylePreset::Creative);
    }

    #[test]
    fn test_corrupt_preference_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json at all").unwrap();
        let prefs = FilePreferences::at(path);
        assert_eq!(prefs.get(THEME_KEY).unwrap(), None);
        prefs.set(THEME_KEY, "dark").unwrap();
        assert_eq!(prefs.get(THEME_KEY).unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_colorfgbg_background_detection() {
        assert!(colorfgbg_is_dark("15;0"));
        assert!(colorfgbg_is_dark("15;default;0"));
        assert!(!colorfgbg_is_dark("0;15"));
        assert!(!colorfgbg_is_dark("garbage"));
    }
}
