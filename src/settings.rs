//! Game settings and preferences
//!
//! Stored as JSON. Missing fields take their defaults, so a settings file only
//! needs the entries it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::KeyBinding;
use crate::sim::Controls;

/// Errors raised while loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read or written
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Parse(serde_json::Error),
    /// The same key is bound to more than one action
    DuplicateBinding(KeyBinding),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Settings I/O error: {}", e),
            SettingsError::Parse(e) => write!(f, "Invalid settings: {}", e),
            SettingsError::DuplicateBinding(key) => {
                write!(f, "Key {} is bound more than once", key)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::DuplicateBinding(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Left player's keys
    pub player_one: Controls,
    /// Right player's keys
    pub player_two: Controls,
    /// Serve RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_one: Controls::new(KeyBinding::new('W'), KeyBinding::new('S')),
            player_two: Controls::new(KeyBinding::new('P'), KeyBinding::new('L')),
            seed: None,
            show_fps: true,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every binding must be distinct (case-insensitive)
    pub fn validate(&self) -> Result<(), SettingsError> {
        let keys = [
            self.player_one.up,
            self.player_one.down,
            self.player_two.up,
            self.player_two.down,
        ];
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].iter().any(|other| other.matches(key.0)) {
                return Err(SettingsError::DuplicateBinding(KeyBinding::new(key.0)));
            }
        }
        Ok(())
    }

    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("duel-pong-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.player_one.up, KeyBinding('W'));
        assert_eq!(settings.player_two.down, KeyBinding('L'));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 99, "show_fps": false }"#).unwrap();
        assert_eq!(settings.seed, Some(99));
        assert!(!settings.show_fps);
        assert_eq!(settings.player_one, Settings::default().player_one);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.player_two = Controls::new(KeyBinding::new('I'), KeyBinding::new('K'));
        settings.seed = Some(7);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let json = r#"{ "player_two": { "up": "w", "down": "L" } }"#;
        match Settings::from_json(json) {
            Err(SettingsError::DuplicateBinding(key)) => assert_eq!(key, KeyBinding('W')),
            other => panic!("Expected duplicate binding, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid settings"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = temp_path("missing");
        assert!(matches!(
            Settings::load_from_path(&path),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved");
        let mut settings = Settings::default();
        settings.seed = Some(12345);
        settings.save_to_path(&path).unwrap();

        let loaded = Settings::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }
}
