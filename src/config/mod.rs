//! Layered settings for the CLI.
//!
//! Each source (flags, environment, config file) yields a
//! [`SettingsLayer`] where every field is optional. Layers are stacked in
//! priority order and [`Settings::from_layers`] takes the first value set
//! for each field, falling back to the built-in defaults.
//!
//! The config file is TOML:
//!
//! ```toml
//! wpm = 90
//! accuracy = 0.95
//! seed = 7
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::consts::{DEFAULT_ACCURACY, DEFAULT_WPM};
use crate::typist::{ConfigError, Profile};

/// Default config file: `<config dir>/typist/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("typist").join("config.toml"))
}

/// One source of settings. Unset fields defer to lower layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsLayer {
    pub wpm: Option<i64>,
    pub accuracy: Option<f64>,
    pub seed: Option<u64>,
}

impl SettingsLayer {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config file")
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load `explicit` if given (it must exist), otherwise the default
    /// config file if there is one. No file at all is an empty layer.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Fully resolved settings. Not yet validated; see [`Settings::profile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub wpm: i64,
    pub accuracy: f64,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            accuracy: DEFAULT_ACCURACY,
            seed: None,
        }
    }
}

impl Settings {
    /// Merge layers, highest priority first.
    pub fn from_layers(layers: &[SettingsLayer]) -> Self {
        let defaults = Self::default();
        Self {
            wpm: layers.iter().find_map(|l| l.wpm).unwrap_or(defaults.wpm),
            accuracy: layers
                .iter()
                .find_map(|l| l.accuracy)
                .unwrap_or(defaults.accuracy),
            seed: layers.iter().find_map(|l| l.seed),
        }
    }

    pub fn profile(&self) -> Result<Profile, ConfigError> {
        Profile::new(self.wpm, self.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_layers() {
        let settings = Settings::from_layers(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.wpm, 75);
        assert_eq!(settings.accuracy, 0.97);
        assert!(settings.seed.is_none());
    }

    #[test]
    fn first_layer_wins() {
        let flags = SettingsLayer {
            wpm: Some(120),
            ..SettingsLayer::default()
        };
        let file = SettingsLayer {
            wpm: Some(40),
            accuracy: Some(0.5),
            seed: Some(9),
        };
        let settings = Settings::from_layers(&[flags, file]);
        assert_eq!(settings.wpm, 120);
        assert_eq!(settings.accuracy, 0.5);
        assert_eq!(settings.seed, Some(9));
    }

    #[test]
    fn parse_full_file() {
        let layer = SettingsLayer::parse("wpm = 90\naccuracy = 0.95\nseed = 7\n").unwrap();
        assert_eq!(
            layer,
            SettingsLayer {
                wpm: Some(90),
                accuracy: Some(0.95),
                seed: Some(7),
            }
        );
    }

    #[test]
    fn parse_partial_file() {
        let layer = SettingsLayer::parse("accuracy = 1.0").unwrap();
        assert_eq!(layer.accuracy, Some(1.0));
        assert!(layer.wpm.is_none());
    }

    #[test]
    fn parse_empty_file() {
        assert_eq!(SettingsLayer::parse("").unwrap(), SettingsLayer::default());
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert!(SettingsLayer::parse("speed = 3").is_err());
    }

    #[test]
    fn parse_rejects_wrong_types() {
        assert!(SettingsLayer::parse("wpm = \"fast\"").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "wpm = 33\n").unwrap();

        let layer = SettingsLayer::load(&path).unwrap();
        assert_eq!(layer.wpm, Some(33));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = SettingsLayer::discover(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }

    #[test]
    fn profile_validates_resolved_values() {
        let settings = Settings {
            wpm: 0,
            ..Settings::default()
        };
        assert_eq!(settings.profile(), Err(ConfigError::InvalidSpeed(0)));

        let settings = Settings {
            accuracy: 1.5,
            ..Settings::default()
        };
        assert_eq!(settings.profile(), Err(ConfigError::InvalidAccuracy(1.5)));

        let profile = Settings::default().profile().unwrap();
        assert_eq!(profile.wpm(), 75);
    }
}
