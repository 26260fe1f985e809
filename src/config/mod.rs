// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[geocoder]` - Reverse geocoding (endpoint, user agent, language, timeout)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `EXIF_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use exif_lens::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.geocoder.language = "fr".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ExifLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "EXIF_LENS_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// `[geocoder]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    /// When `false`, no lookups are made and addresses stay unavailable.
    pub enabled: bool,
    /// Base URL of the Nominatim-compatible service.
    pub endpoint: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Preferred address language (`accept-language`).
    pub language: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_GEOCODER_ENDPOINT.to_string(),
            user_agent: DEFAULT_GEOCODER_USER_AGENT.to_string(),
            language: DEFAULT_GEOCODER_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_GEOCODER_TIMEOUT_SECS,
        }
    }
}

impl GeocoderConfig {
    /// Timeout clamped to the supported range.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .clamp(MIN_GEOCODER_TIMEOUT_SECS, MAX_GEOCODER_TIMEOUT_SECS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub geocoder: GeocoderConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    get_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Returns the configuration directory.
///
/// `EXIF_LENS_CONFIG_DIR` wins when set and non-empty; otherwise the platform
/// config directory with the application name appended.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.trim().is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Loads the configuration from the default location.
///
/// A missing file yields the default configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads `settings.toml` from an explicit directory.
///
/// A missing file yields the default configuration.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_from_dir(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        load_from_path(&path)
    } else {
        Ok(Config::default())
    }
}

/// Loads the configuration from `path`. Invalid TOML falls back to defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_geocoder_settings() {
        let config = Config {
            geocoder: GeocoderConfig {
                enabled: false,
                endpoint: "http://localhost:8080".to_string(),
                user_agent: "test-agent/1.0".to_string(),
                language: "de".to_string(),
                timeout_secs: 3,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[geocoder]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.geocoder.language, "fr");
        assert!(loaded.geocoder.enabled);
        assert_eq!(loaded.geocoder.endpoint, DEFAULT_GEOCODER_ENDPOINT);
        assert_eq!(loaded.geocoder.timeout_secs, DEFAULT_GEOCODER_TIMEOUT_SECS);
    }

    #[test]
    fn load_from_dir_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert_eq!(
            load_from_dir(temp_dir.path()).expect("missing file is fine"),
            Config::default()
        );

        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[geocoder]\nenabled = false\n",
        )
        .expect("write");
        let loaded = load_from_dir(temp_dir.path()).expect("load");
        assert!(!loaded.geocoder.enabled);
    }

    #[test]
    fn load_from_missing_path_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        assert!(load_from_path(&temp_dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn timeout_is_clamped() {
        let mut geocoder = GeocoderConfig {
            timeout_secs: 0,
            ..GeocoderConfig::default()
        };
        assert_eq!(geocoder.timeout_secs(), MIN_GEOCODER_TIMEOUT_SECS);

        geocoder.timeout_secs = 10_000;
        assert_eq!(geocoder.timeout_secs(), MAX_GEOCODER_TIMEOUT_SECS);
    }

    #[test]
    fn default_config_uses_public_nominatim_in_english() {
        let config = Config::default();
        assert!(config.geocoder.enabled);
        assert_eq!(config.geocoder.endpoint, DEFAULT_GEOCODER_ENDPOINT);
        assert_eq!(config.geocoder.language, "en");
    }
}
