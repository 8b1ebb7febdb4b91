// SPDX-License-Identifier: MPL-2.0
//! Application configuration, persisted as `settings.toml` under the user's
//! config directory. A missing file yields defaults silently; a malformed
//! file yields defaults plus a warning the caller surfaces as a
//! notification.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedVitrine";

/// Delay before the loading screen dismisses and animations initialize.
pub const DEFAULT_LOADING_DELAY_MS: u64 = 1500;

/// Warning surfaced when the settings file exists but cannot be used.
pub const MALFORMED_CONFIG_WARNING: &str =
    "Your settings file could not be read, so defaults are in use.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Skip reveal/typewriter transitions; content appears immediately.
    #[serde(default)]
    pub reduced_motion: Option<bool>,
    /// Loading screen duration override in milliseconds.
    #[serde(default)]
    pub loading_delay_ms: Option<u64>,
    /// Window size override, `[width, height]`.
    #[serde(default)]
    pub window_size: Option<[f32; 2]>,
    /// Diagnostics ring buffer capacity override.
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduced_motion: Some(false),
            loading_delay_ms: Some(DEFAULT_LOADING_DELAY_MS),
            window_size: None,
            diagnostics_capacity: None,
        }
    }
}

fn default_config_path(dir_override: Option<&str>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(Path::new(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves a file stored next to the configuration, such as a diagnostics
/// export.
#[must_use]
pub fn sibling_path(dir_override: Option<&str>, file: &str) -> Option<PathBuf> {
    default_config_path(dir_override).map(|path| path.with_file_name(file))
}

/// Loads the configuration, never failing: a missing file is silently the
/// default, a malformed one is the default plus a warning message.
#[must_use]
pub fn load(dir_override: Option<&str>) -> (Config, Option<&'static str>) {
    let Some(path) = default_config_path(dir_override) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some(MALFORMED_CONFIG_WARNING)),
    }
}

/// Writes the settings out on first launch so the user has a file to edit.
/// An existing file is left untouched, even a malformed one.
pub fn save_if_missing(config: &Config, dir_override: Option<&str>) -> Result<()> {
    match default_config_path(dir_override) {
        Some(path) if !path.exists() => save_to_path(config, &path),
        _ => Ok(()),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    #[must_use]
    pub fn loading_delay_ms(&self) -> u64 {
        self.loading_delay_ms.unwrap_or(DEFAULT_LOADING_DELAY_MS)
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip() {
        let config = Config {
            reduced_motion: Some(true),
            loading_delay_ms: Some(200),
            window_size: Some([1024.0, 768.0]),
            diagnostics_capacity: Some(256),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded.reduced_motion, config.reduced_motion);
        assert_eq!(loaded.loading_delay_ms, config.loading_delay_ms);
        assert_eq!(loaded.window_size, config.window_size);
    }

    #[test]
    fn malformed_file_degrades_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write");

        let (config, warning) = load(temp_dir.path().to_str());
        assert_eq!(warning, Some(MALFORMED_CONFIG_WARNING));
        assert!(!config.reduced_motion());
    }

    #[test]
    fn missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load(temp_dir.path().to_str());

        assert!(warning.is_none());
        assert_eq!(config.loading_delay_ms(), DEFAULT_LOADING_DELAY_MS);
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("save should create directories");
        assert!(path.exists());
    }

    #[test]
    fn first_launch_writes_the_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        save_if_missing(&Config::default(), temp_dir.path().to_str()).expect("save");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn save_if_missing_leaves_an_existing_file_untouched() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "reduced_motion = true\n").expect("failed to write");

        save_if_missing(&Config::default(), temp_dir.path().to_str()).expect("save");
        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "reduced_motion = true\n");
    }

    #[test]
    fn partial_file_fills_in_nones() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "reduced_motion = true\n").expect("failed to write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.reduced_motion, Some(true));
        assert!(loaded.loading_delay_ms.is_none());
        assert_eq!(loaded.loading_delay_ms(), DEFAULT_LOADING_DELAY_MS);
    }
}
