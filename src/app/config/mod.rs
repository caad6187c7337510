// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The application never writes it back; the file is
//! edited by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[slideshow]` - Autoplay and startup presentation
//! - `[download]` - Where downloaded slides are written
//! - `[[images]]` - Optional replacement for the built-in catalog
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_CAROUSEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::app::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings.toml ignored: {key}");
//! }
//! println!("autoplay every {:?}", config.slideshow.interval());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::gallery::GalleryImage;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Slideshow behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Start advancing automatically on launch.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Delay between two automatic advances, in milliseconds.
    #[serde(
        default = "default_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,

    /// Open directly in the fullscreen overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_fullscreen: Option<bool>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            interval_ms: default_interval_ms(),
            start_fullscreen: Some(false),
        }
    }
}

impl SlideshowConfig {
    /// Autoplay interval clamped to the supported range.
    #[must_use]
    pub fn interval(&self) -> Duration {
        let ms = self
            .interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
            .clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

/// Download settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DownloadConfig {
    /// Target directory; platform download directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub download: DownloadConfig,

    /// Catalog override. Empty means "use the built-in images".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<GalleryImage>,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Writing
// =============================================================================

/// Writes `config` to `path`, creating parent directories. Used to produce
/// a starting `settings.toml`.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ru".to_string()),
                theme_mode: ThemeMode::Light,
            },
            slideshow: SlideshowConfig {
                autoplay: Some(false),
                interval_ms: Some(2500),
                start_fullscreen: Some(true),
            },
            download: DownloadConfig {
                directory: Some(PathBuf::from("/tmp/slides")),
            },
            images: vec![GalleryImage::new(
                7,
                "https://example.com/a.jpg",
                "A",
                "First",
            )],
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_returns_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[slideshow\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_yields_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[slideshow]\ninterval_ms = 5000\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.slideshow.interval(), Duration::from_millis(5000));
        assert_eq!(loaded.slideshow.autoplay, Some(true));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert!(loaded.images.is_empty());
    }

    #[test]
    fn images_section_parses_catalog_entries() {
        let content = r#"
[[images]]
id = 1
url = "https://example.com/one.jpg"
title = "One"
description = "First image"

[[images]]
id = 2
url = "https://example.com/two.jpg"
title = "Two"
description = "Second image"
"#;
        let config: Config = toml::from_str(content).expect("parse");
        assert_eq!(config.images.len(), 2);
        assert_eq!(config.images[1].title, "Two");
    }

    #[test]
    fn interval_is_clamped() {
        let slow = SlideshowConfig {
            interval_ms: Some(10 * 60 * 1000),
            ..SlideshowConfig::default()
        };
        assert_eq!(
            slow.interval(),
            Duration::from_millis(MAX_AUTOPLAY_INTERVAL_MS)
        );

        let fast = SlideshowConfig {
            interval_ms: Some(1),
            ..SlideshowConfig::default()
        };
        assert_eq!(
            fast.interval(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"neon\"\n");
        assert!(result.is_err());
    }
}
