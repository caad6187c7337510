// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`ICED_CAROUSEL_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The download directory follows its own order, see [`get_download_dir`].

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedCarousel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_CAROUSEL_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Later calls are ignored: the first value set at startup wins.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// - Linux: `~/.config/IcedCarousel/`
/// - macOS: `~/Library/Application Support/IcedCarousel/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedCarousel\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory downloaded slides are written to.
///
/// 1. `configured` (the `[download] directory` setting), if set
/// 2. Platform download directory (`~/Downloads` and friends)
/// 3. Current working directory
pub fn get_download_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let path = PathBuf::from("/tmp/carousel-test-config");
        assert_eq!(
            get_app_config_dir_with_override(Some(path.clone())),
            Some(path)
        );
    }

    #[test]
    fn cli_config_dir_is_set_once() {
        init_cli_overrides(Some("/tmp/carousel-cli-config".to_string()));
        init_cli_overrides(Some("/tmp/ignored".to_string()));
        assert_eq!(
            get_app_config_dir(),
            Some(PathBuf::from("/tmp/carousel-cli-config"))
        );
    }

    #[test]
    fn configured_download_dir_is_used_verbatim() {
        let dir = Path::new("/srv/photos");
        assert_eq!(get_download_dir(Some(dir)), PathBuf::from("/srv/photos"));
    }

    #[test]
    fn download_dir_always_resolves() {
        let dir = get_download_dir(None);
        assert!(!dir.as_os_str().is_empty());
    }
}
