// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! user-edited `settings.toml` file. The application never writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[service]` - Editing service origin and endpoint paths
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` or `load_with_override()` with an explicit location
//! 2. Pass `--config-dir` or set `PROMPT_EDITOR_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use prompt_editor::app::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("service: {}", config::resolve_service_url(None, &config));
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Editing service location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// Service origin, e.g. `http://127.0.0.1:8000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_edit_path")]
    pub edit_path: String,

    #[serde(default = "default_health_path")]
    pub health_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            edit_path: default_edit_path(),
            health_path: default_health_path(),
        }
    }
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
    pub service: ServiceConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_edit_path() -> String {
    DEFAULT_EDIT_PATH.to_string()
}

fn default_health_path() -> String {
    DEFAULT_HEALTH_PATH.to_string()
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
// Service URL Resolution
// =============================================================================

/// Picks the service origin: CLI flag, then environment, then config file,
/// then the built-in default. Blank values are skipped.
#[must_use]
pub fn resolve_service_url(cli_url: Option<&str>, config: &Config) -> String {
    let env_url = std::env::var(ENV_SERVICE_URL).ok();
    resolve_service_url_from(cli_url, env_url.as_deref(), config)
}

fn resolve_service_url_from(
    cli_url: Option<&str>,
    env_url: Option<&str>,
    config: &Config,
) -> String {
    [cli_url, env_url, config.service.base_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_SERVICE_BASE_URL)
        .to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
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
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_settings(config: &Config, path: &Path) {
        let content = toml::to_string_pretty(config).expect("failed to serialize config");
        fs::write(path, content).expect("failed to write config");
    }

    #[test]
    fn load_from_path_reads_every_section() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            service: ServiceConfig {
                base_url: Some("http://10.0.0.5:9000".to_string()),
                edit_path: "/v2/edit".to_string(),
                health_path: "/v2/health".to_string(),
            },
        };

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        write_settings(&config, &config_path);
        let loaded = load_from_path(&config_path).expect("failed to read config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to read config");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.service, ServiceConfig::default());
        assert_eq!(loaded.service.edit_path, "/api/edit");
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn loading_invalid_toml_returns_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = [valid").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[service\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.service.base_url = Some("http://10.0.0.5:9000".to_string());
        write_settings(&config, &temp_dir.path().join(CONFIG_FILE));

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, config);
        assert!(warning.is_none());
    }

    #[test]
    fn service_url_precedence() {
        let mut config = Config::default();
        assert_eq!(
            resolve_service_url_from(None, None, &config),
            DEFAULT_SERVICE_BASE_URL
        );

        config.service.base_url = Some("http://config:1".to_string());
        assert_eq!(
            resolve_service_url_from(None, None, &config),
            "http://config:1"
        );
        assert_eq!(
            resolve_service_url_from(None, Some("http://env:2"), &config),
            "http://env:2"
        );
        assert_eq!(
            resolve_service_url_from(Some("http://cli:3"), Some("http://env:2"), &config),
            "http://cli:3"
        );
    }

    #[test]
    fn blank_service_urls_are_skipped() {
        let mut config = Config::default();
        config.service.base_url = Some("  ".to_string());
        assert_eq!(
            resolve_service_url_from(Some(""), Some(" "), &config),
            DEFAULT_SERVICE_BASE_URL
        );
    }
}
