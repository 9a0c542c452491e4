//! Configuration file loading with precedence handling.

use crate::state::SidebarSettings;
use crate::storage::SCROLL_KEY;
use crate::view::{FoldSettings, RenderOptions};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SIDEBAR_TOC_CONFIG";

/// Environment variable overriding the scroll storage key.
pub const STORAGE_KEY_ENV: &str = "SIDEBAR_TOC_STORAGE_KEY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/sidebar-toc/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Document name a directory URL stands for (e.g. "index.html").
    #[serde(default)]
    pub default_document: Option<String>,

    /// Session storage key for the remembered sidebar offset.
    #[serde(default)]
    pub storage_key: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Folding of deep sections.
    #[serde(default)]
    pub fold: Option<FoldSettings>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Document name a directory URL stands for.
    pub default_document: String,
    /// Session storage key for the remembered sidebar offset.
    pub storage_key: String,
    /// Log file for tracing output.
    pub log_file_path: PathBuf,
    /// Folding of deep sections.
    pub fold: FoldSettings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            default_document: "index.html".to_string(),
            storage_key: SCROLL_KEY.to_string(),
            log_file_path: default_log_path(),
            fold: FoldSettings::default(),
        }
    }
}

impl ResolvedConfig {
    /// The part of the configuration the sidebar controller consumes.
    pub fn sidebar_settings(&self) -> SidebarSettings {
        SidebarSettings {
            default_document: self.default_document.clone(),
            storage_key: self.storage_key.clone(),
            render: RenderOptions { fold: self.fold },
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/sidebar-toc/sidebar-toc.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("sidebar-toc").join("sidebar-toc.log")
    } else {
        PathBuf::from("sidebar-toc.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/sidebar-toc/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sidebar-toc").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SIDEBAR_TOC_CONFIG` environment variable
/// 3. Default path `~/.config/sidebar-toc/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        default_document: config.default_document.unwrap_or(defaults.default_document),
        storage_key: config.storage_key.unwrap_or(defaults.storage_key),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        fold: config.fold.unwrap_or(defaults.fold),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SIDEBAR_TOC_STORAGE_KEY`: Override storage key
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(key) = std::env::var(STORAGE_KEY_ENV) {
        if !key.is_empty() {
            config.storage_key = key;
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    fold_override: Option<bool>,
    fold_level_override: Option<usize>,
    default_document_override: Option<String>,
) -> ResolvedConfig {
    if let Some(enable) = fold_override {
        config.fold.enable = enable;
    }

    if let Some(level) = fold_level_override {
        config.fold.level = level;
    }

    if let Some(document) = default_document_override {
        config.default_document = document;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
