//! Configuration file loading with precedence handling.

use crate::i18n::Translator;
use crate::list::{ListOptions, ScrollSeekConfig};
use crate::model::GroupMode;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MPDX_LIST_CONFIG";
/// Environment override for the group mode.
pub const GROUP_BY_ENV: &str = "MPDX_LIST_GROUP_BY";
/// Environment override for the page size.
pub const PAGE_SIZE_ENV: &str = "MPDX_LIST_PAGE_SIZE";

/// Default number of contacts fetched per page.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
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

    /// Scroll-seek band is inverted or out of range.
    #[error("scroll_seek_enter ({enter}) must be greater than scroll_seek_exit ({exit}), both >= 0")]
    InvalidScrollSeek {
        /// Configured enter velocity.
        enter: f64,
        /// Configured exit velocity.
        exit: f64,
    },

    /// A numeric setting is outside its valid range.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Config key.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/mpdx-list/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial group mode.
    #[serde(default)]
    pub group_by: Option<GroupMode>,

    /// Contacts fetched per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Skeleton rows shown while loading.
    #[serde(default)]
    pub skeleton_count: Option<usize>,

    /// Height of each skeleton row in lines.
    #[serde(default)]
    pub skeleton_height: Option<u16>,

    /// Items rendered before the viewport is measured.
    #[serde(default)]
    pub initial_item_count: Option<usize>,

    /// End-reached look-ahead in items.
    #[serde(default)]
    pub end_reached_threshold: Option<usize>,

    /// Lines per contact row.
    #[serde(default)]
    pub item_height: Option<u16>,

    /// Scroll speed (lines/s) above which placeholders replace rows.
    #[serde(default)]
    pub scroll_seek_enter: Option<f64>,

    /// Scroll speed (lines/s) below which real rows come back.
    #[serde(default)]
    pub scroll_seek_exit: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// User-facing string overrides, keyed like `list.empty`.
    #[serde(default)]
    pub strings: Option<HashMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Initial group mode.
    pub group_by: GroupMode,
    /// Contacts fetched per page.
    pub page_size: usize,
    /// Skeleton rows shown while loading.
    pub skeleton_count: usize,
    /// Skeleton row height.
    pub skeleton_height: u16,
    /// Items rendered before measurement.
    pub initial_item_count: usize,
    /// End-reached look-ahead.
    pub end_reached_threshold: usize,
    /// Lines per contact row.
    pub item_height: u16,
    /// Scroll-seek enter velocity.
    pub scroll_seek_enter: f64,
    /// Scroll-seek exit velocity.
    pub scroll_seek_exit: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// String overrides.
    pub strings: HashMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let list = ListOptions::default();
        let seek = ScrollSeekConfig::default();
        Self {
            group_by: GroupMode::default(),
            page_size: DEFAULT_PAGE_SIZE,
            skeleton_count: list.skeleton_count,
            skeleton_height: list.skeleton_height.get(),
            initial_item_count: list.initial_item_count,
            end_reached_threshold: list.end_reached_threshold,
            item_height: list.default_item_height.get(),
            scroll_seek_enter: seek.enter(),
            scroll_seek_exit: seek.exit(),
            log_file_path: default_log_path(),
            strings: HashMap::new(),
        }
    }
}

impl ResolvedConfig {
    /// Validated windowing options.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero skeleton/item height, a zero page size,
    /// or an inverted scroll-seek band.
    pub fn list_options(&self) -> Result<ListOptions, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "page_size",
                reason: "must be >= 1".to_string(),
            });
        }
        if self.item_height == 0 {
            return Err(ConfigError::InvalidValue {
                key: "item_height",
                reason: "must be >= 1".to_string(),
            });
        }
        let scroll_seek = ScrollSeekConfig::new(self.scroll_seek_enter, self.scroll_seek_exit)
            .map_err(|_| ConfigError::InvalidScrollSeek {
                enter: self.scroll_seek_enter,
                exit: self.scroll_seek_exit,
            })?;
        ListOptions::default()
            .with_skeleton_count(self.skeleton_count)
            .with_skeleton_height(self.skeleton_height)
            .map_err(|e| ConfigError::InvalidValue {
                key: "skeleton_height",
                reason: e.to_string(),
            })
            .map(|options| {
                options
                    .with_initial_item_count(self.initial_item_count)
                    .with_end_reached_threshold(self.end_reached_threshold)
                    .with_default_item_height(self.item_height)
                    .with_scroll_seek(Some(scroll_seek))
            })
    }

    /// Translator with the configured overrides.
    pub fn translator(&self) -> Translator {
        Translator::with_overrides(self.strings.clone())
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/mpdx-list/mpdx-list.log` on Linux, or the
/// platform state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("mpdx-list").join("mpdx-list.log")
    } else {
        PathBuf::from("mpdx-list.log")
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

/// Resolve default config file path (`~/.config/mpdx-list/config.toml` on
/// Linux). `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mpdx-list").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MPDX_LIST_CONFIG` environment variable
/// 3. Default path
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
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

/// Apply environment variable overrides to resolved config.
///
/// Checks `MPDX_LIST_GROUP_BY` and `MPDX_LIST_PAGE_SIZE`. Unparseable values
/// are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(GROUP_BY_ENV) {
        match raw.parse::<GroupMode>() {
            Ok(mode) => config.group_by = mode,
            Err(e) => warn!(error = %e, "Ignoring {}", GROUP_BY_ENV),
        }
    }

    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV) {
        match raw.trim().parse::<usize>() {
            Ok(size) if size > 0 => config.page_size = size,
            _ => warn!(value = %raw, "Ignoring {}: expected a positive integer", PAGE_SIZE_ENV),
        }
    }

    config
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
        group_by: config.group_by.unwrap_or(defaults.group_by),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        skeleton_count: config.skeleton_count.unwrap_or(defaults.skeleton_count),
        skeleton_height: config.skeleton_height.unwrap_or(defaults.skeleton_height),
        initial_item_count: config
            .initial_item_count
            .unwrap_or(defaults.initial_item_count),
        end_reached_threshold: config
            .end_reached_threshold
            .unwrap_or(defaults.end_reached_threshold),
        item_height: config.item_height.unwrap_or(defaults.item_height),
        scroll_seek_enter: config
            .scroll_seek_enter
            .unwrap_or(defaults.scroll_seek_enter),
        scroll_seek_exit: config.scroll_seek_exit.unwrap_or(defaults.scroll_seek_exit),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        strings: config.strings.unwrap_or(defaults.strings),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    group_by_override: Option<GroupMode>,
    page_size_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(mode) = group_by_override {
        config.group_by = mode;
    }

    if let Some(size) = page_size_override {
        config.page_size = size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
