//! Configuration file loading with precedence handling.
//!
//! Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest).

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::caption::{CaptionConfig, DEFAULT_CUTOFF, DEFAULT_NEWLINE_LIMIT};
use crate::gesture::{
    GestureConfig, DEFAULT_CAROUSEL_SUPPRESS, DEFAULT_MOMENTUM_THRESHOLD, DEFAULT_SETTLE_DELAY,
};
use crate::model::Author;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FEEDSWIPE_CONFIG";

/// Environment variable overriding the caption cutoff.
pub const CUTOFF_ENV: &str = "FEEDSWIPE_CAPTION_CUTOFF";

/// Environment variable overriding the publishing handle.
pub const HANDLE_ENV: &str = "FEEDSWIPE_AUTHOR_HANDLE";

/// Identity used for published posts when none is configured.
pub const DEFAULT_AUTHOR_NAME: &str = "Helcim Team";
/// Handle used for published posts when none is configured.
pub const DEFAULT_AUTHOR_HANDLE: &str = "@helcim";
/// Avatar used for published posts when none is configured.
pub const DEFAULT_AUTHOR_AVATAR: &str =
    "https://pbs.twimg.com/profile_images/1268634165995429888/CHymLbpm_400x400.jpg";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, not a file, ...).
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
/// Corresponds to `~/.config/feedswipe/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Characters shown before a caption collapses.
    #[serde(default)]
    pub caption_cutoff: Option<usize>,

    /// Newlines shown before a caption collapses.
    #[serde(default)]
    pub caption_newline_limit: Option<usize>,

    /// Momentum a release must exceed to fling.
    #[serde(default)]
    pub momentum_threshold: Option<f64>,

    /// Exit animation length in milliseconds.
    #[serde(default)]
    pub settle_delay_ms: Option<u64>,

    /// Drag suppression after a carousel scroll, in milliseconds.
    #[serde(default)]
    pub carousel_suppress_ms: Option<u64>,

    /// Pixel height of one terminal row, for gesture math.
    #[serde(default)]
    pub cell_height_px: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Identity that published posts carry.
    #[serde(default)]
    pub author: Option<AuthorSection>,
}

/// `[author]` table.
///
/// ```toml
/// [author]
/// full_name = "Helcim Team"
/// handle = "@helcim"
/// avatar_url = "https://example.com/a.jpg"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AuthorSection {
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Handle including the leading `@`.
    #[serde(default)]
    pub handle: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Characters shown before a caption collapses.
    pub caption_cutoff: usize,
    /// Newlines shown before a caption collapses.
    pub caption_newline_limit: usize,
    /// Momentum a release must exceed to fling.
    pub momentum_threshold: f64,
    /// Exit animation length in milliseconds.
    pub settle_delay_ms: u64,
    /// Drag suppression after a carousel scroll, in milliseconds.
    pub carousel_suppress_ms: u64,
    /// Pixel height of one terminal row.
    pub cell_height_px: f64,
    /// Log file for tracing output.
    pub log_file_path: PathBuf,
    /// Identity that published posts carry.
    pub author: Author,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            caption_cutoff: DEFAULT_CUTOFF,
            caption_newline_limit: DEFAULT_NEWLINE_LIMIT,
            momentum_threshold: DEFAULT_MOMENTUM_THRESHOLD,
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
            carousel_suppress_ms: DEFAULT_CAROUSEL_SUPPRESS.as_millis() as u64,
            cell_height_px: 16.0,
            log_file_path: default_log_path(),
            author: Author::new(DEFAULT_AUTHOR_NAME, DEFAULT_AUTHOR_HANDLE)
                .with_avatar(DEFAULT_AUTHOR_AVATAR),
        }
    }
}

impl ResolvedConfig {
    /// Swipe controller tunables.
    pub fn gesture(&self) -> GestureConfig {
        GestureConfig {
            momentum_threshold: self.momentum_threshold,
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            carousel_suppress: Duration::from_millis(self.carousel_suppress_ms),
        }
    }

    /// Caption collapse limits.
    pub fn caption(&self) -> CaptionConfig {
        CaptionConfig {
            cutoff: self.caption_cutoff,
            newline_limit: self.caption_newline_limit,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/feedswipe/feedswipe.log` on Linux, or the platform
/// equivalent. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("feedswipe").join("feedswipe.log")
    } else {
        PathBuf::from("feedswipe.log")
    }
}

/// Resolve default config file path.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("feedswipe").join("config.toml"))
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

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FEEDSWIPE_CONFIG` environment variable
/// 3. Default path `~/.config/feedswipe/config.toml`
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

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let author_section = config.author.unwrap_or_default();
    let author = Author {
        full_name: author_section
            .full_name
            .unwrap_or(defaults.author.full_name),
        handle: author_section.handle.unwrap_or(defaults.author.handle),
        avatar_url: author_section.avatar_url.or(defaults.author.avatar_url),
    };

    ResolvedConfig {
        caption_cutoff: config.caption_cutoff.unwrap_or(defaults.caption_cutoff),
        caption_newline_limit: config
            .caption_newline_limit
            .unwrap_or(defaults.caption_newline_limit),
        momentum_threshold: config
            .momentum_threshold
            .unwrap_or(defaults.momentum_threshold),
        settle_delay_ms: config.settle_delay_ms.unwrap_or(defaults.settle_delay_ms),
        carousel_suppress_ms: config
            .carousel_suppress_ms
            .unwrap_or(defaults.carousel_suppress_ms),
        cell_height_px: config.cell_height_px.unwrap_or(defaults.cell_height_px),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        author,
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `FEEDSWIPE_CAPTION_CUTOFF` and `FEEDSWIPE_AUTHOR_HANDLE`. An
/// unparsable cutoff is ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(CUTOFF_ENV) {
        match raw.trim().parse::<usize>() {
            Ok(cutoff) => config.caption_cutoff = cutoff,
            Err(_) => warn!(value = %raw, "ignoring unparsable {}", CUTOFF_ENV),
        }
    }

    if let Ok(handle) = std::env::var(HANDLE_ENV) {
        config.author.handle = handle;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    cutoff_override: Option<usize>,
    handle_override: Option<String>,
) -> ResolvedConfig {
    if let Some(cutoff) = cutoff_override {
        config.caption_cutoff = cutoff;
    }

    if let Some(handle) = handle_override {
        config.author.handle = handle;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
