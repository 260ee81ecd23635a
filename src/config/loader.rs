//! Configuration file loading with precedence handling.

use crate::carousel::InterfacePreference;
use crate::model::{InvalidRotation, PanelGeometry, Rotation};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "CAROUSEL_CONFIG";

/// Environment variable overriding the panel rotation.
const ROTATE_ENV: &str = "CAROUSEL_ROTATE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permissions, or a directory in its place).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML, unknown keys or out-of-range values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A rotation outside `0..=3`.
    #[error("Invalid rotation: {0}")]
    Rotation(#[from] InvalidRotation),

    /// The panel is too small to hold two widget cells.
    #[error("Panel {width}x{height} is too small, both sides must be at least 2")]
    PanelTooSmall {
        /// Configured width.
        width: u16,
        /// Configured height.
        height: u16,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/carousel/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Native panel width in terminal cells.
    #[serde(default)]
    pub width: Option<u16>,

    /// Native panel height in terminal cells.
    #[serde(default)]
    pub height: Option<u16>,

    /// Mounting rotation, `0..=3`.
    #[serde(default)]
    pub rotate: Option<Rotation>,

    /// Delay between frames in milliseconds.
    #[serde(default)]
    pub frame_delay_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Network interfaces to prefer, e.g. `["eth0", "en0"]`.
    #[serde(default)]
    pub preferred_interfaces: Option<Vec<String>>,

    /// Interface shown when none of the preferred ones exist.
    #[serde(default)]
    pub fallback_interface: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Native panel width.
    pub width: u16,
    /// Native panel height.
    pub height: u16,
    /// Mounting rotation.
    pub rotation: Rotation,
    /// Delay between frames in milliseconds.
    pub frame_delay_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Network interface choice for the network widget.
    pub interfaces: InterfacePreference,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 12,
            rotation: Rotation::Normal,
            frame_delay_ms: 50,
            log_file_path: default_log_path(),
            interfaces: InterfacePreference::default(),
        }
    }
}

impl ResolvedConfig {
    /// Panel geometry described by this config.
    pub fn panel(&self) -> PanelGeometry {
        PanelGeometry::new(self.width, self.height, self.rotation)
    }

    /// Delay between frames.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

/// Overrides taken from command-line flags; `None` means "not given".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--width`
    pub width: Option<u16>,
    /// `--height`
    pub height: Option<u16>,
    /// `--rotate`
    pub rotation: Option<Rotation>,
    /// `--frame-delay-ms`
    pub frame_delay_ms: Option<u64>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/carousel/carousel.log` on Linux, or the
/// platform's state directory elsewhere. Falls back to the current
/// directory when there is none.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("carousel").join("carousel.log")
    } else {
        PathBuf::from("carousel.log")
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
/// Returns `~/.config/carousel/config.toml` on Linux, the platform's
/// config directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("carousel").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CAROUSEL_CONFIG` environment variable
/// 3. Default path `~/.config/carousel/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error if the env path is not valid UTF-8, or if a config file
/// exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV) {
        Ok(env_path) => return load_config_file(PathBuf::from(env_path)),
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
        Err(std::env::VarError::NotPresent) => {}
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
        width: config.width.unwrap_or(defaults.width),
        height: config.height.unwrap_or(defaults.height),
        rotation: config.rotate.unwrap_or(defaults.rotation),
        frame_delay_ms: config.frame_delay_ms.unwrap_or(defaults.frame_delay_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        interfaces: InterfacePreference {
            candidates: config
                .preferred_interfaces
                .unwrap_or(defaults.interfaces.candidates),
            fallback: config
                .fallback_interface
                .unwrap_or(defaults.interfaces.fallback),
        },
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CAROUSEL_ROTATE`: rotation `0..=3`; other values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    let rotation = std::env::var(ROTATE_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse::<u8>().ok())
        .and_then(|value| Rotation::try_from(value).ok());

    if let Some(rotation) = rotation {
        config.rotation = rotation;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags that were explicitly given are applied.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(rotation) = cli.rotation {
        config.rotation = rotation;
    }
    if let Some(delay) = cli.frame_delay_ms {
        config.frame_delay_ms = delay;
    }
    config
}

/// Check the fully resolved config.
///
/// # Errors
///
/// `ConfigError::PanelTooSmall` if either side is below 2 cells, which would
/// leave the widget cells empty.
pub fn validate(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if config.width < 2 || config.height < 2 {
        return Err(ConfigError::PanelTooSmall {
            width: config.width,
            height: config.height,
        });
    }
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
