//! Configuration and settings management for Shapeboard
//!
//! Supports JSON and TOML file formats; the default file lives in the
//! platform-specific configuration directory.
//!
//! Configuration is organized into sections:
//! - Board settings (canvas dimensions)
//! - Render settings (ANSI colors)
//! - Storage settings (default save file)

use serde::{Deserialize, Serialize};
use shapeboard_core::constants::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIMENSION};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError};

/// Directory name under the platform config directory.
pub const APP_DIR: &str = "shapeboard";

/// File name of the default configuration file.
pub const CONFIG_FILE: &str = "config.toml";

/// Canvas dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Canvas width in cells
    pub width: usize,
    /// Canvas height in cells
    pub height: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

/// Rendering preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Wrap painted cells in ANSI color escapes
    pub color: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Save file defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// File used by `save` and `load` when no path is given
    pub default_file: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from("board.txt"),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Board settings
    pub board: BoardSettings,
    /// Render settings
    pub render: RenderSettings,
    /// Storage settings
    pub storage: StorageSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but cannot be parsed or fails validation is still
    /// an error.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| SettingsError::io(path, e))?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("board.width", self.board.width),
            ("board.height", self.board.height),
        ] {
            if value == 0 {
                return Err(ConfigError::invalid(key, "must be > 0"));
            }
            if value > MAX_BOARD_DIMENSION {
                return Err(ConfigError::invalid(
                    key,
                    format!("must be <= {}", MAX_BOARD_DIMENSION),
                ));
            }
        }
        if self.storage.default_file.as_os_str().is_empty() {
            return Err(ConfigError::invalid("storage.default_file", "must not be empty"));
        }
        Ok(())
    }
}
