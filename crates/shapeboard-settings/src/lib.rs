//! Shapeboard Settings Crate
//!
//! Handles the configuration file: board size, rendering and storage defaults.

pub mod config;
pub mod error;

pub use config::{BoardSettings, Config, RenderSettings, StorageSettings};
pub use error::{ConfigError, SettingsError};
