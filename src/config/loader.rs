use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MenuEntry};
use crate::nav::route::{is_absolute, is_strict_descendant, is_within, normalize};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/fieldsales/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("fieldsales").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Drawer ratio, transition duration and frame interval are in range
    /// - Routes are absolute and `home` is outside the unauthenticated section
    /// - At least one destination, with unique absolute paths
    /// - Menu children are strict descendants of their parent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shell = &self.shell;
        if !(shell.drawer_width_ratio > 0.0 && shell.drawer_width_ratio <= 1.0) {
            return Err(invalid(format!(
                "drawer_width_ratio must be in (0, 1], got {}",
                shell.drawer_width_ratio
            )));
        }
        if !(250..=300).contains(&shell.transition_ms) {
            return Err(invalid(format!(
                "transition_ms must be between 250 and 300, got {}",
                shell.transition_ms
            )));
        }
        if shell.frame_interval_ms == 0 {
            return Err(invalid("frame_interval_ms must be positive".to_string()));
        }

        for (name, path) in [("entry", &self.routes.entry), ("home", &self.routes.home)] {
            if !is_absolute(path) {
                return Err(invalid(format!("routes.{name} must start with '/': '{path}'")));
            }
        }
        if is_within(&self.routes.home, &self.routes.entry) {
            return Err(invalid(format!(
                "routes.home '{}' is inside the unauthenticated section '{}'",
                self.routes.home, self.routes.entry
            )));
        }

        if self.destinations.is_empty() {
            return Err(invalid("At least one destination must be configured".to_string()));
        }
        let mut seen = HashSet::new();
        for destination in &self.destinations {
            if !is_absolute(&destination.path) {
                return Err(invalid(format!(
                    "Destination '{}' path must start with '/': '{}'",
                    destination.label, destination.path
                )));
            }
            if !seen.insert(normalize(&destination.path)) {
                return Err(invalid(format!(
                    "Duplicate destination path '{}'",
                    destination.path
                )));
            }
        }

        for entry in &self.menu {
            validate_menu_entry(entry)?;
        }

        Ok(())
    }
}

fn validate_menu_entry(entry: &MenuEntry) -> Result<(), ConfigError> {
    if !is_absolute(&entry.path) {
        return Err(invalid(format!(
            "Menu entry '{}' path must start with '/': '{}'",
            entry.label, entry.path
        )));
    }
    for child in &entry.children {
        if child.has_children() {
            return Err(invalid(format!(
                "Menu entry '{}' nests deeper than one level",
                child.label
            )));
        }
        if !is_strict_descendant(&child.path, &entry.path) {
            return Err(invalid(format!(
                "Menu child '{}' ('{}') is not under '{}'",
                child.label, child.path, entry.path
            )));
        }
    }
    Ok(())
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
