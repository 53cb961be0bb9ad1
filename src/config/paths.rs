//! Path management for savey-cli
//!
//! ## Path Resolution Order
//!
//! 1. `SAVEY_CLI_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/savey-cli` or `~/.config/savey-cli`
//! 3. Windows: `%APPDATA%\savey-cli`

use std::path::PathBuf;

use crate::error::SaveyError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "SAVEY_CLI_CONFIG_DIR";

/// Manages all paths used by savey-cli
#[derive(Debug, Clone)]
pub struct SaveyPaths {
    /// Base directory for all savey-cli files
    base_dir: PathBuf,
}

impl SaveyPaths {
    /// Create a new SaveyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, SaveyError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SaveyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/savey-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SaveyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SaveyError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SaveyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                SaveyError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("savey-cli"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SaveyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SaveyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("savey-cli"))
}
