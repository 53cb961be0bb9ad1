//! User settings for savey-cli
//!
//! Site origin, request identity and output preferences. Credentials are
//! never written here except for an optional username.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use url::Url;

use super::paths::SaveyPaths;
use crate::error::SaveyError;

/// How list commands render their output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// User settings for savey-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Origin every request path is resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Username to log in with when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Default rendering for list commands
    #[serde(default)]
    pub default_format: OutputFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_url() -> String {
    "http://www.savey.co/".to_string()
}

fn default_user_agent() -> String {
    "savey-cli".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            username: None,
            default_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SaveyPaths) -> Result<Self, SaveyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SaveyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SaveyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SaveyPaths) -> Result<(), SaveyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SaveyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SaveyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<(), SaveyError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            SaveyError::Config(format!("Invalid base_url '{}': {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SaveyError::Config(format!(
                "base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(SaveyError::Config("timeout_secs must be positive".into()));
        }

        Ok(())
    }
}
