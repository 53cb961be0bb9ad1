//! Custom error types for savey-cli
//!
//! This module defines the error hierarchy for the scraper using thiserror.
//! Protocol failures (wrong final URL after a navigation) and structural
//! failures (page layout did not match) are distinct variants so callers can
//! tell a bad password from a changed page.

use thiserror::Error;

use crate::models::AccountId;

/// The main error type for savey-cli operations
#[derive(Error, Debug)]
pub enum SaveyError {
    /// Underlying request or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Login did not land on the dashboard
    #[error("Authentication failed: login did not reach the dashboard")]
    AuthenticationFailed,

    /// Logout did not land on the site root
    #[error("Logout failed: expected to land on the site root")]
    LogoutFailed,

    /// Switching the current account did not land on the dashboard
    #[error("Failed to switch to account {account_id} (landed on {landed_on})")]
    AccountSwitchFailed {
        account_id: AccountId,
        landed_on: String,
    },

    /// No usable digit run in an identifier-bearing fragment
    #[error("Malformed identifier: {0:?}")]
    MalformedIdentifier(String),

    /// Date text did not match "Month Day, Year"
    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),

    /// A block had no attribute carrying its identifier
    #[error("{entity} is missing its {attribute} identifier attribute")]
    MissingIdentifierAttribute {
        entity: &'static str,
        attribute: &'static str,
    },

    /// A transaction row had no category link
    #[error("Transaction is missing its category link")]
    MissingCategoryLink,

    /// A block did not contain a required field
    #[error("{entity} is missing field: {field}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// Amount text was not a signed decimal number
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A CSS selector failed to compile
    #[error("Selector error: {0}")]
    Selector(String),

    /// A URL could not be parsed or resolved against the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SaveyError {
    /// Create a "missing identifier attribute" error for an onclick handler
    pub fn missing_onclick(entity: &'static str) -> Self {
        Self::MissingIdentifierAttribute {
            entity,
            attribute: "onclick",
        }
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a protocol-level failure (wrong final URL)
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed | Self::LogoutFailed | Self::AccountSwitchFailed { .. }
        )
    }

    /// Check if this is a structural failure (page layout mismatch)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MalformedIdentifier(_)
                | Self::InvalidDateFormat(_)
                | Self::MissingIdentifierAttribute { .. }
                | Self::MissingCategoryLink
                | Self::MissingField { .. }
                | Self::InvalidAmount(_)
        )
    }
}

impl From<std::io::Error> for SaveyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SaveyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for SaveyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<url::ParseError> for SaveyError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Result type alias for savey-cli operations
pub type SaveyResult<T> = Result<T, SaveyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SaveyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_switch_failed_display() {
        let err = SaveyError::AccountSwitchFailed {
            account_id: AccountId::new(42),
            landed_on: "http://www.savey.co/".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to switch to account 42 (landed on http://www.savey.co/)"
        );
        assert!(err.is_protocol());
        assert!(!err.is_structural());
    }

    #[test]
    fn test_missing_onclick() {
        let err = SaveyError::missing_onclick("Account");
        assert_eq!(
            err.to_string(),
            "Account is missing its onclick identifier attribute"
        );
        assert!(err.is_structural());
    }

    #[test]
    fn test_not_found_error() {
        let err = SaveyError::account_not_found("77");
        assert_eq!(err.to_string(), "Account not found: 77");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let savey_err: SaveyError = io_err.into();
        assert!(matches!(savey_err, SaveyError::Io(_)));
    }

    #[test]
    fn test_from_url_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let savey_err: SaveyError = url_err.into();
        assert!(matches!(savey_err, SaveyError::InvalidUrl(_)));
    }
}
