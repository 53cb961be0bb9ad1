//! Account model
//!
//! A payment account as listed on the site's manage page.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;

/// A payment account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Site-assigned identifier
    pub id: AccountId,

    /// Account title (e.g., "Cash Wallet")
    pub title: String,

    /// Currency label as rendered by the site (e.g., "EUR")
    pub currency: String,
}

impl Account {
    /// Create a new account
    pub fn new(id: AccountId, title: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.currency)
    }
}
