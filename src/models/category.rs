//! Category model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A transaction category
///
/// `kind` is the site's free-text classification (e.g. "Income" or
/// "Expense") and is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Site-assigned identifier
    pub id: CategoryId,

    /// Category title
    pub title: String,

    /// Site-defined classification label
    pub kind: String,
}

impl Category {
    /// Create a new category
    pub fn new(id: CategoryId, title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
