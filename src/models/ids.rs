//! Strongly-typed ID wrappers for all entity types
//!
//! Identifiers are assigned by the site and recovered from the page markup.
//! Newtype wrappers keep account, category and transaction IDs from being
//! mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a site-assigned identifier
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying integer
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(AccountId);
define_id!(CategoryId);
define_id!(TransactionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(AccountId::new(42).to_string(), "42");
        assert_eq!(format!("{:>5}", AccountId::new(42)), "   42");
    }

    #[test]
    fn test_id_from_str() {
        let id: CategoryId = " 17 ".parse().unwrap();
        assert_eq!(id.get(), 17);
        assert!("abc".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::new(9001);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9001");

        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
