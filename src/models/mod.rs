//! Core data models for savey-cli
//!
//! Entities are snapshots of what the site rendered at fetch time. None of
//! them refers back to the page or the session it came from.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use category::Category;
pub use ids::{AccountId, CategoryId, TransactionId};
pub use money::Money;
pub use transaction::Transaction;
