//! Display formatting for terminal output
//!
//! Plain-text tables for the entity lists. JSON output is handled by the
//! CLI layer directly through serde.

pub mod account;
pub mod category;
pub mod transaction;

pub use account::format_account_list;
pub use category::format_category_list;
pub use transaction::{format_transaction_list, truncate};
