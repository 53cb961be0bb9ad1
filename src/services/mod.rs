//! Service layer for savey-cli
//!
//! Services drive the session client through the navigation each list
//! needs and hand the resulting page to the matching extractor. They do no
//! recovery of their own: any failure is returned to the caller as-is.

pub mod account;
pub mod category;
pub mod snapshot;
pub mod transaction;

pub use account::AccountService;
pub use category::CategoryService;
pub use snapshot::{Snapshot, SnapshotService};
pub use transaction::TransactionService;
