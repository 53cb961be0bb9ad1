//! Export module for savey-cli
//!
//! Writes a scraped [`Snapshot`](crate::services::Snapshot) out in several
//! formats:
//! - CSV: one entity list per file (spreadsheet-compatible)
//! - JSON: versioned envelope with everything, machine-readable
//! - YAML: same envelope, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_accounts_csv, export_categories_csv, export_transactions_csv};
pub use json::{export_snapshot_json, import_from_json, SnapshotExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
