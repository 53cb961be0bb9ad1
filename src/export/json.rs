//! JSON Export functionality
//!
//! Exports a snapshot to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::error::{SaveyError, SaveyResult};
use crate::models::{Account, Category, Transaction};
use crate::services::Snapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// When the snapshot was captured from the site
    pub captured_at: DateTime<Utc>,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub account_count: usize,
    pub category_count: usize,
    pub transaction_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl SnapshotExport {
    /// Wrap a snapshot for export
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let earliest_transaction = snapshot
            .transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = snapshot
            .transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            account_count: snapshot.accounts.len(),
            category_count: snapshot.categories.len(),
            transaction_count: snapshot.transactions.len(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            captured_at: snapshot.captured_at,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            accounts: snapshot.accounts.clone(),
            categories: snapshot.categories.clone(),
            transactions: snapshot.transactions.clone(),
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let account_ids: HashSet<_> = self.accounts.iter().map(|a| a.id).collect();

        for txn in &self.transactions {
            if !account_ids.contains(&txn.account_id) {
                return Err(format!(
                    "Transaction {} references unknown account {}",
                    txn.id, txn.account_id
                ));
            }
            if txn.expense != txn.value.is_negative() {
                return Err(format!(
                    "Transaction {} has expense={} but value {}",
                    txn.id, txn.expense, txn.value
                ));
            }
        }

        Ok(())
    }
}

/// Export a snapshot to JSON
pub fn export_snapshot_json<W: Write>(
    snapshot: &Snapshot,
    writer: &mut W,
    pretty: bool,
) -> SaveyResult<()> {
    let export = SnapshotExport::from_snapshot(snapshot);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SaveyError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export (for verification)
pub fn import_from_json(json_str: &str) -> SaveyResult<SnapshotExport> {
    let export: SnapshotExport =
        serde_json::from_str(json_str).map_err(|e| SaveyError::Export(e.to_string()))?;

    export.validate().map_err(SaveyError::Export)?;

    Ok(export)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{AccountId, CategoryId, Money, TransactionId};
    use chrono::NaiveDate;

    pub(crate) fn sample_snapshot() -> Snapshot {
        let wallet = Account::new(AccountId::new(1024), "Cash Wallet", "EUR");
        let checking = Account::new(AccountId::new(2048), "Main, Checking", "USD");
        let transactions = vec![
            Transaction::for_account(
                &wallet,
                TransactionId::new(5551),
                "Weekly groceries",
                NaiveDate::from_ymd_opt(2015, 3, 9).unwrap(),
                CategoryId::new(15),
                Money::from_cents(-2540),
            ),
            Transaction::for_account(
                &checking,
                TransactionId::new(6001),
                "Salary \"March\"",
                NaiveDate::from_ymd_opt(2015, 2, 28).unwrap(),
                CategoryId::new(11),
                Money::from_cents(150000),
            ),
        ];

        Snapshot {
            captured_at: Utc::now(),
            accounts: vec![wallet, checking],
            categories: vec![
                Category::new(CategoryId::new(11), "Salary", "Income"),
                Category::new(CategoryId::new(15), "Food & Drinks", "Expense"),
            ],
            transactions,
        }
    }

    #[test]
    fn test_snapshot_export() {
        let snapshot = sample_snapshot();
        let mut output = Vec::new();
        export_snapshot_json(&snapshot, &mut output, true).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let imported = import_from_json(&json_str).unwrap();

        assert_eq!(imported.metadata.account_count, 2);
        assert_eq!(imported.metadata.transaction_count, 2);
        assert_eq!(
            imported.metadata.earliest_transaction.as_deref(),
            Some("2015-02-28")
        );
        assert_eq!(imported.transactions, snapshot.transactions);
    }

    #[test]
    fn test_validate_rejects_unknown_account() {
        let mut snapshot = sample_snapshot();
        snapshot.accounts.remove(1);

        let export = SnapshotExport::from_snapshot(&snapshot);
        let err = export.validate().unwrap_err();
        assert!(err.contains("unknown account 2048"));
    }

    #[test]
    fn test_validate_rejects_wrong_schema() {
        let mut export = SnapshotExport::from_snapshot(&sample_snapshot());
        export.schema_version = "0.1.0".into();
        assert!(export.validate().is_err());
    }
}
