//! CSV Export functionality
//!
//! One file per entity list. Transaction rows are joined with account and
//! category titles from the same snapshot.

use std::io::Write;

use crate::error::{SaveyError, SaveyResult};
use crate::services::Snapshot;

fn export_err<E: std::fmt::Display>(e: E) -> SaveyError {
    SaveyError::Export(e.to_string())
}

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(snapshot: &Snapshot, writer: W) -> SaveyResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record([
        "ID", "Date", "Account", "Category", "Title", "Amount", "Currency", "Expense",
    ])
    .map_err(export_err)?;

    for txn in &snapshot.transactions {
        let account = snapshot.account_title(txn.account_id).unwrap_or("Unknown");
        let category = snapshot.category_title(txn.category_id).unwrap_or("Unknown");

        csv.write_record([
            txn.id.to_string(),
            txn.date.to_string(),
            account.to_string(),
            category.to_string(),
            txn.title.clone(),
            txn.value.to_string(),
            txn.currency.clone(),
            txn.expense.to_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export accounts to CSV
pub fn export_accounts_csv<W: Write>(snapshot: &Snapshot, writer: W) -> SaveyResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["ID", "Title", "Currency", "Transactions"])
        .map_err(export_err)?;

    for account in &snapshot.accounts {
        let count = snapshot
            .transactions
            .iter()
            .filter(|t| t.account_id == account.id)
            .count();

        csv.write_record([
            account.id.to_string(),
            account.title.clone(),
            account.currency.clone(),
            count.to_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export categories to CSV
pub fn export_categories_csv<W: Write>(snapshot: &Snapshot, writer: W) -> SaveyResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["ID", "Title", "Kind"]).map_err(export_err)?;

    for category in &snapshot.categories {
        csv.write_record([
            category.id.to_string(),
            category.title.clone(),
            category.kind.clone(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}
