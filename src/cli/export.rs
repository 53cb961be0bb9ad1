//! Export CLI command
//!
//! Captures a full snapshot in one session and writes it to a file or
//! stdout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use tracing::info;

use crate::error::{SaveyError, SaveyResult};
use crate::export::{
    export_accounts_csv, export_categories_csv, export_snapshot_json, export_snapshot_yaml,
    export_transactions_csv, import_from_json,
};
use crate::models::AccountId;
use crate::services::{Snapshot, SnapshotService};
use crate::session::{Client, Transport};

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// Which list a CSV export holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CsvKind {
    #[default]
    Transactions,
    Accounts,
    Categories,
}

/// Arguments for `savey export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// List to write when exporting CSV
    #[arg(short, long, value_enum, default_value_t = CsvKind::Transactions)]
    pub kind: CsvKind,

    /// Only read transactions for this account ID (repeatable)
    #[arg(short, long = "account", value_name = "ID")]
    pub accounts: Vec<i64>,

    /// Write compact JSON
    #[arg(long)]
    pub compact: bool,
}

/// Write a captured snapshot in the requested format
pub fn write_snapshot<W: Write>(snapshot: &Snapshot, args: &ExportArgs, out: &mut W) -> SaveyResult<()> {
    match args.format {
        ExportFormat::Json => {
            export_snapshot_json(snapshot, out, !args.compact)?;
            writeln!(out)?;
            Ok(())
        }
        ExportFormat::Yaml => export_snapshot_yaml(snapshot, out),
        ExportFormat::Csv => match args.kind {
            CsvKind::Transactions => export_transactions_csv(snapshot, out),
            CsvKind::Accounts => export_accounts_csv(snapshot, out),
            CsvKind::Categories => export_categories_csv(snapshot, out),
        },
    }
}

/// Handle the export command
///
/// Without `--output` the snapshot goes to `out`.
pub fn handle_export_command<T: Transport, W: Write>(
    client: &mut Client<T>,
    args: ExportArgs,
    out: &mut W,
) -> SaveyResult<()> {
    let only: Vec<AccountId> = args.accounts.iter().copied().map(AccountId::new).collect();
    let filter = (!only.is_empty()).then_some(only.as_slice());

    let snapshot = SnapshotService::new(client).capture(filter)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SaveyError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_snapshot(&snapshot, &args, &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), "wrote export");
        }
        None => {
            write_snapshot(&snapshot, &args, out)?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Handle the verify command: read a JSON export back and check it
pub fn handle_verify_command<W: Write>(path: &Path, out: &mut W) -> SaveyResult<()> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| SaveyError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let export = import_from_json(&contents)?;

    writeln!(
        out,
        "{}: schema {}, captured {}",
        path.display(),
        export.schema_version,
        export.captured_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(
        out,
        "  {} account(s), {} category(ies), {} transaction(s)",
        export.metadata.account_count,
        export.metadata.category_count,
        export.metadata.transaction_count
    )?;
    if let (Some(earliest), Some(latest)) = (
        &export.metadata.earliest_transaction,
        &export.metadata.latest_transaction,
    ) {
        writeln!(out, "  transactions from {} to {}", earliest, latest)?;
    }

    Ok(())
}
