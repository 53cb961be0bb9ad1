//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Handlers write to any
//! `Write` so they can be exercised without a terminal.

pub mod account;
pub mod category;
pub mod export;
pub mod session;
pub mod transaction;

pub use account::{handle_account_command, AccountArgs};
pub use category::{handle_category_command, CategoryArgs};
pub use export::{
    handle_export_command, handle_verify_command, write_snapshot, CsvKind, ExportArgs,
    ExportFormat,
};
pub use session::{with_login, Credentials};
pub use transaction::{handle_transaction_command, TransactionArgs};

use std::io::Write;

use clap::Subcommand;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{SaveyError, SaveyResult};
use crate::session::{Client, Transport};

/// Commands that need a logged-in session
#[derive(Subcommand, Debug)]
pub enum SiteCommand {
    /// List accounts
    Accounts(AccountArgs),

    /// List categories
    Categories(CategoryArgs),

    /// List transactions for all or selected accounts
    Transactions(TransactionArgs),

    /// Capture everything and write it as JSON, YAML or CSV
    Export(ExportArgs),

    /// Log in and out to check credentials
    LoginCheck,
}

/// Run a site command on an already logged-in client
pub fn handle_site_command<T: Transport, W: Write>(
    client: &mut Client<T>,
    command: SiteCommand,
    username: &str,
    default_format: OutputFormat,
    out: &mut W,
) -> SaveyResult<()> {
    match command {
        SiteCommand::Accounts(args) => handle_account_command(client, args, default_format, out),
        SiteCommand::Categories(args) => {
            handle_category_command(client, args, default_format, out)
        }
        SiteCommand::Transactions(args) => {
            handle_transaction_command(client, args, default_format, out)
        }
        SiteCommand::Export(args) => handle_export_command(client, args, out),
        SiteCommand::LoginCheck => {
            writeln!(out, "Logged in as {}", username)?;
            Ok(())
        }
    }
}

/// A next step to suggest alongside an error, if any
pub fn error_hint(err: &SaveyError) -> Option<&'static str> {
    if err.is_protocol() {
        Some("check your username and password, and the base_url in `savey config`")
    } else if err.is_structural() {
        Some("the site's page layout may have changed; rerun with -vv for the failing row")
    } else if err.is_not_found() {
        Some("run `savey accounts` to see the available IDs")
    } else {
        None
    }
}

/// Write `value` as pretty JSON followed by a newline
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> SaveyResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write pre-formatted text
pub(crate) fn write_text<W: Write>(out: &mut W, text: &str) -> SaveyResult<()> {
    out.write_all(text.as_bytes())
        .map_err(|e| SaveyError::Io(format!("Failed to write output: {}", e)))
}
