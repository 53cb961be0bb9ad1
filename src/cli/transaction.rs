//! Transaction CLI command
//!
//! Reads the dashboard of each selected account in turn.

use std::io::Write;

use clap::Args;

use super::{write_json, write_text};
use crate::config::OutputFormat;
use crate::display::format_transaction_list;
use crate::error::{SaveyError, SaveyResult};
use crate::models::{Account, AccountId};
use crate::services::{AccountService, TransactionService};
use crate::session::{Client, Transport};

/// Arguments for `savey transactions`
#[derive(Args, Debug, Default)]
pub struct TransactionArgs {
    /// Account ID to read (repeatable; default: every account)
    #[arg(short, long = "account", value_name = "ID")]
    pub accounts: Vec<i64>,

    /// Output format (default from settings)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Pick the requested accounts, keeping the order they were asked for
fn select_accounts(all: Vec<Account>, ids: &[i64]) -> SaveyResult<Vec<Account>> {
    if ids.is_empty() {
        return Ok(all);
    }

    ids.iter()
        .map(|&id| {
            all.iter()
                .find(|a| a.id == AccountId::new(id))
                .cloned()
                .ok_or_else(|| SaveyError::account_not_found(id.to_string()))
        })
        .collect()
}

/// Handle the transactions command
pub fn handle_transaction_command<T: Transport, W: Write>(
    client: &mut Client<T>,
    args: TransactionArgs,
    default_format: OutputFormat,
    out: &mut W,
) -> SaveyResult<()> {
    let format = args.format.unwrap_or(default_format);
    let all = AccountService::new(client).list()?;
    let accounts = select_accounts(all, &args.accounts)?;

    let transactions = TransactionService::new(client).list_for_accounts(&accounts)?;

    match format {
        OutputFormat::Json => write_json(out, &transactions),
        OutputFormat::Table => write_text(out, &format_transaction_list(&accounts, &transactions)),
    }
}
