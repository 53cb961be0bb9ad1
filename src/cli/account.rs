//! Account CLI command
//!
//! Lists the accounts shown on the manage page.

use std::io::Write;

use clap::Args;

use super::{write_json, write_text};
use crate::config::OutputFormat;
use crate::display::format_account_list;
use crate::error::SaveyResult;
use crate::models::AccountId;
use crate::services::AccountService;
use crate::session::{Client, Transport};

/// Arguments for `savey accounts`
#[derive(Args, Debug, Default)]
pub struct AccountArgs {
    /// Show only the account with this ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Output format (default from settings)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Handle the accounts command
pub fn handle_account_command<T: Transport, W: Write>(
    client: &Client<T>,
    args: AccountArgs,
    default_format: OutputFormat,
    out: &mut W,
) -> SaveyResult<()> {
    let format = args.format.unwrap_or(default_format);
    let service = AccountService::new(client);

    let accounts = match args.id {
        Some(id) => vec![service.find(AccountId::new(id))?],
        None => service.list()?,
    };

    match format {
        OutputFormat::Json => write_json(out, &accounts),
        OutputFormat::Table => write_text(out, &format_account_list(&accounts)),
    }
}
