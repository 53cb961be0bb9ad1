//! Category CLI command

use std::io::Write;

use clap::Args;

use super::{write_json, write_text};
use crate::config::OutputFormat;
use crate::display::format_category_list;
use crate::error::SaveyResult;
use crate::services::CategoryService;
use crate::session::{Client, Transport};

/// Arguments for `savey categories`
#[derive(Args, Debug, Default)]
pub struct CategoryArgs {
    /// Output format (default from settings)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Handle the categories command
pub fn handle_category_command<T: Transport, W: Write>(
    client: &Client<T>,
    args: CategoryArgs,
    default_format: OutputFormat,
    out: &mut W,
) -> SaveyResult<()> {
    let format = args.format.unwrap_or(default_format);
    let categories = CategoryService::new(client).list()?;

    match format {
        OutputFormat::Json => write_json(out, &categories),
        OutputFormat::Table => write_text(out, &format_category_list(&categories)),
    }
}
