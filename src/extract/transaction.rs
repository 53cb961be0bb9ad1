//! Transaction extraction from the dashboard
//!
//! Row layout:
//!
//! ```text
//! .section.group.list
//!   .col.span_2_of_3.list-description
//!     .list-pad-left      line 1 of its text is the title
//!       span              date, "March 9, 2015"
//!       span > a[href]    category link, id in the path
//!       span > a.edit-list[onclick]   transaction id
//!   .col.span_1_of_3.list-amount .list-pad-right span   signed amount
//! ```
//!
//! The dashboard shows whichever account the session last switched to, so
//! the caller supplies that account; its id and currency are stamped on
//! every row.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{first_attr, joined_text, selector, Extractor};
use crate::error::{SaveyError, SaveyResult};
use crate::models::{Account, CategoryId, Money, Transaction, TransactionId};
use crate::parse::{clean_text, parse_date, parse_id};

const ROWS: &str = ".section.group.list";
const DESCRIPTION: &str = ".col.span_2_of_3.list-description";
const TITLE_BLOCK: &str = ".list-pad-left";
const LABELS: &str = "span";
const CATEGORY_LINK: &str = "a";
const EDIT_LINK: &str = "a.edit-list";
const AMOUNT: &str = ".col.span_1_of_3.list-amount .list-pad-right span";

/// Line of the title block's text that holds the title
const TITLE_LINE: usize = 1;

struct RowSelectors {
    description: Selector,
    title_block: Selector,
    labels: Selector,
    category_link: Selector,
    edit_link: Selector,
    amount: Selector,
}

impl RowSelectors {
    fn compile() -> SaveyResult<Self> {
        Ok(Self {
            description: selector(DESCRIPTION)?,
            title_block: selector(TITLE_BLOCK)?,
            labels: selector(LABELS)?,
            category_link: selector(CATEGORY_LINK)?,
            edit_link: selector(EDIT_LINK)?,
            amount: selector(AMOUNT)?,
        })
    }
}

/// Extracts the transactions of one account from its dashboard
#[derive(Debug, Clone, Copy)]
pub struct TransactionExtractor<'a> {
    account: &'a Account,
}

impl<'a> TransactionExtractor<'a> {
    /// Create an extractor for pages showing `account`
    pub fn new(account: &'a Account) -> Self {
        Self { account }
    }

    fn row(&self, row: ElementRef<'_>, sel: &RowSelectors) -> SaveyResult<Transaction> {
        let description = row.select(&sel.description).next().ok_or(SaveyError::MissingField {
            entity: "Transaction",
            field: "description",
        })?;

        let title_text = joined_text(description, &sel.title_block);
        let title = title_text
            .split('\n')
            .nth(TITLE_LINE)
            .map(clean_text)
            .ok_or(SaveyError::MissingField {
                entity: "Transaction",
                field: "title",
            })?;

        let labels: Vec<ElementRef<'_>> = description.select(&sel.labels).collect();

        let date_label = labels.first().ok_or(SaveyError::MissingField {
            entity: "Transaction",
            field: "date",
        })?;
        let date = parse_date(clean_text(&date_label.text().collect::<String>()))?;

        let href = labels
            .get(1)
            .and_then(|label| first_attr(*label, &sel.category_link, "href"))
            .ok_or(SaveyError::MissingCategoryLink)?;
        let category_id = CategoryId::new(parse_id(href)?);

        let onclick = labels
            .get(2)
            .and_then(|label| first_attr(*label, &sel.edit_link, "onclick"))
            .ok_or_else(|| SaveyError::missing_onclick("Transaction"))?;
        let id = TransactionId::new(parse_id(onclick)?);

        let amount_text = row
            .select(&sel.amount)
            .next()
            .map(|el| el.text().collect::<String>())
            .ok_or(SaveyError::MissingField {
                entity: "Transaction",
                field: "amount",
            })?;
        let value = Money::parse(&amount_text)
            .map_err(|_| SaveyError::InvalidAmount(clean_text(&amount_text).to_string()))?;

        Ok(Transaction::for_account(
            self.account,
            id,
            title,
            date,
            category_id,
            value,
        ))
    }
}

impl Extractor for TransactionExtractor<'_> {
    type Item = Transaction;

    fn extract(&self, document: &Html) -> SaveyResult<Vec<Transaction>> {
        let rows = selector(ROWS)?;
        let sel = RowSelectors::compile()?;

        let transactions = document
            .select(&rows)
            .enumerate()
            .map(|(index, row)| {
                self.row(row, &sel).inspect_err(|e| {
                    debug!(account = %self.account.id, row = index, error = %e, "row did not parse")
                })
            })
            .collect::<SaveyResult<Vec<_>>>()?;

        debug!(
            account = %self.account.id,
            count = transactions.len(),
            "extracted transactions"
        );
        Ok(transactions)
    }
}
