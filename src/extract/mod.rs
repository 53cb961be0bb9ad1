//! Entity extractors
//!
//! Everything that knows the site's page layout lives here. Each extractor
//! turns a parsed document into a list of one entity type and is
//! all-or-nothing: the first block that does not match the expected
//! structure fails the whole list, and no partial list is returned.

pub mod account;
pub mod category;
pub mod transaction;

pub use account::AccountExtractor;
pub use category::CategoryExtractor;
pub use transaction::TransactionExtractor;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{SaveyError, SaveyResult};
use crate::parse::{clean_text, parse_id};

/// Extract a list of entities from a rendered page
pub trait Extractor {
    type Item;

    fn extract(&self, document: &Html) -> SaveyResult<Vec<Self::Item>>;

    /// Parse `html` and extract from it
    fn extract_html(&self, html: &str) -> SaveyResult<Vec<Self::Item>> {
        self.extract(&Html::parse_document(html))
    }
}

/// Compile a CSS selector
pub(crate) fn selector(css: &str) -> SaveyResult<Selector> {
    Selector::parse(css).map_err(|e| SaveyError::Selector(format!("{}: {:?}", css, e)))
}

/// Concatenated text of every element under `scope` matching `sel`
pub(crate) fn joined_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope
        .select(sel)
        .flat_map(|el| el.text())
        .collect::<String>()
}

/// `attr` of the first element under `scope` matching `sel`
pub(crate) fn first_attr<'a>(
    scope: ElementRef<'a>,
    sel: &Selector,
    attr: &str,
) -> Option<&'a str> {
    scope.select(sel).next()?.value().attr(attr)
}

/// Selectors for one list on the manage page
///
/// Accounts and categories share a layout: a title column, a label column
/// (currency or kind) and an actions column whose first link carries the
/// identifier in its `onclick` handler.
pub(crate) struct ManageLayout {
    pub entity: &'static str,
    pub blocks: &'static str,
}

const TITLE_COLUMN: &str = ".col.span_6_of_12";
const LABEL_COLUMN: &str = ".col.span_2_of_12";
const ACTION_LINK: &str = ".col.span_3_of_12 a";

/// One parsed row of a manage-page list
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ManageRow {
    pub id: i64,
    pub title: String,
    pub label: String,
}

struct ManageSelectors {
    title: Selector,
    label: Selector,
    action: Selector,
}

impl ManageLayout {
    pub fn rows(&self, document: &Html) -> SaveyResult<Vec<ManageRow>> {
        let blocks = selector(self.blocks)?;
        let selectors = ManageSelectors {
            title: selector(TITLE_COLUMN)?,
            label: selector(LABEL_COLUMN)?,
            action: selector(ACTION_LINK)?,
        };

        let rows = document
            .select(&blocks)
            .enumerate()
            .map(|(index, block)| {
                self.row(block, &selectors).inspect_err(|e| {
                    debug!(entity = self.entity, row = index, error = %e, "row did not parse")
                })
            })
            .collect::<SaveyResult<Vec<_>>>()?;

        debug!(entity = self.entity, count = rows.len(), "extracted rows");
        Ok(rows)
    }

    fn row(&self, block: ElementRef<'_>, selectors: &ManageSelectors) -> SaveyResult<ManageRow> {
        let onclick = first_attr(block, &selectors.action, "onclick")
            .ok_or_else(|| SaveyError::missing_onclick(self.entity))?;

        Ok(ManageRow {
            id: parse_id(onclick)?,
            title: clean_text(&joined_text(block, &selectors.title)).to_string(),
            label: clean_text(&joined_text(block, &selectors.label)).to_string(),
        })
    }
}
