//! Account extraction from the manage page

use scraper::Html;

use super::{Extractor, ManageLayout};
use crate::error::SaveyResult;
use crate::models::{Account, AccountId};

const ACCOUNTS: ManageLayout = ManageLayout {
    entity: "Account",
    blocks: ".setup-accounts .section.group:not(.setup-heading)",
};

/// Extracts accounts from the manage page
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountExtractor;

impl Extractor for AccountExtractor {
    type Item = Account;

    fn extract(&self, document: &Html) -> SaveyResult<Vec<Account>> {
        Ok(ACCOUNTS
            .rows(document)?
            .into_iter()
            .map(|row| Account::new(AccountId::new(row.id), row.title, row.label))
            .collect())
    }
}
