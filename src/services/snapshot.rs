//! Snapshot service
//!
//! Captures everything the site shows in one pass: the manage page is
//! fetched once and both lists are extracted from it, then each account's
//! transactions are read in turn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::TransactionService;
use crate::error::SaveyResult;
use crate::extract::{AccountExtractor, CategoryExtractor, Extractor};
use crate::models::{Account, AccountId, Category, CategoryId, Transaction};
use crate::session::client::MANAGE_PATH;
use crate::session::{Client, HttpTransport, Transport};

/// Everything scraped in one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the capture finished
    pub captured_at: DateTime<Utc>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
}

impl Snapshot {
    /// Look up an account title by id
    pub fn account_title(&self, id: AccountId) -> Option<&str> {
        self.accounts
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.title.as_str())
    }

    /// Look up a category title by id
    pub fn category_title(&self, id: CategoryId) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.title.as_str())
    }
}

/// Service for capturing a full snapshot
pub struct SnapshotService<'a, T: Transport = HttpTransport> {
    client: &'a mut Client<T>,
}

impl<'a, T: Transport> SnapshotService<'a, T> {
    /// Create a new snapshot service
    pub fn new(client: &'a mut Client<T>) -> Self {
        Self { client }
    }

    /// Capture accounts, categories and transactions
    ///
    /// With `only` set, transactions are read for those accounts alone; the
    /// account and category lists are always complete.
    pub fn capture(&mut self, only: Option<&[AccountId]>) -> SaveyResult<Snapshot> {
        let page = self.client.fetch(MANAGE_PATH)?;
        let document = page.document();
        let accounts = AccountExtractor.extract(&document)?;
        let categories = CategoryExtractor.extract(&document)?;

        let selected: Vec<Account> = match only {
            Some(ids) => accounts
                .iter()
                .filter(|a| ids.contains(&a.id))
                .cloned()
                .collect(),
            None => accounts.clone(),
        };

        let transactions = TransactionService::new(&mut *self.client).list_for_accounts(&selected)?;

        info!(
            accounts = accounts.len(),
            categories = categories.len(),
            transactions = transactions.len(),
            "captured snapshot"
        );

        Ok(Snapshot {
            captured_at: Utc::now(),
            accounts,
            categories,
            transactions,
        })
    }
}
