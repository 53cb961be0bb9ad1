//! Account service
//!
//! Lists the accounts of the logged-in user from the manage page.

use tracing::info;

use crate::error::{SaveyError, SaveyResult};
use crate::extract::{AccountExtractor, Extractor};
use crate::models::{Account, AccountId};
use crate::session::client::MANAGE_PATH;
use crate::session::{Client, HttpTransport, Transport};

/// Service for account listing
pub struct AccountService<'a, T: Transport = HttpTransport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> AccountService<'a, T> {
    /// Create a new account service
    pub fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Get all accounts, in page order
    pub fn list(&self) -> SaveyResult<Vec<Account>> {
        let page = self.client.fetch(MANAGE_PATH)?;
        let accounts = AccountExtractor.extract(&page.document())?;
        info!(count = accounts.len(), "listed accounts");
        Ok(accounts)
    }

    /// Get one account by ID
    pub fn find(&self, id: AccountId) -> SaveyResult<Account> {
        self.list()?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| SaveyError::account_not_found(id.to_string()))
    }
}
