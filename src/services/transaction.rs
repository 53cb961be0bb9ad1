//! Transaction service
//!
//! The dashboard only ever shows the session's current account, so reading
//! an account's transactions is a two-step navigation: switch, then fetch.
//! Both steps go through the same cookie jar and nothing may switch in
//! between, which is why the service holds the client mutably and walks
//! accounts strictly one after another.

use tracing::info;

use crate::error::SaveyResult;
use crate::extract::{Extractor, TransactionExtractor};
use crate::models::{Account, Transaction};
use crate::session::client::DASHBOARD_PATH;
use crate::session::{Client, HttpTransport, Transport};

/// Service for transaction listing
pub struct TransactionService<'a, T: Transport = HttpTransport> {
    client: &'a mut Client<T>,
}

impl<'a, T: Transport> TransactionService<'a, T> {
    /// Create a new transaction service
    pub fn new(client: &'a mut Client<T>) -> Self {
        Self { client }
    }

    /// List the transactions of one account
    pub fn list_for_account(&mut self, account: &Account) -> SaveyResult<Vec<Transaction>> {
        self.client.switch_account(account.id)?;
        let page = self.client.fetch(DASHBOARD_PATH)?;
        TransactionExtractor::new(account).extract(&page.document())
    }

    /// List the transactions of every account, in the given order
    ///
    /// The first failing account aborts the batch; transactions already
    /// read for earlier accounts are discarded with it.
    pub fn list_for_accounts(&mut self, accounts: &[Account]) -> SaveyResult<Vec<Transaction>> {
        let mut transactions = Vec::new();

        for (index, account) in accounts.iter().enumerate() {
            info!(
                account = %account.id,
                title = %account.title,
                position = index + 1,
                total = accounts.len(),
                "fetching transactions"
            );
            transactions.extend(self.list_for_account(account)?);
        }

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaveyError;
    use crate::extract::fixtures::DASHBOARD;
    use crate::models::AccountId;
    use crate::session::testing::{client_with, dashboard, ScriptedTransport, BASE};

    fn accounts() -> Vec<Account> {
        vec![
            Account::new(AccountId::new(1024), "Cash Wallet", "EUR"),
            Account::new(AccountId::new(2048), "Main Checking", "USD"),
        ]
    }

    #[test]
    fn test_switch_then_fetch() {
        let transport = ScriptedTransport::new()
            .respond(&dashboard(), "")
            .respond(&dashboard(), DASHBOARD);
        let mut client = client_with(transport);
        let account = accounts().remove(0);

        let transactions = TransactionService::new(&mut client)
            .list_for_account(&account)
            .unwrap();

        assert_eq!(transactions.len(), 3);
        assert_eq!(
            client.transport().request_paths(),
            vec!["/set-account/1024", "/dashboard/"]
        );
    }

    #[test]
    fn test_failed_switch_skips_fetch() {
        let transport = ScriptedTransport::new().respond(BASE, "");
        let mut client = client_with(transport);
        let account = accounts().remove(0);

        let err = TransactionService::new(&mut client)
            .list_for_account(&account)
            .unwrap_err();

        assert!(matches!(err, SaveyError::AccountSwitchFailed { .. }));
        assert_eq!(
            client.transport().request_paths(),
            vec!["/set-account/1024"]
        );
    }

    #[test]
    fn test_accounts_are_walked_in_order() {
        let transport = ScriptedTransport::new()
            .respond(&dashboard(), "")
            .respond(&dashboard(), DASHBOARD)
            .respond(&dashboard(), "")
            .respond(&dashboard(), DASHBOARD);
        let mut client = client_with(transport);
        let accounts = accounts();

        let transactions = TransactionService::new(&mut client)
            .list_for_accounts(&accounts)
            .unwrap();

        assert_eq!(transactions.len(), 6);
        assert!(transactions[..3].iter().all(|t| t.currency == "EUR"));
        assert!(transactions[3..].iter().all(|t| t.currency == "USD"));
        assert_eq!(
            client.transport().request_paths(),
            vec![
                "/set-account/1024",
                "/dashboard/",
                "/set-account/2048",
                "/dashboard/"
            ]
        );
    }

    #[test]
    fn test_second_switch_failure_discards_first_account() {
        let transport = ScriptedTransport::new()
            .respond(&dashboard(), "")
            .respond(&dashboard(), DASHBOARD)
            .respond(&format!("{}user/login", BASE), "");
        let mut client = client_with(transport);
        let accounts = accounts();

        let result = TransactionService::new(&mut client).list_for_accounts(&accounts);

        match result {
            Err(SaveyError::AccountSwitchFailed { account_id, .. }) => {
                assert_eq!(account_id, AccountId::new(2048));
            }
            other => panic!("expected switch failure, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_account_list() {
        let mut client = client_with(ScriptedTransport::new());
        let transactions = TransactionService::new(&mut client)
            .list_for_accounts(&[])
            .unwrap();

        assert!(transactions.is_empty());
        assert!(client.transport().requests().is_empty());
    }
}
