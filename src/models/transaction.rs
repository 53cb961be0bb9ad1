//! Transaction model
//!
//! A single row of an account's transaction list. The account id and
//! currency are not part of the row markup; they come from the account the
//! list was fetched for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::Money;

/// A payment transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Site-assigned identifier
    pub id: TransactionId,

    /// Transaction title
    pub title: String,

    /// Booking date
    pub date: NaiveDate,

    /// Category this transaction is filed under
    pub category_id: CategoryId,

    /// Account the list was fetched for
    pub account_id: AccountId,

    /// Signed amount (negative for outflow)
    pub value: Money,

    /// Currency of the owning account
    pub currency: String,

    /// True when `value` is negative
    pub expense: bool,
}

impl Transaction {
    /// Build a transaction for `account`, stamping its id and currency
    ///
    /// `expense` is always derived from the sign of `value`.
    pub fn for_account(
        account: &Account,
        id: TransactionId,
        title: impl Into<String>,
        date: NaiveDate,
        category_id: CategoryId,
        value: Money,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            category_id,
            account_id: account.id,
            value,
            currency: account.currency.clone(),
            expense: value.is_negative(),
        }
    }

    /// Check if this is income (non-negative amount)
    pub fn is_income(&self) -> bool {
        !self.expense
    }
}
