//! Transaction display formatting
//!
//! Register-style listing, one block per account.

use crate::models::{Account, Money, Transaction};

/// Format transactions as a register, grouped under each account
pub fn format_transaction_list(accounts: &[Account], transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();

    for account in accounts {
        let rows: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.account_id == account.id)
            .collect();
        if rows.is_empty() {
            continue;
        }

        output.push_str(&format!("Account: {} [{}]\n", account, account.id));
        output.push_str(&format!(
            "{:10} {:30} {:>8} {:>12}\n",
            "Date", "Title", "Category", "Amount"
        ));
        output.push_str(&"-".repeat(63));
        output.push('\n');

        for txn in &rows {
            output.push_str(&format!(
                "{:10} {:30} {:>8} {:>12}\n",
                txn.date.format("%Y-%m-%d").to_string(),
                truncate(&txn.title, 30),
                txn.category_id,
                txn.value,
            ));
        }

        let total: Money = rows.iter().map(|t| t.value).sum();
        output.push_str(&format!(
            "{:>63}\n\n",
            format!("Net: {} {}", total, account.currency)
        ));
    }

    output
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    } else {
        s.chars().take(max_len).collect()
    }
}
