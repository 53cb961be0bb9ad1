//! Account display formatting

use crate::models::Account;

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let title_width = accounts
        .iter()
        .map(|a| a.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>10}  {:<title_width$}  {}\n",
        "ID",
        "Title",
        "Currency",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:->10}  {:-<title_width$}  {:-<8}\n",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:>10}  {:<title_width$}  {}\n",
            account.id,
            account.title,
            account.currency,
            title_width = title_width,
        ));
    }

    output.push_str(&format!("\n{} account(s)\n", accounts.len()));
    output
}
