//! Primitive text-to-value parsers
//!
//! Field-level conversions shared by the extractors. Nothing here touches
//! the network or the document tree.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{SaveyError, SaveyResult};

/// Layout of dates on the site, e.g. "January 2, 2006"
pub const DATE_FORMAT: &str = "%B %d, %Y";

fn digit_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("digit run regex"))
}

/// Parse the first run of decimal digits in `text` as an identifier
///
/// Identifiers are embedded in event-handler attributes such as
/// `editAccount(42, 'x')`, so this is "first number found" rather than a
/// structured parse. Pass the smallest fragment that holds the id.
pub fn parse_id(text: &str) -> SaveyResult<i64> {
    let cleaned = clean_text(text);
    let digits = digit_run()
        .find(cleaned)
        .ok_or_else(|| SaveyError::MalformedIdentifier(cleaned.to_string()))?;

    digits
        .as_str()
        .parse::<i64>()
        .map_err(|_| SaveyError::MalformedIdentifier(cleaned.to_string()))
}

/// Parse a "Month Day, Year" date such as "January 2, 2006"
pub fn parse_date(text: &str) -> SaveyResult<NaiveDate> {
    let invalid = || SaveyError::InvalidDateFormat(text.to_string());

    // chrono accepts abbreviated month names for %B; the site only renders
    // full names, so anything shorter is a layout change.
    let month = text.split_whitespace().next().ok_or_else(invalid)?;
    let year = text.rsplit(' ').next().ok_or_else(invalid)?;
    if year.len() != 4 {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())?;
    if !date.format("%B").to_string().eq_ignore_ascii_case(month) {
        return Err(invalid());
    }

    Ok(date)
}

/// Strip leading and trailing whitespace
pub fn clean_text(text: &str) -> &str {
    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_from_handler() {
        assert_eq!(parse_id("editAccount(42, 'x')").unwrap(), 42);
        assert_eq!(parse_id("  7  ").unwrap(), 7);
        assert_eq!(parse_id("/transactions/category/15?page=2").unwrap(), 15);
    }

    #[test]
    fn test_parse_id_takes_first_run() {
        assert_eq!(parse_id("edit(12, 34)").unwrap(), 12);
        assert_eq!(parse_id("a007b8").unwrap(), 7);
    }

    #[test]
    fn test_parse_id_without_digits() {
        let err = parse_id("editAccount('x')").unwrap_err();
        assert!(matches!(err, SaveyError::MalformedIdentifier(_)));
        assert!(matches!(
            parse_id("   ").unwrap_err(),
            SaveyError::MalformedIdentifier(_)
        ));
    }

    #[test]
    fn test_parse_id_overflow() {
        let err = parse_id("edit(99999999999999999999)").unwrap_err();
        assert!(matches!(err, SaveyError::MalformedIdentifier(_)));
    }

    #[test]
    fn test_parse_date_reference_layout() {
        assert_eq!(
            parse_date("January 2, 2006").unwrap(),
            NaiveDate::from_ymd_opt(2006, 1, 2).unwrap()
        );
        assert_eq!(
            parse_date("December 31, 2015").unwrap(),
            NaiveDate::from_ymd_opt(2015, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_other_layouts() {
        for text in [
            "2006-01-02",
            "Jan 2, 2006",
            "January 2 2006",
            "January 2, 06",
            "January 32, 2006",
            "Smarch 2, 2006",
            "",
        ] {
            let err = parse_date(text).unwrap_err();
            assert!(
                matches!(err, SaveyError::InvalidDateFormat(_)),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("\n   Cash  Wallet \t"), "Cash  Wallet");
        assert_eq!(clean_text(""), "");
    }
}
