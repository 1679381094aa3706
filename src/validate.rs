//! Field validation
//!
//! The checks shared by interactive entry and bulk import. Each function is
//! idempotent and side-effect-free; the returned error's `Display` text is
//! the message shown to the user before re-prompting.
//!
//! The bulk import path deliberately uses only a subset of these checks: it
//! parses amount and date but takes kind and category as trimmed literals
//! (see `services::import`).

use chrono::NaiveDate;

use crate::config::CategoryCatalog;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TransactionKind};

/// The date pattern accepted everywhere: 4-digit year, 2-digit month and day
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Strict kind parse for interactive entry: INCOME or EXPENSE,
/// case-insensitive
pub fn parse_kind(raw: &str) -> LedgerResult<TransactionKind> {
    raw.parse()
}

/// Resolve a 1-based category selection against the catalog list for `kind`.
///
/// Non-numeric input and out-of-range positions fail with distinct messages.
pub fn parse_category_choice(
    catalog: &CategoryCatalog,
    kind: TransactionKind,
    raw: &str,
) -> LedgerResult<String> {
    let position: usize = raw
        .trim()
        .parse()
        .map_err(|_| LedgerError::CategoryNotNumeric)?;
    catalog
        .select(kind, position)
        .map(str::to_owned)
        .ok_or(LedgerError::CategoryOutOfRange)
}

/// Parse an amount for interactive entry: must be a decimal number and
/// strictly greater than zero
pub fn parse_amount(raw: &str) -> LedgerResult<Money> {
    let amount = Money::parse(raw).ok_or(LedgerError::InvalidAmount)?;
    if !amount.is_positive() {
        return Err(LedgerError::NonPositiveAmount);
    }
    Ok(amount)
}

/// Parse a `yyyy-MM-dd` date with full calendar validation.
///
/// The empty string is rejected with its own message, distinct from a
/// malformed or impossible date.
pub fn parse_date(raw: &str) -> LedgerResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LedgerError::EmptyDate);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| LedgerError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("income").unwrap(), TransactionKind::Income);
        assert_eq!(parse_kind("EXPENSE").unwrap(), TransactionKind::Expense);
        assert!(matches!(parse_kind("deposit"), Err(LedgerError::InvalidKind)));
    }

    #[test]
    fn test_parse_category_choice() {
        let catalog = CategoryCatalog::default();
        assert_eq!(
            parse_category_choice(&catalog, TransactionKind::Income, "1").unwrap(),
            "Salary"
        );
        assert_eq!(
            parse_category_choice(&catalog, TransactionKind::Expense, " 3 ").unwrap(),
            "Travel"
        );
    }

    #[test]
    fn test_parse_category_choice_errors() {
        let catalog = CategoryCatalog::default();
        assert!(matches!(
            parse_category_choice(&catalog, TransactionKind::Income, "abc"),
            Err(LedgerError::CategoryNotNumeric)
        ));
        assert!(matches!(
            parse_category_choice(&catalog, TransactionKind::Income, "0"),
            Err(LedgerError::CategoryOutOfRange)
        ));
        assert!(matches!(
            parse_category_choice(&catalog, TransactionKind::Income, "3"),
            Err(LedgerError::CategoryOutOfRange)
        ));
        assert!(matches!(
            parse_category_choice(&catalog, TransactionKind::Expense, "-1"),
            Err(LedgerError::CategoryNotNumeric)
        ));
    }

    #[test]
    fn test_parse_amount_boundaries() {
        assert_eq!(parse_amount("0.01").unwrap().cents(), 1);
        assert!(matches!(
            parse_amount("0"),
            Err(LedgerError::NonPositiveAmount)
        ));
        assert!(matches!(
            parse_amount("-5"),
            Err(LedgerError::NonPositiveAmount)
        ));
        assert!(matches!(
            parse_amount("abc"),
            Err(LedgerError::InvalidAmount)
        ));
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        // leap day on a leap year
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_parse_date_calendar_validation() {
        assert!(matches!(
            parse_date("2024-02-30"),
            Err(LedgerError::InvalidDate)
        ));
        assert!(matches!(
            parse_date("2023-02-29"),
            Err(LedgerError::InvalidDate)
        ));
        assert!(matches!(
            parse_date("2024-13-01"),
            Err(LedgerError::InvalidDate)
        ));
    }

    #[test]
    fn test_parse_date_empty_is_distinct() {
        assert!(matches!(parse_date(""), Err(LedgerError::EmptyDate)));
        assert!(matches!(parse_date("   "), Err(LedgerError::EmptyDate)));
        assert!(matches!(
            parse_date("15/01/2024"),
            Err(LedgerError::InvalidDate)
        ));
    }
}
