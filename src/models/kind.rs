//! Transaction kind
//!
//! The income/expense classification of a transaction. Interactive entry
//! parses it strictly; bulk import classifies it leniently, with anything
//! that is not the INCOME marker counting as an expense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// The income/expense classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The canonical uppercase marker for this kind
    pub const fn marker(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// Lenient classification used by bulk import.
    ///
    /// Only the exact INCOME marker (case-insensitive, trimmed) routes to
    /// `Income`; every other value, including malformed markers, classifies
    /// as `Expense`. This keeps aggregation a closed two-way match.
    pub fn classify(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("INCOME") {
            Self::Income
        } else {
            Self::Expense
        }
    }

    /// Check if this is the income kind
    pub const fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    /// Strict parse used by interactive entry: case-insensitive match against
    /// INCOME/EXPENSE, anything else is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("INCOME") {
            Ok(Self::Income)
        } else if s.eq_ignore_ascii_case("EXPENSE") {
            Ok(Self::Expense)
        } else {
            Err(LedgerError::InvalidKind)
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        assert_eq!(
            "INCOME".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            "expense".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(
            "  Income  ".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert!(matches!(
            "REVENUE".parse::<TransactionKind>(),
            Err(LedgerError::InvalidKind)
        ));
        assert!("".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_classify_income_marker_only() {
        assert_eq!(TransactionKind::classify("INCOME"), TransactionKind::Income);
        assert_eq!(TransactionKind::classify("income"), TransactionKind::Income);
        assert_eq!(
            TransactionKind::classify(" Income "),
            TransactionKind::Income
        );
    }

    #[test]
    fn test_classify_everything_else_is_expense() {
        assert_eq!(
            TransactionKind::classify("EXPENSE"),
            TransactionKind::Expense
        );
        assert_eq!(
            TransactionKind::classify("REVENUE"),
            TransactionKind::Expense
        );
        assert_eq!(TransactionKind::classify(""), TransactionKind::Expense);
        assert_eq!(TransactionKind::classify("INCOME!"), TransactionKind::Expense);
    }

    #[test]
    fn test_display() {
        assert_eq!(TransactionKind::Income.to_string(), "INCOME");
        assert_eq!(TransactionKind::Expense.to_string(), "EXPENSE");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TransactionKind::Income).unwrap();
        assert_eq!(json, "\"INCOME\"");
        let back: TransactionKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TransactionKind::Income);
    }
}
