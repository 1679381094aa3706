//! Transaction model
//!
//! A single income or expense record. Transactions are immutable once
//! constructed; the session only appends them and the reporter only reads
//! them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::TransactionKind;
use super::money::Money;
use super::month::MonthKey;

/// An immutable income or expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Income/expense classification
    pub kind: TransactionKind,

    /// Sub-classification. Interactive entry draws it from the category
    /// catalog; bulk import stores the trimmed literal from the file.
    pub category: String,

    /// Transaction amount. Interactive entry guarantees it is positive;
    /// imported records may carry any parsed value.
    pub amount: Money,

    /// Calendar date, no time component
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            date,
        }
    }

    /// Derive the `YYYY-MM` grouping key for reporting
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Check if this transaction counts toward the income bucket
    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}
