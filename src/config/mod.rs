//! Configuration for the ledger
//!
//! Holds the category catalog: the closed, ordered set of categories allowed
//! for each transaction kind. The catalog is immutable data supplied at
//! startup and flows down by reference; there are no configuration files or
//! environment variables.

use serde::{Deserialize, Serialize};

use crate::models::TransactionKind;

/// The allowed categories per transaction kind
///
/// Lists are ordered because interactive entry presents them numbered from 1
/// and accepts the position as the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    income: Vec<String>,
    expense: Vec<String>,
}

impl CategoryCatalog {
    /// Build a catalog from explicit category lists
    pub fn new(
        income: impl IntoIterator<Item = impl Into<String>>,
        expense: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            income: income.into_iter().map(Into::into).collect(),
            expense: expense.into_iter().map(Into::into).collect(),
        }
    }

    /// The ordered category list for a kind
    pub fn categories(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    /// Look up a category by its 1-based menu position
    pub fn select(&self, kind: TransactionKind, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.categories(kind).get(i))
            .map(String::as_str)
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::new(["Salary", "Business"], ["Food", "Rent", "Travel"])
    }
}
