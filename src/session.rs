//! Session state
//!
//! The explicit session object that owns the category catalog and the
//! transaction collection for one process run. The collection is append-only:
//! records are never mutated or removed, and nothing persists across runs.
//! Insertion order is preserved even though reporting re-groups by month.

use tracing::debug;

use crate::config::CategoryCatalog;
use crate::models::Transaction;

/// One process run's worth of ledger state
#[derive(Debug, Default)]
pub struct Session {
    catalog: CategoryCatalog,
    transactions: Vec<Transaction>,
}

impl Session {
    /// Create a session with the given category catalog
    pub fn new(catalog: CategoryCatalog) -> Self {
        Self {
            catalog,
            transactions: Vec::new(),
        }
    }

    /// The category catalog supplied at startup
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Append a validated transaction
    pub fn append(&mut self, transaction: Transaction) {
        debug!(%transaction, "appending transaction");
        self.transactions.push(transaction);
    }

    /// The full transaction collection, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if no transactions have been recorded
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
