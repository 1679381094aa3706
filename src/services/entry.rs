//! Interactive entry flow
//!
//! A state machine for entering one transaction field by field:
//! `AwaitKind -> AwaitCategory -> AwaitAmount -> AwaitDate -> Committed`.
//! Each state re-prompts indefinitely on invalid input and only advances on
//! success; once entry has started the only exit is completing all four
//! fields. The machine is independent of the input/output channel, so the
//! shell drives it against stdin and tests drive it with scripted strings.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::config::CategoryCatalog;
use crate::error::LedgerResult;
use crate::models::{Money, Transaction, TransactionKind};
use crate::validate;

/// The field currently awaited by an entry flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    AwaitKind,
    AwaitCategory,
    AwaitAmount,
    AwaitDate,
    Committed,
}

/// One pending transaction entry
#[derive(Debug)]
pub struct EntryFlow<'a> {
    catalog: &'a CategoryCatalog,
    state: EntryState,
    kind: Option<TransactionKind>,
    category: Option<String>,
    amount: Option<Money>,
    date: Option<NaiveDate>,
}

impl<'a> EntryFlow<'a> {
    /// Start a new entry against the given catalog
    pub fn new(catalog: &'a CategoryCatalog) -> Self {
        Self {
            catalog,
            state: EntryState::AwaitKind,
            kind: None,
            category: None,
            amount: None,
            date: None,
        }
    }

    /// The current state
    pub fn state(&self) -> EntryState {
        self.state
    }

    /// Check whether all four fields have been accepted
    pub fn is_committed(&self) -> bool {
        self.state == EntryState::Committed
    }

    /// The prompt text for the current state.
    ///
    /// `AwaitCategory` lists the allowed categories for the chosen kind,
    /// numbered from 1.
    pub fn prompt(&self) -> String {
        match self.state {
            EntryState::AwaitKind => "Enter type (INCOME/EXPENSE): ".to_string(),
            EntryState::AwaitCategory => {
                let kind = self.kind.unwrap_or(TransactionKind::Expense);
                let categories = self.catalog.categories(kind);
                let mut text = format!("Choose category for {}:\n", kind);
                for (i, name) in categories.iter().enumerate() {
                    let _ = writeln!(text, "{}. {}", i + 1, name);
                }
                let _ = write!(text, "Select option (1-{}): ", categories.len());
                text
            }
            EntryState::AwaitAmount => "Enter amount: ".to_string(),
            EntryState::AwaitDate => "Enter date (yyyy-MM-dd): ".to_string(),
            EntryState::Committed => String::new(),
        }
    }

    /// Feed one line of input to the machine.
    ///
    /// On success the machine advances and the new state is returned; on
    /// failure the state is unchanged and the validation error carries the
    /// message to show before re-prompting.
    pub fn advance(&mut self, raw: &str) -> LedgerResult<EntryState> {
        match self.state {
            EntryState::AwaitKind => {
                self.kind = Some(validate::parse_kind(raw)?);
                self.state = EntryState::AwaitCategory;
            }
            EntryState::AwaitCategory => {
                let kind = self.kind.unwrap_or(TransactionKind::Expense);
                self.category = Some(validate::parse_category_choice(self.catalog, kind, raw)?);
                self.state = EntryState::AwaitAmount;
            }
            EntryState::AwaitAmount => {
                self.amount = Some(validate::parse_amount(raw)?);
                self.state = EntryState::AwaitDate;
            }
            EntryState::AwaitDate => {
                self.date = Some(validate::parse_date(raw)?);
                self.state = EntryState::Committed;
            }
            EntryState::Committed => {}
        }
        Ok(self.state)
    }

    /// Consume a committed flow and yield its transaction.
    ///
    /// Returns `None` if any field is still pending.
    pub fn finish(self) -> Option<Transaction> {
        match (self.kind, self.category, self.amount, self.date) {
            (Some(kind), Some(category), Some(amount), Some(date)) => {
                Some(Transaction::new(kind, category, amount, date))
            }
            _ => None,
        }
    }
}
