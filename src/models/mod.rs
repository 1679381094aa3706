//! Core data models for the ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: transaction kinds, monetary amounts, month keys, and the
//! transaction record itself.

pub mod kind;
pub mod money;
pub mod month;
pub mod transaction;

pub use kind::TransactionKind;
pub use money::Money;
pub use month::MonthKey;
pub use transaction::Transaction;
