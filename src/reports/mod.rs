//! Reports module for the ledger
//!
//! Currently one report: the monthly income/expense/savings summary.

pub mod monthly;

pub use monthly::{MonthlySummary, MonthlyTotals};
