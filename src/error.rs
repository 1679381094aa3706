//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The `Display` text of each validation
//! variant doubles as the user-facing message printed before a re-prompt.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// File I/O errors (import file unreadable, stream failures)
    #[error("Error reading file: {0}")]
    Io(String),

    /// Transaction type was not INCOME or EXPENSE
    #[error("Invalid type. Please enter INCOME or EXPENSE.")]
    InvalidKind,

    /// Category selection was not a number
    #[error("Please enter a number.")]
    CategoryNotNumeric,

    /// Category selection was a number outside the listed range
    #[error("Invalid option. Try again.")]
    CategoryOutOfRange,

    /// Amount did not parse as a decimal number
    #[error("Invalid amount. Please enter a valid number.")]
    InvalidAmount,

    /// Amount parsed but was zero or negative
    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,

    /// Date input was empty
    #[error("Date cannot be empty.")]
    EmptyDate,

    /// Date input did not match yyyy-MM-dd or was not a real calendar date
    #[error("Invalid date format. Please use yyyy-MM-dd.")]
    InvalidDate,

    /// Import errors other than per-line skips
    #[error("Import error: {0}")]
    Import(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Check if this error is one of the per-field validation failures
    /// recovered by re-prompting
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Import(_) | Self::Export(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
