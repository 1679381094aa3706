//! Month key
//!
//! The `(year, month)` grouping key derived from a transaction date. It is
//! computed on demand for reporting and never stored. `Ord` is chronological,
//! which matches the lexicographic order of the zero-padded `YYYY-MM`
//! rendering.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// A `(year, month)` pair used to group transactions for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key. `month` is 1-based.
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Derive the month key from a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based calendar month
    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
