//! Monthly summary report
//!
//! Groups the transaction collection by calendar month and sums income and
//! expense per month, with savings as the difference. Generation is a pure
//! function of the collection and can be re-run at any time.

use std::collections::BTreeMap;
use std::io::Write;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, MonthKey, Transaction};

/// Income, expense and savings totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    /// The grouping key
    pub month: MonthKey,
    /// Sum of income amounts in this month
    pub income: Money,
    /// Sum of expense amounts in this month
    pub expense: Money,
}

impl MonthlyTotals {
    /// Income minus expense
    pub fn savings(&self) -> Money {
        self.income - self.expense
    }
}

impl Serialize for MonthlyTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_struct("MonthlyTotals", 4)?;
        row.serialize_field("month", &self.month)?;
        row.serialize_field("income", &self.income)?;
        row.serialize_field("expense", &self.expense)?;
        row.serialize_field("savings", &self.savings())?;
        row.end()
    }
}

/// The complete monthly summary, months in chronological order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    months: Vec<MonthlyTotals>,
}

impl MonthlySummary {
    /// Generate the summary from the transaction collection.
    ///
    /// Pure: the input is not mutated and repeated calls over the same
    /// collection yield identical reports. Absent buckets default to zero.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut buckets: BTreeMap<MonthKey, (Money, Money)> = BTreeMap::new();

        for txn in transactions {
            let totals = buckets.entry(txn.month_key()).or_default();
            if txn.is_income() {
                totals.0 += txn.amount;
            } else {
                totals.1 += txn.amount;
            }
        }

        let months = buckets
            .into_iter()
            .map(|(month, (income, expense))| MonthlyTotals {
                month,
                income,
                expense,
            })
            .collect();

        Self { months }
    }

    /// Per-month totals in chronological order
    pub fn months(&self) -> &[MonthlyTotals] {
        &self.months
    }

    /// Check if the summary covers no months
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format the report for terminal display.
    ///
    /// An empty collection renders the single no-transactions message; this
    /// is a normal report, not an error.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "No transactions to summarize.\n".to_string();
        }

        let mut output = String::new();
        for totals in &self.months {
            output.push_str(&format!("\nSummary for {}\n", totals.month));
            output.push_str(&format!(
                "  Total Income : {}\n",
                totals.income.format_plain()
            ));
            output.push_str(&format!(
                "  Total Expense: {}\n",
                totals.expense.format_plain()
            ));
            output.push_str(&format!(
                "  Savings      : {}\n",
                totals.savings().format_plain()
            ));
        }
        output
    }

    /// Export the report as `month,income,expense,savings` rows
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(["month", "income", "expense", "savings"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        for totals in &self.months {
            csv_writer
                .write_record([
                    totals.month.to_string(),
                    totals.income.format_plain(),
                    totals.expense.format_plain(),
                    totals.savings().format_plain(),
                ])
                .map_err(|e| LedgerError::Export(e.to_string()))?;
        }
        csv_writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        Ok(())
    }
}
