//! Bulk file import
//!
//! Ingests comma-delimited files of `type,category,amount,date` lines. The
//! first line is always discarded as a header. Malformed lines are skipped
//! and reported without aborting the batch; only failure to open the file
//! aborts the whole operation, with zero records appended.
//!
//! The import path is deliberately laxer than interactive entry: kind and
//! category are taken as trimmed literals with no membership check, and
//! amount positivity is not re-checked. Only the amount and date must parse.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::session::Session;
use crate::validate;

/// Why a line was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The line did not split into exactly 4 fields
    FieldCount(usize),
    /// Field 3 did not parse as a decimal amount
    BadAmount,
    /// Field 4 did not parse as a yyyy-MM-dd date
    BadDate,
    /// The underlying reader failed on this record
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(f, "expected 4 fields, found {}", n),
            Self::BadAmount => write!(f, "unparseable amount"),
            Self::BadDate => write!(f, "unparseable date"),
            Self::Unreadable => write!(f, "unreadable record"),
        }
    }
}

/// One rejected input line, echoed back so the operator can fix the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source file (the header is line 1)
    pub line_number: usize,
    /// The raw line content
    pub raw: String,
    /// Why it was rejected
    pub reason: SkipReason,
}

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Number of transactions appended to the session
    pub imported: usize,
    /// Lines that were rejected, in file order
    pub skipped: Vec<SkippedLine>,
}

/// Service for bulk file import
pub struct ImportService<'a> {
    session: &'a mut Session,
}

impl<'a> ImportService<'a> {
    /// Create an import service writing into the given session
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Import a delimited file.
    ///
    /// Failing to open the file is the only whole-operation error; nothing is
    /// appended in that case. Once the file is open, every line is either
    /// imported or skipped and the batch always runs to end of file.
    pub fn import_file(&mut self, path: &Path) -> LedgerResult<ImportOutcome> {
        let file = File::open(path)
            .map_err(|e| LedgerError::Io(format!("{}: {}", path.display(), e)))?;
        let outcome = self.import_reader(BufReader::new(file));
        info!(
            path = %path.display(),
            imported = outcome.imported,
            skipped = outcome.skipped.len(),
            "file import finished"
        );
        Ok(outcome)
    }

    /// Import from any reader.
    ///
    /// The reader is decoded as comma-delimited records with quoting disabled
    /// (the format supports no quoting or escaping) and the first line is
    /// discarded unconditionally as a header.
    pub fn import_reader<R: Read>(&mut self, reader: R) -> ImportOutcome {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut outcome = ImportOutcome::default();

        for (index, record) in csv_reader.records().enumerate() {
            // data starts on line 2, after the discarded header
            let line_number = index + 2;

            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    warn!(line_number, error = %e, "skipping unreadable record");
                    outcome.skipped.push(SkippedLine {
                        line_number,
                        raw: String::new(),
                        reason: SkipReason::Unreadable,
                    });
                    continue;
                }
            };

            let raw = record.iter().collect::<Vec<_>>().join(",");

            if record.len() != 4 {
                warn!(line_number, raw = %raw, "skipping line with wrong field count");
                outcome.skipped.push(SkippedLine {
                    line_number,
                    raw,
                    reason: SkipReason::FieldCount(record.len()),
                });
                continue;
            }

            // amount and date must parse; kind and category are taken as
            // trimmed literals without membership validation
            let amount = match Money::parse(&record[2]) {
                Some(amount) => amount,
                None => {
                    warn!(line_number, raw = %raw, "skipping line with bad amount");
                    outcome.skipped.push(SkippedLine {
                        line_number,
                        raw,
                        reason: SkipReason::BadAmount,
                    });
                    continue;
                }
            };

            let date = match validate::parse_date(&record[3]) {
                Ok(date) => date,
                Err(_) => {
                    warn!(line_number, raw = %raw, "skipping line with bad date");
                    outcome.skipped.push(SkippedLine {
                        line_number,
                        raw,
                        reason: SkipReason::BadDate,
                    });
                    continue;
                }
            };

            let kind = TransactionKind::classify(&record[0]);
            let category = record[1].trim().to_string();

            self.session
                .append(Transaction::new(kind, category, amount, date));
            outcome.imported += 1;
        }

        outcome
    }
}
