//! Service layer for the ledger
//!
//! Business logic on top of the session state: the interactive entry state
//! machine and the bulk file importer. Both feed validated records into the
//! append-only transaction collection.

pub mod entry;
pub mod import;

pub use entry::{EntryFlow, EntryState};
pub use import::{ImportOutcome, ImportService, SkipReason, SkippedLine};
