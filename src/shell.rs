//! Interactive menu shell
//!
//! The stdin/stdout menu loop. Generic over the input and output channels so
//! tests can drive it with in-memory buffers. Nothing here is fatal to the
//! process: field errors re-prompt, import line errors skip, and a file-open
//! failure aborts only the import operation. The loop ends on option 4 or
//! end of input.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::info;

use crate::error::LedgerResult;
use crate::reports::MonthlySummary;
use crate::services::{EntryFlow, ImportService};
use crate::session::Session;

/// The interactive menu loop
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over the given channels
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu loop until exit or end of input
    pub fn run(&mut self, session: &mut Session) -> LedgerResult<()> {
        loop {
            self.render_menu()?;
            let choice = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            match choice.as_str() {
                "1" => self.add_transaction(session)?,
                "2" => self.load_from_file(session)?,
                "3" => self.show_summary(session)?,
                "4" => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option.")?,
            }
        }
        info!(transactions = session.len(), "shell session ended");
        Ok(())
    }

    fn render_menu(&mut self) -> LedgerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "1. Add Transaction")?;
        writeln!(self.output, "2. Load from File")?;
        writeln!(self.output, "3. View Monthly Summary")?;
        writeln!(self.output, "4. Exit")?;
        write!(self.output, "Choose: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one trimmed line; `None` means end of input
    fn read_line(&mut self) -> LedgerResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Drive the entry state machine to completion, re-prompting each field
    /// until it validates, then append the record
    fn add_transaction(&mut self, session: &mut Session) -> LedgerResult<()> {
        let transaction = {
            let mut flow = EntryFlow::new(session.catalog());
            while !flow.is_committed() {
                write!(self.output, "{}", flow.prompt())?;
                self.output.flush()?;
                let line = match self.read_line()? {
                    Some(line) => line,
                    // input exhausted mid-entry: nothing is appended
                    None => return Ok(()),
                };
                if let Err(e) = flow.advance(&line) {
                    writeln!(self.output, "{}", e)?;
                }
            }
            flow.finish()
        };

        if let Some(transaction) = transaction {
            session.append(transaction);
            writeln!(self.output, "Transaction added successfully!")?;
        }
        Ok(())
    }

    fn load_from_file(&mut self, session: &mut Session) -> LedgerResult<()> {
        write!(self.output, "Enter file path: ")?;
        self.output.flush()?;
        let path = match self.read_line()? {
            Some(line) => line,
            None => return Ok(()),
        };

        match ImportService::new(session).import_file(Path::new(&path)) {
            Ok(outcome) => {
                for skip in &outcome.skipped {
                    writeln!(self.output, "Skipping invalid entry: {}", skip.raw)?;
                }
                writeln!(
                    self.output,
                    "File loaded successfully. {} added, {} skipped.",
                    outcome.imported,
                    outcome.skipped.len()
                )?;
            }
            // a file-open failure aborts the import only, not the shell
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn show_summary(&mut self, session: &Session) -> LedgerResult<()> {
        let summary = MonthlySummary::generate(session.transactions());
        write!(self.output, "{}", summary.render())?;
        Ok(())
    }
}
