use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledger_cli::config::CategoryCatalog;
use ledger_cli::reports::MonthlySummary;
use ledger_cli::services::ImportService;
use ledger_cli::session::Session;
use ledger_cli::shell::Shell;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "A personal finance ledger that records income and expense \
                  transactions from an interactive menu or a comma-delimited \
                  file and reports monthly income, expense and savings totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default when no command is given)
    Shell,

    /// Import a delimited file and print its monthly summary
    Import {
        /// Path to the file (`type,category,amount,date` lines after a header)
        file: PathBuf,

        /// Print the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::new(CategoryCatalog::default());

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(stdin.lock(), stdout.lock()).run(&mut session)?;
        }
        Some(Commands::Import { file, json }) => {
            let outcome = ImportService::new(&mut session).import_file(&file)?;
            for skip in &outcome.skipped {
                eprintln!("Skipping invalid entry: {}", skip.raw);
            }

            let summary = MonthlySummary::generate(session.transactions());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", summary.render());
            }
        }
    }

    Ok(())
}
