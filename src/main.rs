use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;

use expense_tracker::cli::{run_menu, Prompter};
use expense_tracker::config::ExpensePaths;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Menu-driven personal expense tracker",
    long_about = "Expense Tracker keeps a ledger of personal expenses in \
                  expenses.csv in the current directory. Run it without \
                  arguments to open the interactive menu."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    let paths = ExpensePaths::new();
    let storage = Storage::new(paths)
        .with_context(|| "Cannot open or create the expense data file")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let clear_screen = stdout.is_tty();

    let mut prompter = Prompter::new(stdin.lock(), stdout.lock()).with_clear_screen(clear_screen);
    run_menu(&storage, &mut prompter)?;

    Ok(())
}
