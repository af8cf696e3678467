//! Interactive menu loop
//!
//! Shows the numbered menu, dispatches to the expense actions, waits for
//! ENTER after each one and clears the screen before showing the menu again.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::ExpenseResult;
use crate::storage::Storage;

use super::expense::{
    handle_add, handle_category_totals, handle_delete, handle_edit, handle_list, handle_monthly,
    handle_search,
};
use super::prompt::Prompter;
use super::Flow;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    MonthlySummary,
    CategoryTotals,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Entries in the order they are shown
    pub fn all() -> &'static [MenuChoice] {
        &[
            Self::Add,
            Self::List,
            Self::Search,
            Self::MonthlySummary,
            Self::CategoryTotals,
            Self::Edit,
            Self::Delete,
            Self::Exit,
        ]
    }

    /// Number typed to pick this entry
    pub fn number(&self) -> u8 {
        match self {
            Self::Add => 1,
            Self::List => 2,
            Self::Search => 3,
            Self::MonthlySummary => 4,
            Self::CategoryTotals => 5,
            Self::Edit => 6,
            Self::Delete => 7,
            Self::Exit => 0,
        }
    }

    /// Parse a typed choice; `None` for anything outside 0-7
    pub fn parse(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::all().iter().copied().find(|c| c.number() == number)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add Expense"),
            Self::List => write!(f, "List All Expenses"),
            Self::Search => write!(f, "Search (category/note)"),
            Self::MonthlySummary => write!(f, "Monthly Summary (YYYY-MM)"),
            Self::CategoryTotals => write!(f, "Category Totals"),
            Self::Edit => write!(f, "Edit Expense by ID"),
            Self::Delete => write!(f, "Delete Expense by ID"),
            Self::Exit => write!(f, "Exit"),
        }
    }
}

/// Render the main menu
pub fn format_menu() -> String {
    let mut output = String::from("\n=========== Expense Tracker ===========\n");
    for choice in MenuChoice::all() {
        output.push_str(&format!("{}) {}\n", choice.number(), choice));
    }
    output.push_str("======================================\n");
    output
}

fn farewell<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> ExpenseResult<()> {
    prompter.say("Goodbye!")
}

/// Run the menu until the user exits or input ends
///
/// A failed operation is reported and the session carries on.
pub fn run_menu<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<()> {
    loop {
        prompter.print(&format_menu())?;
        let answer = prompter.prompt("Choose an option: ")?;
        prompter.say("")?;

        let Some(answer) = answer else {
            return farewell(prompter);
        };

        let result = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Exit) => return farewell(prompter),
            Some(MenuChoice::Add) => handle_add(storage, prompter),
            Some(MenuChoice::List) => handle_list(storage, prompter),
            Some(MenuChoice::Search) => handle_search(storage, prompter),
            Some(MenuChoice::MonthlySummary) => handle_monthly(storage, prompter),
            Some(MenuChoice::CategoryTotals) => handle_category_totals(storage, prompter),
            Some(MenuChoice::Edit) => handle_edit(storage, prompter),
            Some(MenuChoice::Delete) => handle_delete(storage, prompter),
            None => {
                prompter.say("Invalid choice.")?;
                Ok(Flow::Continue)
            }
        };

        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(e) => {
                warn!(error = %e, "operation failed");
                prompter.say(&format!("Error: {}", e))?;
            }
        }

        if !prompter.pause()? {
            return Ok(());
        }
        prompter.clear()?;
    }
}
