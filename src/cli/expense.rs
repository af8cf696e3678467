//! Expense menu actions
//!
//! One handler per menu entry. Each asks for its input through the
//! [`Prompter`], calls into the service or report layer and prints the
//! outcome. Handlers return [`Flow::Quit`] when input runs out mid-way.

use std::io::{BufRead, Write};

use crate::display::{format_category_totals, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{is_valid_date, ExpenseId, Money};
use crate::reports::{CategoryTotalsReport, MonthlyReport};
use crate::services::{ExpenseChanges, ExpenseService, NewExpense};
use crate::storage::Storage;

use super::prompt::Prompter;
use super::Flow;

/// Read a line or bail out of the handler at end of input
macro_rules! ask {
    ($prompter:expr, $message:expr) => {
        match $prompter.prompt($message)? {
            Some(answer) => answer,
            None => return Ok(Flow::Quit),
        }
    };
}

/// Menu 1: add a new expense
pub fn handle_add<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<Flow> {
    let date = loop {
        let date = ask!(prompter, "Enter date (YYYY-MM-DD): ");
        if is_valid_date(&date) {
            break date;
        }
        prompter.say("Invalid date format. Try again.")?;
    };
    let category = ask!(prompter, "Enter category (e.g., Food, Travel, Bills): ");
    let note = ask!(prompter, "Enter note (short description): ");
    let amount = ask!(prompter, "Enter amount: ");

    let expense = ExpenseService::new(storage).add(NewExpense {
        date,
        category,
        note,
        amount: Money::parse_lenient(&amount),
    })?;

    prompter.say(&format!("\n✅ Added expense with ID {}", expense.id))?;
    Ok(Flow::Continue)
}

/// Menu 2: list every expense
pub fn handle_list<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<Flow> {
    let listing = ExpenseService::new(storage).list()?;

    if listing.is_empty() {
        prompter.say("\nNo expenses found.")?;
    } else {
        prompter.print(&format_expense_table(
            &listing.expenses,
            "TOTAL",
            listing.total,
            "",
        ))?;
    }
    Ok(Flow::Continue)
}

/// Menu 3: keyword search in category and note
pub fn handle_search<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<Flow> {
    let keyword = ask!(prompter, "Search keyword (in category/note): ");
    let listing = ExpenseService::new(storage).search(&keyword)?;

    prompter.print(&format_expense_table(
        &listing.expenses,
        "SUBTOTAL (matches)",
        listing.total,
        "No matching records.",
    ))?;
    Ok(Flow::Continue)
}

/// Menu 4: monthly summary
pub fn handle_monthly<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<Flow> {
    let month = ask!(prompter, "Enter month (YYYY-MM): ");

    let report = match MonthlyReport::generate(&storage.expenses, &month) {
        Ok(report) => report,
        Err(e) if e.is_validation() => {
            prompter.say("Invalid month format.")?;
            return Ok(Flow::Continue);
        }
        Err(e) => return Err(e),
    };

    prompter.print(&format_expense_table(
        &report.expenses,
        "MONTH TOTAL",
        report.total,
        &format!("No expenses for {}.", report.month),
    ))?;
    Ok(Flow::Continue)
}

/// Menu 5: totals per category
pub fn handle_category_totals<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<Flow> {
    let report = CategoryTotalsReport::generate(&storage.expenses)?;

    if report.is_empty() {
        prompter.say("\nNo expenses found.")?;
    } else {
        prompter.print(&format_category_totals(&report))?;
    }
    Ok(Flow::Continue)
}

/// Menu 6: edit an expense field by field
pub fn handle_edit<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<Flow> {
    let id = ExpenseId::parse_lenient(&ask!(prompter, "Enter ID to edit: "));
    let service = ExpenseService::new(storage);

    if service.is_empty()? {
        prompter.say("No data.")?;
        return Ok(Flow::Continue);
    }
    let Some(current) = service.get(id)? else {
        prompter.say(&format!("ID {} not found.", id))?;
        return Ok(Flow::Continue);
    };

    prompter.say("Leave a field empty to keep current value.")?;

    let date = ask!(prompter, &format!("Date [{}] (YYYY-MM-DD): ", current.date));
    if !date.is_empty() && !is_valid_date(&date) {
        prompter.say("Invalid date. Edit cancelled.")?;
        return Ok(Flow::Continue);
    }
    let category = ask!(prompter, &format!("Category [{}]: ", current.category));
    let note = ask!(prompter, &format!("Note [{}]: ", current.note));
    let amount = ask!(prompter, &format!("Amount [{}]: ", current.amount));

    let changes = ExpenseChanges {
        date: Some(date),
        category: Some(category),
        note: Some(note),
        amount: Some(amount),
    };

    match service.edit(id, changes) {
        Ok(updated) => prompter.say(&format!("✅ Updated ID {}", updated.id))?,
        Err(ExpenseError::NotFound { .. }) => prompter.say(&format!("ID {} not found.", id))?,
        Err(e) => return Err(e),
    }
    Ok(Flow::Continue)
}

/// Menu 7: delete an expense by id
pub fn handle_delete<R: BufRead, W: Write>(
    storage: &Storage,
    prompter: &mut Prompter<R, W>,
) -> ExpenseResult<Flow> {
    let id = ExpenseId::parse_lenient(&ask!(prompter, "Enter ID to delete: "));
    let service = ExpenseService::new(storage);

    if service.is_empty()? {
        prompter.say("No data.")?;
        return Ok(Flow::Continue);
    }

    if service.delete(id)? {
        prompter.say(&format!("✅ Deleted ID {}", id))?;
    } else {
        prompter.say(&format!("ID {} not found.", id))?;
    }
    Ok(Flow::Continue)
}
