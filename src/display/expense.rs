//! Expense display formatting
//!
//! Fixed-width tables for expense listings: list, search results and the
//! monthly summary all share the same layout.

use crate::models::{Expense, Money};

/// Width of the horizontal rules around expense tables
pub const TABLE_WIDTH: usize = 80;

/// Horizontal rule line
pub fn rule(width: usize) -> String {
    let mut line = "-".repeat(width);
    line.push('\n');
    line
}

/// Table header with rules above and below
pub fn format_expense_header() -> String {
    let mut output = rule(TABLE_WIDTH);
    output.push_str(&format!(
        "{:<5}  {:<10}  {:<15}  {:<30}  {:>10}\n",
        "ID", "Date", "Category", "Note", "Amount"
    ));
    output.push_str(&rule(TABLE_WIDTH));
    output
}

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:<5}  {:<10}  {:<15}  {:<30}  {:>10}\n",
        expense.id, expense.date, expense.category, expense.note, expense.amount
    )
}

/// Closing rule plus a labelled total aligned under the amount column
pub fn format_total_line(label: &str, total: Money) -> String {
    let mut output = rule(TABLE_WIDTH);
    output.push_str(&format!("{:<64} {:>10}\n", label, total));
    output
}

/// Format a full listing: header, one row per expense and the total line
///
/// When `expenses` is empty the header is followed by `empty_message`
/// instead of rows and total.
pub fn format_expense_table(
    expenses: &[Expense],
    total_label: &str,
    total: Money,
    empty_message: &str,
) -> String {
    let mut output = format_expense_header();

    if expenses.is_empty() {
        output.push_str(empty_message);
        output.push('\n');
        return output;
    }

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
    }
    output.push_str(&format_total_line(total_label, total));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn lunch() -> Expense {
        Expense::new(
            ExpenseId::new(1),
            "2024-01-05",
            "Food",
            "Lunch",
            Money::from_cents(1250),
        )
    }

    #[test]
    fn test_header_layout() {
        let header = format_expense_header();
        let lines: Vec<&str> = header.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 80);
        assert!(lines[1].starts_with(&format!("ID{}Date{}Category", " ".repeat(5), " ".repeat(8))));
        assert!(lines[1].ends_with("    Amount"));
    }

    #[test]
    fn test_row_layout() {
        let row = format_expense_row(&lunch());
        let expected = format!(
            "1{}2024-01-05  Food{}Lunch{}12.50\n",
            " ".repeat(6),
            " ".repeat(13),
            " ".repeat(32)
        );
        assert_eq!(row, expected);
        assert_eq!(row.len(), 5 + 2 + 10 + 2 + 15 + 2 + 30 + 2 + 10 + 1);
    }

    #[test]
    fn test_total_line() {
        let line = format_total_line("TOTAL", Money::from_cents(4250));
        let lines: Vec<&str> = line.lines().collect();
        assert_eq!(lines[1].len(), 75);
        assert!(lines[1].starts_with("TOTAL "));
        assert!(lines[1].ends_with("     42.50"));
    }

    #[test]
    fn test_table_with_rows() {
        let table = format_expense_table(&[lunch()], "TOTAL", Money::from_cents(1250), "none");
        assert!(table.contains("Lunch"));
        assert!(table.contains("TOTAL"));
        assert!(!table.contains("none"));
    }

    #[test]
    fn test_empty_table_shows_message() {
        let table = format_expense_table(&[], "TOTAL", Money::zero(), "No matching records.");
        assert!(table.ends_with("No matching records.\n"));
        assert!(!table.contains("TOTAL"));
    }
}
