//! Report display formatting

use crate::reports::CategoryTotalsReport;

use super::expense::rule;

/// Width of the category totals table
const CATEGORY_TABLE_WIDTH: usize = 28;

/// Format the category totals report as a two-column table
pub fn format_category_totals(report: &CategoryTotalsReport) -> String {
    let mut output = String::from("\n");
    output.push_str(&rule(CATEGORY_TABLE_WIDTH));
    output.push_str(&format!("{:<20} {:>12}\n", "Category", "Total"));
    output.push_str(&rule(CATEGORY_TABLE_WIDTH));

    for row in &report.rows {
        output.push_str(&format!("{:<20} {:>12}\n", row.category, row.total));
    }

    output.push_str(&rule(CATEGORY_TABLE_WIDTH));
    output.push_str(&format!("{:<20} {:>12}\n", "GRAND TOTAL", report.grand_total));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseId, Money};

    #[test]
    fn test_format_category_totals() {
        let expenses = vec![
            Expense::new(
                ExpenseId::new(1),
                "2024-01-05",
                "Food",
                "Lunch",
                Money::from_cents(1250),
            ),
            Expense::new(
                ExpenseId::new(2),
                "2024-02-01",
                "Travel",
                "Taxi",
                Money::from_cents(3000),
            ),
        ];
        let report = CategoryTotalsReport::from_expenses(&expenses);

        let output = format_category_totals(&report);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "-".repeat(28));
        assert_eq!(lines[2], format!("{:<20} {:>12}", "Category", "Total"));
        assert_eq!(lines[4], format!("Food{}12.50", " ".repeat(24)));
        assert_eq!(lines[5], format!("Travel{}30.00", " ".repeat(22)));
        assert_eq!(lines[7], format!("GRAND TOTAL{}42.50", " ".repeat(17)));
    }
}
