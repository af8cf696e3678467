//! Monthly Summary Report
//!
//! Lists the expenses of one `YYYY-MM` month with their total.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{is_valid_month, Expense, Money};
use crate::storage::ExpenseRepository;

/// Expenses recorded in one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    /// The requested `YYYY-MM` month
    pub month: String,
    /// Matching expenses in file order
    pub expenses: Vec<Expense>,
    /// Sum of the matching amounts
    pub total: Money,
}

impl MonthlyReport {
    /// Generate the report for `month`
    ///
    /// A record belongs to the month when its date text starts with `month`.
    /// This is a plain prefix test, so a malformed stored date that happens to
    /// share the prefix is included too.
    pub fn generate(repo: &ExpenseRepository, month: &str) -> ExpenseResult<Self> {
        if !is_valid_month(month) {
            return Err(ExpenseError::Validation(format!(
                "Invalid month format '{}', expected YYYY-MM",
                month
            )));
        }

        let expenses: Vec<Expense> = repo
            .load_all()?
            .into_iter()
            .filter(|e| e.in_month(month))
            .collect();
        let total = expenses.iter().map(|e| e.amount).sum();

        Ok(Self {
            month: month.to_string(),
            expenses,
            total,
        })
    }

    /// Check if the month had no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
