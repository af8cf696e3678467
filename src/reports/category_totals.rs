//! Category Totals Report
//!
//! Sums amounts per category. Categories are compared exactly
//! (case-sensitive) and rows appear in the order each category is first seen.

use crate::error::ExpenseResult;
use crate::models::{Expense, Money};
use crate::storage::ExpenseRepository;

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category label as stored
    pub category: String,
    /// Sum of amounts in this category
    pub total: Money,
    /// Number of expenses in this category
    pub count: usize,
}

/// Category Totals Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotalsReport {
    /// One row per distinct category, first-seen order
    pub rows: Vec<CategoryTotal>,
    /// Sum of every row
    pub grand_total: Money,
}

impl CategoryTotalsReport {
    /// Generate the report from the stored expenses
    pub fn generate(repo: &ExpenseRepository) -> ExpenseResult<Self> {
        Ok(Self::from_expenses(&repo.load_all()?))
    }

    /// Aggregate an in-memory list of expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut rows: Vec<CategoryTotal> = Vec::new();

        for expense in expenses {
            match rows.iter_mut().find(|r| r.category == expense.category) {
                Some(row) => {
                    row.total += expense.amount;
                    row.count += 1;
                }
                None => rows.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                    count: 1,
                }),
            }
        }

        let grand_total = rows.iter().map(|r| r.total).sum();
        Self { rows, grand_total }
    }

    /// Check if there were no expenses at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
