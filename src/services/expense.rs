//! Expense service
//!
//! Provides business logic for expense management: adding, editing and
//! deleting records, plus the plain list and keyword search queries.
//!
//! Every method is a self-contained load-act-save sequence against the
//! repository.

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{is_valid_date, Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub note: String,
    pub amount: Money,
}

/// Field changes for an edit; `None` or an empty string keeps the value
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub date: Option<String>,
    pub category: Option<String>,
    pub note: Option<String>,
    /// Raw amount text, parsed permissively
    pub amount: Option<String>,
}

impl ExpenseChanges {
    /// Create an empty change set (keeps every field)
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Change the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Change the note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Change the amount
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }
}

/// A filtered set of expenses with the sum of their amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseListing {
    pub expenses: Vec<Expense>,
    pub total: Money,
}

impl ExpenseListing {
    /// Collect expenses and total their amounts
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let total = expenses.iter().map(|e| e.amount).sum();
        Self { expenses, total }
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// A change value counts only when it is present and non-empty
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense and return it with its assigned id
    pub fn add(&self, input: NewExpense) -> ExpenseResult<Expense> {
        if !is_valid_date(&input.date) {
            return Err(ExpenseError::Validation(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                input.date
            )));
        }

        let id = self.storage.expenses.next_id()?;
        let expense = Expense::new(id, input.date, input.category, input.note, input.amount);
        self.storage.expenses.append(&expense)?;

        info!(id = %expense.id, amount = %expense.amount, "added expense");
        Ok(expense)
    }

    /// Delete the first expense with `id`
    ///
    /// Returns whether anything was removed. The file is only rewritten when
    /// a record was actually removed.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<bool> {
        let mut expenses = self.storage.expenses.load_all()?;

        let Some(index) = expenses.iter().position(|e| e.id == id) else {
            return Ok(false);
        };
        expenses.remove(index);
        self.storage.expenses.save_all(&expenses)?;

        info!(id = %id, "deleted expense");
        Ok(true)
    }

    /// Apply `changes` to the expense with `id` and persist the result
    ///
    /// An invalid new date aborts the whole edit before anything changes.
    pub fn edit(&self, id: ExpenseId, changes: ExpenseChanges) -> ExpenseResult<Expense> {
        let mut expenses = self.storage.expenses.load_all()?;

        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        if let Some(date) = non_empty(&changes.date) {
            if !is_valid_date(date) {
                return Err(ExpenseError::Validation(format!(
                    "Invalid date '{}', edit cancelled",
                    date
                )));
            }
            expense.set_date(date);
        }
        if let Some(category) = non_empty(&changes.category) {
            expense.set_category(category);
        }
        if let Some(note) = non_empty(&changes.note) {
            expense.set_note(note);
        }
        if let Some(amount) = non_empty(&changes.amount) {
            expense.amount = Money::parse_lenient(amount);
        }

        let updated = expense.clone();
        self.storage.expenses.save_all(&expenses)?;

        info!(id = %id, "updated expense");
        Ok(updated)
    }

    /// Get a single expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        Ok(self
            .storage
            .expenses
            .load_all()?
            .into_iter()
            .find(|e| e.id == id))
    }

    /// All expenses in file order with their total
    pub fn list(&self) -> ExpenseResult<ExpenseListing> {
        Ok(ExpenseListing::from_expenses(
            self.storage.expenses.load_all()?,
        ))
    }

    /// Expenses whose category or note contains `keyword` (case-sensitive)
    ///
    /// An empty keyword matches everything.
    pub fn search(&self, keyword: &str) -> ExpenseResult<ExpenseListing> {
        let matches = self
            .storage
            .expenses
            .load_all()?
            .into_iter()
            .filter(|e| e.matches_keyword(keyword))
            .collect();
        Ok(ExpenseListing::from_expenses(matches))
    }

    /// Check if the store holds no expenses
    pub fn is_empty(&self) -> ExpenseResult<bool> {
        Ok(self.storage.expenses.load_all()?.is_empty())
    }
}
