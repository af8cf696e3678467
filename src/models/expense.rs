//! Expense model
//!
//! One expense entry as stored in the data file: id, date, category, note
//! and amount, in that column order.

use serde::Serialize;

use super::ids::ExpenseId;
use super::money::Money;

/// Maximum characters kept for a date
pub const MAX_DATE_LEN: usize = 10;

/// Maximum characters kept for a category
pub const MAX_CATEGORY_LEN: usize = 31;

/// Maximum characters kept for a note
pub const MAX_NOTE_LEN: usize = 79;

/// A single expense record
///
/// Field order matches the column order of the data file; the CSV writer
/// serializes the struct as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    /// Unique identifier, assigned on creation and never reused
    pub id: ExpenseId,

    /// Date as `YYYY-MM-DD` text
    pub date: String,

    /// Free-form category label (case-sensitive)
    pub category: String,

    /// Short description
    pub note: String,

    /// Amount spent (may be zero or negative)
    pub amount: Money,
}

impl Expense {
    /// Create a new expense, truncating text fields to their limits
    pub fn new(
        id: ExpenseId,
        date: impl Into<String>,
        category: impl Into<String>,
        note: impl Into<String>,
        amount: Money,
    ) -> Self {
        let mut expense = Self {
            id,
            date: String::new(),
            category: String::new(),
            note: String::new(),
            amount,
        };
        expense.set_date(date);
        expense.set_category(category);
        expense.set_note(note);
        expense
    }

    /// Replace the date
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = truncate_chars(date.into(), MAX_DATE_LEN);
    }

    /// Replace the category
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = truncate_chars(category.into(), MAX_CATEGORY_LEN);
    }

    /// Replace the note
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = truncate_chars(note.into(), MAX_NOTE_LEN);
    }

    /// Year-month prefix test used by the monthly summary
    pub fn in_month(&self, yyyymm: &str) -> bool {
        self.date.starts_with(yyyymm)
    }

    /// Case-sensitive substring test against category or note
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.category.contains(keyword) || self.note.contains(keyword)
    }
}

/// Cut `s` down to at most `max` characters
fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}
