//! Core data models for the expense tracker
//!
//! This module contains the expense record, its id and amount types, and the
//! input validation helpers.

pub mod date;
pub mod expense;
pub mod ids;
pub mod lenient;
pub mod money;

pub use date::{is_valid_date, is_valid_month};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
