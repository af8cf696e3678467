//! Business logic layer
//!
//! Services sit between the CLI and storage and enforce the record rules
//! (id assignment, date validation, field-level edits).

pub mod expense;

pub use expense::{ExpenseChanges, ExpenseListing, ExpenseService, NewExpense};
