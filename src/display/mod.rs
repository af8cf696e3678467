//! Display formatting for terminal output
//!
//! Provides utilities for rendering expenses and reports as fixed-width
//! tables.

pub mod expense;
pub mod report;

pub use expense::{
    format_expense_header, format_expense_row, format_expense_table, format_total_line,
};
pub use report::format_category_totals;
