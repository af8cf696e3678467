//! Reports module for the expense tracker
//!
//! Provides the aggregate reports: a monthly summary and per-category totals.

pub mod category_totals;
pub mod monthly;

pub use category_totals::{CategoryTotal, CategoryTotalsReport};
pub use monthly::MonthlyReport;
