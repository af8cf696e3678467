//! Expense Tracker - menu-driven personal expense ledger
//!
//! This library provides the core functionality behind the `expense` binary.
//! Expenses live in a single CSV file and are added, listed, searched, edited
//! and deleted through a numbered terminal menu, with a monthly summary and
//! per-category totals as reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, ids, dates)
//! - `storage`: CSV file storage layer
//! - `services`: Business logic layer
//! - `reports`: Monthly summary and category totals
//! - `display`: Fixed-width table rendering
//! - `cli`: Menu loop and prompt handling
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(ExpensePaths::new())?;
//! let expenses = storage.expenses.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
