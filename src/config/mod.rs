//! Configuration module for the expense tracker
//!
//! The only configurable thing is where the data file lives.

pub mod paths;

pub use paths::ExpensePaths;
