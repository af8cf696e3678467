//! Storage layer for the expense tracker
//!
//! Provides the flat CSV file store: header initialization, row reading,
//! appends and full rewrites.

pub mod expenses;
pub mod file_io;
pub mod init;

pub use expenses::ExpenseRepository;
pub use file_io::{append_rows, read_rows, write_rows_atomic};
pub use init::initialize_storage;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to the repository
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance, creating the data file if needed
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        initialize_storage(&paths)?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.clone()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }
}
