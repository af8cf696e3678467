//! Path management for the expense tracker
//!
//! The tracker keeps everything in a single CSV file. By default that file is
//! `expenses.csv` in the current working directory; tests and embedders pass
//! an explicit location instead.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Default name of the backing data file
pub const DEFAULT_DATA_FILE: &str = "expenses.csv";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// The CSV file holding every expense record
    data_file: PathBuf,
}

impl ExpensePaths {
    /// Create paths pointing at `expenses.csv` in the working directory
    pub fn new() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }

    /// Create paths with a custom data file (useful for testing)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Sibling file used while rewriting the data file
    pub fn temp_file(&self) -> PathBuf {
        let mut name = self
            .data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        name.push(".tmp");
        self.data_file.with_file_name(name)
    }

    /// Ensure the directory containing the data file exists
    pub fn ensure_parent_dir(&self) -> Result<(), ExpenseError> {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::new()
    }
}
