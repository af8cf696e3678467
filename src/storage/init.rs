//! Storage initialization
//!
//! Handles first-run setup: the data file is created with just its header.

use tracing::info;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

use super::file_io::create_with_header;

/// Create the data file with a header row if it doesn't exist yet
///
/// An existing file is left untouched.
pub fn initialize_storage(paths: &ExpensePaths) -> Result<(), ExpenseError> {
    if !needs_initialization(paths) {
        return Ok(());
    }

    paths.ensure_parent_dir()?;
    create_with_header(paths.data_file())?;
    info!(path = %paths.data_file().display(), "created data file");

    Ok(())
}

/// Check if the data file still has to be created
pub fn needs_initialization(paths: &ExpensePaths) -> bool {
    !paths.data_file().exists()
}
