//! Interactive command handlers
//!
//! This module contains the menu loop and the handlers behind each menu
//! entry, bridging terminal input with the service and report layers.

pub mod expense;
pub mod menu;
pub mod prompt;

pub use menu::{format_menu, run_menu, MenuChoice};
pub use prompt::Prompter;

/// What the menu loop should do after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Pause, then show the menu again
    Continue,
    /// Input ended; leave the session
    Quit,
}
