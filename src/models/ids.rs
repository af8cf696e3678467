//! Strongly-typed expense ID
//!
//! Expense ids are plain integers in the data file; the newtype keeps them
//! from being mixed up with counts or indexes.

use serde::Serialize;
use std::fmt;

use super::lenient;

/// Identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Create an ID from a raw integer
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// The id that follows this one, or `None` once the id space is used up
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Parse an ID permissively (unparsable text is 0)
    pub fn parse_lenient(s: &str) -> Self {
        Self(lenient::parse_i64(s))
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ExpenseId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
