//! Build errors for transition tables.

use crate::core::TableViolation;
use thiserror::Error;

/// Errors that can occur when building transition tables.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition")]
    EmptyTable,

    #[error("Transition table has {} structural violation(s)", .0.len())]
    InvalidTable(Vec<TableViolation>),
}
