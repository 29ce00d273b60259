//! Errors raised by state machines.

use thiserror::Error;

/// Errors that can occur when creating or advancing a state machine
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    /// The initial state has no outgoing transition. Raised at construction;
    /// no machine is produced.
    #[error("Transition table has no transition out of initial state '{state}'")]
    IncompleteTransitionTable { state: String },

    /// The current state is absent from the table. Unreachable for tables
    /// built with the table builder.
    #[error("No transition available from state '{state}'")]
    InvalidState { state: String },

    /// A controller could not reach the requested state within one pass
    /// over its table.
    #[error("State '{state}' is not reachable within one cycle")]
    UnreachableState { state: String },
}
