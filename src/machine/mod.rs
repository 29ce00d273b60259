//! State machine execution.
//!
//! This module is the dispatch side around the pure data in [`crate::core`]:
//! a machine holds exactly one current state and moves it along its
//! transition table, one `advance` at a time.
//!
//! # Key Concepts
//!
//! - **Construction check**: the initial state must have an outgoing transition
//! - **Advance**: look up, move, record; never partially applied
//! - **History**: every fired transition is kept (optionally bounded)

mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
