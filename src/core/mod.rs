//! Core state machine types and logic.
//!
//! This module contains the pure data side of the state machine:
//! - State definitions via the `State` trait
//! - Transitions, transition tables and their validation
//! - History of fired transitions
//!
//! Nothing here performs side effects; dispatch lives in [`crate::machine`].

mod history;
mod state;
mod table;
mod transition;

pub use history::StateHistory;
pub use state::State;
pub use table::{TableViolation, TransitionTable};
pub use transition::{Transition, TransitionRecord};
