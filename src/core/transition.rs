//! Transition definitions and the records produced when they fire.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single edge of an automaton: `from` moves to `to`.
///
/// The description is a human-readable account of what happens while the
/// transition fires (for a gate: "Gate is closed. Initiating opening process.").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    pub from: S,
    pub to: S,
    pub description: String,
}

impl<S: State> Transition<S> {
    pub fn new(from: S, to: S, description: impl Into<String>) -> Self {
        Self {
            from,
            to,
            description: description.into(),
        }
    }

    /// Check if this transition leaves the given state (pure)
    pub fn starts_at(&self, state: &S) -> bool {
        self.from == *state
    }

    /// Produce the record for this transition firing as the `step`-th move.
    pub fn record(&self, step: u64) -> TransitionRecord<S> {
        TransitionRecord {
            from: self.from.clone(),
            to: self.to.clone(),
            description: self.description.clone(),
            step,
        }
    }
}

/// Record of a transition that actually fired.
///
/// Records are immutable values. `step` is the 1-based position of the
/// transition within the life of the machine that produced it.
///
/// The `Display` form is `"FROM->TO"` using [`State::name`], which is the
/// message controllers broadcast.
///
/// # Example
///
/// ```rust
/// use signalbox::core::{State, Transition};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light { Red, Green }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "RED",
///             Self::Green => "GREEN",
///         }
///     }
/// }
///
/// let record = Transition::new(Light::Red, Light::Green, "go").record(1);
/// assert_eq!(record.to_string(), "RED->GREEN");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Description copied from the table entry
    pub description: String,
    /// 1-based index of this transition in the machine's life
    pub step: u64,
}

impl<S: State> fmt::Display for TransitionRecord<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from.name(), self.to.name())
    }
}
