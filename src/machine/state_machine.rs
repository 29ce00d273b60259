//! Table-driven state machine.

use crate::core::{State, StateHistory, Transition, TransitionRecord, TransitionTable};
use crate::machine::error::MachineError;
use std::sync::Arc;

/// State machine that dispatches through an immutable transition table.
///
/// The machine owns its current state directly. The table is shared behind
/// an `Arc`, so several machines can run the same automaton.
#[derive(Clone, Debug)]
pub struct StateMachine<S: State> {
    initial: S,
    current: S,
    table: Arc<TransitionTable<S>>,
    history: StateHistory<S>,
    steps: u64,
}

impl<S: State> StateMachine<S> {
    /// Create a new state machine in the initial state.
    ///
    /// Fails with [`MachineError::IncompleteTransitionTable`] when the table
    /// has no way out of `initial`.
    pub fn new(
        initial: S,
        table: impl Into<Arc<TransitionTable<S>>>,
    ) -> Result<Self, MachineError> {
        let table = table.into();

        if !table.contains(&initial) {
            return Err(MachineError::IncompleteTransitionTable {
                state: initial.name().to_string(),
            });
        }

        Ok(Self {
            current: initial.clone(),
            initial,
            table,
            history: StateHistory::new(),
            steps: 0,
        })
    }

    /// Keep only the most recent `limit` transitions in the history.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        let mut history = StateHistory::bounded(limit);
        for record in self.history.transitions() {
            history.push(record.clone());
        }
        self.history = history;
        self
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Number of transitions fired since creation or the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Transition that the next `advance` would fire (pure)
    pub fn peek(&self) -> Option<&Transition<S>> {
        self.table.transition_from(&self.current)
    }

    /// Fire the current state's outgoing transition.
    ///
    /// On error the machine is left untouched.
    pub fn advance(&mut self) -> Result<TransitionRecord<S>, MachineError> {
        let Some(transition) = self.table.transition_from(&self.current) else {
            tracing::warn!(state = self.current.name(), "No transition from current state");
            return Err(MachineError::InvalidState {
                state: self.current.name().to_string(),
            });
        };

        let record = transition.record(self.steps + 1);
        self.steps = record.step;
        self.current = record.to.clone();
        self.history.push(record.clone());

        tracing::debug!(
            from = record.from.name(),
            to = record.to.name(),
            step = record.step,
            "State machine advanced"
        );

        Ok(record)
    }

    /// Advance `n` times, stopping at the first error.
    pub fn advance_by(&mut self, n: usize) -> Result<Vec<TransitionRecord<S>>, MachineError> {
        (0..n).map(|_| self.advance()).collect()
    }

    /// Return to the initial state and forget the history.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.history.clear();
        self.steps = 0;
    }
}
