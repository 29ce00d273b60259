//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{State, Transition, TransitionTable};
use stillwater::validation::Validation;

/// Builder for constructing transition tables with a fluent API.
///
/// `build` rejects tables that are empty, that give a state more than one
/// successor, or that lead into a state with no way out.
pub struct TransitionTableBuilder<S: State> {
    transitions: Vec<Transition<S>>,
}

impl<S: State> TransitionTableBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add a transition from its parts.
    pub fn transition(mut self, from: S, to: S, description: impl Into<String>) -> Self {
        self.transitions.push(Transition::new(from, to, description));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the table.
    /// Returns every structural violation at once if the table is malformed.
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        if self.transitions.is_empty() {
            return Err(BuildError::EmptyTable);
        }

        let table = TransitionTable::from_transitions(self.transitions);
        match table.validate() {
            Validation::Success(_) => Ok(table),
            Validation::Failure(violations) => Err(BuildError::InvalidTable(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

impl<S: State> Default for TransitionTableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TableViolation;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Closed,
        Opening,
        Open,
        Closing,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "CLOSED",
                Self::Opening => "OPENING",
                Self::Open => "OPEN",
                Self::Closing => "CLOSING",
            }
        }
    }

    #[test]
    fn builder_requires_transitions() {
        let result = TransitionTableBuilder::<TestState>::new().build();
        assert_eq!(result, Err(BuildError::EmptyTable));
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TransitionTableBuilder::new()
            .transition(TestState::Closed, TestState::Opening, "open")
            .transition(TestState::Opening, TestState::Open, "opened")
            .transition(TestState::Open, TestState::Closing, "close")
            .transition(TestState::Closing, TestState::Closed, "closed")
            .build()
            .unwrap();

        assert_eq!(table.len(), 4);
        assert_eq!(
            table.transition_from(&TestState::Closing).unwrap().to,
            TestState::Closed
        );
    }

    #[test]
    fn builder_rejects_open_ended_table() {
        let result = TransitionTableBuilder::new()
            .transition(TestState::Closed, TestState::Opening, "open")
            .build();

        assert_eq!(
            result,
            Err(BuildError::InvalidTable(vec![TableViolation::DanglingTarget {
                state: "OPENING".to_string()
            }]))
        );
    }

    #[test]
    fn builder_rejects_branching_table() {
        let result = TransitionTableBuilder::new()
            .transition(TestState::Open, TestState::Open, "stay")
            .transition(TestState::Open, TestState::Open, "stay again")
            .build();

        assert_eq!(
            result,
            Err(BuildError::InvalidTable(vec![TableViolation::DuplicateSource {
                state: "OPEN".to_string()
            }]))
        );
    }

    #[test]
    fn add_multiple_transitions() {
        let table = TransitionTableBuilder::new()
            .transitions(vec![
                Transition::new(TestState::Open, TestState::Closing, "close"),
                Transition::new(TestState::Closing, TestState::Open, "reopen"),
            ])
            .build();

        assert!(table.is_ok());
    }
}
