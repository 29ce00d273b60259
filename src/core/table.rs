//! Immutable transition tables and their structural validation.

use super::state::State;
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Structural problems found in a transition table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableViolation {
    #[error("State '{state}' has more than one outgoing transition")]
    DuplicateSource { state: String },

    #[error("State '{state}' is a transition target but has no outgoing transition")]
    DanglingTarget { state: String },
}

/// Mapping from each state to its unique successor.
///
/// Tables are immutable once built and keep their transitions in insertion
/// order. Tables built through
/// [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder) are
/// guaranteed to be closed (every target has an outgoing transition) and
/// deterministic (every source appears once). Tables read back through serde
/// are taken as-is; call [`validate`](Self::validate) to check them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionTable<S: State> {
    transitions: Vec<Transition<S>>,
}

impl<S: State> TransitionTable<S> {
    pub(crate) fn from_transitions(transitions: Vec<Transition<S>>) -> Self {
        Self { transitions }
    }

    /// Outgoing transition of `state`, if the table has one (pure)
    pub fn transition_from(&self, state: &S) -> Option<&Transition<S>> {
        self.transitions.iter().find(|t| t.starts_at(state))
    }

    pub fn contains(&self, state: &S) -> bool {
        self.transition_from(state).is_some()
    }

    /// Number of transitions, which for a valid table is the number of states.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Source states in insertion order.
    pub fn states(&self) -> Vec<&S> {
        self.transitions.iter().map(|t| &t.from).collect()
    }

    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    /// Check the table structure, accumulating ALL violations.
    ///
    /// Each duplicated source and each dangling target is reported once.
    /// Returns `Validation::Success(())` for a closed, deterministic table.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<TableViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TableViolation>>> = Vec::new();

        for (i, transition) in self.transitions.iter().enumerate() {
            let earlier = &self.transitions[..i];

            // Report a duplicated source only at its second occurrence
            let first_duplicate = earlier.iter().filter(|t| t.from == transition.from).count() == 1;
            if first_duplicate {
                checks.push(Validation::fail(TableViolation::DuplicateSource {
                    state: transition.from.name().to_string(),
                }));
            }

            let target_seen = earlier.iter().any(|t| t.to == transition.to);
            if !target_seen && !self.contains(&transition.to) {
                checks.push(Validation::fail(TableViolation::DanglingTarget {
                    state: transition.to.name().to_string(),
                }));
            }
        }

        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Red,
        Green,
        Yellow,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Red => "RED",
                Self::Green => "GREEN",
                Self::Yellow => "YELLOW",
            }
        }
    }

    fn cycle() -> TransitionTable<TestState> {
        TransitionTable::from_transitions(vec![
            Transition::new(TestState::Red, TestState::Green, "go"),
            Transition::new(TestState::Green, TestState::Yellow, "slow"),
            Transition::new(TestState::Yellow, TestState::Red, "stop"),
        ])
    }

    #[test]
    fn lookup_finds_outgoing_transition() {
        let table = cycle();

        let next = table.transition_from(&TestState::Green).unwrap();
        assert_eq!(next.to, TestState::Yellow);
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.states(),
            vec![&TestState::Red, &TestState::Green, &TestState::Yellow]
        );
    }

    #[test]
    fn closed_cycle_validates() {
        assert!(cycle().validate().is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let table = TransitionTable::from_transitions(vec![
            Transition::new(TestState::Red, TestState::Green, "go"),
            Transition::new(TestState::Red, TestState::Yellow, "also go"),
        ]);

        match table.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    TableViolation::DuplicateSource { state } if state == "RED"
                )));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    TableViolation::DanglingTarget { state } if state == "GREEN"
                )));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    TableViolation::DanglingTarget { state } if state == "YELLOW"
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn dangling_target_reported_once() {
        let table = TransitionTable::from_transitions(vec![
            Transition::new(TestState::Red, TestState::Yellow, "a"),
            Transition::new(TestState::Green, TestState::Yellow, "b"),
        ]);

        match table.validate() {
            Validation::Failure(errors) => assert_eq!(errors.len(), 1),
            Validation::Success(_) => panic!("Expected a dangling target"),
        }
    }

    #[test]
    fn table_serializes_correctly() {
        let table = cycle();
        let json = serde_json::to_string(&table).unwrap();
        let deserialized: TransitionTable<TestState> = serde_json::from_str(&json).unwrap();
        assert_eq!(table, deserialized);
    }
}
