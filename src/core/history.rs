//! State transition history tracking.
//!
//! Cyclic machines never terminate, so a history can optionally be bounded
//! to its most recent records.

use super::state::State;
use super::transition::TransitionRecord;
use serde::{Deserialize, Serialize};

/// Ordered history of fired transitions.
///
/// `record` is pure and returns a new history; machines append in place
/// through a crate-internal method.
///
/// # Example
///
/// ```rust
/// use signalbox::core::{State, StateHistory, Transition};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase { One, Two, Three }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "ONE",
///             Self::Two => "TWO",
///             Self::Three => "THREE",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(Transition::new(Phase::One, Phase::Two, "").record(1))
///     .record(Transition::new(Phase::Two, Phase::Three, "").record(2));
///
/// assert_eq!(history.get_path(), vec![&Phase::One, &Phase::Two, &Phase::Three]);
/// assert_eq!(history.previous_state(), Some(&Phase::Two));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<TransitionRecord<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create a history that keeps only the most recent `limit` records.
    ///
    /// A limit of zero keeps nothing.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: TransitionRecord<S>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    pub(crate) fn push(&mut self, transition: TransitionRecord<S>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            self.transitions.drain(..excess);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the path of states traversed.
    ///
    /// Returns the source of the oldest retained record followed by every
    /// target in order. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// State the machine was in before the most recent transition.
    pub fn previous_state(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.from)
    }

    pub fn last(&self) -> Option<&TransitionRecord<S>> {
        self.transitions.last()
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Closed,
        Opening,
        Open,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Closed => "CLOSED",
                Self::Opening => "OPENING",
                Self::Open => "OPEN",
            }
        }
    }

    fn record(from: TestState, to: TestState, step: u64) -> TransitionRecord<TestState> {
        Transition::new(from, to, "").record(step)
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.previous_state().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(record(TestState::Closed, TestState::Opening, 1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(record(TestState::Closed, TestState::Opening, 1))
            .record(record(TestState::Opening, TestState::Open, 2));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Closed);
        assert_eq!(path[1], &TestState::Opening);
        assert_eq!(path[2], &TestState::Open);
        assert_eq!(history.previous_state(), Some(&TestState::Opening));
    }

    #[test]
    fn bounded_history_drops_oldest() {
        let mut history = StateHistory::bounded(2);
        history.push(record(TestState::Closed, TestState::Opening, 1));
        history.push(record(TestState::Opening, TestState::Open, 2));
        history.push(record(TestState::Open, TestState::Closed, 3));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].step, 2);
        assert_eq!(
            history.get_path(),
            vec![&TestState::Opening, &TestState::Open, &TestState::Closed]
        );
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let history = StateHistory::bounded(0).record(record(TestState::Closed, TestState::Opening, 1));
        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(record(TestState::Closed, TestState::Opening, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions(), history.transitions());
    }
}
