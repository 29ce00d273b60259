//! Core State trait for state machine states.
//!
//! States are plain enumerated tags. They carry no behavior of their own;
//! what happens next is decided by a [`TransitionTable`](super::TransitionTable).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into transition records and history
/// - `PartialEq`: States are looked up in the transition table by equality
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Tables and history are serializable
///
/// # Example
///
/// ```rust
/// use signalbox::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Shut,
///     Ajar,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Shut => "SHUT",
///             Self::Ajar => "AJAR",
///         }
///     }
/// }
///
/// assert_eq!(Door::Ajar.name(), "AJAR");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Transition messages are rendered as `"{from.name()}->{to.name()}"`.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Closed.name(), "CLOSED");
        assert_eq!(TestState::Opening.name(), "OPENING");
        assert_eq!(TestState::Open.name(), "OPEN");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Opening;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(TestState::Open, TestState::Open);
        assert_ne!(TestState::Open, TestState::Closed);
    }
}
