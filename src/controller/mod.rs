//! Driving components that compose a state machine with an event bus.
//!
//! A [`Controller`] owns one [`StateMachine`] and optionally shares an
//! [`EventBus`] injected at construction. Every successful request advances
//! the machine once and broadcasts the transition as `"FROM->TO"`.
//!
//! Two ready-made automata live here:
//! - [`gate`] - CLOSED -> OPENING -> OPEN -> CLOSING -> CLOSED
//! - [`traffic`] - RED -> GREEN -> YELLOW -> RED

pub mod gate;
pub mod traffic;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::bus::EventBus;
use crate::core::{State, StateHistory, TransitionRecord};
use crate::machine::{MachineError, StateMachine};

/// Composes a state machine with an optional event bus.
///
/// # Thread Safety
///
/// The machine sits behind a `parking_lot::Mutex`; a request holds it while
/// advancing and broadcasting, so concurrent requests are serialized and
/// broadcasts arrive in transition order. Subscribers must not call back
/// into the controller that notified them.
///
/// # Example
///
/// ```rust
/// use signalbox::bus::{EventBus, FnSubscriber};
/// use signalbox::controller::gate::{self, GateState};
/// use std::sync::Arc;
///
/// let bus = Arc::new(EventBus::new());
/// bus.subscribe(Arc::new(FnSubscriber::new("log", |m: &str| {
///     println!("{m}");
///     Ok(())
/// })));
///
/// let controller = gate::controller().with_bus(Arc::clone(&bus));
/// let record = controller.request().unwrap();
///
/// assert_eq!(record.to_string(), "CLOSED->OPENING");
/// assert_eq!(controller.current_state(), GateState::Opening);
/// ```
pub struct Controller<S: State> {
    machine: Mutex<StateMachine<S>>,
    bus: Option<Arc<EventBus>>,
}

impl<S: State> Controller<S> {
    pub fn new(machine: StateMachine<S>) -> Self {
        Self {
            machine: Mutex::new(machine),
            bus: None,
        }
    }

    /// Attach a shared bus; transitions are broadcast on it from now on.
    #[must_use]
    pub fn with_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn bus(&self) -> Option<&Arc<EventBus>> {
        self.bus.as_ref()
    }

    /// Advance the machine once and broadcast the transition.
    ///
    /// Failed advances leave the state unchanged and broadcast nothing.
    pub fn request(&self) -> Result<TransitionRecord<S>, MachineError> {
        let mut machine = self.machine.lock();
        self.step(&mut machine)
    }

    /// Advance at least once, and until `target` is reached.
    ///
    /// The lock is held for the whole run, so no other request interleaves.
    /// Fails with [`MachineError::UnreachableState`] if `target` is not met
    /// within one full pass over the table.
    pub fn request_until(&self, target: &S) -> Result<Vec<TransitionRecord<S>>, MachineError> {
        let mut machine = self.machine.lock();
        let limit = machine.table().len();
        let mut records = Vec::new();

        while records.len() < limit {
            let record = self.step(&mut machine)?;
            let arrived = record.to == *target;
            records.push(record);
            if arrived {
                return Ok(records);
            }
        }

        Err(MachineError::UnreachableState {
            state: target.name().to_string(),
        })
    }

    fn step(&self, machine: &mut StateMachine<S>) -> Result<TransitionRecord<S>, MachineError> {
        let record = machine.advance()?;

        if let Some(bus) = &self.bus {
            let report = bus.broadcast(&record.to_string());
            if !report.is_clean() {
                tracing::debug!(
                    transition = %record,
                    failed = report.failures.len(),
                    "Transition broadcast had delivery failures"
                );
            }
        }

        Ok(record)
    }

    pub fn current_state(&self) -> S {
        self.machine.lock().current_state().clone()
    }

    /// Snapshot of the machine's history.
    pub fn history(&self) -> StateHistory<S> {
        self.machine.lock().history().clone()
    }

    pub fn steps(&self) -> u64 {
        self.machine.lock().steps()
    }

    /// Return the machine to its initial state. Nothing is broadcast.
    pub fn reset(&self) {
        self.machine.lock().reset();
    }
}
