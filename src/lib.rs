//! Signalbox: table-driven state machines that announce their transitions.
//!
//! A [`StateMachine`] walks a [`TransitionTable`] in which every state has
//! exactly one successor. A [`Controller`] wraps a machine behind a lock and
//! broadcasts each transition as `"FROM->TO"` on a shared [`EventBus`], where
//! any number of [`Subscriber`]s receive it in registration order.
//!
//! # Core Concepts
//!
//! - **State**: named states via the `State` trait or the `state_enum!` macro
//! - **Table**: validated one-successor-per-state transition tables
//! - **Bus**: ordered, deduplicated broadcast with per-subscriber failure isolation
//! - **Controller**: request-driven automata, such as the parking gate and the
//!   traffic light
//! - **Parking**: a parking lot that cycles its gate for every vehicle
//!
//! # Example
//!
//! ```rust
//! use signalbox::bus::{EventBus, FnSubscriber};
//! use signalbox::controller::traffic::{self, LightState};
//! use std::sync::{Arc, Mutex};
//!
//! let bus = Arc::new(EventBus::new());
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! bus.subscribe(Arc::new(FnSubscriber::new("display", move |m: &str| {
//!     sink.lock().unwrap().push(m.to_string());
//!     Ok(())
//! })));
//!
//! let light = traffic::controller().with_bus(Arc::clone(&bus));
//! light.request().unwrap();
//! light.request().unwrap();
//!
//! assert_eq!(light.current_state(), LightState::Yellow);
//! assert_eq!(*seen.lock().unwrap(), vec!["RED->GREEN", "GREEN->YELLOW"]);
//! ```

pub mod builder;
pub mod bus;
pub mod controller;
pub mod core;
pub mod machine;
pub mod parking;

// Re-export commonly used types
pub use builder::{BuildError, TransitionTableBuilder};
pub use bus::{BroadcastReport, EventBus, FnSubscriber, Subscriber};
pub use controller::Controller;
pub use core::{State, StateHistory, Transition, TransitionRecord, TransitionTable};
pub use machine::{MachineError, StateMachine};
