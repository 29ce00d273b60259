//! Event notification.
//!
//! - [`Subscriber`] - capability to receive a broadcast message
//! - [`EventBus`] - ordered registry that broadcasts to subscribers
//! - [`BroadcastReport`] - what happened during one broadcast

mod event_bus;
mod subscriber;

pub use event_bus::{BroadcastReport, DeliveryFailure, EventBus};
pub use subscriber::{DeliveryError, FnSubscriber, Subscriber};
