//! Subscriber capability and delivery errors.

use thiserror::Error;

/// Errors a subscriber can report while receiving a message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    /// The subscriber refused or failed to handle the message.
    #[error("Subscriber rejected message: {0}")]
    Rejected(String),

    /// The subscriber panicked; the panic was contained by the bus.
    #[error("Subscriber panicked: {0}")]
    Panicked(String),
}

/// Something that can receive broadcast messages.
///
/// Subscribers are registered on an [`EventBus`](super::EventBus) as
/// `Arc<dyn Subscriber>`. Identity is the allocation, not the value: two
/// subscribers that behave identically are still distinct registrations.
pub trait Subscriber: Send + Sync {
    /// Handle one broadcast message.
    fn receive(&self, message: &str) -> Result<(), DeliveryError>;

    /// Name used when logging delivery failures.
    fn name(&self) -> &str {
        "subscriber"
    }
}

/// Adapter turning a closure into a [`Subscriber`].
///
/// # Example
///
/// ```rust
/// use signalbox::bus::{EventBus, FnSubscriber};
/// use std::sync::Arc;
///
/// let bus = EventBus::new();
/// bus.subscribe(Arc::new(FnSubscriber::new("printer", |message: &str| {
///     println!("{message}");
///     Ok(())
/// })));
///
/// assert!(bus.broadcast("There is a car approaching.").is_clean());
/// ```
pub struct FnSubscriber<F> {
    name: String,
    handler: F,
}

impl<F> FnSubscriber<F>
where
    F: Fn(&str) -> Result<(), DeliveryError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

impl<F> Subscriber for FnSubscriber<F>
where
    F: Fn(&str) -> Result<(), DeliveryError> + Send + Sync,
{
    fn receive(&self, message: &str) -> Result<(), DeliveryError> {
        (self.handler)(message)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
