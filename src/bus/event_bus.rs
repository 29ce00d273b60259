//! Ordered, failure-isolating event bus.

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;

use super::subscriber::{DeliveryError, Subscriber};

/// One subscriber that failed during a broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryFailure {
    /// Registration position of the subscriber at broadcast time.
    pub position: usize,
    /// Name reported by the subscriber.
    pub subscriber: String,
    pub error: DeliveryError,
}

/// Outcome of a single broadcast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BroadcastReport {
    /// Number of subscribers that received the message without error.
    pub delivered: usize,
    /// Subscribers that failed, in delivery order.
    pub failures: Vec<DeliveryFailure>,
}

impl BroadcastReport {
    /// Returns `true` if no subscriber failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of subscribers the message was handed to.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }
}

/// Registry of subscribers that broadcasts string messages.
///
/// # Delivery rules
///
/// - Subscribers are notified in registration order.
/// - Registration follows set semantics: subscribing an already registered
///   subscriber is a no-op, so each subscriber gets exactly one copy of
///   every broadcast.
/// - A subscriber that returns an error or panics is logged and reported,
///   and delivery continues with the next subscriber.
///
/// # Thread Safety
///
/// The subscriber list is guarded by a single `parking_lot::Mutex`. A
/// broadcast snapshots the list under the lock and delivers outside it, so a
/// subscriber may subscribe or unsubscribe from inside `receive`; the change
/// applies from the next broadcast.
///
/// # Examples
///
/// ```
/// use signalbox::bus::{EventBus, FnSubscriber, Subscriber};
/// use std::sync::Arc;
///
/// let bus = EventBus::new();
/// let security: Arc<dyn Subscriber> =
///     Arc::new(FnSubscriber::new("security", |_: &str| Ok(())));
///
/// assert!(bus.subscribe(Arc::clone(&security)));
/// assert!(!bus.subscribe(Arc::clone(&security)));
///
/// let report = bus.broadcast("Car with license plate ABC123 entered.");
/// assert_eq!(report.delivered, 1);
///
/// assert!(bus.unsubscribe(&security));
/// assert_eq!(bus.broadcast("ignored").attempted(), 0);
/// ```
pub struct EventBus {
    subscribers: Mutex<Vec<Arc<dyn Subscriber>>>,
}

impl EventBus {
    /// Creates a new event bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Registers a subscriber.
    ///
    /// Returns `false` if it was already registered, in which case nothing
    /// changes.
    pub fn subscribe(&self, subscriber: Arc<dyn Subscriber>) -> bool {
        let mut subscribers = self.subscribers.lock();
        let key = address(&subscriber);

        if subscribers.iter().any(|s| address(s) == key) {
            tracing::debug!(subscriber = subscriber.name(), "Subscriber already registered");
            return false;
        }

        tracing::debug!(
            subscriber = subscriber.name(),
            position = subscribers.len(),
            "Registering subscriber"
        );
        subscribers.push(subscriber);
        true
    }

    /// Removes a subscriber.
    ///
    /// Returns `false` if it was not registered; that is not an error.
    pub fn unsubscribe<T: Subscriber + ?Sized>(&self, subscriber: &Arc<T>) -> bool {
        let mut subscribers = self.subscribers.lock();
        let key = address(subscriber);
        let before = subscribers.len();

        subscribers.retain(|s| address(s) != key);

        let removed = subscribers.len() != before;
        if removed {
            tracing::debug!(subscriber = subscriber.name(), "Unregistering subscriber");
        }
        removed
    }

    /// Returns `true` if this exact subscriber is registered.
    #[must_use]
    pub fn is_subscribed<T: Subscriber + ?Sized>(&self, subscriber: &Arc<T>) -> bool {
        let key = address(subscriber);
        self.subscribers.lock().iter().any(|s| address(s) == key)
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Removes every subscriber.
    pub fn clear(&self) {
        self.subscribers.lock().clear();
    }

    /// Delivers `message` to every registered subscriber in registration
    /// order.
    ///
    /// Failures are isolated per subscriber and collected in the report.
    pub fn broadcast(&self, message: &str) -> BroadcastReport {
        let snapshot: Vec<Arc<dyn Subscriber>> = self.subscribers.lock().clone();
        let mut report = BroadcastReport::default();

        for (position, subscriber) in snapshot.iter().enumerate() {
            match deliver(subscriber.as_ref(), message) {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    tracing::warn!(
                        subscriber = subscriber.name(),
                        position,
                        error = %error,
                        "Subscriber failed to receive message"
                    );
                    report.failures.push(DeliveryFailure {
                        position,
                        subscriber: subscriber.name().to_string(),
                        error,
                    });
                }
            }
        }

        tracing::trace!(
            payload = message,
            delivered = report.delivered,
            failed = report.failures.len(),
            "Broadcast complete"
        );

        report
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Identity of a registration: the address of the shared allocation.
fn address<T: ?Sized>(subscriber: &Arc<T>) -> *const () {
    Arc::as_ptr(subscriber).cast::<()>()
}

fn deliver(subscriber: &dyn Subscriber, message: &str) -> Result<(), DeliveryError> {
    match catch_unwind(AssertUnwindSafe(|| subscriber.receive(message))) {
        Ok(result) => result,
        Err(payload) => Err(DeliveryError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
