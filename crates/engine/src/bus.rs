//! Host event bus with scoped subscriptions.
//!
//! Each subscriber gets its own unbounded tokio channel. Dropping the
//! [`Subscription`] guard removes the sender from the bus, so events
//! published afterwards are never delivered to it.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;

struct BusInner<E> {
    next_id: u64,
    senders: BTreeMap<u64, UnboundedSender<E>>,
}

/// Fan-out bus for host events.
pub struct EventBus<E> {
    inner: Arc<Mutex<BusInner<E>>>,
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusInner {
                next_id: 0,
                senders: BTreeMap::new(),
            })),
        }
    }
}

impl<E> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus").field("subscribers", &self.subscriber_count()).finish()
    }
}

fn lock<E>(inner: &Mutex<BusInner<E>>) -> MutexGuard<'_, BusInner<E>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<E: Clone + Send + 'static> EventBus<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber. The registration lives as long as the
    /// returned guard.
    pub fn subscribe(&self) -> (Subscription, UnboundedReceiver<E>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.senders.insert(id, sender);
            id
        };
        trace!(subscription = id, "subscribed to event bus");

        let weak = Arc::downgrade(&self.inner);
        let release = move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).senders.remove(&id);
                trace!(subscription = id, "released event bus subscription");
            }
        };
        (Subscription::new(release), receiver)
    }

    /// Delivers `event` to every live subscriber. Returns how many received it.
    pub fn publish(&self, event: E) -> usize {
        let mut inner = lock(&self.inner);
        // Receivers dropped without releasing the guard are pruned here.
        inner.senders.retain(|_, sender| sender.send(event.clone()).is_ok());
        inner.senders.len()
    }
}

impl<E> EventBus<E> {
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).senders.len()
    }
}

/// Guard for a bus registration; released on drop, including unwinding.
#[must_use = "dropping a Subscription immediately releases it"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Releases the registration now. Calling it again does nothing.
    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_reaches_every_live_subscriber() {
        let bus = EventBus::new();
        let (_first_guard, mut first) = bus.subscribe();
        let (_second_guard, mut second) = bus.subscribe();

        assert_eq!(bus.publish(7_u32), 2);
        assert_eq!(first.try_recv().ok(), Some(7));
        assert_eq!(second.try_recv().ok(), Some(7));
    }

    #[test]
    fn dropping_the_guard_stops_delivery() {
        let bus = EventBus::new();
        let (guard, mut receiver) = bus.subscribe();
        drop(guard);

        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.publish("late"), 0);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let bus = EventBus::<u8>::new();
        let (mut guard, _receiver) = bus.subscribe();
        let (_other, _other_receiver) = bus.subscribe();

        guard.unsubscribe();
        guard.unsubscribe();
        assert!(!guard.is_active());
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn guard_is_released_during_unwinding() {
        let bus = EventBus::<u8>::new();
        let cloned = bus.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let (_guard, _receiver) = cloned.subscribe();
            panic!("handler failed");
        }));
        assert!(result.is_err());
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn guard_outliving_the_bus_is_harmless() {
        let bus = EventBus::<u8>::new();
        let (mut guard, _receiver) = bus.subscribe();
        drop(bus);
        guard.unsubscribe();
        assert!(!guard.is_active());
    }
}
