//! Relay<T> - an observable value holder with replay-on-subscribe.
//!
//! `Relay<T>` keeps a current value and an explicit list of subscriber
//! queues. New subscribers receive the value held at subscription time
//! before anything else; after that, every `set` is delivered to every
//! live subscriber exactly once, in order. Screens bind their loading
//! state and list contents through relays.
//!
//! # Delivery Model
//!
//! Delivery is queue-based, not coalescing: a subscriber that falls
//! behind still observes each intermediate value. The value and the
//! subscriber list are guarded together, so the order a subscriber
//! drains its queue in is the order the values were applied in.

use crate::state::LoadingState;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Inner state of a relay: the held value and the live subscriber queues,
/// guarded together so fan-out order matches value order.
struct RelayState<T> {
    /// The value replayed to new subscribers.
    value: T,
    /// Send halves of the subscriber queues. Closed queues are pruned on
    /// the next fan-out.
    subscribers: Vec<mpsc::UnboundedSender<T>>,
}

/// An observable value holder.
///
/// `Relay<T>` provides:
/// - `get()`: synchronously read the current value
/// - `set()` / `update()`: replace the value and notify subscribers
/// - `subscribe()`: get a [`Subscription`] that first yields the current
///   value, then every subsequent transition
///
/// # Thread Safety
///
/// `Relay<T>` is `Send + Sync`; clones share the same state. Mutations
/// serialize on an internal lock held only for the clone-and-enqueue.
///
/// # Example
///
/// ```rust,ignore
/// use shiori_core::Relay;
///
/// let relay = Relay::new(0);
/// let mut sub = relay.subscribe();
///
/// relay.set(1);
/// relay.set(2);
///
/// assert_eq!(sub.try_recv(), Some(0)); // replayed
/// assert_eq!(sub.try_recv(), Some(1));
/// assert_eq!(sub.try_recv(), Some(2));
/// assert_eq!(sub.try_recv(), None);
/// ```
pub struct Relay<T> {
    inner: Arc<Mutex<RelayState<T>>>,
}

impl<T> Clone for Relay<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Relay<T> {
    /// Create a new relay holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RelayState {
                value,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Replace the value and deliver it to every live subscriber.
    pub fn set(&self, value: T) {
        let mut state = self.inner.lock();
        Self::apply(&mut state, value);
    }

    /// Replace the value with `f(current)` and deliver the result.
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        let mut state = self.inner.lock();
        let next = f(state.value.clone());
        Self::apply(&mut state, next);
    }

    /// Subscribe to this relay.
    ///
    /// The current value is enqueued before the subscription is returned,
    /// so the first receive always yields the value held at subscription
    /// time. Every later `set` is then delivered exactly once, in order.
    pub fn subscribe(&self) -> Subscription<T> {
        let mut state = self.inner.lock();
        let (tx, rx) = mpsc::unbounded_channel();
        // Replay lands in the queue before the sender joins the list, so
        // no transition can slot in ahead of it.
        let _ = tx.send(state.value.clone());
        state.subscribers.push(tx);
        Subscription { receiver: rx }
    }

    /// Number of subscriber queues still registered.
    ///
    /// Closed queues are pruned on fan-out, so the count reflects
    /// subscriptions live as of the last `set`.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    fn apply(state: &mut RelayState<T>, value: T) {
        state.value = value.clone();
        state
            .subscribers
            .retain(|tx| tx.send(value.clone()).is_ok());
    }
}

impl<T: Clone + Send + Default + 'static> Default for Relay<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + std::fmt::Debug + 'static> std::fmt::Debug for Relay<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relay")
            .field("value", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Receiving half of one relay subscription.
///
/// Values arrive in application order: the replayed value first, then
/// each transition exactly once. Once every handle of the relay has been
/// dropped and the queue is drained, `recv` returns `None`.
pub struct Subscription<T> {
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    /// Wait for the next value.
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Take the next value without waiting, if one is queued.
    pub fn try_recv(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }
}

// =============================================================================
// Loading-state vocabulary
// =============================================================================

/// Relay specialized to one operation's [`LoadingState`].
pub type LoadingRelay<T, E> = Relay<LoadingState<T, E>>;

impl<T, E> Relay<LoadingState<T, E>>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Create a relay holding `Standby`.
    pub fn standby() -> Self {
        Self::new(LoadingState::Standby)
    }

    /// Reset to `Standby`.
    pub fn set_standby(&self) {
        self.set(LoadingState::Standby);
    }

    /// Mark the operation in flight.
    pub fn set_loading(&self) {
        self.set(LoadingState::Loading);
    }

    /// Finish the operation with a success value.
    pub fn set_done(&self, value: T) {
        self.set(LoadingState::Done(value));
    }

    /// Finish the operation with an error.
    pub fn set_failed(&self, error: E) {
        self.set(LoadingState::Failed(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_relay_new_and_get() {
        let relay = Relay::new(42);
        assert_eq!(relay.get(), 42);
    }

    #[test]
    fn test_relay_set() {
        let relay = Relay::new(0);
        relay.set(100);
        assert_eq!(relay.get(), 100);
    }

    #[test]
    fn test_relay_update() {
        let relay = Relay::new(10);
        relay.update(|x| x * 2);
        assert_eq!(relay.get(), 20);
    }

    #[test]
    fn test_relay_clone_shares_state() {
        let r1 = Relay::new(0);
        let r2 = r1.clone();

        r1.set(42);
        assert_eq!(r2.get(), 42);
    }

    #[test]
    fn test_subscribe_replays_current_value() {
        let relay = Relay::new(7);
        let mut sub = relay.subscribe();

        assert_eq!(sub.try_recv(), Some(7));
        assert_eq!(sub.try_recv(), None);
    }

    #[test]
    fn test_subscriber_sees_every_transition_in_order() {
        let relay = Relay::new(0);
        let mut sub = relay.subscribe();

        relay.set(1);
        relay.set(2);
        relay.set(3);

        // Queue-based, not coalescing: intermediate values are kept.
        assert_eq!(sub.try_recv(), Some(0));
        assert_eq!(sub.try_recv(), Some(1));
        assert_eq!(sub.try_recv(), Some(2));
        assert_eq!(sub.try_recv(), Some(3));
        assert_eq!(sub.try_recv(), None);
    }

    #[test]
    fn test_multiple_subscribers_each_get_one_copy() {
        let relay = Relay::new(0);
        let mut sub1 = relay.subscribe();
        let mut sub2 = relay.subscribe();

        relay.set(42);

        assert_eq!(sub1.try_recv(), Some(0));
        assert_eq!(sub1.try_recv(), Some(42));
        assert_eq!(sub1.try_recv(), None);
        assert_eq!(sub2.try_recv(), Some(0));
        assert_eq!(sub2.try_recv(), Some(42));
        assert_eq!(sub2.try_recv(), None);
    }

    #[test]
    fn test_late_subscriber_gets_latest_only() {
        let relay = Relay::new(1);
        relay.set(2);
        relay.set(3);

        let mut sub = relay.subscribe();
        assert_eq!(sub.try_recv(), Some(3));
        assert_eq!(sub.try_recv(), None);
    }

    #[test]
    fn test_dropped_subscription_is_pruned() {
        let relay = Relay::new(0);
        let sub1 = relay.subscribe();
        let _sub2 = relay.subscribe();
        assert_eq!(relay.subscriber_count(), 2);

        drop(sub1);
        relay.set(1);
        assert_eq!(relay.subscriber_count(), 1);
    }

    #[test]
    fn test_loading_relay_vocabulary() {
        let relay: LoadingRelay<u32, String> = LoadingRelay::standby();
        let mut sub = relay.subscribe();

        relay.set_loading();
        relay.set_done(5);
        relay.set_failed("boom".to_string());
        relay.set_standby();

        assert_eq!(sub.try_recv(), Some(LoadingState::Standby));
        assert_eq!(sub.try_recv(), Some(LoadingState::Loading));
        assert_eq!(sub.try_recv(), Some(LoadingState::Done(5)));
        assert_eq!(sub.try_recv(), Some(LoadingState::Failed("boom".to_string())));
        assert_eq!(sub.try_recv(), Some(LoadingState::Standby));
        assert_eq!(sub.try_recv(), None);
    }

    #[test]
    fn test_transitions_are_unconditional() {
        // Done directly from Standby, Failed after Done: the relay never
        // rejects a transition, the latest write wins.
        let relay: LoadingRelay<u32, String> = LoadingRelay::standby();
        relay.set_done(1);
        assert!(relay.get().is_done());
        relay.set_failed("late error".to_string());
        assert!(relay.get().is_failed());
    }

    #[test]
    fn test_recv_pending_until_set() {
        let relay = Relay::new(0);
        let mut sub = relay.subscribe();
        assert_eq!(sub.try_recv(), Some(0));

        let mut fut = tokio_test::task::spawn(sub.recv());
        tokio_test::assert_pending!(fut.poll());

        relay.set(9);
        assert!(fut.is_woken());
        tokio_test::assert_ready_eq!(fut.poll(), Some(9));
    }

    #[tokio::test]
    async fn test_recv_returns_none_after_relay_dropped() {
        let relay = Relay::new(1);
        let mut sub = relay.subscribe();
        drop(relay);

        // The replayed value is still queued; after that the channel is
        // closed.
        assert_eq!(sub.recv().await, Some(1));
        assert_eq!(sub.recv().await, None);
    }

    proptest! {
        #[test]
        fn prop_get_equals_last_applied(values in proptest::collection::vec(any::<u32>(), 1..32)) {
            let relay = Relay::new(0u32);
            for value in &values {
                relay.set(*value);
            }
            prop_assert_eq!(relay.get(), *values.last().unwrap());
        }

        #[test]
        fn prop_subscriber_drains_exact_sequence(values in proptest::collection::vec(any::<u32>(), 0..32)) {
            let relay = Relay::new(0u32);
            let mut sub = relay.subscribe();
            for value in &values {
                relay.set(*value);
            }

            prop_assert_eq!(sub.try_recv(), Some(0));
            for value in &values {
                prop_assert_eq!(sub.try_recv(), Some(*value));
            }
            prop_assert_eq!(sub.try_recv(), None);
        }
    }
}
