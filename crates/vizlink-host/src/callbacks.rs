//! Host-side subscriber fan-out.

use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use serde_json::Value;
use tracing::warn;
use vizlink_wire::ViewerEvent;

/// Token returned from [`CallbackRegistry::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type CallbackFn = Box<dyn FnMut(&Value)>;

struct Subscription {
    id: SubscriptionId,
    event: ViewerEvent,
    callback: Rc<RefCell<CallbackFn>>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

/// Fans dispatched events out to subscribers.
///
/// Subscribers for an event run in registration order and all receive the
/// same payload reference; they must not assume isolation from each other.
/// Handles are cheap clones sharing one subscriber table, so the facade's
/// forwarding closures and its subscribe methods operate on the same state.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    inner: Rc<RefCell<Inner>>,
}

impl CallbackRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to an event. Returns a token for [`CallbackRegistry::off`].
    pub fn on(&self, event: ViewerEvent, callback: impl FnMut(&Value) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.subscriptions.push(Subscription {
            id,
            event,
            callback: Rc::new(RefCell::new(Box::new(callback))),
        });
        id
    }

    /// Remove one subscription. Returns whether it existed.
    ///
    /// Remaining subscribers keep their relative registration order.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscriptions.len();
        inner.subscriptions.retain(|s| s.id != id);
        inner.subscriptions.len() != before
    }

    /// Invoke every subscriber registered for `event`, in registration
    /// order, passing the same `data` reference to each.
    ///
    /// Zero subscribers is a no-op. A panicking subscriber is logged and
    /// does not prevent the remaining subscribers of this dispatch from
    /// running.
    pub fn dispatch(&self, event: ViewerEvent, data: &Value) {
        // Snapshot the matching callbacks so subscribers may call
        // `on`/`off` while the dispatch runs.
        let callbacks: Vec<Rc<RefCell<CallbackFn>>> = self
            .inner
            .borrow()
            .subscriptions
            .iter()
            .filter(|s| s.event == event)
            .map(|s| Rc::clone(&s.callback))
            .collect();

        for callback in callbacks {
            let outcome = catch_unwind(AssertUnwindSafe(|| (&mut *callback.borrow_mut())(data)));
            if outcome.is_err() {
                warn!(event = event.as_str(), "subscriber panicked during dispatch");
            }
        }
    }

    /// Number of live subscriptions for `event`.
    pub fn subscriber_count(&self, event: ViewerEvent) -> usize {
        self.inner
            .borrow()
            .subscriptions
            .iter()
            .filter(|s| s.event == event)
            .count()
    }
}
