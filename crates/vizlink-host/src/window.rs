//! The cross-context channel abstraction.
//!
//! A [`MessageWindow`] stands in for one isolated execution context's
//! message queue: anyone holding a handle can post into it, and the
//! context's own side drains it one turn at a time. The embedding supplies
//! the concrete pair (host document window, embedded surface window); this
//! crate never resolves containers or creates surfaces itself.
//!
//! Handles are cheap clones sharing one queue. The whole model is
//! single-threaded and cooperative, so there are no locks.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use vizlink_wire::Envelope;

type Observer = Box<dyn FnMut(&Envelope)>;

/// A handle to one execution context's message queue.
#[derive(Clone, Default)]
pub struct MessageWindow {
    inner: Rc<WindowInner>,
}

#[derive(Default)]
struct WindowInner {
    inbox: RefCell<VecDeque<Envelope>>,
    observer: RefCell<Option<Observer>>,
    delivering: Cell<bool>,
}

impl MessageWindow {
    /// Create a new, empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post an envelope into this context.
    ///
    /// Fire-and-forget: the envelope is enqueued and the call returns
    /// immediately. Delivery happens on a later turn of the receiving
    /// side's loop; there is no acknowledgment and no delivery guarantee.
    pub fn post(&self, envelope: Envelope) {
        self.inner.inbox.borrow_mut().push_back(envelope);
    }

    /// Install the single underlying message observer for this window.
    ///
    /// At most one observer exists per window; installing a new one
    /// replaces the old. The listener registry owns this slot.
    pub fn set_observer(&self, observer: impl FnMut(&Envelope) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Box::new(observer));
    }

    /// Run one turn of this context's message loop.
    ///
    /// Drains the envelopes queued so far, in arrival order, through the
    /// observer. Envelopes posted while delivering are left for the next
    /// turn. Without an observer the drained envelopes are dropped
    /// (silent non-delivery).
    pub fn deliver_pending(&self) {
        if self.inner.delivering.replace(true) {
            return;
        }
        let batch: Vec<Envelope> = self.inner.inbox.borrow_mut().drain(..).collect();
        {
            let mut observer = self.inner.observer.borrow_mut();
            if let Some(observer) = observer.as_mut() {
                for envelope in &batch {
                    observer(envelope);
                }
            }
        }
        self.inner.delivering.set(false);
    }

    /// Number of envelopes queued and not yet delivered.
    pub fn pending(&self) -> usize {
        self.inner.inbox.borrow().len()
    }
}

impl std::fmt::Debug for MessageWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageWindow")
            .field("pending", &self.pending())
            .finish()
    }
}

/// A non-owning handle to the embedded surface's window.
///
/// The surface window typically does not exist until the embedded context
/// finishes initializing; sends before that fail with
/// `DeliveryTargetUnavailable` instead of reaching the transport.
#[derive(Clone, Default)]
pub struct SurfaceHandle {
    window: Rc<RefCell<Option<MessageWindow>>>,
}

impl SurfaceHandle {
    /// A handle with no window attached yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that is ready immediately.
    pub fn ready(window: MessageWindow) -> Self {
        let handle = Self::new();
        handle.attach(window);
        handle
    }

    /// Attach the surface window once the embedded context is up.
    pub fn attach(&self, window: MessageWindow) {
        *self.window.borrow_mut() = Some(window);
    }

    /// The surface window, if the surface has finished initializing.
    pub fn window(&self) -> Option<MessageWindow> {
        self.window.borrow().clone()
    }

    /// Whether the surface window exists.
    pub fn is_ready(&self) -> bool {
        self.window.borrow().is_some()
    }
}

impl std::fmt::Debug for SurfaceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceHandle")
            .field("ready", &self.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(name: &str) -> Envelope {
        Envelope {
            name: name.to_string(),
            args: json!({}),
        }
    }

    #[test]
    fn delivers_in_arrival_order() {
        let window = MessageWindow::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        window.set_observer(move |e| sink.borrow_mut().push(e.name.clone()));

        window.post(envelope("first"));
        window.post(envelope("second"));
        window.post(envelope("third"));
        window.deliver_pending();

        assert_eq!(*seen.borrow(), ["first", "second", "third"]);
        assert_eq!(window.pending(), 0);
    }

    #[test]
    fn posts_during_delivery_wait_for_the_next_turn() {
        let window = MessageWindow::new();
        let reposter = window.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        window.set_observer(move |e| {
            sink.borrow_mut().push(e.name.clone());
            if e.name == "first" {
                reposter.post(envelope("late"));
            }
        });

        window.post(envelope("first"));
        window.deliver_pending();
        assert_eq!(*seen.borrow(), ["first"]);
        assert_eq!(window.pending(), 1);

        window.deliver_pending();
        assert_eq!(*seen.borrow(), ["first", "late"]);
    }

    #[test]
    fn handles_share_one_queue() {
        let window = MessageWindow::new();
        let other_handle = window.clone();
        other_handle.post(envelope("via-clone"));
        assert_eq!(window.pending(), 1);
    }

    #[test]
    fn surface_handle_becomes_ready_on_attach() {
        let handle = SurfaceHandle::new();
        assert!(!handle.is_ready());
        assert!(handle.window().is_none());

        handle.attach(MessageWindow::new());
        assert!(handle.is_ready());
        assert!(handle.window().is_some());
    }

    #[test]
    fn surface_handle_clones_see_the_attach() {
        let handle = SurfaceHandle::new();
        let observer_side = handle.clone();
        handle.attach(MessageWindow::new());
        assert!(observer_side.is_ready());
    }
}
