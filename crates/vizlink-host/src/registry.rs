//! Filters incoming cross-context traffic by event name.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;
use vizlink_wire::{Envelope, ViewerEvent};

use crate::window::MessageWindow;

type ListenerFn = Box<dyn FnMut(&Envelope)>;

struct FilterEntry {
    event: ViewerEvent,
    handler: ListenerFn,
}

/// Dispatches incoming envelopes to per-event handlers.
///
/// One registry installs exactly one underlying observer on the window it
/// attaches to, shared by every event name registered afterwards. Each
/// registration adds an independent filter: every incoming envelope is
/// offered to every filter, and a filter fires iff the envelope name equals
/// its event's wire string. Unmatched traffic passes through untouched —
/// unrelated cross-context messages are not an error.
///
/// There is no unregistration primitive: once attached, listeners live as
/// long as the window. That is a deliberate scope boundary of the protocol.
#[derive(Default)]
pub struct ListenerRegistry {
    filters: Rc<RefCell<Vec<FilterEntry>>>,
    window: Option<MessageWindow>,
}

impl ListenerRegistry {
    /// Create a registry with no filters and no attached window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install this registry's observer on `window`.
    pub fn attach(&mut self, window: &MessageWindow) {
        let filters = Rc::clone(&self.filters);
        window.set_observer(move |envelope| {
            let mut matched = false;
            for entry in filters.borrow_mut().iter_mut() {
                if entry.event.as_str() == envelope.name {
                    matched = true;
                    (entry.handler)(envelope);
                }
            }
            if !matched {
                trace!(name = envelope.name.as_str(), "ignoring unmatched message");
            }
        });
        self.window = Some(window.clone());
    }

    /// Register a handler for one event name.
    ///
    /// The handler receives the full envelope of every message whose name
    /// matches exactly. Filters for other events are unaffected.
    pub fn register_listener(
        &self,
        event: ViewerEvent,
        handler: impl FnMut(&Envelope) + 'static,
    ) {
        self.filters.borrow_mut().push(FilterEntry {
            event,
            handler: Box::new(handler),
        });
    }

    /// Run one delivery turn of the attached window.
    pub fn pump(&self) {
        if let Some(window) = &self.window {
            window.deliver_pending();
        }
    }
}
