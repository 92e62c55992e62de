//! Posts typed messages into the embedded surface.

use tracing::debug;
use vizlink_wire::ViewerMessage;

use crate::error::{HostError, Result};
use crate::window::SurfaceHandle;

/// Serializes typed messages and posts them into the surface window.
pub struct EventSender {
    surface: SurfaceHandle,
}

impl EventSender {
    /// Create a sender over a surface handle.
    pub fn new(surface: SurfaceHandle) -> Self {
        Self { surface }
    }

    /// Encode `message` into an envelope, sanitize its payload, and post it.
    ///
    /// Fails with [`HostError::DeliveryTargetUnavailable`] when the surface
    /// window does not exist yet; the check happens before any encoding or
    /// post attempt. Delivery itself is fire-and-forget.
    pub fn send(&self, message: ViewerMessage) -> Result<()> {
        let window = self
            .surface
            .window()
            .ok_or(HostError::DeliveryTargetUnavailable)?;
        let envelope = message.into_envelope()?;
        debug!(event = envelope.name.as_str(), "posting envelope to surface");
        window.post(envelope);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vizlink_wire::{UpdateTextValue, ViewerMessage};

    use super::*;
    use crate::window::MessageWindow;

    fn text_value_message() -> ViewerMessage {
        ViewerMessage::UpdateTextValue(UpdateTextValue {
            configuration_id: "00000000-0000-0000-0000-000000000000".to_string(),
            node_id: "00000000-0000-0000-0000-000000000000".to_string(),
            value: "Custom text value".to_string(),
        })
    }

    #[test]
    fn send_fails_before_the_surface_is_ready() {
        let handle = SurfaceHandle::new();
        let sender = EventSender::new(handle.clone());

        let err = sender
            .send(text_value_message())
            .expect_err("send should fail without a surface window");
        assert!(matches!(err, HostError::DeliveryTargetUnavailable));

        // Nothing may have been posted anywhere.
        handle.attach(MessageWindow::new());
        assert_eq!(
            handle.window().expect("window should be attached").pending(),
            0
        );
    }

    #[test]
    fn send_posts_one_envelope() {
        let window = MessageWindow::new();
        let sender = EventSender::new(SurfaceHandle::ready(window.clone()));

        sender.send(text_value_message()).expect("send should succeed");
        assert_eq!(window.pending(), 1);
    }

    #[test]
    fn send_sanitizes_opaque_payloads() {
        let window = MessageWindow::new();
        let sender = EventSender::new(SurfaceHandle::ready(window.clone()));

        sender
            .send(ViewerMessage::ConfigurationUpdated(json!({
                "id": "c1",
                "_configuratorContext": { "live": true },
            })))
            .expect("send should succeed");

        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = std::rc::Rc::clone(&seen);
        window.set_observer(move |e| sink.borrow_mut().push(e.clone()));
        window.deliver_pending();

        let received = seen.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].name, "elfsquad.configurationUpdated");
        assert_eq!(received[0].args, json!({ "id": "c1" }));
    }

    #[test]
    fn send_works_once_the_surface_attaches() {
        let handle = SurfaceHandle::new();
        let sender = EventSender::new(handle.clone());
        assert!(sender.send(text_value_message()).is_err());

        let window = MessageWindow::new();
        handle.attach(window.clone());
        sender.send(text_value_message()).expect("send should succeed");
        assert_eq!(window.pending(), 1);
    }
}
