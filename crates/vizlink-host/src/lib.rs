//! Host-side runtime for the embedded visualization protocol.
//!
//! This is the layer a consumer embeds. It wires three pieces together:
//! a sender posting typed envelopes into the embedded surface, a listener
//! registry filtering incoming envelopes by event name, and a callback
//! fan-out delivering matching payloads to subscribers. The
//! [`VisualizationFrame`] facade owns all three.
//!
//! Everything runs single-threaded and cooperative: a `post` is a
//! fire-and-forget enqueue, and delivery happens when the owning side runs
//! a turn of its message loop (`pump`).

pub mod callbacks;
pub mod error;
pub mod frame;
pub mod registry;
pub mod sender;
pub mod window;

pub use callbacks::{CallbackRegistry, SubscriptionId};
pub use error::{HostError, Result};
pub use frame::{FrameOptions, VisualizationFrame};
pub use registry::ListenerRegistry;
pub use sender::EventSender;
pub use window::{MessageWindow, SurfaceHandle};
