//! Wire contract for the host/embedded-surface messaging protocol.
//!
//! This is the shared vocabulary both sides of the isolation boundary must
//! agree on. Every message crossing the boundary is an envelope:
//!
//! ```text
//! { "name": "<event-name-string>", "args": <payload matching name> }
//! ```
//!
//! The crate defines the closed event catalog, the envelope, the payload
//! record for each event, and the sanitization pass applied before a payload
//! is allowed to cross. No transport or dispatch logic lives here.

pub mod envelope;
pub mod error;
pub mod event;
pub mod models;
pub mod sanitize;

pub use envelope::{Envelope, ViewerMessage};
pub use error::{Result, WireError};
pub use event::{Direction, ViewerEvent};
pub use models::{
    RemoveLinkedConfiguration, TriggerConfigurationUpdate, UpdateImageValue,
    UpdateLinkedConfigurationCardinality, UpdateRequirement, UpdateRequirements, UpdateTextValue,
};
pub use sanitize::sanitize;
