//! The `{ name, args }` envelope and its typed counterpart.
//!
//! `Envelope` is the raw wire record: the listener layer works on it so
//! that traffic with unrecognized names passes through untouched.
//! `ViewerMessage` is the closed tagged union tying each catalog name to its
//! payload type; a mismatched name/payload pair is unrepresentable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, WireError};
use crate::event::ViewerEvent;
use crate::models::{
    RemoveLinkedConfiguration, TriggerConfigurationUpdate, UpdateImageValue,
    UpdateLinkedConfigurationCardinality, UpdateRequirement, UpdateRequirements, UpdateTextValue,
};
use crate::sanitize::sanitize;

/// A raw cross-context message.
///
/// Constructed immediately before a post and discarded after dispatch;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// The event name. Always a catalog member when produced by this crate;
    /// incoming traffic may carry anything.
    pub name: String,
    /// The payload. Shape is determined solely by `name`.
    pub args: Value,
}

/// A typed protocol message: one variant per catalog event.
///
/// Serializes to the exact envelope JSON (`name` tag, `args` content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "args")]
pub enum ViewerMessage {
    #[serde(rename = "elfsquad.triggerConfigurationUpdated")]
    TriggerConfigurationUpdate(TriggerConfigurationUpdate),
    #[serde(rename = "elfsquad.updateRequirement")]
    UpdateRequirement(UpdateRequirement),
    #[serde(rename = "elfsquad.updateRequirements")]
    UpdateRequirements(UpdateRequirements),
    #[serde(rename = "elfsquad.updateImageValue")]
    UpdateImageValue(UpdateImageValue),
    #[serde(rename = "elfsquad.updateTextValue")]
    UpdateTextValue(UpdateTextValue),
    #[serde(rename = "elfsquad.updateLinkedConfigurationCardinality")]
    UpdateLinkedConfigurationCardinality(UpdateLinkedConfigurationCardinality),
    #[serde(rename = "elfsquad.removeLinkedConfiguration")]
    RemoveLinkedConfiguration(RemoveLinkedConfiguration),
    /// Opaque configuration feature record, passed through unmodified.
    #[serde(rename = "elfsquad.dragStarted")]
    DragStarted(Value),
    /// Opaque configuration snapshot, passed through after sanitization.
    #[serde(rename = "elfsquad.configurationUpdated")]
    ConfigurationUpdated(Value),
    /// Opaque step snapshot, passed through after sanitization.
    #[serde(rename = "elfsquad.stepChanged")]
    StepChanged(Value),
}

impl ViewerMessage {
    /// The catalog event this message carries.
    pub fn event(&self) -> ViewerEvent {
        match self {
            ViewerMessage::TriggerConfigurationUpdate(_) => {
                ViewerEvent::TriggerConfigurationUpdate
            }
            ViewerMessage::UpdateRequirement(_) => ViewerEvent::UpdateRequirement,
            ViewerMessage::UpdateRequirements(_) => ViewerEvent::UpdateRequirements,
            ViewerMessage::UpdateImageValue(_) => ViewerEvent::UpdateImageValue,
            ViewerMessage::UpdateTextValue(_) => ViewerEvent::UpdateTextValue,
            ViewerMessage::UpdateLinkedConfigurationCardinality(_) => {
                ViewerEvent::UpdateLinkedConfigurationCardinality
            }
            ViewerMessage::RemoveLinkedConfiguration(_) => ViewerEvent::RemoveLinkedConfiguration,
            ViewerMessage::DragStarted(_) => ViewerEvent::DragStarted,
            ViewerMessage::ConfigurationUpdated(_) => ViewerEvent::ConfigurationUpdated,
            ViewerMessage::StepChanged(_) => ViewerEvent::StepChanged,
        }
    }

    /// Serialize into a wire envelope, sanitizing the payload.
    pub fn into_envelope(self) -> Result<Envelope> {
        let event = self.event();
        let value = serde_json::to_value(self)?;
        let mut args = match value {
            Value::Object(mut obj) => obj.remove("args").unwrap_or(Value::Null),
            other => other,
        };
        sanitize(&mut args);
        Ok(Envelope {
            name: event.as_str().to_string(),
            args,
        })
    }
}

impl Envelope {
    /// Decode into a typed message.
    ///
    /// Fails with [`WireError::UnknownEvent`] for names outside the catalog
    /// and [`WireError::Json`] when `args` does not match the shape the
    /// name declares.
    pub fn to_message(&self) -> Result<ViewerMessage> {
        if ViewerEvent::from_name(&self.name).is_none() {
            return Err(WireError::UnknownEvent {
                name: self.name.clone(),
            });
        }
        let value = serde_json::json!({ "name": self.name, "args": self.args });
        Ok(serde_json::from_value(value)?)
    }

    /// The catalog event named by this envelope, if any.
    pub fn event(&self) -> Option<ViewerEvent> {
        ViewerEvent::from_name(&self.name)
    }
}
