//! Payload records, one per catalog event.
//!
//! Optional members are skipped entirely when absent. An absent
//! `configurationId` means "apply to the root configuration" and that
//! decision belongs to the external configurator engine, so the protocol
//! never serializes it as `null` or fills in a default.

use serde::{Deserialize, Serialize};

/// Update a single requirement value on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequirement {
    /// Configuration to update. Absent means the root configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// The node to update.
    pub node_id: String,
    /// The value to set.
    pub value: f64,
    /// Whether this requirement is a selection requirement.
    pub is_selection: bool,
    /// Whether the engine should try to automatically resolve conflicts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_conflicts: Option<bool>,
}

/// Update an ordered batch of requirements.
///
/// The `requirements` sequence order is application order; the protocol
/// preserves it verbatim but does not enforce atomic application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequirements {
    /// Configuration to update. Absent means the root configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// Whether the engine should try to automatically resolve conflicts.
    pub ignore_conflicts: bool,
    /// Whether searchbar results are included in the update.
    pub include_searchbar_results: bool,
    /// The requirement updates, in application order.
    pub requirements: Vec<UpdateRequirement>,
}

/// Set a base64-encoded image value on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImageValue {
    /// Configuration to update.
    pub configuration_id: String,
    /// The node to update.
    pub node_id: String,
    /// The image to set, base64 encoded.
    pub image: String,
}

/// Set a text value on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextValue {
    /// Configuration to update.
    pub configuration_id: String,
    /// The node to update.
    pub node_id: String,
    /// The text value to set.
    pub value: String,
}

/// Change the cardinality of a linked configuration under a parent node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkedConfigurationCardinality {
    /// Parent configuration. Absent means the root configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// The parent node the linked configuration hangs off.
    pub parent_node_id: String,
    /// The new cardinality.
    pub cardinality: i64,
    /// Code of the configuration to instantiate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_code: Option<String>,
}

/// Remove a linked configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLinkedConfiguration {
    /// Parent configuration. Absent means the root configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    /// The linked configuration to remove.
    pub linked_configuration_id: String,
}

/// Ask the host to re-send the full configuration state.
///
/// Deliberately empty: the trigger carries `{}` on the wire. A variant
/// carrying an image existed in some historical call sites and is not
/// supported here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfigurationUpdate {}
