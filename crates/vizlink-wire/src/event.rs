//! The closed catalog of recognized event names.
//!
//! Both sides of the boundary filter traffic by these exact strings. Adding
//! a capability means adding one variant here plus one payload record in
//! `models`.

/// Which side originates an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Sent by the host into the embedded surface only.
    HostToSurface,
    /// Sent by the embedded surface back to the host only.
    SurfaceToHost,
    /// Used in both directions (the host can drive the same command into
    /// the surface that the surface normally sends to the host).
    Bidirectional,
}

/// A recognized event name.
///
/// Names are globally unique and never reused for two payload shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerEvent {
    /// The surface asks the host to re-send the full configuration state.
    TriggerConfigurationUpdate,
    /// Update a single requirement value.
    UpdateRequirement,
    /// Update an ordered batch of requirement values.
    UpdateRequirements,
    /// Set a base64-encoded image value on a node.
    UpdateImageValue,
    /// Set a text value on a node.
    UpdateTextValue,
    /// Change the cardinality of a linked configuration under a parent node.
    UpdateLinkedConfigurationCardinality,
    /// Remove a linked configuration.
    RemoveLinkedConfiguration,
    /// A configuration feature drag began on the host side.
    DragStarted,
    /// Full configuration snapshot pushed into the surface.
    ConfigurationUpdated,
    /// Step snapshot pushed into the surface.
    StepChanged,
}

impl ViewerEvent {
    /// Every catalog member, in a stable order.
    pub const ALL: [ViewerEvent; 10] = [
        ViewerEvent::TriggerConfigurationUpdate,
        ViewerEvent::UpdateRequirement,
        ViewerEvent::UpdateRequirements,
        ViewerEvent::UpdateImageValue,
        ViewerEvent::UpdateTextValue,
        ViewerEvent::UpdateLinkedConfigurationCardinality,
        ViewerEvent::RemoveLinkedConfiguration,
        ViewerEvent::DragStarted,
        ViewerEvent::ConfigurationUpdated,
        ViewerEvent::StepChanged,
    ];

    /// Events the host subscribes to (everything the surface may send back).
    pub const INBOUND: [ViewerEvent; 8] = [
        ViewerEvent::TriggerConfigurationUpdate,
        ViewerEvent::UpdateRequirement,
        ViewerEvent::UpdateRequirements,
        ViewerEvent::UpdateImageValue,
        ViewerEvent::UpdateTextValue,
        ViewerEvent::UpdateLinkedConfigurationCardinality,
        ViewerEvent::RemoveLinkedConfiguration,
        ViewerEvent::DragStarted,
    ];

    /// The exact wire string for this event.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewerEvent::TriggerConfigurationUpdate => "elfsquad.triggerConfigurationUpdated",
            ViewerEvent::UpdateRequirement => "elfsquad.updateRequirement",
            ViewerEvent::UpdateRequirements => "elfsquad.updateRequirements",
            ViewerEvent::UpdateImageValue => "elfsquad.updateImageValue",
            ViewerEvent::UpdateTextValue => "elfsquad.updateTextValue",
            ViewerEvent::UpdateLinkedConfigurationCardinality => {
                "elfsquad.updateLinkedConfigurationCardinality"
            }
            ViewerEvent::RemoveLinkedConfiguration => "elfsquad.removeLinkedConfiguration",
            ViewerEvent::DragStarted => "elfsquad.dragStarted",
            ViewerEvent::ConfigurationUpdated => "elfsquad.configurationUpdated",
            ViewerEvent::StepChanged => "elfsquad.stepChanged",
        }
    }

    /// Look up a catalog member by its wire string.
    ///
    /// Returns `None` for unrecognized names; unrelated cross-context
    /// traffic must pass through untouched, so this is not an error.
    pub fn from_name(name: &str) -> Option<ViewerEvent> {
        ViewerEvent::ALL.into_iter().find(|e| e.as_str() == name)
    }

    /// The direction this event flows in.
    pub fn direction(self) -> Direction {
        match self {
            ViewerEvent::ConfigurationUpdated | ViewerEvent::StepChanged => {
                Direction::HostToSurface
            }
            ViewerEvent::TriggerConfigurationUpdate => Direction::SurfaceToHost,
            _ => Direction::Bidirectional,
        }
    }
}

impl std::fmt::Display for ViewerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_inverse_of_as_str() {
        for event in ViewerEvent::ALL {
            assert_eq!(ViewerEvent::from_name(event.as_str()), Some(event));
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = ViewerEvent::ALL.iter().map(|e| e.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ViewerEvent::ALL.len());
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        assert_eq!(ViewerEvent::from_name("elfsquad.unknownEvent"), None);
        assert_eq!(ViewerEvent::from_name(""), None);
    }

    #[test]
    fn inbound_set_excludes_push_only_events() {
        assert!(!ViewerEvent::INBOUND.contains(&ViewerEvent::ConfigurationUpdated));
        assert!(!ViewerEvent::INBOUND.contains(&ViewerEvent::StepChanged));
        assert!(ViewerEvent::INBOUND.contains(&ViewerEvent::TriggerConfigurationUpdate));
    }

    #[test]
    fn push_only_events_are_host_to_surface() {
        assert_eq!(
            ViewerEvent::ConfigurationUpdated.direction(),
            Direction::HostToSurface
        );
        assert_eq!(ViewerEvent::StepChanged.direction(), Direction::HostToSurface);
        assert_eq!(
            ViewerEvent::TriggerConfigurationUpdate.direction(),
            Direction::SurfaceToHost
        );
    }
}
