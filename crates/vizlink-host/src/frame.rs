//! The facade a consumer instantiates.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;
use vizlink_wire::{
    RemoveLinkedConfiguration, TriggerConfigurationUpdate, UpdateImageValue,
    UpdateLinkedConfigurationCardinality, UpdateRequirement, UpdateRequirements, UpdateTextValue,
    ViewerEvent, ViewerMessage,
};

use crate::callbacks::{CallbackRegistry, SubscriptionId};
use crate::error::{HostError, Result};
use crate::registry::ListenerRegistry;
use crate::sender::EventSender;
use crate::window::{MessageWindow, SurfaceHandle};

/// What the external render-target resolver produces for one embedding.
///
/// Resolving a DOM container and creating the embedded surface are the
/// embedding's concern; the protocol only needs a window to listen on and
/// a (possibly not yet ready) handle to post into.
pub struct FrameOptions {
    /// The host-side window the embedded surface posts back into.
    /// `None` when the resolver could not locate the render target.
    pub host_window: Option<MessageWindow>,
    /// Handle to the embedded surface's window.
    pub surface: SurfaceHandle,
}

/// Keeps host-side configuration state and an embedded visualization in
/// sync over the cross-context message channel.
///
/// Owns the sender, listener registry and callback fan-out it wires
/// together; construction attaches all inbound listeners synchronously, so
/// a successfully constructed frame is fully active. Subscriptions are
/// scoped to the frame and released together when it is dropped.
///
/// ```
/// use vizlink_host::{FrameOptions, MessageWindow, SurfaceHandle, VisualizationFrame};
///
/// let frame = VisualizationFrame::new(FrameOptions {
///     host_window: Some(MessageWindow::new()),
///     surface: SurfaceHandle::ready(MessageWindow::new()),
/// })
/// .expect("frame should construct");
///
/// frame.on_trigger_configuration_update(|| {
///     // re-send the full configuration state
/// });
/// frame.send_trigger_configuration_update().expect("surface is ready");
/// ```
pub struct VisualizationFrame {
    surface: SurfaceHandle,
    sender: EventSender,
    registry: ListenerRegistry,
    callbacks: CallbackRegistry,
}

impl std::fmt::Debug for VisualizationFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualizationFrame").finish_non_exhaustive()
    }
}

impl VisualizationFrame {
    /// Validate the render-target binding and wire the protocol up.
    ///
    /// Fails with [`HostError::TargetResolution`] when the resolver did not
    /// supply a host window; that error aborts construction and is never
    /// recovered locally.
    pub fn new(options: FrameOptions) -> Result<Self> {
        let host_window = options.host_window.ok_or_else(|| {
            HostError::TargetResolution("render target did not supply a host window".to_string())
        })?;

        let mut registry = ListenerRegistry::new();
        registry.attach(&host_window);

        let callbacks = CallbackRegistry::new();
        for event in ViewerEvent::INBOUND {
            let callbacks = callbacks.clone();
            registry.register_listener(event, move |envelope| {
                callbacks.dispatch(event, &envelope.args);
            });
        }

        Ok(Self {
            sender: EventSender::new(options.surface.clone()),
            surface: options.surface,
            registry,
            callbacks,
        })
    }

    /// The non-owning handle to the embedded surface.
    pub fn surface(&self) -> &SurfaceHandle {
        &self.surface
    }

    /// Run one delivery turn of the host window. Embeddings call this from
    /// their own message loop.
    pub fn pump(&self) {
        self.registry.pump();
    }

    /// Remove a subscription made through any `on_*` method.
    pub fn off(&self, id: SubscriptionId) -> bool {
        self.callbacks.off(id)
    }

    fn on_typed<T, F>(&self, event: ViewerEvent, mut callback: F) -> SubscriptionId
    where
        T: DeserializeOwned,
        F: FnMut(T) + 'static,
    {
        self.callbacks.on(event, move |args| {
            match serde_json::from_value::<T>(args.clone()) {
                Ok(data) => callback(data),
                Err(error) => warn!(
                    event = event.as_str(),
                    %error,
                    "dropping message with malformed payload"
                ),
            }
        })
    }

    /// Subscribe to the surface asking for a full configuration re-send.
    pub fn on_trigger_configuration_update(
        &self,
        mut callback: impl FnMut() + 'static,
    ) -> SubscriptionId {
        self.callbacks
            .on(ViewerEvent::TriggerConfigurationUpdate, move |_| callback())
    }

    /// Subscribe to single-requirement updates coming from the surface.
    pub fn on_update_requirement(
        &self,
        callback: impl FnMut(UpdateRequirement) + 'static,
    ) -> SubscriptionId {
        self.on_typed(ViewerEvent::UpdateRequirement, callback)
    }

    /// Subscribe to batched requirement updates coming from the surface.
    pub fn on_update_requirements(
        &self,
        callback: impl FnMut(UpdateRequirements) + 'static,
    ) -> SubscriptionId {
        self.on_typed(ViewerEvent::UpdateRequirements, callback)
    }

    /// Subscribe to image value updates coming from the surface.
    pub fn on_update_image_value(
        &self,
        callback: impl FnMut(UpdateImageValue) + 'static,
    ) -> SubscriptionId {
        self.on_typed(ViewerEvent::UpdateImageValue, callback)
    }

    /// Subscribe to text value updates coming from the surface.
    pub fn on_update_text_value(
        &self,
        callback: impl FnMut(UpdateTextValue) + 'static,
    ) -> SubscriptionId {
        self.on_typed(ViewerEvent::UpdateTextValue, callback)
    }

    /// Subscribe to linked-configuration cardinality changes.
    pub fn on_update_linked_configuration_cardinality(
        &self,
        callback: impl FnMut(UpdateLinkedConfigurationCardinality) + 'static,
    ) -> SubscriptionId {
        self.on_typed(ViewerEvent::UpdateLinkedConfigurationCardinality, callback)
    }

    /// Subscribe to linked-configuration removals.
    pub fn on_remove_linked_configuration(
        &self,
        callback: impl FnMut(RemoveLinkedConfiguration) + 'static,
    ) -> SubscriptionId {
        self.on_typed(ViewerEvent::RemoveLinkedConfiguration, callback)
    }

    /// Subscribe to configuration-feature drags. The payload is the opaque
    /// feature record, passed through unmodified.
    pub fn on_drag_started(&self, mut callback: impl FnMut(Value) + 'static) -> SubscriptionId {
        self.callbacks
            .on(ViewerEvent::DragStarted, move |args| callback(args.clone()))
    }

    /// Ask the surface to request a configuration re-send cycle.
    pub fn send_trigger_configuration_update(&self) -> Result<()> {
        self.sender.send(ViewerMessage::TriggerConfigurationUpdate(
            TriggerConfigurationUpdate {},
        ))
    }

    /// Send a single requirement update into the surface.
    pub fn send_update_requirement(&self, data: UpdateRequirement) -> Result<()> {
        self.sender.send(ViewerMessage::UpdateRequirement(data))
    }

    /// Send a batched requirement update into the surface. The batch order
    /// is preserved verbatim on the wire.
    pub fn send_update_requirements(&self, data: UpdateRequirements) -> Result<()> {
        self.sender.send(ViewerMessage::UpdateRequirements(data))
    }

    /// Send an image value update into the surface.
    pub fn send_update_image_value(&self, data: UpdateImageValue) -> Result<()> {
        self.sender.send(ViewerMessage::UpdateImageValue(data))
    }

    /// Send a text value update into the surface.
    pub fn send_update_text_value(&self, data: UpdateTextValue) -> Result<()> {
        self.sender.send(ViewerMessage::UpdateTextValue(data))
    }

    /// Send a linked-configuration cardinality change into the surface.
    pub fn send_update_linked_configuration_cardinality(
        &self,
        data: UpdateLinkedConfigurationCardinality,
    ) -> Result<()> {
        self.sender
            .send(ViewerMessage::UpdateLinkedConfigurationCardinality(data))
    }

    /// Send a linked-configuration removal into the surface.
    pub fn send_remove_linked_configuration(
        &self,
        data: RemoveLinkedConfiguration,
    ) -> Result<()> {
        self.sender.send(ViewerMessage::RemoveLinkedConfiguration(data))
    }

    /// Push an opaque configuration-feature drag into the surface.
    pub fn send_drag_started(&self, feature: Value) -> Result<()> {
        self.sender.send(ViewerMessage::DragStarted(feature))
    }

    /// Push a full configuration snapshot into the surface.
    pub fn send_configuration_updated(&self, configuration: Value) -> Result<()> {
        self.sender.send(ViewerMessage::ConfigurationUpdated(configuration))
    }

    /// Push a step snapshot into the surface.
    pub fn send_step_changed(&self, step: Value) -> Result<()> {
        self.sender.send(ViewerMessage::StepChanged(step))
    }
}
