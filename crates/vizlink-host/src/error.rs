use vizlink_wire::WireError;

/// Errors that can occur in host-side protocol operations.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The configured render target could not be resolved. Fatal to
    /// facade construction.
    #[error("render target could not be resolved: {0}")]
    TargetResolution(String),

    /// A send was attempted before the embedded surface window exists.
    /// Fatal to that send call only.
    #[error("embedded surface window is not available")]
    DeliveryTargetUnavailable,

    /// Wire-level encode/decode error.
    #[error("wire error: {0}")]
    Wire(#[from] WireError),
}

pub type Result<T> = std::result::Result<T, HostError>;
