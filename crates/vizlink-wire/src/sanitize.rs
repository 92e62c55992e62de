//! Payload sanitization for the isolation boundary.
//!
//! The crossing mechanism can only carry structurally cloneable data. Typed
//! payloads cannot hold anything else, but the opaque records handed over by
//! the external configurator engine arrive with live engine handles attached
//! (e.g. `_configuratorContext`), marked by a leading underscore. Those must
//! never reach the boundary or the post fails inside the transport.

use serde_json::Value;

/// Strip every top-level member that cannot cross the surface boundary.
///
/// Shallow by contract: only the top level of an object payload is
/// inspected. Non-object payloads are left untouched. Idempotent.
pub fn sanitize(args: &mut Value) {
    if let Value::Object(map) = args {
        map.retain(|key, _| !key.starts_with('_'));
    }
}
