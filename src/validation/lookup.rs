//! Dotted-path field lookup over an arbitrary JSON payload.

use serde_json::Value;

/// Resolve a dotted path (e.g. `businessProfile.taxIdentifiers.pan`) by
/// descending the payload one key at a time.
///
/// Returns `None` when any step is absent or the current value is not an
/// object. Absence is not an error: the caller decides what a missing
/// field means. Keys are case-sensitive; there is no wildcard or array
/// index support.
pub fn field_at_path<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = payload;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
