//! Recursive merge of parsed JSON values.

use serde_json::Value;

/// Merge `incoming` into `base`.
///
/// Object keys merge recursively; every other pairing (arrays, scalars,
/// or a type change) replaces the base slot with the incoming value.
pub(crate) fn merge_value(base: &mut Value, incoming: Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(incoming_map)) => {
            for (key, value) in incoming_map {
                match base_map.get_mut(&key) {
                    Some(slot) => merge_value(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, incoming) => *slot = incoming,
    }
}
