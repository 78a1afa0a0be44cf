//! Shared test utilities for the argus workspace.
//!
//! `xtask` compares receipts at runtime, so this lives in its own crate instead of a
//! `#[cfg(test)]` module.

use serde_json::Value;

pub const VERSION_PLACEHOLDER: &str = "__VERSION__";
pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

const TIMESTAMP_KEYS: [&str; 2] = ["startedAt", "finishedAt"];

/// Normalize the fields of a receipt that change from run to run.
///
/// `tool.version` is replaced only when the root object is a receipt envelope (has
/// `schema`, `tool`, `subject`, `outcome`). Timestamps and `durationMs` are replaced at
/// any depth. `fingerprint` is left alone: it is deterministic.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "subject", "outcome"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool.contains_key("version")
        {
            tool.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    normalize_recursive(&mut value);
    value
}

fn normalize_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if map.contains_key(key) {
                    map.insert(
                        key.to_string(),
                        Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
                    );
                }
            }
            if map.contains_key("durationMs") {
                map.insert("durationMs".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_recursive(val);
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(normalize_recursive),
        _ => {}
    }
}
