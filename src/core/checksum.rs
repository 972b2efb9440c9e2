use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::core::{RaveError, Result};

/// Integrity checksum for inline (browser) checkout payloads.
///
/// Values are taken in byte-order of their keys, rendered as plain strings,
/// concatenated, suffixed with the secret key, and hashed with SHA-256.
pub fn integrity_checksum(payload: &Map<String, Value>, secret_key: &str) -> String {
    let mut keys: Vec<&String> = payload.keys().collect();
    keys.sort();

    let mut hasher = Sha256::new();
    for key in keys {
        hasher.update(render_value(&payload[key.as_str()]).as_bytes());
    }
    hasher.update(secret_key.as_bytes());

    hex::encode(hasher.finalize())
}

/// Serialize `payload` to a JSON object, then compute its checksum
pub fn integrity_checksum_for<T: Serialize>(payload: &T, secret_key: &str) -> Result<String> {
    match serde_json::to_value(payload)? {
        Value::Object(map) => Ok(integrity_checksum(&map, secret_key)),
        other => Err(RaveError::InvalidPayload(format!(
            "checksum payload must be a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Nested values render as compact JSON
        other => other.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
