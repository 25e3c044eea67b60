use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::string::{sanitize_str, DEFAULT_MAX_STRING_LENGTH};

pub const MAX_PROPERTY_COUNT: usize = 100;
pub const MAX_PROPERTY_KEY_LENGTH: usize = 128;

/// 1 MiB, checked against the JSON serialization of the payload.
pub const MAX_PAYLOAD_SIZE: usize = 1_048_576;

/// Reduces a free-form property bag to a bounded map of sanitized scalars.
/// Non-object input degrades to an empty map. At most the first
/// [`MAX_PROPERTY_COUNT`] keys are considered; keys sanitize to at most
/// [`MAX_PROPERTY_KEY_LENGTH`] characters and are dropped when nothing
/// remains. Nested objects and arrays are dropped with their keys.
pub fn validate_properties(input: &Value) -> HashMap<String, Value> {
    let Some(object) = input.as_object() else {
        return HashMap::new();
    };

    let mut bag = HashMap::new();
    for (key, value) in object.iter().take(MAX_PROPERTY_COUNT) {
        let key = sanitize_str(key, MAX_PROPERTY_KEY_LENGTH);
        if key.is_empty() {
            continue;
        }
        let sanitized = match value {
            Value::String(s) => Value::String(sanitize_str(s, DEFAULT_MAX_STRING_LENGTH)),
            Value::Number(_) | Value::Bool(_) | Value::Null => value.clone(),
            Value::Object(_) | Value::Array(_) => continue,
        };
        bag.insert(key, sanitized);
    }
    bag
}

/// Admission check: serializes `data` to JSON and compares the byte length
/// against `max_size`. A value that cannot be serialized fails the check.
pub fn validate_payload_size<T: Serialize>(data: &T, max_size: usize) -> bool {
    match serde_json::to_vec(data) {
        Ok(serialized) => serialized.len() <= max_size,
        Err(_) => false,
    }
}
