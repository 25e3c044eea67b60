use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Client, CustomRedisError};

/// Fetches and deserializes a JSON value. A missing key is `Ok(None)`; a
/// stored value that fails to deserialize is a `ParseError`.
pub async fn get_json<T: DeserializeOwned>(
    client: &dyn Client,
    key: String,
) -> Result<Option<T>, CustomRedisError> {
    match client.get(key).await {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(CustomRedisError::NotFound) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Serializes `value` to JSON and stores it without an expiry.
pub async fn set_json<T: Serialize>(
    client: &dyn Client,
    key: String,
    value: &T,
) -> Result<(), CustomRedisError> {
    let serialized = serde_json::to_string(value)?;
    client.set(key, serialized).await
}

/// Serializes `value` to JSON and stores it with a TTL in seconds.
pub async fn set_json_ex<T: Serialize>(
    client: &dyn Client,
    key: String,
    value: &T,
    ttl_seconds: u64,
) -> Result<(), CustomRedisError> {
    let serialized = serde_json::to_string(value)?;
    client.setex(key, serialized, ttl_seconds).await
}
