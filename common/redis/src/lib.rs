use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CustomRedisError {
    #[error("Not found in redis")]
    NotFound,
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout error")]
    Timeout,
    #[error(transparent)]
    Redis(#[from] Arc<redis::RedisError>),
}

impl From<redis::RedisError> for CustomRedisError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_timeout() {
            CustomRedisError::Timeout
        } else {
            CustomRedisError::Redis(Arc::new(err))
        }
    }
}

impl From<serde_json::Error> for CustomRedisError {
    fn from(err: serde_json::Error) -> Self {
        CustomRedisError::ParseError(err.to_string())
    }
}

/// The command surface the rest of the codebase is allowed to use. Kept
/// object-safe so handlers hold an `Arc<dyn Client>` and tests swap in
/// [`MockRedisClient`].
#[async_trait]
pub trait Client {
    async fn get(&self, k: String) -> Result<String, CustomRedisError>;
    async fn set(&self, k: String, v: String) -> Result<(), CustomRedisError>;
    async fn setex(&self, k: String, v: String, seconds: u64) -> Result<(), CustomRedisError>;
    async fn set_nx_ex(&self, k: String, v: String, seconds: u64)
        -> Result<bool, CustomRedisError>;
    async fn del(&self, k: String) -> Result<(), CustomRedisError>;
    async fn exists(&self, k: String) -> Result<bool, CustomRedisError>;
    async fn expire(&self, k: String, seconds: u64) -> Result<bool, CustomRedisError>;
    async fn publish(&self, channel: String, message: String) -> Result<u64, CustomRedisError>;
    async fn lpush(&self, k: String, v: String) -> Result<u64, CustomRedisError>;
    async fn rpop(&self, k: String) -> Result<Option<String>, CustomRedisError>;
}

mod client;
mod config;
mod connections;
mod json;
mod lock;
mod mock;

pub use client::RedisClient;
pub use config::RedisConfig;
pub use connections::{ConnectionKind, RedisConnections};
pub use json::{get_json, set_json, set_json_ex};
pub use lock::RedisLock;
pub use mock::MockRedisClient;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_the_redis_variant() {
        let err: CustomRedisError =
            redis::RedisError::from((redis::ErrorKind::IoError, "boom")).into();
        assert!(matches!(err, CustomRedisError::Redis(_)));
    }

    #[test]
    fn json_errors_map_to_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CustomRedisError = json_err.into();
        assert!(matches!(err, CustomRedisError::ParseError(_)));
    }
}
