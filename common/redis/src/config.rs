use std::time::Duration;

use envconfig::Envconfig;
use validation::{parse_duration_to_seconds, DurationParseError};

#[derive(Envconfig, Clone)]
pub struct RedisConfig {
    #[envconfig(from = "REDIS_URL", default = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    #[envconfig(from = "REDIS_KEY_PREFIX", default = "databuddy")]
    pub key_prefix: String,

    /// Duration string such as "30s", "15m" or "1h". Parsed at startup;
    /// a malformed value fails loudly instead of caching forever.
    #[envconfig(from = "REDIS_CACHE_TTL", default = "1h")]
    pub cache_ttl: String,

    #[envconfig(from = "REDIS_RESPONSE_TIMEOUT_MS")]
    pub response_timeout_ms: Option<u64>,

    #[envconfig(from = "REDIS_CONNECTION_TIMEOUT_MS")]
    pub connection_timeout_ms: Option<u64>,
}

impl RedisConfig {
    pub fn cache_ttl_seconds(&self) -> Result<u64, DurationParseError> {
        parse_duration_to_seconds(&self.cache_ttl)
    }

    pub fn response_timeout(&self) -> Option<Duration> {
        self.response_timeout_ms.map(Duration::from_millis)
    }

    pub fn connection_timeout(&self) -> Option<Duration> {
        self.connection_timeout_ms.map(Duration::from_millis)
    }

    pub fn prefixed_key(&self, key: &str) -> String {
        format!("{}:{}", self.key_prefix, key)
    }
}
