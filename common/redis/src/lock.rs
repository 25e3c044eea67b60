use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::{Client, CustomRedisError};

/// Best-effort distributed lock over `SET NX EX`.
///
/// Each instance carries a random token so a holder can only release a lock
/// it still owns. The TTL is the real safety net: if a holder dies, the key
/// expires and the lock frees itself.
pub struct RedisLock {
    client: Arc<dyn Client + Send + Sync>,
    key: String,
    token: String,
    ttl_seconds: u64,
}

impl RedisLock {
    pub fn new(client: Arc<dyn Client + Send + Sync>, key: String, ttl_seconds: u64) -> Self {
        Self {
            client,
            key,
            token: Uuid::new_v4().to_string(),
            ttl_seconds,
        }
    }

    /// Attempts to take the lock. `false` means another holder owns it.
    pub async fn acquire(&self) -> Result<bool, CustomRedisError> {
        self.client
            .set_nx_ex(self.key.clone(), self.token.clone(), self.ttl_seconds)
            .await
    }

    /// Releases the lock if this instance still holds it. Returns `true`
    /// when the lock was released, `false` when it had already expired or
    /// belongs to someone else.
    ///
    /// The token check and the delete are two round trips; a lock that
    /// expires between them can take a new holder's key with it. Size the
    /// TTL well above the critical section if that matters.
    pub async fn release(&self) -> Result<bool, CustomRedisError> {
        match self.client.get(self.key.clone()).await {
            Ok(held) if held == self.token => {
                self.client.del(self.key.clone()).await?;
                Ok(true)
            }
            Ok(_) => {
                warn!(key = %self.key, "lock held by another owner, leaving it in place");
                Ok(false)
            }
            Err(CustomRedisError::NotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Pushes the expiry out by the configured TTL if still held.
    pub async fn extend(&self) -> Result<bool, CustomRedisError> {
        match self.client.get(self.key.clone()).await {
            Ok(held) if held == self.token => {
                self.client
                    .expire(self.key.clone(), self.ttl_seconds)
                    .await
            }
            Ok(_) => Ok(false),
            Err(CustomRedisError::NotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
