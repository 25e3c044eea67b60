use std::num::NonZeroUsize;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, RedisError};

use crate::{Client, CustomRedisError};

pub struct RedisClient {
    connection: MultiplexedConnection,
}

impl RedisClient {
    /// Create a client with no timeouts (commands block indefinitely).
    pub async fn new(addr: String) -> Result<RedisClient, CustomRedisError> {
        Self::with_timeouts(addr, None, None).await
    }

    /// Create a client with optional response and connection timeouts.
    ///
    /// `None` means no timeout. `Some(Duration::ZERO)` is rejected as
    /// `InvalidConfiguration` rather than silently meaning either extreme.
    pub async fn with_timeouts(
        addr: String,
        response_timeout: Option<Duration>,
        connection_timeout: Option<Duration>,
    ) -> Result<RedisClient, CustomRedisError> {
        for (timeout, what) in [
            (response_timeout, "response"),
            (connection_timeout, "connection"),
        ] {
            if timeout.is_some_and(|t| t.is_zero()) {
                return Err(CustomRedisError::InvalidConfiguration(format!(
                    "Redis {what} timeout cannot be Duration::ZERO - use None for no timeout"
                )));
            }
        }

        let client = redis::Client::open(addr)?;

        let mut config = redis::AsyncConnectionConfig::new();
        if let Some(timeout) = response_timeout {
            config = config.set_response_timeout(timeout);
        }
        if let Some(timeout) = connection_timeout {
            config = config.set_connection_timeout(timeout);
        }

        let connection = client
            .get_multiplexed_async_connection_with_config(&config)
            .await?;

        Ok(RedisClient { connection })
    }
}

#[async_trait]
impl Client for RedisClient {
    async fn get(&self, k: String) -> Result<String, CustomRedisError> {
        let mut conn = self.connection.clone();
        let result: Option<String> = conn.get(k).await?;
        result.ok_or(CustomRedisError::NotFound)
    }

    async fn set(&self, k: String, v: String) -> Result<(), CustomRedisError> {
        let mut conn = self.connection.clone();
        conn.set::<_, _, ()>(k, v).await?;
        Ok(())
    }

    async fn setex(&self, k: String, v: String, seconds: u64) -> Result<(), CustomRedisError> {
        let mut conn = self.connection.clone();
        conn.set_ex::<_, _, ()>(k, v, seconds).await?;
        Ok(())
    }

    async fn set_nx_ex(
        &self,
        k: String,
        v: String,
        seconds: u64,
    ) -> Result<bool, CustomRedisError> {
        let mut conn = self.connection.clone();

        // SET with both NX and EX so the write and the expiry are one command
        let result: Result<Option<String>, RedisError> = redis::cmd("SET")
            .arg(&k)
            .arg(&v)
            .arg("EX")
            .arg(seconds)
            .arg("NX")
            .query_async(&mut conn)
            .await;

        match result {
            Ok(Some(_)) => Ok(true), // Key was set
            Ok(None) => Ok(false),   // Key already existed
            Err(e) => Err(e.into()),
        }
    }

    async fn del(&self, k: String) -> Result<(), CustomRedisError> {
        let mut conn = self.connection.clone();
        conn.del::<_, ()>(k).await?;
        Ok(())
    }

    async fn exists(&self, k: String) -> Result<bool, CustomRedisError> {
        let mut conn = self.connection.clone();
        let result: bool = conn.exists(k).await?;
        Ok(result)
    }

    async fn expire(&self, k: String, seconds: u64) -> Result<bool, CustomRedisError> {
        let mut conn = self.connection.clone();
        let result: bool = conn.expire(k, seconds as i64).await?;
        Ok(result)
    }

    async fn publish(&self, channel: String, message: String) -> Result<u64, CustomRedisError> {
        let mut conn = self.connection.clone();
        let receivers: u64 = conn.publish(channel, message).await?;
        Ok(receivers)
    }

    async fn lpush(&self, k: String, v: String) -> Result<u64, CustomRedisError> {
        let mut conn = self.connection.clone();
        let len: u64 = conn.lpush(k, v).await?;
        Ok(len)
    }

    async fn rpop(&self, k: String) -> Result<Option<String>, CustomRedisError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.rpop(k, None::<NonZeroUsize>).await?;
        Ok(value)
    }
}
