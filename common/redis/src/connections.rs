use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::client::RedisClient;
use crate::CustomRedisError;

/// The purposes we keep separate connections for. A subscribed connection
/// cannot issue regular commands, and queue consumers should not contend
/// with the cache path, so each kind gets its own client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    Cache,
    Publisher,
    Subscriber,
    Queue,
}

/// Registry handing out one shared [`RedisClient`] per [`ConnectionKind`],
/// created lazily from a single URL. The process-wide replacement for
/// ad-hoc per-module clients.
pub struct RedisConnections {
    url: String,
    response_timeout: Option<Duration>,
    connection_timeout: Option<Duration>,
    clients: Mutex<HashMap<ConnectionKind, Arc<RedisClient>>>,
}

impl RedisConnections {
    pub fn new(url: String) -> Self {
        Self::with_timeouts(url, None, None)
    }

    pub fn with_timeouts(
        url: String,
        response_timeout: Option<Duration>,
        connection_timeout: Option<Duration>,
    ) -> Self {
        Self {
            url,
            response_timeout,
            connection_timeout,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the client for `kind`, connecting on first use. Concurrent
    /// callers for the same kind serialize on the registry lock, so at most
    /// one client per kind is ever created.
    pub async fn get(&self, kind: ConnectionKind) -> Result<Arc<RedisClient>, CustomRedisError> {
        let mut clients = self.clients.lock().await;
        if let Some(client) = clients.get(&kind) {
            return Ok(client.clone());
        }

        let client = Arc::new(
            RedisClient::with_timeouts(
                self.url.clone(),
                self.response_timeout,
                self.connection_timeout,
            )
            .await?,
        );
        clients.insert(kind, client.clone());
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bad_url_surfaces_the_connection_error() {
        let connections = RedisConnections::new("not a redis url".to_string());
        let result = connections.get(ConnectionKind::Cache).await;
        assert!(result.is_err());
    }

    #[test]
    fn kinds_are_distinct_map_keys() {
        let kinds = [
            ConnectionKind::Cache,
            ConnectionKind::Publisher,
            ConnectionKind::Subscriber,
            ConnectionKind::Queue,
        ];
        let unique: std::collections::HashSet<_> = kinds.into_iter().collect();
        assert_eq!(unique.len(), kinds.len());
    }
}
