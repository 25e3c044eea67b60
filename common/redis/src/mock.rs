use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::{Client, CustomRedisError};

/// In-memory [`Client`] for tests. Backed by real maps rather than canned
/// return values so that interacting commands (`set_nx_ex` then `get` then
/// `del`, as the lock does) behave like a server. TTLs are accepted and
/// ignored; published messages are recorded for assertions.
#[derive(Clone, Default)]
pub struct MockRedisClient {
    store: Arc<Mutex<HashMap<String, String>>>,
    lists: Arc<Mutex<HashMap<String, Vec<String>>>>,
    published: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockRedisClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_store(&self) -> MutexGuard<'_, HashMap<String, String>> {
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn lock_lists(&self) -> MutexGuard<'_, HashMap<String, Vec<String>>> {
        match self.lists.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Seeds a raw value, bypassing the `Client` surface.
    pub fn seed(&self, key: &str, value: &str) {
        self.lock_store()
            .insert(key.to_string(), value.to_string());
    }

    /// Everything published so far, as `(channel, message)` pairs.
    pub fn published_messages(&self) -> Vec<(String, String)> {
        match self.published.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Client for MockRedisClient {
    async fn get(&self, k: String) -> Result<String, CustomRedisError> {
        self.lock_store()
            .get(&k)
            .cloned()
            .ok_or(CustomRedisError::NotFound)
    }

    async fn set(&self, k: String, v: String) -> Result<(), CustomRedisError> {
        self.lock_store().insert(k, v);
        Ok(())
    }

    async fn setex(&self, k: String, v: String, _seconds: u64) -> Result<(), CustomRedisError> {
        self.lock_store().insert(k, v);
        Ok(())
    }

    async fn set_nx_ex(
        &self,
        k: String,
        v: String,
        _seconds: u64,
    ) -> Result<bool, CustomRedisError> {
        let mut store = self.lock_store();
        if store.contains_key(&k) {
            return Ok(false);
        }
        store.insert(k, v);
        Ok(true)
    }

    async fn del(&self, k: String) -> Result<(), CustomRedisError> {
        self.lock_store().remove(&k);
        self.lock_lists().remove(&k);
        Ok(())
    }

    async fn exists(&self, k: String) -> Result<bool, CustomRedisError> {
        Ok(self.lock_store().contains_key(&k) || self.lock_lists().contains_key(&k))
    }

    async fn expire(&self, k: String, _seconds: u64) -> Result<bool, CustomRedisError> {
        self.exists(k).await
    }

    async fn publish(&self, channel: String, message: String) -> Result<u64, CustomRedisError> {
        match self.published.lock() {
            Ok(mut guard) => guard.push((channel, message)),
            Err(poisoned) => poisoned.into_inner().push((channel, message)),
        }
        Ok(0)
    }

    async fn lpush(&self, k: String, v: String) -> Result<u64, CustomRedisError> {
        let mut lists = self.lock_lists();
        let list = lists.entry(k).or_default();
        list.insert(0, v);
        Ok(list.len() as u64)
    }

    async fn rpop(&self, k: String) -> Result<Option<String>, CustomRedisError> {
        let mut lists = self.lock_lists();
        let Some(list) = lists.get_mut(&k) else {
            return Ok(None);
        };
        let value = list.pop();
        if list.is_empty() {
            lists.remove(&k);
        }
        Ok(value)
    }
}
