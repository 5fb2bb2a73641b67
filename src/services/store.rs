use crate::config::{StorageBackend, StorageSettings};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with key-value store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Store misconfigured: {0}")]
    Misconfigured(String),
}

/// Opaque string key-value scope backing the profile storage façade
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError>;

    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store with per-entry time-to-live
pub struct MemoryStore {
    entries: moka::future::Cache<String, String>,
}

impl MemoryStore {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).await)
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.invalidate(key).await;
        Ok(())
    }
}

/// Redis-backed store, shared across service instances
pub struct RedisStore {
    redis: Arc<tokio::sync::Mutex<ConnectionManager>>,
    ttl_secs: u64,
}

impl RedisStore {
    pub async fn connect(redis_url: &str, ttl_secs: u64) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis_url)?;
        let redis = ConnectionManager::new(client).await?;

        Ok(Self {
            redis: Arc::new(tokio::sync::Mutex::new(redis)),
            ttl_secs,
        })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.redis.lock().await;
        let value: Option<String> = redis::cmd("GET").arg(key).query_async(&mut *conn).await?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut conn = self.redis.lock().await;
        let _: () = redis::cmd("SETEX")
            .arg(key)
            .arg(self.ttl_secs)
            .arg(value)
            .query_async(&mut *conn)
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.redis.lock().await;
        let _: () = redis::cmd("DEL").arg(key).query_async(&mut *conn).await?;
        Ok(())
    }
}

/// Build the configured store backend
pub async fn build_store(settings: &StorageSettings) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    match settings.backend {
        StorageBackend::Memory => {
            tracing::info!(
                "Using in-memory session store (capacity: {}, TTL: {}s)",
                settings.capacity,
                settings.ttl_secs
            );
            Ok(Arc::new(MemoryStore::new(settings.capacity, settings.ttl_secs)))
        }
        StorageBackend::Redis => {
            let url = settings.redis_url.as_deref().ok_or_else(|| {
                StoreError::Misconfigured("storage.redis_url is required for the redis backend".to_string())
            })?;
            let store = RedisStore::connect(url, settings.ttl_secs).await?;
            tracing::info!("Using Redis session store (TTL: {}s)", settings.ttl_secs);
            Ok(Arc::new(store))
        }
    }
}
