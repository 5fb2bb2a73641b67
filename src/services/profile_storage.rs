use crate::models::{MatchResult, UserProfile};
use crate::services::store::KeyValueStore;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Storage key builder
pub struct StorageKey;

impl StorageKey {
    /// Build the key holding a session's profile
    pub fn profile(scope: &str) -> String {
        format!("{}:user_profile", scope)
    }

    /// Build the key holding a session's last recommendations
    pub fn recommendations(scope: &str) -> String {
        format!("{}:user_recommendations", scope)
    }
}

/// Session-scoped persistence for the last profile and recommendations
///
/// Values are stored as JSON. Backend failures and corrupt entries are
/// logged and read back as absent; nothing here returns an error.
#[derive(Clone)]
pub struct ProfileStorage {
    store: Arc<dyn KeyValueStore>,
    scope: String,
}

impl ProfileStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, scope: impl Into<String>) -> Self {
        Self {
            store,
            scope: scope.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub async fn set_profile(&self, profile: &UserProfile) {
        self.put_json(&StorageKey::profile(&self.scope), profile).await;
    }

    pub async fn get_profile(&self) -> Option<UserProfile> {
        self.get_json(&StorageKey::profile(&self.scope)).await
    }

    pub async fn set_recommendations(&self, results: &[MatchResult]) {
        self.put_json(&StorageKey::recommendations(&self.scope), &results).await;
    }

    pub async fn get_recommendations(&self) -> Option<Vec<MatchResult>> {
        self.get_json(&StorageKey::recommendations(&self.scope)).await
    }

    /// Remove both the profile and the recommendations
    pub async fn clear(&self) {
        for key in [StorageKey::profile(&self.scope), StorageKey::recommendations(&self.scope)] {
            if let Err(e) = self.store.remove(&key).await {
                tracing::warn!("Failed to clear {}: {}", key, e);
            }
        }
    }

    async fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.store.put(key, json).await {
            tracing::warn!("Failed to store {}: {}", key, e);
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding corrupt entry {}: {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::match_internships;
    use crate::models::LocationPreference;
    use crate::services::store::{MemoryStore, StoreError};
    use async_trait::async_trait;

    fn create_profile() -> UserProfile {
        UserProfile {
            education: "B.Tech - Computer Science".to_string(),
            interests: vec!["web-dev".to_string()],
            skills: vec!["JavaScript".to_string(), "React".to_string()],
            location: LocationPreference::online(),
        }
    }

    /// Store whose every operation fails
    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Misconfigured("offline".to_string()))
        }

        async fn put(&self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Misconfigured("offline".to_string()))
        }

        async fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Misconfigured("offline".to_string()))
        }
    }

    #[test]
    fn test_storage_key_builder() {
        assert_eq!(StorageKey::profile("abc"), "abc:user_profile");
        assert_eq!(StorageKey::recommendations("abc"), "abc:user_recommendations");
    }

    #[tokio::test]
    async fn test_profile_and_recommendations_roundtrip() {
        let storage = ProfileStorage::new(Arc::new(MemoryStore::new(100, 60)), "session-1");
        let profile = create_profile();
        let results = match_internships(&profile);

        assert_eq!(storage.get_profile().await, None);
        assert_eq!(storage.get_recommendations().await, None);

        storage.set_profile(&profile).await;
        storage.set_recommendations(&results).await;

        assert_eq!(storage.get_profile().await, Some(profile));
        assert_eq!(storage.get_recommendations().await, Some(results));

        storage.clear().await;
        assert_eq!(storage.get_profile().await, None);
        assert_eq!(storage.get_recommendations().await, None);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new(100, 60));
        let first = ProfileStorage::new(store.clone(), "first");
        let second = ProfileStorage::new(store, "second");

        first.set_profile(&create_profile()).await;

        assert!(first.get_profile().await.is_some());
        assert!(second.get_profile().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_entry_reads_as_absent() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new(100, 60));
        store
            .put(&StorageKey::profile("s"), "{not json".to_string())
            .await
            .unwrap();

        let storage = ProfileStorage::new(store, "s");
        assert_eq!(storage.get_profile().await, None);
    }

    #[tokio::test]
    async fn test_backend_failures_are_swallowed() {
        let storage = ProfileStorage::new(Arc::new(BrokenStore), "s");

        storage.set_profile(&create_profile()).await;
        storage.clear().await;
        assert_eq!(storage.get_profile().await, None);
        assert_eq!(storage.get_recommendations().await, None);
    }
}
