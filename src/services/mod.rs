// Service exports
pub mod profile_storage;
pub mod store;

pub use profile_storage::{ProfileStorage, StorageKey};
pub use store::{build_store, KeyValueStore, MemoryStore, RedisStore, StoreError};
