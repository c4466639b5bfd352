use crate::error::KvResult;
use crate::kv::KvStore;

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory bucket storage.
///
/// Substitutes for [`super::sqlite_kv_store::SqliteKvStore`] in tests and
/// throwaway runs; contents die with the process.
#[derive(Default)]
pub struct MemoryKvStore {
    buckets: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, bucket: &str) -> KvResult<Option<String>> {
        Ok(self.buckets.read().await.get(bucket).cloned())
    }

    async fn put(&self, bucket: &str, value: &str) -> KvResult<()> {
        self.buckets
            .write()
            .await
            .insert(bucket.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, bucket: &str) -> KvResult<()> {
        self.buckets.write().await.remove(bucket);
        Ok(())
    }
}
