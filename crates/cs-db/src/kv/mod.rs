//! Storage port over named JSON buckets.

pub mod memory_kv_store;
pub mod sqlite_kv_store;

use crate::error::KvResult;

use async_trait::async_trait;

/// Port between the identity store / session manager and durable storage.
///
/// Buckets are independent named documents holding JSON. The production
/// backend is [`sqlite_kv_store::SqliteKvStore`]; tests substitute
/// [`memory_kv_store::MemoryKvStore`].
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read a bucket. `None` when it has never been written.
    async fn get(&self, bucket: &str) -> KvResult<Option<String>>;

    /// Create or replace a bucket.
    async fn put(&self, bucket: &str, value: &str) -> KvResult<()>;

    /// Delete a bucket. Deleting an absent bucket is not an error.
    async fn remove(&self, bucket: &str) -> KvResult<()>;
}
