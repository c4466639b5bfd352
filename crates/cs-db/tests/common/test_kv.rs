#![allow(dead_code)]

use cs_db::{KvError, KvResult, KvStore, MemoryKvStore, SqliteKvStore, UserStore};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tempfile::TempDir;

/// User store over the in-memory backend
pub fn create_memory_store() -> Arc<UserStore> {
    Arc::new(UserStore::new(Arc::new(MemoryKvStore::new())))
}

/// Sqlite-backed kv store in a temp directory.
///
/// Keep the returned `TempDir` alive for the duration of the test; the
/// database file lives inside it.
pub async fn create_sqlite_kv() -> (TempDir, Arc<SqliteKvStore>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let kv = SqliteKvStore::open(dir.path().join("test.db"))
        .await
        .expect("Failed to open sqlite kv store");
    (dir, Arc::new(kv))
}

/// Backend whose writes can be switched to fail, for atomicity tests
#[derive(Default)]
pub struct FlakyKvStore {
    inner: MemoryKvStore,
    fail_writes: AtomicBool,
}

impl FlakyKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KvStore for FlakyKvStore {
    async fn get(&self, bucket: &str) -> KvResult<Option<String>> {
        self.inner.get(bucket).await
    }

    async fn put(&self, bucket: &str, value: &str) -> KvResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KvError::Initialization {
                message: "disk full".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.inner.put(bucket, value).await
    }

    async fn remove(&self, bucket: &str) -> KvResult<()> {
        self.inner.remove(bucket).await
    }
}
