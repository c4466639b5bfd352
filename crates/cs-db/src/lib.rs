pub mod error;
pub mod kv;
pub mod store;

pub use error::{KvError, KvResult, Result, StoreError};
pub use kv::KvStore;
pub use kv::memory_kv_store::MemoryKvStore;
pub use kv::sqlite_kv_store::SqliteKvStore;
pub use store::user_store::{USERS_BUCKET, UserStore};
