use crate::error::{KvError, KvResult};
use crate::kv::KvStore;

use std::panic::Location;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Durable bucket storage backed by an embedded sqlite database.
pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    /// Open the database at `path`, creating the file and its parent
    /// directory if missing, and run migrations.
    pub async fn open(path: impl Into<PathBuf>) -> KvResult<Self> {
        let db_path: PathBuf = path.into();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| KvError::Initialization {
                        message: format!("Failed to create data directory: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool. Tests hand in an in-memory database here.
    pub async fn from_pool(pool: SqlitePool) -> KvResult<Self> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| KvError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl KvStore for SqliteKvStore {
    async fn get(&self, bucket: &str) -> KvResult<Option<String>> {
        // Runtime-checked queries; the compile-time macro needs a live
        // database or offline metadata.
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM buckets WHERE name = ?")
            .bind(bucket)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn put(&self, bucket: &str, value: &str) -> KvResult<()> {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO buckets (name, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(name) DO UPDATE
                SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(bucket)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, bucket: &str) -> KvResult<()> {
        sqlx::query("DELETE FROM buckets WHERE name = ?")
            .bind(bucket)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
