//! Key-value blob stores

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tokio::sync::RwLock;

use crate::error::AppResult;

/// A store of whole string blobs addressed by key
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Load the blob under `key`, `None` if nothing was saved yet
    async fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the blob under `key`
    async fn save(&self, key: &str, value: String) -> AppResult<()>;
}

/// Redis-backed blob store
#[derive(Clone)]
pub struct RedisBlobStore {
    conn: ConnectionManager,
}

impl RedisBlobStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl BlobStore for RedisBlobStore {
    async fn load(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn save(&self, key: &str, value: String) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }
}

/// Blob store keeping one JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn load(&self, key: &str) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, value: String) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        // Write then rename so a crash never leaves a half-written list
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

/// In-process blob store
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn load(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: String) -> AppResult<()> {
        self.blobs.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
