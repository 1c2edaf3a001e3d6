//! Store connection management

use std::sync::Arc;

use crate::{
    config::{StoreBackend, StoreConfig},
    error::AppResult,
};

use super::{BlobStore, FileBlobStore, MemoryBlobStore, RedisBlobStore};

/// Open the configured blob store
pub async fn open_store(config: &StoreConfig) -> AppResult<Arc<dyn BlobStore>> {
    match config.backend {
        StoreBackend::Redis => {
            tracing::info!("Connecting to Redis...");
            let client = redis::Client::open(config.redis_url.as_str())?;
            let conn = redis::aio::ConnectionManager::new(client).await?;
            Ok(Arc::new(RedisBlobStore::new(conn)))
        }
        StoreBackend::File => {
            tracing::info!(dir = %config.dir.display(), "Using file store");
            Ok(Arc::new(FileBlobStore::new(&config.dir)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, tracked users will not survive a restart");
            Ok(Arc::new(MemoryBlobStore::new()))
        }
    }
}

/// Test store connection by reading the tracked-user key
pub async fn test_connection(store: &dyn BlobStore, key: &str) -> AppResult<()> {
    store.load(key).await?;
    Ok(())
}
