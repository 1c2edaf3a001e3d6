//! Tracked user repository

use std::sync::Arc;

use crate::{
    db::BlobStore,
    error::{AppError, AppResult},
    models::TrackedUser,
};

/// Repository for the tracked-user collection.
///
/// The whole collection lives in one blob. Every operation reads it, works
/// on an owned copy and writes the whole thing back.
#[derive(Clone)]
pub struct TrackedUserRepository {
    store: Arc<dyn BlobStore>,
    key: String,
}

impl TrackedUserRepository {
    /// Create a repository over `store`, keeping the collection under `key`
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// List tracked users in insertion order
    pub async fn list(&self) -> AppResult<Vec<TrackedUser>> {
        match self.store.load(&self.key).await? {
            Some(blob) => serde_json::from_str(&blob)
                .map_err(|e| AppError::CorruptStore(format!("{}: {}", self.key, e))),
            None => Ok(Vec::new()),
        }
    }

    /// Find a tracked user by exact handle
    pub async fn find_by_handle(&self, handle: &str) -> AppResult<Option<TrackedUser>> {
        Ok(self.list().await?.into_iter().find(|u| u.handle == handle))
    }

    /// Append a user; fails without writing if the handle is already tracked
    pub async fn add(&self, user: TrackedUser) -> AppResult<()> {
        let mut users = self.list().await?;

        if users.iter().any(|u| u.handle == user.handle) {
            return Err(AppError::DuplicateHandle(user.handle));
        }

        users.push(user);
        self.write(&users).await
    }

    /// Remove a user by handle; absent handles are a no-op
    pub async fn remove(&self, handle: &str) -> AppResult<()> {
        let mut users = self.list().await?;
        let before = users.len();
        users.retain(|u| u.handle != handle);

        if users.len() == before {
            tracing::debug!(handle, "Handle not tracked, nothing to remove");
            return Ok(());
        }

        self.write(&users).await
    }

    /// Replace the whole collection
    pub async fn replace_all(&self, users: &[TrackedUser]) -> AppResult<()> {
        self.write(users).await
    }

    async fn write(&self, users: &[TrackedUser]) -> AppResult<()> {
        let blob = serde_json::to_string(users)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Serializing tracked users: {}", e)))?;
        self.store.save(&self.key, blob).await
    }
}
