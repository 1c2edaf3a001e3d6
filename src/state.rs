//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, db::repositories::TrackedUserRepository, provider::Provider};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Tracked-user collection
    pub tracked_users: TrackedUserRepository,

    /// Remote data provider
    pub provider: Arc<dyn Provider>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        tracked_users: TrackedUserRepository,
        provider: Arc<dyn Provider>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                tracked_users,
                provider,
                config,
            }),
        }
    }

    /// Get a reference to the tracked-user repository
    pub fn tracked_users(&self) -> &TrackedUserRepository {
        &self.inner.tracked_users
    }

    /// Get a reference to the provider
    pub fn provider(&self) -> &dyn Provider {
        self.inner.provider.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
