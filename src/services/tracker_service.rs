//! Tracked-user management

use chrono::{DateTime, Utc};
use futures::future::join_all;

use crate::{
    db::repositories::TrackedUserRepository,
    error::{AppError, AppResult},
    models::{Timeframe, TrackedUser, UserProfile},
    provider::Provider,
    utils::validation::{sanitize_handle, validate_handle},
};

use super::SubmissionAggregator;

/// Tracker service for adding, removing and refreshing tracked handles
pub struct TrackerService;

impl TrackerService {
    /// Check whether a handle exists on the provider.
    ///
    /// Malformed input and provider errors both read as "not valid".
    pub async fn check_handle(provider: &dyn Provider, handle: &str) -> bool {
        let handle = sanitize_handle(handle);
        if validate_handle(&handle).is_err() {
            return false;
        }

        match provider.fetch_user(&handle).await {
            Ok(profile) => profile.is_some(),
            Err(e) => {
                tracing::warn!(handle = %handle, error = %e, "Handle check failed");
                false
            }
        }
    }

    /// Start tracking a handle.
    ///
    /// The handle must exist on the provider and must not already be tracked
    /// under the provider's casing. The stored entry carries the solved count
    /// and points for `timeframe`.
    pub async fn add_tracked_user(
        repo: &TrackedUserRepository,
        provider: &dyn Provider,
        handle: &str,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> AppResult<TrackedUser> {
        let handle = sanitize_handle(handle);
        if handle.is_empty() {
            return Err(AppError::Validation("Please enter a handle".to_string()));
        }
        validate_handle(&handle).map_err(|e| AppError::Validation(e.to_string()))?;

        let profile = Self::lookup_profile(provider, &handle).await?;

        // Checked before the submission fetch; `add` re-checks on write
        if repo.find_by_handle(&profile.handle).await?.is_some() {
            return Err(AppError::DuplicateHandle(profile.handle));
        }

        let summary =
            SubmissionAggregator::fetch_and_aggregate(provider, &profile.handle, timeframe, now)
                .await;
        let user = TrackedUser::new(profile.handle, profile.rating, summary);

        repo.add(user.clone()).await?;

        tracing::info!(handle = %user.handle, timeframe = %timeframe, "Tracking handle");
        Ok(user)
    }

    /// Stop tracking a handle. Untracked handles are ignored.
    pub async fn remove_tracked_user(repo: &TrackedUserRepository, handle: &str) -> AppResult<()> {
        let handle = sanitize_handle(handle);
        repo.remove(&handle).await?;

        tracing::info!(handle = %handle, "Stopped tracking handle");
        Ok(())
    }

    /// Recompute every stored entry for `timeframe` and write the list back whole.
    ///
    /// A user whose profile cannot be fetched keeps the stored rating; its
    /// solved count degrades to the sentinel when submissions fail too.
    pub async fn refresh(
        repo: &TrackedUserRepository,
        provider: &dyn Provider,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<TrackedUser>> {
        let users = repo.list().await?;

        let refreshed = join_all(users.into_iter().map(|user| async move {
            let rating = match provider.fetch_user(&user.handle).await {
                Ok(Some(profile)) => profile.rating,
                Ok(None) => {
                    tracing::warn!(handle = %user.handle, "Tracked handle no longer exists");
                    user.rating
                }
                Err(e) => {
                    tracing::warn!(handle = %user.handle, error = %e, "Failed to refresh profile");
                    user.rating
                }
            };
            let summary =
                SubmissionAggregator::fetch_and_aggregate(provider, &user.handle, timeframe, now)
                    .await;
            TrackedUser::new(user.handle, rating, summary)
        }))
        .await;

        repo.replace_all(&refreshed).await?;

        tracing::info!(timeframe = %timeframe, users = refreshed.len(), "Tracked users refreshed");
        Ok(refreshed)
    }

    async fn lookup_profile(provider: &dyn Provider, handle: &str) -> AppResult<UserProfile> {
        match provider.fetch_user(handle).await {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) | Err(AppError::ProviderRejected(_)) => {
                Err(AppError::HandleNotFound(handle.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}
