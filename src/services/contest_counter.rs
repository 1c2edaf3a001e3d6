//! Contest participation counting

use chrono::{DateTime, Utc};

use crate::{
    models::{Contest, Timeframe},
    provider::Provider,
};

/// Counts contests started within a timeframe
pub struct ContestCounter;

impl ContestCounter {
    /// Number of contests whose start falls inside the timeframe window
    pub fn count(contests: &[Contest], timeframe: Timeframe, now: DateTime<Utc>) -> u32 {
        contests
            .iter()
            .filter(|c| timeframe.contains(c.started_at, now))
            .count() as u32
    }

    /// Fetch a handle's contest history and count it. Provider failures count as zero.
    pub async fn fetch_and_count(
        provider: &dyn Provider,
        handle: &str,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> u32 {
        match provider.fetch_contests(handle).await {
            Ok(contests) => Self::count(&contests, timeframe, now),
            Err(e) => {
                tracing::warn!(handle, error = %e, "Failed to fetch contests");
                0
            }
        }
    }
}
