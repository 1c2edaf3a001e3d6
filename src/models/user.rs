//! Tracked user and provider profile models

use serde::{Deserialize, Serialize};

/// A handle on the tracked list, as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedUser {
    pub handle: String,
    /// `None` when the user is unrated
    pub rating: Option<i32>,
    /// `None` when the solved count could not be computed
    pub solved_count: Option<u32>,
    pub points: u32,
}

impl TrackedUser {
    /// Build a tracked user from a fresh profile and solved summary
    pub fn new(handle: impl Into<String>, rating: Option<i32>, summary: SolvedSummary) -> Self {
        Self {
            handle: handle.into(),
            rating,
            solved_count: summary.solved_count,
            points: summary.points,
        }
    }
}

/// Public profile returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Handle with the provider's canonical casing
    pub handle: String,
    pub rating: Option<i32>,
}

/// Distinct solved problems and points for one handle in one timeframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedSummary {
    pub solved_count: Option<u32>,
    pub points: u32,
}

impl SolvedSummary {
    /// Sentinel used when the submission history could not be fetched
    pub fn unknown() -> Self {
        Self {
            solved_count: None,
            points: 0,
        }
    }
}
