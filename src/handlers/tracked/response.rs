//! Tracked user response DTOs

use serde::Serialize;

use crate::{handlers::leaderboard::DashboardResponse, models::TrackedUser};

/// Tracked user list response
#[derive(Debug, Serialize)]
pub struct TrackedUsersResponse {
    pub users: Vec<TrackedUser>,
    pub total: usize,
}

impl From<Vec<TrackedUser>> for TrackedUsersResponse {
    fn from(users: Vec<TrackedUser>) -> Self {
        Self {
            total: users.len(),
            users,
        }
    }
}

/// Response to adding a tracked user
#[derive(Debug, Serialize)]
pub struct AddTrackedUserResponse {
    pub user: TrackedUser,
    #[serde(flatten)]
    pub dashboard: DashboardResponse,
}

/// Handle existence check response
#[derive(Debug, Serialize)]
pub struct HandleCheckResponse {
    pub handle: String,
    pub valid: bool,
}
