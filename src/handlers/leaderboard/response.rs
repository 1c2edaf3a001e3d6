//! Leaderboard response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::{ContestSummaryRow, LeaderboardRow, Timeframe},
    utils::format_duration,
};

/// Solved-problems leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub timeframe: Timeframe,
    /// Human-readable window, e.g. "7d" or "all time"
    pub window: String,
    pub rows: Vec<LeaderboardRow>,
    pub generated_at: DateTime<Utc>,
}

impl LeaderboardResponse {
    pub fn new(timeframe: Timeframe, rows: Vec<LeaderboardRow>, generated_at: DateTime<Utc>) -> Self {
        Self {
            timeframe,
            window: describe_window(timeframe),
            rows,
            generated_at,
        }
    }
}

/// Contest participation response
#[derive(Debug, Serialize)]
pub struct ContestSummaryResponse {
    pub timeframe: Timeframe,
    pub rows: Vec<ContestSummaryRow>,
    pub generated_at: DateTime<Utc>,
}

/// Both derived views, returned after the tracked set changes
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub leaderboard: LeaderboardResponse,
    pub contests: ContestSummaryResponse,
}

fn describe_window(timeframe: Timeframe) -> String {
    timeframe
        .window()
        .map(format_duration)
        .unwrap_or_else(|| "all time".to_string())
}
