//! Derived leaderboard views

use serde::Serialize;

/// One row of the solved-problems leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub handle: String,
    pub solved_count: Option<u32>,
    pub points: u32,
}

/// One row of the contest participation view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestSummaryRow {
    pub handle: String,
    pub contest_count: u32,
    pub rating: Option<i32>,
}
