//! Leaderboard handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::Timeframe,
    services::LeaderboardService,
    state::AppState,
    utils::now_utc,
};

use super::{
    request::TimeframeQuery,
    response::{ContestSummaryResponse, DashboardResponse, LeaderboardResponse},
};

/// Get the solved-problems leaderboard
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<TimeframeQuery>,
) -> AppResult<Json<LeaderboardResponse>> {
    let timeframe = query.resolve(state.config().leaderboard.default_timeframe)?;
    let users = state.tracked_users().list().await?;
    let now = now_utc();

    let rows = LeaderboardService::assemble(state.provider(), &users, timeframe, now).await;

    Ok(Json(LeaderboardResponse::new(timeframe, rows, now)))
}

/// Get contest participation per tracked user
pub async fn get_contest_summary(
    State(state): State<AppState>,
    Query(query): Query<TimeframeQuery>,
) -> AppResult<Json<ContestSummaryResponse>> {
    let timeframe = query.resolve(state.config().leaderboard.default_timeframe)?;
    let users = state.tracked_users().list().await?;
    let now = now_utc();

    let rows = LeaderboardService::contest_summary(state.provider(), &users, timeframe, now).await;

    Ok(Json(ContestSummaryResponse {
        timeframe,
        rows,
        generated_at: now,
    }))
}

/// Recompute both derived views from one snapshot of the tracked list
pub async fn build_dashboard(
    state: &AppState,
    timeframe: Timeframe,
) -> AppResult<DashboardResponse> {
    let users = state.tracked_users().list().await?;
    let now = now_utc();

    let (rows, contest_rows) = futures::join!(
        LeaderboardService::assemble(state.provider(), &users, timeframe, now),
        LeaderboardService::contest_summary(state.provider(), &users, timeframe, now)
    );

    Ok(DashboardResponse {
        leaderboard: LeaderboardResponse::new(timeframe, rows, now),
        contests: ContestSummaryResponse {
            timeframe,
            rows: contest_rows,
            generated_at: now,
        },
    })
}
