//! Tracked user handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::leaderboard::{build_dashboard, resolve_timeframe, DashboardResponse, TimeframeQuery},
    services::TrackerService,
    state::AppState,
    utils::{now_utc, sanitize_handle},
};

use super::{
    request::AddTrackedUserRequest,
    response::{AddTrackedUserResponse, HandleCheckResponse, TrackedUsersResponse},
};

/// List tracked users as stored
pub async fn list_tracked_users(
    State(state): State<AppState>,
) -> AppResult<Json<TrackedUsersResponse>> {
    let users = state.tracked_users().list().await?;
    Ok(Json(users.into()))
}

/// Start tracking a handle, then recompute both views
pub async fn add_tracked_user(
    State(state): State<AppState>,
    Json(payload): Json<AddTrackedUserRequest>,
) -> AppResult<(StatusCode, Json<AddTrackedUserResponse>)> {
    payload.validate()?;

    let timeframe = resolve_timeframe(
        payload.timeframe.as_deref(),
        state.config().leaderboard.default_timeframe,
    )?;

    let user = TrackerService::add_tracked_user(
        state.tracked_users(),
        state.provider(),
        &payload.handle,
        timeframe,
        now_utc(),
    )
    .await?;

    let dashboard = build_dashboard(&state, timeframe).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddTrackedUserResponse { user, dashboard }),
    ))
}

/// Stop tracking a handle, then recompute both views
pub async fn remove_tracked_user(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(query): Query<TimeframeQuery>,
) -> AppResult<Json<DashboardResponse>> {
    let timeframe = query.resolve(state.config().leaderboard.default_timeframe)?;

    TrackerService::remove_tracked_user(state.tracked_users(), &handle).await?;

    Ok(Json(build_dashboard(&state, timeframe).await?))
}

/// Recompute and rewrite every stored entry
pub async fn refresh_tracked_users(
    State(state): State<AppState>,
    Query(query): Query<TimeframeQuery>,
) -> AppResult<Json<TrackedUsersResponse>> {
    let timeframe = query.resolve(state.config().leaderboard.default_timeframe)?;

    let users = TrackerService::refresh(
        state.tracked_users(),
        state.provider(),
        timeframe,
        now_utc(),
    )
    .await?;

    Ok(Json(users.into()))
}

/// Check whether a handle exists on the provider
pub async fn check_handle(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Json<HandleCheckResponse> {
    let valid = TrackerService::check_handle(state.provider(), &handle).await;

    Json(HandleCheckResponse {
        handle: sanitize_handle(&handle),
        valid,
    })
}
