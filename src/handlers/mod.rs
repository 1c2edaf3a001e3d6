//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod leaderboard;
pub mod tracked;

use axum::{middleware, Router};

use crate::{middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(tracked::routes())
        .merge(leaderboard::routes())
        .layer(middleware::from_fn(logging_middleware))
}
