//! Leaderboard and contest summary handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(handler::get_leaderboard))
        .route("/contests", get(handler::get_contest_summary))
}
