//! Tracked user handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Tracked user routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/tracked",
            get(handler::list_tracked_users).post(handler::add_tracked_user),
        )
        .route("/tracked/refresh", post(handler::refresh_tracked_users))
        .route("/tracked/{handle}", delete(handler::remove_tracked_user))
        .route("/handles/{handle}/check", get(handler::check_handle))
}
