//! Friendboard - Competitive Programming Friends Leaderboard
//!
//! This library tracks a curated list of Codeforces handles and ranks them by
//! recent problem-solving activity and contest participation.
//!
//! # Features
//!
//! - Distinct solved-problem counts and rating-weighted points per timeframe
//! - Contest participation counts per timeframe
//! - Stable leaderboard ordering across refreshes
//! - Redis, file or in-memory storage of the tracked list
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Aggregation and ranking logic
//! - **Repositories**: Tracked-user storage over a blob store
//! - **Provider**: Remote API access
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod provider;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(constants::API_BASE_PATH, handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
