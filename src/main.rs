//! Friendboard - Application Entry Point
//!
//! This is the main entry point for the Friendboard server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use friendboard::{
    config::CONFIG,
    db::{self, repositories::TrackedUserRepository},
    provider::CodeforcesClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Friendboard server...");

    // Open the tracked-user store
    let store = db::open_store(&CONFIG.store).await?;
    db::test_connection(store.as_ref(), &CONFIG.store.key).await?;
    let tracked_users = TrackedUserRepository::new(store, CONFIG.store.key.clone());

    // Initialize provider client
    tracing::info!(base_url = %CONFIG.provider.base_url, "Using provider");
    let provider = CodeforcesClient::new(&CONFIG.provider)?;

    // Create application state
    let state = AppState::new(tracked_users, Arc::new(provider), CONFIG.clone());

    let app = friendboard::router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        "Server listening on http://{} (default timeframe: {})",
        addr,
        CONFIG.leaderboard.default_timeframe
    );

    axum::serve(listener, app).await?;

    Ok(())
}
