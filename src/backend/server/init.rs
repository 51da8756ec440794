/**
 * Server Initialization
 *
 * Builds the application state from configuration, starts background
 * maintenance, and assembles the router.
 *
 * # Initialization Process
 *
 * 1. Record whether error responses may carry details
 * 2. Create the remote client, message store and rate limiters
 * 3. Start the periodic rate limiter cleanup task
 * 4. Create and configure the router
 */

use std::time::{Duration, Instant};

use axum::Router;

use crate::backend::error::set_development_mode;
use crate::backend::github::GitHubError;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// How often idle clients are dropped from the rate limiters
const LIMITER_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Create and configure the Axum application
///
/// Must be called inside a Tokio runtime: it spawns the limiter cleanup task.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, GitHubError> {
    tracing::info!("Initializing repostore backend server");

    set_development_mode(config.server.development);

    let app_state = AppState::new(config)?;
    tracing::info!(
        "Serving {}/{} (branch {})",
        app_state.github.owner(),
        app_state.github.repo(),
        app_state.github.branch()
    );

    let limiters = app_state.limiters.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let now = Instant::now();
            limiters.list.prune(now);
            limiters.delete.prune(now);
            tracing::debug!("Pruned idle rate limiter entries");
        }
    });

    let app = create_router(app_state);
    tracing::info!("Router configured with periodic limiter cleanup");

    Ok(app)
}
