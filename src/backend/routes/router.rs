/**
 * Router Configuration
 *
 * Combines all route groups into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (chat, repository, health)
 * 2. File and image routes
 * 3. Fallback handler (404 JSON)
 *
 * CORS and request tracing wrap every route, including the fallback, so
 * preflight `OPTIONS` requests are answered before reaching any handler.
 */

use axum::{http::StatusCode, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::cors_layer;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::file_routes::configure_file_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());
    let router = configure_file_routes(router, &app_state);

    let router = router.fallback(|| async {
        BackendError::handler(StatusCode::NOT_FOUND, "404 Not Found")
    });

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&app_state.config.server)),
        )
        .with_state(app_state)
}
