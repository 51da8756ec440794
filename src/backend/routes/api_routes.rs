/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Chat
 * - `POST /api/chat` - Append a message to today's conversation document
 * - `GET /api/chat` - Read one conversation day
 *
 * ## Repository
 * - `GET /api/repo` (alias `/repos`) - Repository metadata
 * - `GET /api/versions` - Versioned content of the application repository
 *
 * ## Health
 * - `GET /health` - Liveness probe
 */

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::backend::chat::handlers::{append_message, read_conversation_day};
use crate::backend::repository::handlers::{get_repository, list_versions};
use crate::backend::server::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Configure chat, repository and health routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/chat",
            get(read_conversation_day).post(append_message),
        )
        .route("/api/repo", get(get_repository))
        .route("/repos", get(get_repository))
        .route("/api/versions", get(list_versions))
        .route("/health", get(health))
}
