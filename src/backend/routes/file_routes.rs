/**
 * File and Image Routes
 *
 * # Routes
 *
 * - `GET /api/list` - Repository root listing (rate limited)
 * - `GET /api/read` - Read one file
 * - `POST /api/write` - Create or update one file
 * - `POST /api/delete` - Delete one file (rate limited, strict CSP)
 * - `POST /api/upload-image` (alias `/upload-image`) - Raw image upload
 *
 * Every file route carries the hardening headers from
 * `middleware::security`. Each rate limited route has its own limiter, so a
 * burst of listings does not use up a client's delete allowance.
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::files::handlers::{delete_file, list_files, read_file, write_file};
use crate::backend::images::handlers::upload_image;
use crate::backend::middleware::{rate_limit, with_security_headers, with_strict_csp};
use crate::backend::server::state::AppState;

/// Smallest JSON body limit, matching axum's default
const MIN_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Configure file and image routes
pub fn configure_file_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let limits = &app_state.config.limits;

    let list_routes: Router<AppState> = Router::new()
        .route("/api/list", get(list_files))
        .layer(from_fn_with_state(
            app_state.limiters.list.clone(),
            rate_limit,
        ));

    let delete_routes: Router<AppState> = with_strict_csp(
        Router::new()
            .route("/api/delete", post(delete_file))
            .layer(from_fn_with_state(
                app_state.limiters.delete.clone(),
                rate_limit,
            )),
    );

    // JSON escaping can double the size of the content field.
    let json_limit = limits.max_content_bytes.saturating_mul(2).max(MIN_BODY_LIMIT);
    let file_routes: Router<AppState> = with_security_headers(
        Router::new()
            .route("/api/read", get(read_file))
            .route("/api/write", post(write_file))
            .layer(DefaultBodyLimit::max(json_limit))
            .merge(list_routes)
            .merge(delete_routes),
    );

    let image_routes: Router<AppState> = Router::new()
        .route("/api/upload-image", post(upload_image))
        .route("/upload-image", post(upload_image))
        .layer(DefaultBodyLimit::max(limits.max_image_bytes));

    router.merge(file_routes).merge(image_routes)
}
