/**
 * Application State Management
 *
 * `AppState` is the central state container shared by every handler. It is
 * cheap to clone: the configuration is behind an `Arc`, the remote client
 * shares its connection pool, and the rate limiters share their maps.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers and middleware to extract
 * only the part of the state they need, e.g. `State(store): State<MessageStore>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::github::{GitHubClient, GitHubError};
use crate::backend::middleware::SlidingWindowLimiter;
use crate::backend::store::MessageStore;
use crate::shared::AppConfig;

const DELETE_LIMIT_MESSAGE: &str = "Too many delete requests. Please try again later.";

/// Rate limiters, one per protected route group
#[derive(Debug, Clone)]
pub struct RateLimiters {
    pub list: SlidingWindowLimiter,
    pub delete: SlidingWindowLimiter,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<AppConfig>,
    /// Client for the data repository
    pub github: GitHubClient,
    /// Conversation store on top of `github`
    pub store: MessageStore,
    pub limiters: RateLimiters,
}

impl AppState {
    /// Build every component from configuration
    pub fn new(config: AppConfig) -> Result<Self, GitHubError> {
        let github = GitHubClient::new(&config.github)?;
        let store = MessageStore::new(
            github.clone(),
            config.store.messages_root.clone(),
            config.store.max_append_attempts,
        );
        let window = config.limits.window();
        let limiters = RateLimiters {
            list: SlidingWindowLimiter::new(config.limits.list_per_window, window),
            delete: SlidingWindowLimiter::new(config.limits.delete_per_window, window)
                .with_message(DELETE_LIMIT_MESSAGE),
        };

        Ok(Self {
            config: Arc::new(config),
            github,
            store,
            limiters,
        })
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for GitHubClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.github.clone()
    }
}

impl FromRef<AppState> for MessageStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
