/**
 * Sliding Window Rate Limiting
 *
 * Each client address keeps the timestamps of its recent requests. On every
 * request the timestamps older than the window are dropped; the request is
 * admitted only when fewer than `limit` remain, and its own timestamp is then
 * recorded. State lives in memory and is lost on restart.
 */

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::backend::error::BackendError;

pub const DEFAULT_LIMIT_MESSAGE: &str = "Too many requests. Please try again later.";

/// Per-client sliding window limiter
#[derive(Debug, Clone)]
pub struct SlidingWindowLimiter {
    limit: usize,
    window: Duration,
    message: &'static str,
    clients: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
}

impl SlidingWindowLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            message: DEFAULT_LIMIT_MESSAGE,
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Error message sent with the 429 response
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Admit or reject one request from `client` at `now`
    pub fn check(&self, client: &str, now: Instant) -> bool {
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());
        let recent = clients.entry(client.to_string()).or_default();

        while let Some(oldest) = recent.front() {
            if now.saturating_duration_since(*oldest) >= self.window {
                recent.pop_front();
            } else {
                break;
            }
        }

        if recent.len() >= self.limit {
            return false;
        }
        recent.push_back(now);
        true
    }

    /// Drop clients with no request inside the window
    pub fn prune(&self, now: Instant) {
        let mut clients = self.clients.lock().unwrap_or_else(|e| e.into_inner());
        clients.retain(|_, recent| {
            recent
                .back()
                .is_some_and(|last| now.saturating_duration_since(*last) < self.window)
        });
    }

    /// Number of tracked clients (for debugging)
    pub fn tracked_clients(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

/// Identify the caller: first `X-Forwarded-For` hop, else the peer address.
pub fn client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Rate limiting middleware
///
/// Use with `axum::middleware::from_fn_with_state(limiter, rate_limit)`.
/// Rejected requests get `429 Too Many Requests`.
pub async fn rate_limit(
    State(limiter): State<SlidingWindowLimiter>,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client = client_key(request.headers(), peer);

    if !limiter.check(&client, Instant::now()) {
        tracing::warn!(
            "Rate limit exceeded for {} on {} ({} per window)",
            client,
            request.uri().path(),
            limiter.limit()
        );
        return Err(BackendError::handler(
            StatusCode::TOO_MANY_REQUESTS,
            limiter.message(),
        ));
    }

    Ok(next.run(request).await)
}
