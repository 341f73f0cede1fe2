//! # CoopiFi HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET  /health` - Health check
//! - `GET  /pools` - Ordered catalog listing
//! - `GET  /session` - Current session read model
//! - `POST /session/pool` - Select a pool
//! - `POST /session/amount` - Set the raw amount text
//! - `POST /session/submit` - Submit through the injected submitter
//! - `POST /session/reset` - Back to idle
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `COOPIFI_CORS_ORIGINS`: Comma-separated list of allowed origins, or
//!   "*" for all (default: localhost only)

mod handlers;
mod types;

// Re-export handlers and types for integration tests (via `coopifi::api::*`)
#[allow(unused_imports)]
pub use handlers::{
    health_handler, pools_handler, reset_handler, select_pool_handler, session_handler,
    set_amount_handler, submit_handler,
};
#[allow(unused_imports)]
pub use types::{
    ErrorResponse, HealthResponse, PoolJson, PoolsResponse, SelectPoolRequest, SessionResponse,
    SetAmountRequest, SubmitResponse,
};

use crate::HostError;
use crate::submitter::DryRunSubmitter;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use coopifi_core::{StakeSession, StakeSubmitter};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Request body cap. Flow payloads are a symbol or an amount string; 64 KB
/// is already generous.
const MAX_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the single staking session plus the injected
/// submitter capability.
#[derive(Clone)]
pub struct AppState {
    /// The member's staking session. Single logical writer; the lock
    /// serializes API mutations.
    pub session: Arc<RwLock<StakeSession>>,
    /// The submitter the submit endpoint hands requests to.
    pub submitter: Arc<dyn StakeSubmitter>,
}

impl AppState {
    /// Create new app state with a session and the dry-run submitter.
    #[must_use]
    pub fn new(session: StakeSession) -> Self {
        Self::with_submitter(session, Arc::new(DryRunSubmitter::new()))
    }

    /// Create new app state with an explicitly injected submitter.
    #[must_use]
    pub fn with_submitter(session: StakeSession, submitter: Arc<dyn StakeSubmitter>) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            submitter,
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `COOPIFI_CORS_ORIGINS` environment variable:
/// - If "*": allows all origins (development mode - use with caution!)
/// - If not set: defaults to localhost only (restrictive default)
/// - Otherwise: parses comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("COOPIFI_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!(
                "CORS: Allowing ALL origins (COOPIFI_CORS_ORIGINS=*). This is insecure for production!"
            );
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in COOPIFI_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE])
            }
        }
        None => build_localhost_cors(),
    }
}

/// Restrictive default: localhost dashboard origins only.
fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
    ]
    .iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. CORS - handles preflight requests
/// 2. Tracing - logs all requests
/// 3. Body limit - bounds flow payloads
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/pools", get(handlers::pools_handler))
        .route("/session", get(handlers::session_handler))
        .route("/session/pool", post(handlers::select_pool_handler))
        .route("/session/amount", post(handlers::set_amount_handler))
        .route("/session/submit", post(handlers::submit_handler))
        .route("/session/reset", post(handlers::reset_handler))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, session: StakeSession) -> Result<(), HostError> {
    let state = AppState::new(session);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HostError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("CoopiFi HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| HostError::Io(format!("Server error: {}", e)))
}
