//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Status mapping:
//! - boundary validation failure → 400
//! - unknown pool symbol → 404
//! - submit while the gate refuses → 409
//! - submitter refusal → 502 (the error text passes through opaquely)

use super::{
    AppState,
    types::{
        ErrorResponse, HealthResponse, PoolJson, PoolsResponse, SelectPoolRequest,
        SessionResponse, SetAmountRequest, SubmitResponse,
    },
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coopifi_core::StakeError;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// POOLS HANDLER
// =============================================================================

/// List the catalog in load order.
pub async fn pools_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    let pools = session.catalog().list().iter().map(PoolJson::from).collect();

    (StatusCode::OK, Json(PoolsResponse { pools }))
}

// =============================================================================
// SESSION HANDLER
// =============================================================================

/// Get the current session read model.
pub async fn session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    (StatusCode::OK, Json(SessionResponse::from_session(&session)))
}

// =============================================================================
// SELECT POOL HANDLER
// =============================================================================

/// Select a pool for the session.
pub async fn select_pool_handler(
    State(state): State<AppState>,
    Json(request): Json<SelectPoolRequest>,
) -> Response {
    let symbol = match request.to_symbol() {
        Ok(symbol) => symbol,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response();
        }
    };

    let mut session = state.session.write().await;
    match session.select_pool(symbol) {
        Ok(()) => {
            (StatusCode::OK, Json(SessionResponse::from_session(&session))).into_response()
        }
        Err(e @ StakeError::UnknownPoolSymbol(_)) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
    }
}

// =============================================================================
// SET AMOUNT HANDLER
// =============================================================================

/// Store amount text for the session, verbatim.
pub async fn set_amount_handler(
    State(state): State<AppState>,
    Json(request): Json<SetAmountRequest>,
) -> Response {
    let amount = match request.validated() {
        Ok(amount) => amount.to_string(),
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response();
        }
    };

    let mut session = state.session.write().await;
    session.set_amount(amount);
    (StatusCode::OK, Json(SessionResponse::from_session(&session))).into_response()
}

// =============================================================================
// SUBMIT HANDLER
// =============================================================================

/// Submit the current selection through the injected submitter.
pub async fn submit_handler(State(state): State<AppState>) -> Response {
    let mut session = state.session.write().await;

    match session.submit(state.submitter.as_ref()) {
        Ok(transaction) => {
            let response = SubmitResponse {
                transaction_id: transaction.as_str().to_string(),
                stage: session.stage(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e @ StakeError::NotSubmittable) => {
            (StatusCode::CONFLICT, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
        Err(e @ StakeError::Submission(_)) => {
            (StatusCode::BAD_GATEWAY, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
    }
}

// =============================================================================
// RESET HANDLER
// =============================================================================

/// Reset the session to idle.
pub async fn reset_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut session = state.session.write().await;
    session.reset();
    (StatusCode::OK, Json(SessionResponse::from_session(&session)))
}
