//! Integration tests for the CoopiFi HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use axum_test::TestServer;
use coopifi::api::{
    AppState, ErrorResponse, HealthResponse, PoolsResponse, SessionResponse, SubmitResponse,
    create_router,
};
use coopifi::catalog::BuiltinPools;
use coopifi::submitter::DryRunSubmitter;
use coopifi_core::{
    FlowStage, PoolCatalog, StakeRequest, StakeSession, StakeSubmitter, SubmissionError,
    TransactionId,
};
use serde_json::json;
use std::sync::Arc;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a test server over the built-in catalog and dry-run submitter.
fn create_test_server() -> TestServer {
    let catalog = PoolCatalog::from_provider(&BuiltinPools).unwrap();
    let state = AppState::with_submitter(
        StakeSession::new(catalog),
        Arc::new(DryRunSubmitter::new()),
    );
    TestServer::new(create_router(state)).unwrap()
}

/// Submitter that refuses everything, for failure-path tests.
struct OfflineWallet;

impl StakeSubmitter for OfflineWallet {
    fn submit(&self, _request: StakeRequest) -> Result<TransactionId, SubmissionError> {
        Err(SubmissionError::new("wallet not connected"))
    }
}

/// Create a test server whose submitter refuses every request.
fn create_offline_test_server() -> TestServer {
    let catalog = PoolCatalog::from_provider(&BuiltinPools).unwrap();
    let state = AppState::with_submitter(StakeSession::new(catalog), Arc::new(OfflineWallet));
    TestServer::new(create_router(state)).unwrap()
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

// =============================================================================
// POOLS ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_pools_listing_is_ordered() {
    let server = create_test_server();

    let response = server.get("/pools").await;
    response.assert_status_ok();

    let pools: PoolsResponse = response.json();
    let symbols: Vec<&str> = pools.pools.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["wUSDC", "wETH", "wBTC"]);
}

// =============================================================================
// SESSION FLOW TESTS
// =============================================================================

#[tokio::test]
async fn test_session_starts_idle() {
    let server = create_test_server();

    let response = server.get("/session").await;
    response.assert_status_ok();

    let session: SessionResponse = response.json();
    assert_eq!(session.selected_pool_symbol, None);
    assert_eq!(session.raw_amount, "");
    assert!(!session.is_valid);
}

#[tokio::test]
async fn test_full_flow_over_http() {
    let server = create_test_server();

    let response = server
        .post("/session/pool")
        .json(&json!({"symbol": "wUSDC"}))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/session/amount")
        .json(&json!({"amount": "1000"}))
        .await;
    response.assert_status_ok();

    let session: SessionResponse = response.json();
    assert_eq!(session.selected_pool_symbol.as_deref(), Some("wUSDC"));
    assert_eq!(session.estimated_annual_return.to_string(), "85.00");
    assert!(session.is_valid);
    assert_eq!(session.invalid_reason, None);
}

#[tokio::test]
async fn test_below_minimum_surfaces_reason() {
    let server = create_test_server();

    server
        .post("/session/pool")
        .json(&json!({"symbol": "wUSDC"}))
        .await
        .assert_status_ok();

    let response = server
        .post("/session/amount")
        .json(&json!({"amount": "50"}))
        .await;
    response.assert_status_ok();

    let session: SessionResponse = response.json();
    assert_eq!(session.estimated_annual_return.to_string(), "4.25");
    assert!(!session.is_valid);
    assert_eq!(
        serde_json::to_value(session.invalid_reason).unwrap(),
        json!("below_minimum_stake")
    );
}

#[tokio::test]
async fn test_unknown_pool_is_404() {
    let server = create_test_server();

    let response = server
        .post("/session/pool")
        .json(&json!({"symbol": "DOGE"}))
        .await;
    response.assert_status_not_found();

    let error: ErrorResponse = response.json();
    assert!(error.error.contains("DOGE"));

    // Session untouched
    let session: SessionResponse = server.get("/session").await.json();
    assert_eq!(session.selected_pool_symbol, None);
}

#[tokio::test]
async fn test_oversized_amount_is_rejected_at_the_boundary() {
    let server = create_test_server();

    let oversized = "9".repeat(65);
    let response = server
        .post("/session/amount")
        .json(&json!({"amount": oversized}))
        .await;
    response.assert_status_bad_request();

    // Verbatim storage never saw the payload
    let session: SessionResponse = server.get("/session").await.json();
    assert_eq!(session.raw_amount, "");
}

#[tokio::test]
async fn test_amount_text_is_held_verbatim() {
    let server = create_test_server();

    let response = server
        .post("/session/amount")
        .json(&json!({"amount": "12."}))
        .await;
    response.assert_status_ok();

    let session: SessionResponse = response.json();
    assert_eq!(session.raw_amount, "12.");
}

// =============================================================================
// SUBMIT ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_submit_happy_path() {
    let server = create_test_server();

    server
        .post("/session/pool")
        .json(&json!({"symbol": "wUSDC"}))
        .await
        .assert_status_ok();
    server
        .post("/session/amount")
        .json(&json!({"amount": "1000"}))
        .await
        .assert_status_ok();

    let response = server.post("/session/submit").await;
    response.assert_status_ok();

    let submitted: SubmitResponse = response.json();
    assert_eq!(submitted.transaction_id, "dryrun-00000001");
    assert_eq!(submitted.stage, FlowStage::Submitted);

    // Selection discarded after acceptance
    let session: SessionResponse = server.get("/session").await.json();
    assert_eq!(session.raw_amount, "");
    assert_eq!(session.last_transaction.as_deref(), Some("dryrun-00000001"));
}

#[tokio::test]
async fn test_submit_while_invalid_is_409() {
    let server = create_test_server();

    let response = server.post("/session/submit").await;
    response.assert_status(axum::http::StatusCode::CONFLICT);

    let error: ErrorResponse = response.json();
    assert!(error.error.contains("not submittable"));
}

#[tokio::test]
async fn test_submitter_refusal_is_502_and_resubmittable() {
    let server = create_offline_test_server();

    server
        .post("/session/pool")
        .json(&json!({"symbol": "wUSDC"}))
        .await
        .assert_status_ok();
    server
        .post("/session/amount")
        .json(&json!({"amount": "1000"}))
        .await
        .assert_status_ok();

    let response = server.post("/session/submit").await;
    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);

    let error: ErrorResponse = response.json();
    assert!(error.error.contains("wallet not connected"));

    // The selection survives a refusal; the member may retry
    let session: SessionResponse = server.get("/session").await.json();
    assert_eq!(session.raw_amount, "1000");
    assert!(session.is_valid);
}

// =============================================================================
// RESET ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_reset_returns_to_idle() {
    let server = create_test_server();

    server
        .post("/session/pool")
        .json(&json!({"symbol": "wETH"}))
        .await
        .assert_status_ok();
    server
        .post("/session/amount")
        .json(&json!({"amount": "5"}))
        .await
        .assert_status_ok();

    let response = server.post("/session/reset").await;
    response.assert_status_ok();

    let session: SessionResponse = response.json();
    assert_eq!(session.selected_pool_symbol, None);
    assert_eq!(session.raw_amount, "");
    assert_eq!(session.last_transaction, None);
}
