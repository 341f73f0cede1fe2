//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Boundary validation lives here: oversized input is rejected before it
//! reaches the CORE session, which stores whatever it is handed verbatim.

use coopifi_core::{
    Decimal, FlowStage, InvalidReason, PoolSymbol, RiskTier, StakeSession, StakingPool,
    primitives::{MAX_AMOUNT_TEXT_LENGTH, MAX_SYMBOL_LENGTH},
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// POOLS RESPONSE
// =============================================================================

/// One pool's terms as served to the display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolJson {
    pub symbol: String,
    pub display_name: String,
    pub annual_percentage_yield: Decimal,
    pub risk_tier: RiskTier,
    pub minimum_stake: Decimal,
}

impl From<&StakingPool> for PoolJson {
    fn from(pool: &StakingPool) -> Self {
        Self {
            symbol: pool.symbol.as_str().to_string(),
            display_name: pool.display_name.clone(),
            annual_percentage_yield: pool.annual_percentage_yield,
            risk_tier: pool.risk_tier,
            minimum_stake: pool.minimum_stake,
        }
    }
}

/// Ordered catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolsResponse {
    pub pools: Vec<PoolJson>,
}

// =============================================================================
// SESSION RESPONSE
// =============================================================================

/// The session read model: the derived snapshot plus the flow stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub stage: FlowStage,
    pub selected_pool_symbol: Option<String>,
    pub raw_amount: String,
    pub estimated_annual_return: Decimal,
    pub is_valid: bool,
    pub invalid_reason: Option<InvalidReason>,
    pub last_transaction: Option<String>,
}

impl SessionResponse {
    /// Project the session's snapshot into the wire shape.
    #[must_use]
    pub fn from_session(session: &StakeSession) -> Self {
        let snapshot = session.snapshot();
        Self {
            stage: session.stage(),
            selected_pool_symbol: snapshot
                .selected_pool_symbol
                .as_ref()
                .map(|s| s.as_str().to_string()),
            raw_amount: snapshot.raw_amount.clone(),
            estimated_annual_return: snapshot.estimated_annual_return,
            is_valid: snapshot.is_valid,
            invalid_reason: snapshot.invalid_reason,
            last_transaction: session
                .last_transaction()
                .map(|t| t.as_str().to_string()),
        }
    }
}

// =============================================================================
// SELECT POOL REQUEST
// =============================================================================

/// Pool selection request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectPoolRequest {
    pub symbol: String,
}

impl SelectPoolRequest {
    /// Convert to a `PoolSymbol`, validating the field.
    ///
    /// Validates that `symbol` is non-empty and within
    /// `MAX_SYMBOL_LENGTH` bytes, rejecting oversized payloads at the API
    /// boundary before they reach the Core session.
    pub fn to_symbol(&self) -> Result<PoolSymbol, String> {
        if self.symbol.is_empty() {
            return Err("symbol must be non-empty".to_string());
        }
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(format!(
                "symbol length {} exceeds maximum {} bytes",
                self.symbol.len(),
                MAX_SYMBOL_LENGTH
            ));
        }
        Ok(PoolSymbol::new(self.symbol.clone()))
    }
}

// =============================================================================
// SET AMOUNT REQUEST
// =============================================================================

/// Amount entry request. The text is forwarded verbatim; only its size is
/// bounded here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAmountRequest {
    pub amount: String,
}

impl SetAmountRequest {
    /// Validate the amount text size.
    ///
    /// Empty and malformed text are legal (the CORE degrades them to a
    /// zero estimate); only oversized payloads are rejected.
    pub fn validated(&self) -> Result<&str, String> {
        if self.amount.len() > MAX_AMOUNT_TEXT_LENGTH {
            return Err(format!(
                "amount length {} exceeds maximum {} bytes",
                self.amount.len(),
                MAX_AMOUNT_TEXT_LENGTH
            ));
        }
        Ok(&self.amount)
    }
}

// =============================================================================
// SUBMIT RESPONSE
// =============================================================================

/// Successful submission response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub transaction_id: String,
    pub stage: FlowStage,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Error payload for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Create an error payload.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
