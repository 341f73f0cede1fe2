//! # Core Type Definitions
//!
//! This module contains all core types for the CoopiFi staking-flow engine:
//! - Pool identity and terms (`PoolSymbol`, `RiskTier`, `StakingPool`)
//! - Submission payload (`StakeRequest`)
//! - Error types (`StakeError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use `rust_decimal::Decimal` for monetary values (no floating-point)
//! - Implement `Ord` where they key a `BTreeMap`
//! - Carry no hidden or ambient state

use crate::submitter::SubmissionError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// POOL IDENTITY
// =============================================================================

/// Unique identifier of a stakeable pool (`"wUSDC"`, `"wETH"`, ...).
///
/// Symbols are unique across a catalog and are the only reference the
/// selection state holds into pool terms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PoolSymbol(pub String);

impl PoolSymbol {
    /// Create a new pool symbol from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PoolSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Risk classification of a pool.
///
/// Informational for the display layer; the gate does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// Stable-asset pools.
    Low,
    /// Volatile-asset pools.
    Medium,
    /// Leveraged or experimental pools.
    High,
}

impl RiskTier {
    /// Get the tier name as shown to members.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// POOL TERMS
// =============================================================================

/// Terms of a single stakeable pool.
///
/// Invariants (enforced at catalog construction):
/// - `minimum_stake > 0`
/// - `annual_percentage_yield >= 0`
/// - `symbol` unique across the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingPool {
    /// Unique pool identifier.
    pub symbol: PoolSymbol,
    /// Member-facing pool name.
    pub display_name: String,
    /// Decimal yield rate used to project the annual return (0.085 = 8.5%).
    pub annual_percentage_yield: Decimal,
    /// Risk classification.
    pub risk_tier: RiskTier,
    /// Smallest stake the pool accepts, in the pool's own unit.
    pub minimum_stake: Decimal,
}

impl StakingPool {
    /// Create a new pool description.
    #[must_use]
    pub fn new(
        symbol: PoolSymbol,
        display_name: impl Into<String>,
        annual_percentage_yield: Decimal,
        risk_tier: RiskTier,
        minimum_stake: Decimal,
    ) -> Self {
        Self {
            symbol,
            display_name: display_name.into(),
            annual_percentage_yield,
            risk_tier,
            minimum_stake,
        }
    }
}

// =============================================================================
// STAKE REQUEST
// =============================================================================

/// A validated stake submission payload.
///
/// Built only by the submission gate from a valid selection; ownership
/// transfers to the submitter on creation and the CORE never retains it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeRequest {
    /// The pool being staked into.
    pub pool_symbol: PoolSymbol,
    /// The parsed, strictly positive stake amount.
    pub amount: Decimal,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the staking flow.
///
/// - No silent failures
/// - Use `Result<T, StakeError>` for fallible operations
/// - The CORE never panics; all errors are recoverable
///
/// Validation OUTCOMES (`NoPoolSelected`, `InvalidAmountFormat`,
/// `BelowMinimumStake`) are not errors: they are data, surfaced through
/// [`crate::gate::Validity`] for the display layer.
#[derive(Debug, Error)]
pub enum StakeError {
    /// The referenced symbol is absent from the catalog.
    #[error("Unknown pool symbol: {0}")]
    UnknownPoolSymbol(PoolSymbol),

    /// A catalog listed the same symbol twice.
    #[error("Duplicate pool symbol in catalog: {0}")]
    DuplicatePoolSymbol(PoolSymbol),

    /// A pool declared a zero or negative minimum stake.
    #[error("Pool {0} declares a non-positive minimum stake")]
    NonPositiveMinimumStake(PoolSymbol),

    /// A pool declared a negative yield rate.
    #[error("Pool {0} declares a negative annual percentage yield")]
    NegativeYield(PoolSymbol),

    /// A catalog exceeded [`crate::primitives::MAX_CATALOG_POOLS`].
    #[error("Catalog of {0} pools exceeds the construction bound")]
    CatalogTooLarge(usize),

    /// A request was built while the selection was invalid.
    #[error("Selection is not submittable")]
    NotSubmittable,

    /// The injected catalog source failed to supply pools.
    #[error("Catalog provider error: {0}")]
    Provider(String),

    /// The injected submitter rejected a request. Opaque to the CORE;
    /// passed through to the display layer unchanged.
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

// =============================================================================
// TESTS
// =============================================================================
