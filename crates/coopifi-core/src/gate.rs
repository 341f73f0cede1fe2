//! # Submission Gate
//!
//! Derives whether the current selection may be submitted, and builds the
//! submission payload once it may.
//!
//! - Validation outcomes are DATA, not errors: the display layer reads the
//!   reason to disable the submit action and show guidance
//! - Only structural misuse (building a request while invalid) is a hard
//!   failure
//! - The boundary is inclusive: an amount exactly equal to the pool
//!   minimum is valid

use crate::amount::parse_positive_amount;
use crate::catalog::PoolCatalog;
use crate::selection::SelectionState;
use crate::types::{StakeError, StakeRequest};
use serde::{Deserialize, Serialize};

// =============================================================================
// VALIDITY
// =============================================================================

/// Why the current selection cannot be submitted.
///
/// Reason codes only; wording is a display-layer concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// No pool has been selected yet.
    NoPoolSelected,
    /// The amount text is not a strictly positive decimal.
    InvalidAmountFormat,
    /// The amount is below the selected pool's minimum stake.
    BelowMinimumStake,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InvalidReason::NoPoolSelected => "no pool selected",
            InvalidReason::InvalidAmountFormat => "invalid amount format",
            InvalidReason::BelowMinimumStake => "below minimum stake",
        };
        f.write_str(name)
    }
}

/// Result of evaluating the selection against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// The selection may be submitted.
    Valid,
    /// The selection may not be submitted, with the reason why.
    Invalid(InvalidReason),
}

impl Validity {
    /// Whether submission is allowed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// The invalid reason, absent when valid.
    #[must_use]
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(reason) => Some(*reason),
        }
    }
}

// =============================================================================
// GATE
// =============================================================================

/// The SubmissionGate derives validity and builds submission payloads.
pub struct SubmissionGate;

impl SubmissionGate {
    /// Evaluate the selection against the catalog.
    ///
    /// Rule order:
    /// 1. no pool selected → `NoPoolSelected`
    /// 2. amount not a strictly positive decimal → `InvalidAmountFormat`
    /// 3. amount strictly below the pool minimum → `BelowMinimumStake`
    /// 4. otherwise valid
    #[must_use]
    pub fn evaluate(selection: &SelectionState, catalog: &PoolCatalog) -> Validity {
        let Some(symbol) = selection.selected_pool_symbol() else {
            return Validity::Invalid(InvalidReason::NoPoolSelected);
        };
        let Ok(pool) = catalog.lookup(symbol) else {
            // A selection only ever holds catalog-validated symbols; a miss
            // here means the caller paired the selection with a different
            // catalog. Treat it as nothing selected.
            return Validity::Invalid(InvalidReason::NoPoolSelected);
        };
        let Some(amount) = parse_positive_amount(selection.raw_amount()) else {
            return Validity::Invalid(InvalidReason::InvalidAmountFormat);
        };
        if amount < pool.minimum_stake {
            return Validity::Invalid(InvalidReason::BelowMinimumStake);
        }
        Validity::Valid
    }

    /// Build a submission payload from a valid selection.
    ///
    /// Fails with [`StakeError::NotSubmittable`] while `evaluate` reports
    /// invalid. Ownership of the returned request transfers to the
    /// submitter; the CORE never retains it.
    pub fn build_request(
        selection: &SelectionState,
        catalog: &PoolCatalog,
    ) -> Result<StakeRequest, StakeError> {
        if !Self::evaluate(selection, catalog).is_valid() {
            return Err(StakeError::NotSubmittable);
        }
        let symbol = selection
            .selected_pool_symbol()
            .ok_or(StakeError::NotSubmittable)?;
        let amount =
            parse_positive_amount(selection.raw_amount()).ok_or(StakeError::NotSubmittable)?;
        Ok(StakeRequest {
            pool_symbol: symbol.clone(),
            amount,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
