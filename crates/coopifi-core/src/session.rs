//! # Session Module
//!
//! The staking session combines the immutable catalog with the volatile
//! selection state and keeps the derived read model current.
//!
//! - Selection is volatile, session-local state with a single writer
//! - Every mutation atomically recomputes the snapshot before control
//!   returns to the caller; there is no window in which the read model is
//!   stale
//! - Recompute-on-mutation is explicit — the CORE assumes no rendering
//!   framework and carries no observer machinery
//! - Nothing here blocks, suspends, or retries; submission timeouts belong
//!   to the injected submitter

use crate::catalog::PoolCatalog;
use crate::estimator::{estimate_annual_return, zero_estimate};
use crate::gate::{InvalidReason, SubmissionGate};
use crate::selection::SelectionState;
use crate::submitter::{StakeSubmitter, TransactionId};
use crate::types::{PoolSymbol, StakeError, StakeRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// FLOW STAGE
// =============================================================================

/// Where the session stands in the staking flow.
///
/// Stages are derived, informational state for the display layer; no
/// operation is gated on them. `Submitted` is reached only through a
/// successful submission and holds until the next mutation or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStage {
    /// No pool selected yet.
    Idle,
    /// A pool is selected, no amount text entered.
    PoolSelected,
    /// Amount entered and the gate allows submission.
    Valid,
    /// Amount entered and the gate refuses submission.
    Invalid,
    /// The submitter accepted a request; selection has been discarded.
    Submitted,
}

impl FlowStage {
    /// Get the stage name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FlowStage::Idle => "Idle",
            FlowStage::PoolSelected => "Pool Selected",
            FlowStage::Valid => "Ready to Submit",
            FlowStage::Invalid => "Needs Attention",
            FlowStage::Submitted => "Submitted",
        }
    }

    /// Check if this stage is terminal (Submitted).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowStage::Submitted)
    }
}

impl std::fmt::Display for FlowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// SNAPSHOT (Derived Read Model)
// =============================================================================

/// The plain read model the display layer consumes after every mutation.
///
/// Derived, never authoritative: recomputed from selection + catalog on
/// each change. Currency and percentage formatting are display concerns;
/// the snapshot carries raw values only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The selected pool, if any.
    pub selected_pool_symbol: Option<PoolSymbol>,
    /// The amount text exactly as entered.
    pub raw_amount: String,
    /// Estimated annual return at the selected pool's rate, `0.00` when
    /// nothing meaningful is entered.
    pub estimated_annual_return: Decimal,
    /// Whether the submit action is allowed.
    pub is_valid: bool,
    /// Why submission is refused, absent when valid.
    pub invalid_reason: Option<InvalidReason>,
}

impl Snapshot {
    /// Derive the read model from the current selection and catalog.
    ///
    /// Pure: same selection and catalog, same snapshot.
    #[must_use]
    pub fn derive(selection: &SelectionState, catalog: &PoolCatalog) -> Self {
        let estimated_annual_return = selection
            .selected_pool_symbol()
            .and_then(|symbol| catalog.lookup(symbol).ok())
            .map_or_else(zero_estimate, |pool| {
                estimate_annual_return(selection.raw_amount(), pool.annual_percentage_yield)
            });

        let validity = SubmissionGate::evaluate(selection, catalog);

        Self {
            selected_pool_symbol: selection.selected_pool_symbol().cloned(),
            raw_amount: selection.raw_amount().to_string(),
            estimated_annual_return,
            is_valid: validity.is_valid(),
            invalid_reason: validity.reason(),
        }
    }
}

// =============================================================================
// STAKE SESSION
// =============================================================================

/// A StakeSession owns the catalog, the selection, and the derived
/// snapshot for one member's staking flow.
///
/// The session provides a high-level interface for:
/// - Selecting a pool and entering an amount
/// - Reading the always-current snapshot
/// - Handing a validated request to the injected submitter
#[derive(Debug, Clone)]
pub struct StakeSession {
    /// Pool terms, read-only for the session's lifetime.
    catalog: PoolCatalog,
    /// The volatile selection (single logical writer).
    selection: SelectionState,
    /// Derived read model, recomputed on every mutation.
    snapshot: Snapshot,
    /// Set by the last successful submission, cleared by mutation or reset.
    last_transaction: Option<TransactionId>,
}

impl StakeSession {
    /// Create an idle session over a validated catalog.
    #[must_use]
    pub fn new(catalog: PoolCatalog) -> Self {
        let selection = SelectionState::new();
        let snapshot = Snapshot::derive(&selection, &catalog);
        Self {
            catalog,
            selection,
            snapshot,
            last_transaction: None,
        }
    }

    /// The catalog this session was built over.
    #[must_use]
    pub fn catalog(&self) -> &PoolCatalog {
        &self.catalog
    }

    /// The current read model. Always consistent with the last mutation.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The id of the last successful submission, if the session is in the
    /// `Submitted` stage.
    #[must_use]
    pub fn last_transaction(&self) -> Option<&TransactionId> {
        self.last_transaction.as_ref()
    }

    /// Derive the current flow stage.
    #[must_use]
    pub fn stage(&self) -> FlowStage {
        if self.last_transaction.is_some() {
            return FlowStage::Submitted;
        }
        match self.selection.selected_pool_symbol() {
            None => FlowStage::Idle,
            Some(_) if self.selection.raw_amount().is_empty() => FlowStage::PoolSelected,
            Some(_) if self.snapshot.is_valid => FlowStage::Valid,
            Some(_) => FlowStage::Invalid,
        }
    }

    /// Select a pool and recompute the snapshot.
    ///
    /// Fails with [`StakeError::UnknownPoolSymbol`] and leaves everything
    /// unchanged when the symbol is absent. A successful selection after a
    /// submission begins a new flow.
    pub fn select_pool(&mut self, symbol: PoolSymbol) -> Result<(), StakeError> {
        self.selection.select_pool(symbol, &self.catalog)?;
        self.last_transaction = None;
        self.recompute();
        Ok(())
    }

    /// Store amount text verbatim and recompute the snapshot.
    ///
    /// Always succeeds; malformed text simply derives a zero estimate and
    /// an invalid-format reason. A mutation after a submission begins a
    /// new flow.
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.selection.set_amount(text);
        self.last_transaction = None;
        self.recompute();
    }

    /// Build the submission payload from the current selection.
    ///
    /// Fails with [`StakeError::NotSubmittable`] while the gate reports
    /// invalid. Does not mutate the session.
    pub fn build_request(&self) -> Result<StakeRequest, StakeError> {
        SubmissionGate::build_request(&self.selection, &self.catalog)
    }

    /// Submit the current selection through the injected submitter.
    ///
    /// Calls the submitter at most once. On acceptance the selection is
    /// discarded and the transaction id retained; on refusal the error
    /// passes through unchanged and the session stays valid and
    /// resubmittable.
    pub fn submit(&mut self, submitter: &dyn StakeSubmitter) -> Result<TransactionId, StakeError> {
        let request = self.build_request()?;
        let transaction = submitter.submit(request)?;
        self.selection.clear();
        self.last_transaction = Some(transaction.clone());
        self.recompute();
        Ok(transaction)
    }

    /// Discard the selection and any submission marker, returning to idle.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.last_transaction = None;
        self.recompute();
    }

    /// Recompute the derived snapshot. Called by every mutation before
    /// control returns to the caller.
    fn recompute(&mut self) {
        self.snapshot = Snapshot::derive(&self.selection, &self.catalog);
    }
}

// =============================================================================
// TESTS
// =============================================================================
