//! # Dry-Run Submitter
//!
//! The host's stand-in for the external stake executor. Real submission
//! (wallet, chain client, custody) is an external collaborator; this
//! implementation accepts every request, logs it, and fabricates a
//! sequential transaction id so the rest of the flow can be exercised
//! end to end.

use coopifi_core::{StakeRequest, StakeSubmitter, SubmissionError, TransactionId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Accepts every validated request without touching a chain.
#[derive(Debug, Default)]
pub struct DryRunSubmitter {
    /// Monotonic id source for fabricated transaction ids.
    sequence: AtomicU64,
}

impl DryRunSubmitter {
    /// Create a new dry-run submitter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StakeSubmitter for DryRunSubmitter {
    fn submit(&self, request: StakeRequest) -> Result<TransactionId, SubmissionError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let transaction = TransactionId::new(format!("dryrun-{sequence:08}"));

        tracing::info!(
            pool = %request.pool_symbol,
            amount = %request.amount,
            transaction = %transaction,
            "dry-run stake accepted"
        );

        Ok(transaction)
    }
}

// =============================================================================
// TESTS
// =============================================================================
