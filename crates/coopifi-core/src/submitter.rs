//! # Stake Submitter
//!
//! The capability boundary between the flow engine and whatever actually
//! executes a stake.
//!
//! - The CORE hands over a validated [`StakeRequest`] exactly once per
//!   submit action; it never retries and never inspects chain state
//! - Submission errors are opaque here and pass through to the display
//!   layer unchanged
//! - Wallet connectivity is the host's concern, folded into the injected
//!   submitter (a disconnected wallet surfaces as a [`SubmissionError`])

use crate::types::StakeRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of an executed stake transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    /// Create a new transaction id from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque submission failure, produced and owned by the submitter.
///
/// The CORE does not interpret the message; timeouts, wallet state, and
/// chain errors are all the submitter's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Submission failed: {0}")]
pub struct SubmissionError(pub String);

impl SubmissionError {
    /// Create a new submission error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The StakeSubmitter trait executes validated stake requests.
///
/// # Extension Point
///
/// This trait is intentionally defined without in-crate implementations.
/// Hosts inject the real executor (a wallet-backed chain client, a custody
/// service, or a dry-run stand-in). Implementors own timeouts, retries,
/// and error vocabulary; the CORE calls `submit` at most once per
/// user-initiated submit action.
pub trait StakeSubmitter: Send + Sync {
    /// Execute a validated stake request.
    fn submit(&self, request: StakeRequest) -> Result<TransactionId, SubmissionError>;
}

// =============================================================================
// TESTS
// =============================================================================
