//! # coopifi-core
//!
//! The deterministic staking-flow engine for CoopiFi - THE LOGIC.
//!
//! This crate implements the CORE of the staking flow: pool terms in,
//! estimate and validity out, and a validated request handed to an
//! injected submitter once — and only once — the gate allows it.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is single-threaded, synchronous, and reactive: every mutation
//!   atomically recomputes the derived read model before returning
//! - Is closed: catalog sources and submitters are injected capabilities,
//!   never implemented here
//! - Is minimal: rendering, wallet dialogs, routing, and listing pages are
//!   external collaborators
//! - Has NO async, NO I/O, NO network dependencies (pure Rust)
//! - Does NO floating-point arithmetic; all money math is `Decimal`

// =============================================================================
// MODULES
// =============================================================================

pub mod amount;
pub mod catalog;
pub mod estimator;
pub mod gate;
pub mod primitives;
pub mod selection;
pub mod session;
pub mod submitter;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{PoolSymbol, RiskTier, StakeError, StakeRequest, StakingPool};

// =============================================================================
// RE-EXPORTS: Flow Engine
// =============================================================================

pub use amount::{parse_amount, parse_positive_amount};
pub use catalog::{PoolCatalog, PoolProvider};
pub use estimator::{estimate_annual_return, zero_estimate};
pub use gate::{InvalidReason, SubmissionGate, Validity};
pub use selection::SelectionState;
pub use session::{FlowStage, Snapshot, StakeSession};
pub use submitter::{StakeSubmitter, SubmissionError, TransactionId};

// =============================================================================
// RE-EXPORTS: Decimal
// =============================================================================

// The one numeric type the whole flow speaks. Re-exported so hosts do not
// need their own rust_decimal version pin.
pub use rust_decimal::Decimal;
