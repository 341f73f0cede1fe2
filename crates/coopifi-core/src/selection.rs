//! # Selection State
//!
//! The member's in-progress staking input: which pool, and the amount text
//! exactly as typed.
//!
//! - Volatile, session-local state with a single logical writer
//! - Never serialized; discarded on reset or successful submission
//! - `raw_amount` is held verbatim — partially-typed, empty, or malformed
//!   text must survive a re-render without loss

use crate::catalog::PoolCatalog;
use crate::types::{PoolSymbol, StakeError};

/// The current pool choice and raw amount text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// The chosen pool, if any. Always a symbol the catalog validated.
    selected_pool_symbol: Option<PoolSymbol>,
    /// Amount text exactly as entered. Never reformatted.
    raw_amount: String,
}

impl SelectionState {
    /// Create an idle selection: no pool, empty amount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected pool symbol, if any.
    #[must_use]
    pub fn selected_pool_symbol(&self) -> Option<&PoolSymbol> {
        self.selected_pool_symbol.as_ref()
    }

    /// The raw amount text, verbatim.
    #[must_use]
    pub fn raw_amount(&self) -> &str {
        &self.raw_amount
    }

    /// Select a pool by symbol, validated against the catalog.
    ///
    /// Fails with [`StakeError::UnknownPoolSymbol`] and leaves the state
    /// unchanged when the symbol is absent. On success the prior amount
    /// text is kept — it is re-evaluated against the new pool's terms,
    /// not cleared.
    pub fn select_pool(
        &mut self,
        symbol: PoolSymbol,
        catalog: &PoolCatalog,
    ) -> Result<(), StakeError> {
        if !catalog.contains(&symbol) {
            return Err(StakeError::UnknownPoolSymbol(symbol));
        }
        self.selected_pool_symbol = Some(symbol);
        Ok(())
    }

    /// Store amount text verbatim. Always succeeds.
    ///
    /// Whether the text parses is decided later by the estimator and the
    /// gate; the selection itself holds every keystroke losslessly.
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.raw_amount = text.into();
    }

    /// Discard the selection, returning to idle.
    pub fn clear(&mut self) {
        self.selected_pool_symbol = None;
        self.raw_amount.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
