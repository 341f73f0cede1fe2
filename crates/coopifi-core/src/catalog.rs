//! # Pool Catalog
//!
//! Immutable, ordered list of stakeable pools and their terms.
//!
//! - Loaded once at startup from an injected [`PoolProvider`]
//! - Read-only after construction; freely shared across observers
//! - Listing order is the provider's load order, stable for the catalog's
//!   lifetime
//! - Invariants validated at the construction boundary, before any pool
//!   reaches the flow

use crate::primitives::MAX_CATALOG_POOLS;
use crate::types::{PoolSymbol, StakeError, StakingPool};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Source of pool terms.
///
/// # Extension Point
///
/// This trait is intentionally defined without in-crate implementations.
/// Hosts inject whatever actually backs the catalog (a config file, a
/// registry service, a chain indexer); the CORE only sees the resulting
/// terms. Implementors should be stateless from the catalog's perspective:
/// the catalog is built exactly once per provider call.
pub trait PoolProvider: Send + Sync {
    /// Produce the ordered pool list.
    ///
    /// Failures surface as [`StakeError::Provider`].
    fn pools(&self) -> Result<Vec<StakingPool>, StakeError>;
}

// =============================================================================
// CATALOG
// =============================================================================

/// The immutable pool catalog.
///
/// Holds the ordered pool list plus a symbol index for O(log n) lookup.
/// `BTreeMap` keeps iteration deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCatalog {
    /// Pools in provider load order.
    pools: Vec<StakingPool>,
    /// Symbol -> position in `pools`.
    index: BTreeMap<PoolSymbol, usize>,
}

impl PoolCatalog {
    /// Build a catalog from an ordered pool list, validating invariants.
    ///
    /// Returns `DuplicatePoolSymbol`, `NonPositiveMinimumStake`,
    /// `NegativeYield`, or `CatalogTooLarge` when the list violates the
    /// catalog contract. An empty catalog is legal; nothing is selectable
    /// until a provider supplies pools.
    pub fn new(pools: Vec<StakingPool>) -> Result<Self, StakeError> {
        if pools.len() > MAX_CATALOG_POOLS {
            return Err(StakeError::CatalogTooLarge(pools.len()));
        }

        let mut index = BTreeMap::new();
        for (position, pool) in pools.iter().enumerate() {
            if pool.minimum_stake <= Decimal::ZERO {
                return Err(StakeError::NonPositiveMinimumStake(pool.symbol.clone()));
            }
            if pool.annual_percentage_yield < Decimal::ZERO {
                return Err(StakeError::NegativeYield(pool.symbol.clone()));
            }
            if index.insert(pool.symbol.clone(), position).is_some() {
                return Err(StakeError::DuplicatePoolSymbol(pool.symbol.clone()));
            }
        }

        Ok(Self { pools, index })
    }

    /// Build a catalog by pulling pools from an injected provider.
    pub fn from_provider(provider: &dyn PoolProvider) -> Result<Self, StakeError> {
        Self::new(provider.pools()?)
    }

    /// The ordered pool list, in provider load order.
    #[must_use]
    pub fn list(&self) -> &[StakingPool] {
        &self.pools
    }

    /// Look up a pool by symbol.
    pub fn lookup(&self, symbol: &PoolSymbol) -> Result<&StakingPool, StakeError> {
        self.index
            .get(symbol)
            .and_then(|position| self.pools.get(*position))
            .ok_or_else(|| StakeError::UnknownPoolSymbol(symbol.clone()))
    }

    /// Whether the symbol is present in the catalog.
    #[must_use]
    pub fn contains(&self, symbol: &PoolSymbol) -> bool {
        self.index.contains_key(symbol)
    }

    /// Number of pools in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether the catalog holds no pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskTier;

    fn pool(symbol: &str, apy: Decimal, minimum: Decimal) -> StakingPool {
        StakingPool::new(
            PoolSymbol::new(symbol),
            symbol.to_string(),
            apy,
            RiskTier::Low,
            minimum,
        )
    }

    #[test]
    fn list_preserves_load_order() {
        let catalog = PoolCatalog::new(vec![
            pool("wUSDC", Decimal::new(85, 3), Decimal::new(100, 0)),
            pool("wETH", Decimal::new(123, 3), Decimal::new(1, 1)),
            pool("wBTC", Decimal::new(142, 3), Decimal::new(1, 3)),
        ])
        .expect("catalog");

        let symbols: Vec<&str> = catalog.list().iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["wUSDC", "wETH", "wBTC"]);
    }

    #[test]
    fn lookup_finds_pool() {
        let catalog = PoolCatalog::new(vec![pool(
            "wUSDC",
            Decimal::new(85, 3),
            Decimal::new(100, 0),
        )])
        .expect("catalog");

        let found = catalog.lookup(&PoolSymbol::new("wUSDC")).expect("lookup");
        assert_eq!(found.minimum_stake, Decimal::new(100, 0));
    }

    #[test]
    fn lookup_unknown_symbol_fails() {
        let catalog = PoolCatalog::new(Vec::new()).expect("catalog");
        let result = catalog.lookup(&PoolSymbol::new("wXYZ"));
        assert!(matches!(result, Err(StakeError::UnknownPoolSymbol(_))));
    }

    #[test]
    fn duplicate_symbol_rejected() {
        let result = PoolCatalog::new(vec![
            pool("wUSDC", Decimal::new(85, 3), Decimal::new(100, 0)),
            pool("wUSDC", Decimal::new(90, 3), Decimal::new(50, 0)),
        ]);
        assert!(matches!(result, Err(StakeError::DuplicatePoolSymbol(_))));
    }

    #[test]
    fn zero_minimum_rejected() {
        let result = PoolCatalog::new(vec![pool("wUSDC", Decimal::new(85, 3), Decimal::ZERO)]);
        assert!(matches!(result, Err(StakeError::NonPositiveMinimumStake(_))));
    }

    #[test]
    fn negative_yield_rejected() {
        let result = PoolCatalog::new(vec![pool(
            "wUSDC",
            Decimal::new(-85, 3),
            Decimal::new(100, 0),
        )]);
        assert!(matches!(result, Err(StakeError::NegativeYield(_))));
    }

    #[test]
    fn zero_yield_is_legal() {
        let catalog = PoolCatalog::new(vec![pool("wIDLE", Decimal::ZERO, Decimal::new(1, 0))]);
        assert!(catalog.is_ok());
    }

    #[test]
    fn empty_catalog_is_legal() {
        let catalog = PoolCatalog::new(Vec::new()).expect("catalog");
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    struct FailingProvider;

    impl PoolProvider for FailingProvider {
        fn pools(&self) -> Result<Vec<StakingPool>, StakeError> {
            Err(StakeError::Provider("registry unreachable".to_string()))
        }
    }

    #[test]
    fn provider_failure_passes_through() {
        let result = PoolCatalog::from_provider(&FailingProvider);
        assert!(matches!(result, Err(StakeError::Provider(_))));
    }
}
