//! # Catalog Loading
//!
//! The host side of the catalog boundary: [`PoolProvider`] implementations
//! that feed the CORE's `PoolCatalog`.
//!
//! Two sources:
//! - `TomlPoolProvider` — a `pools.toml` file supplied by the operator
//! - `BuiltinPools` — the compiled-in member pools, used when no file is
//!   given

use coopifi_core::{Decimal, PoolProvider, PoolSymbol, RiskTier, StakeError, StakingPool};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum catalog file size (1 MB).
///
/// A catalog is a handful of pool entries; anything larger is malformed
/// or malicious.
const MAX_CATALOG_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// TOML PROVIDER
// =============================================================================

/// On-disk catalog format: a list of `[[pools]]` tables.
///
/// Decimal fields are TOML strings (`"0.085"`), keeping the exact-decimal
/// contract end to end.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    pools: Vec<StakingPool>,
}

/// Catalog source backed by a TOML file.
///
/// The file is read once per `pools()` call; the CORE builds the catalog
/// exactly once at startup.
#[derive(Debug, Clone)]
pub struct TomlPoolProvider {
    path: PathBuf,
}

impl TomlPoolProvider {
    /// Create a provider for the given catalog file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PoolProvider for TomlPoolProvider {
    fn pools(&self) -> Result<Vec<StakingPool>, StakeError> {
        let path = validate_file_path(&self.path)?;
        validate_file_size(&path, MAX_CATALOG_FILE_SIZE)?;

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            StakeError::Provider(format!("Cannot read catalog '{}': {}", path.display(), e))
        })?;
        let file: CatalogFile = toml::from_str(&contents).map_err(|e| {
            StakeError::Provider(format!("Malformed catalog '{}': {}", path.display(), e))
        })?;
        Ok(file.pools)
    }
}

/// Validate a catalog file path.
///
/// Canonicalizes the path to resolve symlinks and "..", ensures it exists,
/// and ensures it is a file. This prevents path traversal where a path
/// like "../../../etc/passwd" could reach sensitive files.
fn validate_file_path(path: &Path) -> Result<PathBuf, StakeError> {
    let canonical = path.canonicalize().map_err(|e| {
        StakeError::Provider(format!("Invalid catalog path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(StakeError::Provider(format!(
            "Catalog path '{}' is not a file",
            canonical.display()
        )));
    }
    Ok(canonical)
}

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), StakeError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| StakeError::Provider(format!("Cannot read catalog metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(StakeError::Provider(format!(
            "Catalog size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

// =============================================================================
// BUILT-IN PROVIDER
// =============================================================================

/// The compiled-in member pools, matching the dashboard's catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPools;

impl PoolProvider for BuiltinPools {
    fn pools(&self) -> Result<Vec<StakingPool>, StakeError> {
        Ok(vec![
            StakingPool::new(
                PoolSymbol::new("wUSDC"),
                "Wrapped USDC",
                Decimal::new(85, 3),
                RiskTier::Low,
                Decimal::new(100, 0),
            ),
            StakingPool::new(
                PoolSymbol::new("wETH"),
                "Wrapped ETH",
                Decimal::new(123, 3),
                RiskTier::Medium,
                Decimal::new(1, 1),
            ),
            StakingPool::new(
                PoolSymbol::new("wBTC"),
                "Wrapped Bitcoin",
                Decimal::new(142, 3),
                RiskTier::Medium,
                Decimal::new(1, 3),
            ),
        ])
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use coopifi_core::PoolCatalog;

    #[test]
    fn builtin_pools_build_a_catalog() {
        let catalog = PoolCatalog::from_provider(&BuiltinPools).expect("catalog");
        assert_eq!(catalog.len(), 3);

        let wusdc = catalog.lookup(&PoolSymbol::new("wUSDC")).expect("lookup");
        assert_eq!(wusdc.annual_percentage_yield, Decimal::new(85, 3));
        assert_eq!(wusdc.minimum_stake, Decimal::new(100, 0));
        assert_eq!(wusdc.risk_tier, RiskTier::Low);
    }

    #[test]
    fn toml_catalog_parses() {
        let contents = r#"
            [[pools]]
            symbol = "wUSDC"
            display_name = "Wrapped USDC"
            annual_percentage_yield = "0.085"
            risk_tier = "low"
            minimum_stake = "100"

            [[pools]]
            symbol = "wETH"
            display_name = "Wrapped ETH"
            annual_percentage_yield = "0.123"
            risk_tier = "medium"
            minimum_stake = "0.1"
        "#;

        let file: CatalogFile = toml::from_str(contents).expect("parse");
        assert_eq!(file.pools.len(), 2);
        assert_eq!(file.pools[0].symbol, PoolSymbol::new("wUSDC"));
        assert_eq!(file.pools[1].minimum_stake, Decimal::new(1, 1));
    }

    #[test]
    fn missing_catalog_file_is_a_provider_error() {
        let provider = TomlPoolProvider::new("/nonexistent/pools.toml");
        let result = provider.pools();
        assert!(matches!(result, Err(StakeError::Provider(_))));
    }
}
