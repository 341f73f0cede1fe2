//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::HostError;
use crate::api::{self, PoolJson, PoolsResponse, SessionResponse};
use crate::catalog::{BuiltinPools, TomlPoolProvider};
use crate::submitter::DryRunSubmitter;
use coopifi_core::{Decimal, PoolCatalog, PoolSymbol, StakeSession};
use std::path::Path;

/// Load the catalog from the given file, or fall back to the built-in
/// member pools.
pub fn load_catalog(path: Option<&Path>) -> Result<PoolCatalog, HostError> {
    let catalog = match path {
        Some(path) => PoolCatalog::from_provider(&TomlPoolProvider::new(path))?,
        None => PoolCatalog::from_provider(&BuiltinPools)?,
    };
    Ok(catalog)
}

/// Serialize a response for `--json-mode` output.
fn print_json<T: serde::Serialize>(value: &T) -> Result<(), HostError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| HostError::Io(format!("JSON encoding failed: {}", e)))?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    catalog_path: Option<&Path>,
    host: &str,
    port: u16,
) -> Result<(), HostError> {
    let catalog = load_catalog(catalog_path)?;
    let session = StakeSession::new(catalog);

    println!("CoopiFi Staking Host Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:    {}", host);
    println!("  Port:    {}", port);
    println!(
        "  Catalog: {}",
        catalog_path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string())
    );
    println!("  Pools:   {}", session.catalog().len());
    println!();
    println!("Endpoints:");
    println!("  GET  /health         - Health check");
    println!("  GET  /pools          - Pool catalog");
    println!("  GET  /session        - Session read model");
    println!("  POST /session/pool   - Select a pool");
    println!("  POST /session/amount - Set amount text");
    println!("  POST /session/submit - Submit (dry-run)");
    println!("  POST /session/reset  - Back to idle");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, session).await
}

// =============================================================================
// POOLS COMMAND
// =============================================================================

/// List the pool catalog.
pub fn cmd_pools(catalog_path: Option<&Path>, json_mode: bool) -> Result<(), HostError> {
    let catalog = load_catalog(catalog_path)?;

    if json_mode {
        let pools = catalog.list().iter().map(PoolJson::from).collect();
        return print_json(&PoolsResponse { pools });
    }

    println!("Pool Catalog ({} pools)", catalog.len());
    println!();
    println!(
        "  {:<8} {:<18} {:>8} {:<12} {:>12}",
        "SYMBOL", "NAME", "APY", "RISK", "MIN STAKE"
    );
    for pool in catalog.list() {
        let apy_percent = pool.annual_percentage_yield * Decimal::new(100, 0);
        println!(
            "  {:<8} {:<18} {:>7}% {:<12} {:>12}",
            pool.symbol.as_str(),
            pool.display_name,
            apy_percent,
            pool.risk_tier.name(),
            pool.minimum_stake,
        );
    }
    Ok(())
}

// =============================================================================
// ESTIMATE COMMAND
// =============================================================================

/// Derive estimate and validity for a pool and amount entry.
pub fn cmd_estimate(
    catalog_path: Option<&Path>,
    pool: &str,
    amount: &str,
    json_mode: bool,
) -> Result<(), HostError> {
    let catalog = load_catalog(catalog_path)?;
    let mut session = StakeSession::new(catalog);

    session.select_pool(PoolSymbol::new(pool))?;
    session.set_amount(amount);

    if json_mode {
        return print_json(&SessionResponse::from_session(&session));
    }

    let snapshot = session.snapshot();
    println!("Pool:             {}", pool);
    println!("Amount:           {:?}", snapshot.raw_amount);
    println!(
        "Estimated return: {} per year",
        snapshot.estimated_annual_return
    );
    match snapshot.invalid_reason {
        None => println!("Submittable:      yes"),
        Some(reason) => println!("Submittable:      no ({})", reason),
    }
    Ok(())
}

// =============================================================================
// STAKE COMMAND
// =============================================================================

/// Run the full staking flow through the dry-run submitter.
pub fn cmd_stake(
    catalog_path: Option<&Path>,
    pool: &str,
    amount: &str,
    json_mode: bool,
) -> Result<(), HostError> {
    let catalog = load_catalog(catalog_path)?;
    let mut session = StakeSession::new(catalog);

    session.select_pool(PoolSymbol::new(pool))?;
    session.set_amount(amount);

    let snapshot = session.snapshot();
    if let Some(reason) = snapshot.invalid_reason {
        tracing::warn!("stake refused by the gate: {}", reason);
    }

    let transaction = session.submit(&DryRunSubmitter::new())?;

    if json_mode {
        return print_json(&SessionResponse::from_session(&session));
    }

    println!("Stake accepted (dry-run)");
    println!("Transaction: {}", transaction);
    Ok(())
}
