//! # CoopiFi CLI Module
//!
//! This module implements the CLI interface for the CoopiFi host.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `pools` - List the pool catalog
//! - `estimate` - Derive estimate and validity for a pool and amount
//! - `stake` - Run the full flow through the dry-run submitter

mod commands;

use crate::HostError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// CoopiFi - Cooperative Staking Host
///
/// A deterministic staking flow over an injected pool catalog.
/// Estimates are exact decimals; submission is gated, never guessed.
#[derive(Parser, Debug)]
#[command(name = "coopifi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML pool catalog (built-in pools when omitted)
    #[arg(short = 'C', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// List the pool catalog
    Pools,

    /// Derive the estimated annual return and validity for an entry
    Estimate {
        /// Pool symbol
        #[arg(short = 'P', long)]
        pool: String,

        /// Amount text, exactly as a member would type it
        #[arg(short, long)]
        amount: String,
    },

    /// Run the full staking flow through the dry-run submitter
    Stake {
        /// Pool symbol
        #[arg(short = 'P', long)]
        pool: String,

        /// Amount text, exactly as a member would type it
        #[arg(short, long)]
        amount: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), HostError> {
    let json_mode = cli.json_mode;
    let catalog_path = cli.catalog.as_deref();

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(catalog_path, &host, port).await,
        Some(Commands::Pools) | None => cmd_pools(catalog_path, json_mode),
        Some(Commands::Estimate { pool, amount }) => {
            cmd_estimate(catalog_path, &pool, &amount, json_mode)
        }
        Some(Commands::Stake { pool, amount }) => {
            cmd_stake(catalog_path, &pool, &amount, json_mode)
        }
    }
}
