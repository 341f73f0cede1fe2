//! # CoopiFi - Cooperative Staking Host
//!
//! The main binary for the CoopiFi staking flow.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for catalog and flow operations
//! - Catalog loading from TOML or built-in defaults
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  apps/coopifi (THE BINARY)                   │
//! │                                                              │
//! │  ┌─────────────┐   ┌─────────────┐   ┌──────────────────┐  │
//! │  │   CLI       │   │   HTTP API  │   │  Catalog Loader  │  │
//! │  │  (clap)     │   │   (axum)    │   │  (toml / builtin)│  │
//! │  └──────┬──────┘   └──────┬──────┘   └────────┬─────────┘  │
//! │         │                 │                   │             │
//! │         └─────────────────┼───────────────────┘             │
//! │                           ▼                                 │
//! │                   ┌───────────────┐                         │
//! │                   │ coopifi-core  │                         │
//! │                   │ (THE LOGIC)   │                         │
//! │                   └───────────────┘                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! coopifi server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! coopifi pools
//! coopifi estimate --pool wUSDC --amount 1000
//! coopifi stake --pool wUSDC --amount 1000
//! ```

use clap::Parser;
use coopifi::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — COOPIFI_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("COOPIFI_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "coopifi=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the CoopiFi startup banner.
fn print_banner() {
    println!(
        r#"
   ██████╗ ██████╗  ██████╗ ██████╗ ██╗███████╗██╗
  ██╔════╝██╔═══██╗██╔═══██╗██╔══██╗██║██╔════╝██║
  ██║     ██║   ██║██║   ██║██████╔╝██║█████╗  ██║
  ██║     ██║   ██║██║   ██║██╔═══╝ ██║██╔══╝  ██║
  ╚██████╗╚██████╔╝╚██████╔╝██║     ██║██║     ██║
   ╚═════╝ ╚═════╝  ╚═════╝ ╚═╝     ╚═╝╚═╝     ╚═╝

  Cooperative Staking Host v{}

  Deterministic • Exact • Gated
"#,
        env!("CARGO_PKG_VERSION")
    );
}
