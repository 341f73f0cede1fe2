//! # coopifi (host library)
//!
//! Library surface of the CoopiFi host binary: the HTTP API, the CLI, the
//! catalog loaders, and the dry-run submitter. Exposed as a lib so the
//! integration tests can drive the API without a running process.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod submitter;

use coopifi_core::StakeError;
use thiserror::Error;

/// Errors the host can hit around the CORE: flow errors pass through,
/// everything environmental (sockets, files) is I/O.
#[derive(Debug, Error)]
pub enum HostError {
    /// A flow error from the engine.
    #[error(transparent)]
    Stake(#[from] StakeError),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}
