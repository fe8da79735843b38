//! Error types for `ParScan`.
//!
//! One unified error type for all engine operations. "Not found" is never an
//! error: the query functions return `Ok(None)` or an empty `Ok(vec![])` for
//! legitimately absent targets, so callers can always tell "absent" apart
//! from "the operation failed".

use thiserror::Error;

/// Result type alias for `ParScan` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a search request.
///
/// Error codes follow the pattern `SCAN-XXX` for easy debugging.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid thread count (SCAN-001).
    ///
    /// Every search requires at least one worker thread.
    #[error("[SCAN-001] invalid thread count: at least one worker is required")]
    InvalidThreadCount,

    /// Allocation failure (SCAN-002).
    ///
    /// The worst-case result buffer could not be reserved.
    #[error("[SCAN-002] allocation failure: {0}")]
    Allocation(String),

    /// Worker spawn failure (SCAN-003).
    ///
    /// Already-spawned siblings are joined before this surfaces, so no
    /// partially-built request ever outlives its resources.
    #[error("[SCAN-003] failed to spawn worker {worker}: {source}")]
    Spawn {
        /// Zero-based index of the worker that could not be started.
        worker: usize,
        /// Underlying OS error from thread creation.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error (SCAN-004).
    #[error("[SCAN-004] configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl Error {
    /// Returns the stable error code for this variant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidThreadCount => "SCAN-001",
            Self::Allocation(_) => "SCAN-002",
            Self::Spawn { .. } => "SCAN-003",
            Self::Config(_) => "SCAN-004",
        }
    }
}
