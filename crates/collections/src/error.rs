//! Standalone error types for tether-collections
//!
//! Emptiness is never an error: `pop`/`peek` style operations return
//! `Option`. Errors cover indexed access, pool configuration and the
//! process-wide pool lifecycle.

use thiserror::Error;
use tracing::{debug, warn};

/// Collection errors
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid pool configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("global pool registry is already initialized")]
    AlreadyInitialized,
}

impl CollectionError {
    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "COLL:INDEX:RANGE",
            Self::InvalidConfig { .. } => "COLL:CONFIG:INVALID",
            Self::AlreadyInitialized => "COLL:POOL:INIT",
        }
    }

    /// Create index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        debug!(index, len, "index out of range");
        Self::IndexOutOfRange { index, len }
    }

    /// Create invalid config error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!(%reason, "rejected pool configuration");
        Self::InvalidConfig { reason }
    }

    /// Check if this is an index error
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Result type for collection operations
pub type CollectionResult<T> = core::result::Result<T, CollectionError>;

/// Generic result type alias
pub type Result<T> = CollectionResult<T>;
