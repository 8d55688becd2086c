//! # tether-log
//!
//! `tracing-subscriber` bootstrap shared by tether binaries.
//!
//! Libraries in the workspace only emit `tracing` events; a binary installs
//! the subscriber once at startup.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tether_log::prelude::*;
//!
//! fn main() -> LogResult<()> {
//!     // TETHER_LOG / RUST_LOG, TETHER_LOG_FORMAT
//!     let _guard = tether_log::init()?;
//!
//!     info!(threads = 4, "starting");
//!     Ok(())
//! }
//! ```
//!
//! ## Runtime reload
//!
//! ```rust,no_run
//! use tether_log::{Config, LoggerBuilder};
//!
//! let guard = LoggerBuilder::from_config(Config::default().reloadable()).build()?;
//! if let Some(handle) = guard.reload_handle() {
//!     handle.reload("debug,tether_collections=trace")?;
//! }
//! # Ok::<(), tether_log::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod core;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard, ReloadHandle};
pub use config::{Config, DisplayConfig, ENV_FILTER, ENV_FORMAT, Format, WriterConfig};
pub use crate::core::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{debug, error, info, instrument, span, trace, warn};

/// Prelude for common imports
pub mod prelude {
    //! Logger setup functions, config types and tracing macros.

    pub use crate::{
        Config, Format, LogError, LogResult, auto_init, debug, error, info, init, init_with,
        instrument, span, trace, warn,
    };

    pub use tracing::{Level, Span, field};
}

// ============================================================================
// Initialization Functions
// ============================================================================

/// Pick a configuration from the environment and build profile
///
/// Uses [`Config::from_env`] when `TETHER_LOG` or `RUST_LOG` is set,
/// otherwise [`Config::development`] in debug builds and
/// [`Config::production`] in release builds.
///
/// # Errors
/// See [`LoggerBuilder::build`]
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var(ENV_FILTER).is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize from environment variables
///
/// # Errors
/// See [`LoggerBuilder::build`]
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Initialize with custom configuration
///
/// # Errors
/// See [`LoggerBuilder::build`]
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
