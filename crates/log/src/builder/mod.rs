//! Logger builder implementation
//!
//! This module is organized into:
//! - `format`: format layer creation
//! - `reload`: runtime filter reload logic

mod format;
mod reload;

// Re-export public types
pub use reload::ReloadHandle;

// External dependencies
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

// Internal modules
use crate::config::Config;
use crate::core::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by a successful [`LoggerBuilder::build`]
///
/// Carries the reload handle when the configuration asked for one.
#[derive(Debug)]
#[must_use = "dropping the guard discards the reload handle"]
pub struct LoggerGuard {
    reload_handle: Option<ReloadHandle>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::filter(&self.config.level, e))?;

        // Create filter layer (optionally reloadable)
        let (filter_layer, reload_handle) =
            reload::create_filter_layer(filter, &self.config.level, self.config.reloadable);

        let fmt_layer = format::create_fmt_layer(
            self.config.format,
            &self.config.display,
            self.config.writer.make_writer(),
        );

        Registry::default()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        tracing::debug!(
            filter = %self.config.level,
            format = %self.config.format,
            reloadable = self.config.reloadable,
            "logger initialized"
        );

        Ok(LoggerGuard { reload_handle })
    }
}

impl LoggerGuard {
    /// Handle for changing the filter at runtime, if the logger was built
    /// with `reloadable`
    pub fn reload_handle(&self) -> Option<&ReloadHandle> {
        self.reload_handle.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn noop() -> Self {
        Self {
            reload_handle: None,
        }
    }
}
