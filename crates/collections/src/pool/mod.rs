//! Per-type instance pooling for containers
//!
//! This module keeps one reusable-instance pool per concrete container type
//! (`Stack<u32>`, `Queue<String>`, ...):
//! - `TypedPool`: idle instances of one container type
//! - `PoolRegistry`: `TypeId` keyed registry of typed pools
//! - `Pooled`: scoped handle that returns its container on drop
//! - `PoolExt`: `Stack::<T>::acquire()` style entry points on the global
//!   registry
//!
//! Instances come out of a pool empty and go back in cleared.

mod pooled;
mod registry;
mod stats;
mod typed;

use std::sync::OnceLock;

use tracing::{info, warn};

pub use pooled::Pooled;
pub use registry::PoolRegistry;
pub use stats::{PoolStats, PoolStatsSnapshot};
pub use typed::TypedPool;

use crate::container::Container;
use crate::error::{CollectionError, CollectionResult};

/// Environment variable overriding [`PoolConfig::max_idle`]
pub const ENV_MAX_IDLE: &str = "TETHER_POOL_MAX_IDLE";

/// Environment variable overriding [`PoolConfig::pre_warm`]
pub const ENV_PRE_WARM: &str = "TETHER_POOL_PRE_WARM";

/// Configuration shared by every typed pool of a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of idle instances kept per type (None for unbounded)
    pub max_idle: Option<usize>,

    /// Instances created up front when a typed pool is first requested
    pub pre_warm: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle: Some(64),
            pre_warm: 0,
        }
    }
}

impl PoolConfig {
    /// Keep at most `max_idle` idle instances per type
    #[must_use]
    pub fn bounded(max_idle: usize) -> Self {
        Self {
            max_idle: Some(max_idle),
            ..Default::default()
        }
    }

    /// Never discard released instances
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_idle: None,
            ..Default::default()
        }
    }

    /// Set the number of pre-created instances
    #[must_use = "builder methods must be chained or built"]
    pub fn with_pre_warm(mut self, pre_warm: usize) -> Self {
        self.pre_warm = pre_warm;
        self
    }

    /// Defaults overridden by `TETHER_POOL_MAX_IDLE` / `TETHER_POOL_PRE_WARM`.
    ///
    /// `TETHER_POOL_MAX_IDLE=unbounded` disables the idle limit. Values that
    /// do not parse are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_MAX_IDLE) {
            if raw.eq_ignore_ascii_case("unbounded") {
                config.max_idle = None;
            } else {
                match raw.parse() {
                    Ok(max_idle) => config.max_idle = Some(max_idle),
                    Err(_) => warn!(var = ENV_MAX_IDLE, value = %raw, "ignoring unparsable value"),
                }
            }
        }

        if let Ok(raw) = std::env::var(ENV_PRE_WARM) {
            match raw.parse() {
                Ok(pre_warm) => config.pre_warm = pre_warm,
                Err(_) => warn!(var = ENV_PRE_WARM, value = %raw, "ignoring unparsable value"),
            }
        }

        config
    }

    /// Reject configurations that would pre-warm more than they may keep
    pub fn validate(&self) -> CollectionResult<()> {
        if let Some(max_idle) = self.max_idle
            && self.pre_warm > max_idle
        {
            return Err(CollectionError::invalid_config(format!(
                "pre_warm ({}) exceeds max_idle ({max_idle})",
                self.pre_warm
            )));
        }
        Ok(())
    }
}

static GLOBAL: OnceLock<PoolRegistry> = OnceLock::new();

/// Explicitly initialize the process-wide registry.
///
/// Fails with [`CollectionError::AlreadyInitialized`] if the registry
/// already exists (explicitly or through lazy first use).
pub fn init(config: PoolConfig) -> CollectionResult<()> {
    config.validate()?;

    let mut installed = false;
    GLOBAL.get_or_init(|| {
        installed = true;
        PoolRegistry::new(config)
    });

    if installed {
        info!("global pool registry initialized");
        Ok(())
    } else {
        Err(CollectionError::AlreadyInitialized)
    }
}

/// The process-wide registry, created from [`PoolConfig::from_env`] on first
/// use when [`init`] was not called.
pub fn global() -> &'static PoolRegistry {
    GLOBAL.get_or_init(|| {
        let config = PoolConfig::from_env();
        let config = match config.validate() {
            Ok(()) => config,
            Err(error) => {
                warn!(%error, "falling back to default pool configuration");
                PoolConfig::default()
            }
        };
        info!(?config, "global pool registry lazily initialized");
        PoolRegistry::new(config)
    })
}

/// Take an empty `C` from the global registry
pub fn acquire<C: Container>() -> C {
    global().acquire()
}

/// Clear `container` and hand it back to the global registry
pub fn release<C: Container>(container: C) {
    global().release(container);
}

/// Scoped acquisition from the global registry
pub fn scoped<C: Container>() -> Pooled<C> {
    global().scoped()
}

/// Pool entry points on every [`Container`]
///
/// # Example
/// ```
/// use tether_collections::Stack;
/// use tether_collections::pool::PoolExt;
///
/// let stack = Stack::<u32>::acquire();
/// stack.push(10);
/// stack.push(20);
/// assert_eq!(stack.pop(), Some(20));
/// stack.release();
///
/// let again = Stack::<u32>::acquire();
/// assert!(again.is_empty());
/// ```
pub trait PoolExt: Container + Sized {
    /// Take an empty instance from the global registry
    fn acquire() -> Self {
        acquire::<Self>()
    }

    /// Take an instance that goes back to the global registry on drop
    fn acquire_scoped() -> Pooled<Self> {
        scoped::<Self>()
    }

    /// Clear and return this instance to the global registry
    fn release(self) {
        release(self);
    }
}

impl<C: Container> PoolExt for C {}
