//! Pool of idle instances for one container type

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::{PoolConfig, PoolStats};
use crate::container::Container;

/// Thread-safe pool of idle, cleared instances of `C`
///
/// # Example
/// ```
/// use tether_collections::Stack;
/// use tether_collections::pool::{PoolConfig, TypedPool};
///
/// let pool = TypedPool::<Stack<u8>>::new(PoolConfig::bounded(2));
///
/// let stack = pool.acquire();
/// stack.push(1);
/// pool.release(stack);
///
/// assert_eq!(pool.available(), 1);
/// assert!(pool.acquire().is_empty());
/// ```
pub struct TypedPool<C: Container> {
    idle: Mutex<Vec<C>>,
    config: PoolConfig,
    stats: PoolStats,
}

impl<C: Container> TypedPool<C> {
    /// Create a pool, pre-creating `config.pre_warm` instances (capped by
    /// `config.max_idle`)
    pub fn new(config: PoolConfig) -> Self {
        let warm = config
            .max_idle
            .map_or(config.pre_warm, |max| config.pre_warm.min(max));

        let idle: Vec<C> = (0..warm).map(|_| C::default()).collect();

        let stats = PoolStats::default();
        if warm > 0 {
            stats.record_pre_warm(warm);
            debug!(
                container = core::any::type_name::<C>(),
                count = warm,
                "pre-warmed pool"
            );
        }

        Self {
            idle: Mutex::new(idle),
            config,
            stats,
        }
    }

    /// Take an idle instance, or create one. Never returns a non-empty
    /// container.
    pub fn acquire(&self) -> C {
        let reused = self.idle.lock().pop();

        match reused {
            Some(container) => {
                self.stats.record_acquire(true);
                // released instances are cleared; this only guards against
                // callers that kept pushing through a shared reference
                if !container.is_empty() {
                    container.clear();
                }
                trace!(container = core::any::type_name::<C>(), "reused pooled instance");
                container
            }
            None => {
                self.stats.record_acquire(false);
                trace!(container = core::any::type_name::<C>(), "created pooled instance");
                C::default()
            }
        }
    }

    /// Clear `container` and keep it for reuse, unless `max_idle` instances
    /// are already idle.
    pub fn release(&self, container: C) {
        container.clear();

        let mut idle = self.idle.lock();
        if self.config.max_idle.is_some_and(|max| idle.len() >= max) {
            drop(idle);
            self.stats.record_discard();
            self.stats.record_release(0);
            debug!(
                container = core::any::type_name::<C>(),
                "pool at capacity, discarding released instance"
            );
            return;
        }

        idle.push(container);
        let idle_after = idle.len();
        drop(idle);

        self.stats.record_release(idle_after);
        trace!(container = core::any::type_name::<C>(), idle = idle_after, "returned instance");
    }

    /// Number of idle instances
    pub fn available(&self) -> usize {
        self.idle.lock().len()
    }

    /// Drop idle instances until at most `size` remain
    pub fn shrink_to(&self, size: usize) {
        let surplus: Vec<C> = {
            let mut idle = self.idle.lock();
            let keep = size.min(idle.len());
            idle.split_off(keep)
        };
        if !surplus.is_empty() {
            debug!(
                container = core::any::type_name::<C>(),
                dropped = surplus.len(),
                "shrunk pool"
            );
        }
    }

    /// Remove and return every idle instance
    pub fn drain(&self) -> Vec<C> {
        core::mem::take(&mut *self.idle.lock())
    }

    /// Pool configuration
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Pool counters
    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }
}

impl<C: Container> core::fmt::Debug for TypedPool<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypedPool")
            .field("container", &core::any::type_name::<C>())
            .field("available", &self.available())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
