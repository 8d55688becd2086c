//! Registry of typed pools, one per concrete container type

use std::any::{Any, TypeId};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use super::{PoolConfig, PoolStatsSnapshot, Pooled, TypedPool};
use crate::container::Container;

type ErasedPool = Arc<dyn Any + Send + Sync>;

/// Pools indexed by the `TypeId` of the container type they hold.
///
/// `Stack<u32>` and `Stack<String>` get separate pools. The first request
/// for a type creates its pool exactly once, even when many threads race on
/// it.
///
/// # Example
/// ```
/// use tether_collections::{Queue, Stack};
/// use tether_collections::pool::{PoolConfig, PoolRegistry};
///
/// let registry = PoolRegistry::new(PoolConfig::default());
///
/// let queue: Queue<&str> = registry.acquire();
/// queue.push("a");
/// registry.release(queue);
///
/// {
///     let stack = registry.scoped::<Stack<u8>>();
///     stack.push(1);
/// }
///
/// assert_eq!(registry.pool_count(), 2);
/// assert_eq!(registry.pool::<Stack<u8>>().available(), 1);
/// ```
pub struct PoolRegistry {
    pools: DashMap<TypeId, ErasedPool>,
    config: PoolConfig,
}

impl PoolRegistry {
    /// Create an empty registry; typed pools are created on first use with
    /// `config`
    #[must_use]
    pub fn new(config: PoolConfig) -> Self {
        Self {
            pools: DashMap::new(),
            config,
        }
    }

    /// Configuration applied to every typed pool
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// The pool for `C`, created on first request
    pub fn pool<C: Container>(&self) -> Arc<TypedPool<C>> {
        let type_id = TypeId::of::<C>();

        // the shard read guard must be gone before `entry` takes the write lock
        let existing = self.pools.get(&type_id).map(|entry| Arc::clone(entry.value()));

        let erased = match existing {
            Some(pool) => pool,
            None => {
                let entry = self.pools.entry(type_id).or_insert_with(|| {
                    debug!(container = core::any::type_name::<C>(), "creating typed pool");
                    let pool: ErasedPool = Arc::new(TypedPool::<C>::new(self.config.clone()));
                    pool
                });
                Arc::clone(entry.value())
            }
        };

        match erased.downcast::<TypedPool<C>>() {
            Ok(pool) => pool,
            Err(_) => unreachable!(
                "pool registered under the TypeId of {} holds another type",
                core::any::type_name::<C>()
            ),
        }
    }

    /// Take an empty `C`
    pub fn acquire<C: Container>(&self) -> C {
        self.pool::<C>().acquire()
    }

    /// Clear `container` and keep it for a later [`acquire`](Self::acquire)
    pub fn release<C: Container>(&self, container: C) {
        self.pool::<C>().release(container);
    }

    /// Take an empty `C` that returns to this registry when dropped
    pub fn scoped<C: Container>(&self) -> Pooled<C> {
        let pool = self.pool::<C>();
        Pooled::new(pool.acquire(), pool)
    }

    /// Counters for `C`'s pool, if it exists yet
    pub fn stats<C: Container>(&self) -> Option<PoolStatsSnapshot> {
        self.pools
            .get(&TypeId::of::<C>())
            .and_then(|entry| {
                entry
                    .value()
                    .downcast_ref::<TypedPool<C>>()
                    .map(|pool| pool.stats().snapshot())
            })
    }

    /// Number of container types with a pool
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

impl core::fmt::Debug for PoolRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PoolRegistry")
            .field("pools", &self.pools.len())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinkedList, Stack};

    #[test]
    fn test_pool_is_created_once_per_type() {
        let registry = PoolRegistry::default();
        let a = registry.pool::<Stack<u32>>();
        let b = registry.pool::<Stack<u32>>();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.pool_count(), 1);
    }

    #[test]
    fn test_element_types_get_separate_pools() {
        let registry = PoolRegistry::default();
        registry.release(Stack::<u32>::new());
        registry.release(Stack::<String>::new());
        registry.release(LinkedList::<u32>::new());

        assert_eq!(registry.pool_count(), 3);
        assert_eq!(registry.pool::<Stack<u32>>().available(), 1);
        assert_eq!(registry.pool::<Stack<String>>().available(), 1);
    }

    #[test]
    fn test_stats_absent_before_first_use() {
        let registry = PoolRegistry::default();
        assert!(registry.stats::<Stack<u8>>().is_none());

        let stack: Stack<u8> = registry.acquire();
        registry.release(stack);
        let _reused: Stack<u8> = registry.acquire();

        let stats = registry.stats::<Stack<u8>>().unwrap();
        assert_eq!(stats.acquires, 2);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.releases, 1);
    }

    #[test]
    fn test_pre_warm_applies_to_new_pools() {
        let registry = PoolRegistry::new(PoolConfig::bounded(8).with_pre_warm(3));
        assert_eq!(registry.pool::<Stack<u8>>().available(), 3);
        assert_eq!(registry.pool::<LinkedList<u8>>().available(), 3);
    }
}
