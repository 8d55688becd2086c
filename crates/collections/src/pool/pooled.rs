//! Scoped pool handle

use core::fmt;
use core::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::TypedPool;
use crate::container::Container;

/// Container on loan from a pool; cleared and returned when dropped
///
/// # Example
/// ```
/// use tether_collections::Stack;
/// use tether_collections::pool::{PoolConfig, PoolRegistry};
///
/// let registry = PoolRegistry::new(PoolConfig::default());
/// {
///     let stack = registry.scoped::<Stack<i32>>();
///     stack.push(1);
///     assert_eq!(stack.size(), 1);
/// }
/// assert_eq!(registry.pool::<Stack<i32>>().available(), 1);
/// ```
#[must_use = "dropping a Pooled immediately returns the container"]
pub struct Pooled<C: Container> {
    value: Option<C>,
    pool: Arc<TypedPool<C>>,
}

impl<C: Container> Pooled<C> {
    pub(crate) fn new(value: C, pool: Arc<TypedPool<C>>) -> Self {
        Self {
            value: Some(value),
            pool,
        }
    }

    /// Keep the container; it will not go back to the pool
    pub fn detach(mut self) -> C {
        match self.value.take() {
            Some(value) => value,
            None => unreachable!("Pooled value taken before drop"),
        }
    }

    /// Return the container now instead of at end of scope
    pub fn release(self) {
        drop(self);
    }
}

impl<C: Container> Deref for Pooled<C> {
    type Target = C;

    fn deref(&self) -> &C {
        match &self.value {
            Some(value) => value,
            None => unreachable!("Pooled value taken before drop"),
        }
    }
}

impl<C: Container> DerefMut for Pooled<C> {
    fn deref_mut(&mut self) -> &mut C {
        match &mut self.value {
            Some(value) => value,
            None => unreachable!("Pooled value taken before drop"),
        }
    }
}

impl<C: Container> Drop for Pooled<C> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.release(value);
        }
    }
}

impl<C: Container + fmt::Debug> fmt::Debug for Pooled<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pooled").field(&**self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Queue;
    use crate::pool::PoolConfig;

    #[test]
    fn test_drop_returns_cleared_container() {
        let pool = Arc::new(TypedPool::<Queue<i32>>::new(PoolConfig::default()));
        {
            let queue = Pooled::new(pool.acquire(), Arc::clone(&pool));
            queue.push(1);
            queue.push(2);
        }
        assert_eq!(pool.available(), 1);
        assert!(pool.acquire().is_empty());
    }

    #[test]
    fn test_detach_keeps_container() {
        let pool = Arc::new(TypedPool::<Queue<i32>>::new(PoolConfig::default()));
        let queue = Pooled::new(pool.acquire(), Arc::clone(&pool)).detach();
        queue.push(7);
        assert_eq!(pool.available(), 0);
        assert_eq!(queue.pop(), Some(7));
    }

    #[test]
    fn test_explicit_release() {
        let pool = Arc::new(TypedPool::<Queue<i32>>::new(PoolConfig::default()));
        let queue = Pooled::new(pool.acquire(), Arc::clone(&pool));
        queue.release();
        assert_eq!(pool.stats().total_releases(), 1);
    }
}
