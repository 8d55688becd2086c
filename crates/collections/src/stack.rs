//! Thread-safe LIFO stack

use core::fmt;

use parking_lot::RwLock;

use crate::container::Container;
use crate::node::Chain;

/// Thread-safe LIFO stack over an owned chain of nodes
///
/// Mutations take the write lock for the whole structural change; `size`
/// and `peek` take the read lock.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use tether_collections::Stack;
///
/// let stack = Arc::new(Stack::new());
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let stack = Arc::clone(&stack);
///         thread::spawn(move || stack.push(t))
///     })
///     .collect();
///
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(stack.size(), 4);
/// ```
pub struct Stack<T> {
    chain: RwLock<Chain<T>>,
}

impl<T> Stack<T> {
    /// Create an empty stack
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: RwLock::new(Chain::new()),
        }
    }

    /// Push `value` on top. O(1).
    pub fn push(&self, value: T) {
        self.chain.write().push_front(value);
    }

    /// Pop the top value, `None` when empty. O(1).
    pub fn pop(&self) -> Option<T> {
        self.chain.write().pop_front()
    }

    /// Clone of the top value without removing it
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.chain.read().front().cloned()
    }

    /// Run `f` on the top value under the read lock
    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.chain.read().front().map(f)
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.chain.read().len()
    }

    /// `true` if the stack holds no elements
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Remove every element.
    ///
    /// The chain is detached under the write lock and freed after it is
    /// released.
    pub fn clear(&self) {
        let detached = self.chain.write().take();
        drop(detached);
    }

    /// Drain every element top to bottom in one lock acquisition
    pub fn pop_all(&self) -> Vec<T> {
        let detached = self.chain.write().take();
        detached.into_iter().collect()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let chain = self.chain.get_mut();
        for value in iter {
            chain.push_front(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &*self.chain.read())
            .finish()
    }
}

impl<T: Send + Sync + 'static> Container for Stack<T> {
    type Item = T;

    fn push(&self, value: T) {
        Stack::push(self, value);
    }

    fn pop(&self) -> Option<T> {
        Stack::pop(self)
    }

    fn size(&self) -> usize {
        Stack::size(self)
    }

    fn clear(&self) {
        Stack::clear(self);
    }

    fn pop_all(&self) -> Vec<T> {
        Stack::pop_all(self)
    }
}
