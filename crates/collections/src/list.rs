//! Thread-safe singly linked list with indexed access

use core::fmt;

use parking_lot::RwLock;

use crate::container::Container;
use crate::error::CollectionResult;
use crate::node::Chain;

/// Thread-safe singly linked list
///
/// Adds index-based insert/remove, search and snapshots on top of the
/// common container operations. As a [`Container`], `push` appends and
/// `pop` removes from the front.
///
/// # Example
/// ```
/// use tether_collections::{CollectionError, LinkedList};
///
/// let list: LinkedList<_> = vec![1, 2, 3].into();
/// list.insert_at(1, 4)?;
/// assert_eq!(list.items(), vec![1, 4, 2, 3]);
///
/// assert_eq!(list.remove_at(0)?, 1);
/// assert_eq!(list.index_of(&2), Some(1));
///
/// let err = list.remove_at(10).unwrap_err();
/// assert_eq!(err, CollectionError::IndexOutOfRange { index: 10, len: 3 });
/// # Ok::<(), CollectionError>(())
/// ```
pub struct LinkedList<T> {
    chain: RwLock<Chain<T>>,
}

impl<T> LinkedList<T> {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: RwLock::new(Chain::new()),
        }
    }

    /// Attach `value` after the last element. O(n).
    pub fn append(&self, value: T) {
        self.chain.write().push_back(value);
    }

    /// Attach `value` before the first element. O(1).
    pub fn push_front(&self, value: T) {
        self.chain.write().push_front(value);
    }

    /// Remove and return the first element
    pub fn pop_front(&self) -> Option<T> {
        self.chain.write().pop_front()
    }

    /// Clone of the first element
    pub fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.chain.read().front().cloned()
    }

    /// Insert `value` so that it ends up at `index`.
    ///
    /// Valid indices are `0..=len`; `index == len` appends. Any other index
    /// fails with [`CollectionError::IndexOutOfRange`](crate::CollectionError)
    /// and leaves the list unchanged.
    pub fn insert_at(&self, index: usize, value: T) -> CollectionResult<()> {
        self.chain.write().insert_at(index, value)
    }

    /// Unlink and return the value at `index` (valid: `0..len`).
    pub fn remove_at(&self, index: usize) -> CollectionResult<T> {
        self.chain.write().remove_at(index)
    }

    /// Index of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.chain.read().iter().position(|item| item == value)
    }

    /// `true` if some element equals `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Snapshot of every element, front to back, taken under one read lock
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.chain.read().iter().cloned().collect()
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.chain.read().len()
    }

    /// `true` if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Remove every element; nodes are freed after the lock is released
    pub fn clear(&self) {
        let detached = self.chain.write().take();
        drop(detached);
    }

    /// Drain every element front to back in one lock acquisition
    pub fn pop_all(&self) -> Vec<T> {
        let detached = self.chain.write().take();
        detached.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            chain: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let tail: Chain<T> = iter.into_iter().collect();
        self.chain.get_mut().append_chain(tail);
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("items", &*self.chain.read())
            .finish()
    }
}

impl<T: Send + Sync + 'static> Container for LinkedList<T> {
    type Item = T;

    fn push(&self, value: T) {
        self.append(value);
    }

    fn pop(&self) -> Option<T> {
        self.pop_front()
    }

    fn size(&self) -> usize {
        LinkedList::size(self)
    }

    fn clear(&self) {
        LinkedList::clear(self);
    }

    fn pop_all(&self) -> Vec<T> {
        LinkedList::pop_all(self)
    }
}
