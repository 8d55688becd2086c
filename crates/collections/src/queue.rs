//! Thread-safe FIFO queue
//!
//! # Safety
//!
//! The queue owns its nodes through raw links so that `push` can append at
//! the tail in O(1):
//! - every node is allocated with `Box::new` and turned into a `NonNull` once
//!   with `Box::leak`; it is freed exactly once with `Box::from_raw` when it
//!   is popped or the queue is dropped
//! - no `Box` or `&mut` to a node is held while it is linked, so `head`, the
//!   `next` links and `tail` all refer to nodes through the same raw pointers
//! - `tail` points at the last node, and `head`/`tail` are `None` together
//! - links are only written through `&mut QueueInner`, i.e. under the write
//!   lock
//!
//! The unit tests below are kept small so `cargo +nightly miri test -p
//! tether-collections --lib queue` can check these rules; it must pass.

#![allow(unsafe_code)]

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use parking_lot::RwLock;

use crate::container::Container;

/// Thread-safe FIFO queue tracking both ends of its chain
///
/// # Example
/// ```
/// use tether_collections::Queue;
///
/// let queue = Queue::new();
/// queue.push(1);
/// queue.push(2);
/// queue.push(3);
///
/// assert_eq!(queue.peek(), Some(1));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop_all(), vec![2, 3]);
/// assert!(queue.is_empty());
/// ```
pub struct Queue<T> {
    inner: RwLock<QueueInner<T>>,
}

type RawLink<T> = Option<NonNull<RawNode<T>>>;

struct RawNode<T> {
    value: T,
    next: RawLink<T>,
}

struct QueueInner<T> {
    head: RawLink<T>,
    tail: RawLink<T>,
    len: usize,
    // owns the nodes for drop check and auto traits
    _owned: PhantomData<Box<RawNode<T>>>,
}

// SAFETY: `QueueInner` uniquely owns every node it links, like a
// `Box<RawNode<T>>` chain would; the pointers are never shared outside it.
unsafe impl<T: Send> Send for QueueInner<T> {}

// SAFETY: `&QueueInner` only hands out `&T` (`front`, `iter`); links are
// written through `&mut self` only.
unsafe impl<T: Sync> Sync for QueueInner<T> {}

impl<T> QueueInner<T> {
    const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owned: PhantomData,
        }
    }

    fn push_back(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(RawNode { value, next: None })));

        match self.tail {
            // SAFETY: `tail` is the live last node owned by `self`, and
            // `&mut self` rules out any other access to it.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => {
                debug_assert!(self.head.is_none(), "head without tail");
                self.head = Some(node);
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` came from `Box::leak` and is unlinked right here,
        // so it is reclaimed exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    fn front(&self) -> Option<&T> {
        // SAFETY: linked nodes stay alive while `self` is borrowed, and
        // nothing mutates them through `&self`.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            _borrow: PhantomData,
        }
    }

    /// Detach every node in O(1), leaving `self` empty.
    fn take(&mut self) -> Self {
        core::mem::replace(self, Self::new())
    }

    fn drain_to_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        while let Some(value) = self.pop_front() {
            values.push(value);
        }
        values
    }
}

impl<T> Drop for QueueInner<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T: fmt::Debug> fmt::Debug for QueueInner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator, oldest first
struct Iter<'a, T> {
    next: RawLink<T>,
    _borrow: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            // SAFETY: the iterator borrows the queue for `'a`, so every
            // linked node outlives it and is not mutated meanwhile.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.value
        })
    }
}

impl<T> Queue<T> {
    /// Create an empty queue
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(QueueInner::new()),
        }
    }

    /// Append `value` at the tail. O(1).
    pub fn push(&self, value: T) {
        self.inner.write().push_back(value);
    }

    /// Remove the oldest value, `None` when empty. O(1).
    pub fn pop(&self) -> Option<T> {
        self.inner.write().pop_front()
    }

    /// Clone of the oldest value without removing it
    pub fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().front().cloned()
    }

    /// Run `f` on the oldest value under the read lock
    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.inner.read().front().map(f)
    }

    /// Number of elements
    pub fn size(&self) -> usize {
        self.inner.read().len
    }

    /// `true` if the queue holds no elements
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Remove every element; nodes are freed after the lock is released
    pub fn clear(&self) {
        let detached = self.inner.write().take();
        drop(detached);
    }

    /// Drain every element oldest first in one lock acquisition
    pub fn pop_all(&self) -> Vec<T> {
        let detached = self.inner.write().take();
        detached.drain_to_vec()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let inner = self.inner.get_mut();
        for value in iter {
            inner.push_back(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("items", &*self.inner.read())
            .finish()
    }
}

impl<T: Send + Sync + 'static> Container for Queue<T> {
    type Item = T;

    fn push(&self, value: T) {
        Queue::push(self, value);
    }

    fn pop(&self) -> Option<T> {
        Queue::pop(self)
    }

    fn size(&self) -> usize {
        Queue::size(self)
    }

    fn clear(&self) {
        Queue::clear(self);
    }

    fn pop_all(&self) -> Vec<T> {
        Queue::pop_all(self)
    }
}
