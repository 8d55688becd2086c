//! Link cells and the owned chain built from them
//!
//! A [`Chain`] owns its first [`Node`]; every node owns its successor. The
//! chain tracks its own length so containers never recount.
//!
//! Teardown is iterative: dropping a `Box<Node<T>>` whose `next` is still
//! linked would recurse once per node, so [`Chain`]'s `Drop` unlinks node by
//! node instead.

use core::fmt;

use crate::error::{CollectionError, CollectionResult};

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Single link cell
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// Owned sequence of nodes plus its length
pub(crate) struct Chain<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Chain<T> {
    pub(crate) const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.len += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    #[inline]
    pub(crate) fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Detach the whole chain in O(1), leaving `self` empty.
    #[inline]
    pub(crate) fn take(&mut self) -> Self {
        core::mem::replace(self, Self::new())
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Cursor to the link slot that holds the node at `index`.
    ///
    /// `index == len` yields the trailing `None` slot.
    fn link_at_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }
        Some(cursor)
    }

    pub(crate) fn insert_at(&mut self, index: usize, value: T) -> CollectionResult<()> {
        let len = self.len;
        if index > len {
            return Err(CollectionError::index_out_of_range(index, len));
        }

        let Some(link) = self.link_at_mut(index) else {
            return Err(CollectionError::index_out_of_range(index, len));
        };
        let next = link.take();
        *link = Some(Node::boxed(value, next));
        self.len += 1;
        Ok(())
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        let len = self.len;
        if index >= len {
            return Err(CollectionError::index_out_of_range(index, len));
        }

        let removed = self.link_at_mut(index).and_then(|link| {
            let node = link.take()?;
            let Node { value, next } = *node;
            *link = next;
            Some(value)
        });

        match removed {
            Some(value) => {
                self.len -= 1;
                Ok(value)
            }
            None => Err(CollectionError::index_out_of_range(index, len)),
        }
    }

    /// Link slot after the last node.
    fn tail_slot_mut(&mut self) -> &mut Link<T> {
        let len = self.len;
        match self.link_at_mut(len) {
            Some(slot) => {
                debug_assert!(slot.is_none(), "chain longer than its recorded length");
                slot
            }
            None => unreachable!("chain shorter than its recorded length {len}"),
        }
    }

    pub(crate) fn push_back(&mut self, value: T) {
        *self.tail_slot_mut() = Some(Node::boxed(value, None));
        self.len += 1;
    }

    /// Move every node of `other` to the end of `self`. O(len of `self`).
    pub(crate) fn append_chain(&mut self, mut other: Self) {
        let other_len = other.len;
        let head = other.head.take();
        other.len = 0;

        *self.tail_slot_mut() = head;
        self.len += other_len;
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut chain = Self::new();
        for value in values.into_iter().rev() {
            chain.push_front(value);
        }
        chain
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator, head to tail
pub(crate) struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator, head to tail
pub(crate) struct IntoIter<T>(Chain<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
