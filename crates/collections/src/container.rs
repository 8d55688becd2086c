//! Operation set shared by every container in the family

/// Common push/pop surface of [`Stack`](crate::Stack),
/// [`Queue`](crate::Queue) and [`LinkedList`](crate::LinkedList).
///
/// All methods take `&self`: containers lock internally, so a shared
/// reference is enough to mutate them. The pool manager is generic over
/// this trait; `clear` is what a returned instance goes through before it is
/// handed out again.
///
/// # Example
/// ```
/// use tether_collections::{Container, Queue, Stack};
///
/// fn drain_into_vec<C: Container>(c: &C) -> Vec<C::Item> {
///     c.pop_all()
/// }
///
/// let stack: Stack<_> = [1, 2, 3].into_iter().collect();
/// let queue: Queue<_> = [1, 2, 3].into_iter().collect();
/// assert_eq!(drain_into_vec(&stack), vec![3, 2, 1]);
/// assert_eq!(drain_into_vec(&queue), vec![1, 2, 3]);
/// ```
pub trait Container: Default + Send + Sync + 'static {
    /// Element type
    type Item;

    /// Insert a value at the container's push end
    fn push(&self, value: Self::Item);

    /// Remove the value at the container's pop end, `None` when empty
    fn pop(&self) -> Option<Self::Item>;

    /// Number of stored elements
    fn size(&self) -> usize;

    /// `size() == 0`
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Drop every element
    fn clear(&self);

    /// Atomically drain every element in pop order
    fn pop_all(&self) -> Vec<Self::Item>;
}
