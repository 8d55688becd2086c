//! Queue behavior through the public API.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tether_collections::Queue;

#[rstest]
#[case::single(vec![1])]
#[case::several(vec![1, 2, 3])]
#[case::duplicates(vec![2, 2, 1])]
fn pops_in_push_order(#[case] pushed: Vec<i32>) {
    let queue = Queue::new();
    for &value in &pushed {
        queue.push(value);
    }

    let mut popped = Vec::new();
    while let Some(value) = queue.pop() {
        popped.push(value);
    }

    assert_eq!(popped, pushed);
    assert!(queue.is_empty());
}

#[test]
fn peek_sees_oldest() {
    let queue = Queue::new();
    queue.push(10);
    queue.push(20);

    assert_eq!(queue.peek(), Some(10));
    assert_eq!(queue.peek_with(|v| v + 1), Some(11));
    assert_eq!(queue.size(), 2);
}

#[test]
fn empty_queue_contract() {
    let queue = Queue::<String>::new();
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.size(), 0);
    assert!(queue.pop_all().is_empty());
}

#[test]
fn push_after_draining_to_empty() {
    let queue = Queue::new();
    queue.push(1);
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), None);

    queue.push(2);
    queue.push(3);
    assert_eq!(queue.peek(), Some(2));
    assert_eq!(queue.pop_all(), vec![2, 3]);
}

#[test]
fn push_after_clear() {
    let queue: Queue<_> = (0..5).collect();
    queue.clear();
    assert!(queue.is_empty());

    queue.push(9);
    queue.push(10);
    assert_eq!(queue.pop_all(), vec![9, 10]);
}

#[test]
fn extend_appends_at_tail() {
    let mut queue: Queue<_> = [1, 2].into_iter().collect();
    queue.extend([3, 4]);
    queue.push(5);
    assert_eq!(queue.pop_all(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn debug_lists_oldest_first() {
    let queue: Queue<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{queue:?}"), "Queue { items: [1, 2, 3] }");
}
