//! Property tests: containers against std reference models.

use std::collections::VecDeque;

use proptest::prelude::*;
use tether_collections::{LinkedList, Queue, Stack};

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<i32>().prop_map(Op::Push),
        3 => Just(Op::Pop),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn stack_matches_vec(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let stack = Stack::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    stack.push(v);
                    model.push(v);
                }
                Op::Pop => prop_assert_eq!(stack.pop(), model.pop()),
                Op::Clear => {
                    stack.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(stack.size(), model.len());
            prop_assert_eq!(stack.peek(), model.last().copied());
        }

        model.reverse();
        prop_assert_eq!(stack.pop_all(), model);
    }

    #[test]
    fn queue_matches_vec_deque(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let queue = Queue::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    queue.push(v);
                    model.push_back(v);
                }
                Op::Pop => prop_assert_eq!(queue.pop(), model.pop_front()),
                Op::Clear => {
                    queue.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(queue.size(), model.len());
            prop_assert_eq!(queue.peek(), model.front().copied());
        }

        prop_assert_eq!(queue.pop_all(), Vec::from(model));
    }

    #[test]
    fn insert_then_remove_restores_list(
        values in prop::collection::vec(any::<u16>(), 0..50),
        index_seed in any::<usize>(),
        item in any::<u16>(),
    ) {
        let list = LinkedList::from(values.clone());
        let index = index_seed % (values.len() + 1);

        list.insert_at(index, item).unwrap();
        prop_assert_eq!(list.size(), values.len() + 1);
        prop_assert_eq!(list.items()[index], item);

        prop_assert_eq!(list.remove_at(index).unwrap(), item);
        prop_assert_eq!(list.items(), values);
    }

    #[test]
    fn out_of_range_indices_change_nothing(
        values in prop::collection::vec(any::<u8>(), 0..20),
        overshoot in 1usize..100,
    ) {
        let list = LinkedList::from(values.clone());

        prop_assert!(list.insert_at(values.len() + overshoot, 0).is_err());
        prop_assert!(list.remove_at(values.len() + overshoot - 1).is_err());
        prop_assert_eq!(list.items(), values);
    }

    #[test]
    fn index_of_finds_first_occurrence(
        values in prop::collection::vec(0u8..8, 0..40),
        needle in 0u8..8,
    ) {
        let list = LinkedList::from(values.clone());
        prop_assert_eq!(list.index_of(&needle), values.iter().position(|&v| v == needle));
    }
}
