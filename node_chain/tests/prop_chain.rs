//! Property-based tests for the chain containers.

use std::collections::VecDeque;

use proptest::prelude::*;

use node_chain::{ChainError, List, Queue, Stack};

//
// -----------------------------------------------------------------------------
// List Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_list_push_read(values in prop::collection::vec(any::<u32>(), 0..100)) {
        let mut list = List::new();
        for v in &values {
            list.push(*v);
        }

        prop_assert_eq!(list.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(list.get(i).unwrap(), v);
        }
        prop_assert_eq!(list.iter().count(), list.len());
    }
}

proptest! {
    #[test]
    fn prop_list_remove_matches_vec(
        values in prop::collection::vec(any::<u32>(), 1..60),
        index in 0usize..60
    ) {
        let mut list = List::new();
        for v in &values {
            list.push(*v);
        }

        let i = index % values.len();
        let mut model = values.clone();

        prop_assert_eq!(list.remove(i).unwrap(), model.remove(i));
        prop_assert_eq!(list.len(), model.len());

        let survivors: Vec<u32> = list.iter().copied().collect();
        prop_assert_eq!(survivors, model);
    }
}

proptest! {
    #[test]
    fn prop_list_set_only_touches_target(
        values in prop::collection::vec(any::<u32>(), 1..60),
        index in 0usize..60,
        new_val: u32
    ) {
        let mut list = List::new();
        for v in &values {
            list.push(*v);
        }

        let i = index % values.len();
        prop_assert_eq!(list.set(i, new_val).unwrap(), values[i]);

        for (j, v) in values.iter().enumerate() {
            let expected = if j == i { &new_val } else { v };
            prop_assert_eq!(list.get(j).unwrap(), expected);
        }
    }
}

proptest! {
    #[test]
    fn prop_list_find_first_match(values in prop::collection::vec(0u32..16, 1..40)) {
        let mut list = List::new();
        for v in &values {
            list.push(*v);
        }

        for v in &values {
            prop_assert_eq!(
                list.find(v).unwrap(),
                values.iter().position(|x| x == v).unwrap()
            );
        }
        prop_assert!(matches!(list.find(&16), Err(ChainError::NotFound)));
    }
}

//
// -----------------------------------------------------------------------------
// Queue Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_queue_fifo_under_interleaving(
        ops in prop::collection::vec(prop::option::of(any::<u32>()), 0..200)
    ) {
        let mut queue = Queue::new();
        let mut model: VecDeque<u32> = VecDeque::new();

        // Some(v) enqueues, None dequeues
        for op in ops {
            match op {
                Some(v) => {
                    queue.enqueue(v);
                    model.push_back(v);
                }
                None => match model.pop_front() {
                    Some(expected) => prop_assert_eq!(queue.dequeue().unwrap(), expected),
                    None => prop_assert!(matches!(queue.dequeue(), Err(ChainError::Empty))),
                },
            }
            prop_assert_eq!(queue.len(), model.len());
        }

        let drained: Vec<u32> = queue.iter().copied().collect();
        let expected: Vec<u32> = model.iter().copied().collect();
        prop_assert_eq!(drained, expected);
    }
}

//
// -----------------------------------------------------------------------------
// Stack Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_stack_lifo_under_interleaving(
        ops in prop::collection::vec(prop::option::of(any::<u32>()), 0..200)
    ) {
        let mut stack = Stack::new();
        let mut model: Vec<u32> = Vec::new();

        // Some(v) pushes, None pops
        for op in ops {
            match op {
                Some(v) => {
                    stack.push(v);
                    model.push(v);
                }
                None => match model.pop() {
                    Some(expected) => prop_assert_eq!(stack.pop().unwrap(), expected),
                    None => prop_assert!(matches!(stack.pop(), Err(ChainError::Empty))),
                },
            }
            prop_assert_eq!(stack.len(), model.len());
        }

        // iter is top-first: reverse of insertion order
        let remaining: Vec<u32> = stack.iter().copied().collect();
        let expected: Vec<u32> = model.iter().rev().copied().collect();
        prop_assert_eq!(remaining, expected);
    }
}
