//! # ring_buffer
//!
//! Fixed-capacity queue and stack over a block of slots: the queue wraps its
//! indices with modular arithmetic instead of ever shifting elements, the
//! stack grows and shrinks a single top position.
//!
//! ```rust
//! use ring_buffer::{Queue, Stack};
//!
//! let mut queue = Queue::new(3);
//! queue.enqueue(1).unwrap();
//! queue.enqueue(3).unwrap();
//! assert_eq!(queue.dequeue().unwrap(), 1);
//! queue.enqueue(2).unwrap();
//! queue.enqueue(7).unwrap(); // wrapped into the freed slot
//! assert!(queue.is_full());
//!
//! let mut stack = Stack::new(2);
//! stack.push('a').unwrap();
//! stack.push('b').unwrap();
//! assert_eq!(stack.pop().unwrap(), 'b');
//! ```
//!
//! Both containers treat `len` as the only authority on empty versus full;
//! when the queue's head and tail indices coincide, `len` is what decides
//! which of the two it means.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod queue;
pub mod stack;

pub use error::RingError;
pub use queue::Queue;
pub use stack::Stack;
