//! # slot_array
//!
//! Fixed-capacity and amortized-growth arrays over explicit `Option<T>` slots.
//!
//! ```rust
//! use slot_array::{DynamicArray, FixedArray};
//!
//! let mut fixed = FixedArray::new(3);
//! fixed.push(1).unwrap();
//! fixed.push(3).unwrap();
//! fixed.push(2).unwrap();
//! assert!(fixed.is_full());
//! assert_eq!(fixed.to_string(), "[1, 3, 2]");
//!
//! let mut dynamic = DynamicArray::new();
//! for i in 0..100 {
//!     dynamic.push(i).unwrap();
//! }
//! assert_eq!(dynamic.len(), 100);
//! assert_eq!(dynamic.capacity(), 128);
//! ```
//!
//! A slot is either vacant (`None`) or holds a value (`Some`), so occupancy
//! never depends on what the stored values look like: any `T` can be stored,
//! including one a caller might otherwise reserve as a marker.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod dynamic;
pub mod error;
pub mod fixed;
#[doc(hidden)]
pub mod slots;

pub use dynamic::DynamicArray;
pub use error::ArrayError;
pub use fixed::FixedArray;
pub use slots::SlotBuffer;
