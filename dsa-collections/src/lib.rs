//! Bounds-checked integer collections.
//!
//! This crate provides two owned containers:
//! 1. [`FixedArray`] – a contiguous array with a capacity fixed at creation
//!    and a logical length, where every operation validates its bounds before
//!    touching the buffer.
//! 2. [`LinkedList`] – a singly linked list with positional insert/remove,
//!    in-place reversal and middle-element lookup.
//!
//! Both hold `i64` payloads and report failures through the enums in
//! [`error`]. Enable the `serde` feature for serialization support.

pub mod error;
pub mod fixed_array;
pub mod linked_list;
#[cfg(feature = "serde")]
mod serde;

pub use error::{FixedArrayError, LinkedListError};
pub use fixed_array::FixedArray;
pub use linked_list::LinkedList;
