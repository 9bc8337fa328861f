//! A growable circular buffer queue, with an optional position index.
//!
//! `RingQueue` has `O(1)` amortized pushes and pops at both ends, `O(1)`
//! indexing like a vector, and removal from anywhere in the queue that moves
//! only the elements between the removal point and the nearer end. When the
//! backing store fills up it doubles.
//!
//! `TrackedQueue` wraps a `RingQueue` together with a map from each element's
//! key to the slot holding it, so the current position of an element can be
//! found, and the element removed by value, in average `O(1)` lookups.
//!
//! Neither type is thread-safe in the sense of internal locking; each is owned
//! and mutated by one caller at a time.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringqueue = "0.1"
//! ```
//!
//! # Examples
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue = RingQueue::with_capacity(8).unwrap();
//! assert_eq!(queue.capacity(), 8);
//! assert_eq!(queue.len(), 0);
//!
//! queue.push_back(1);
//! queue.push_back(2);
//! assert_eq!(queue.len(), 2);
//!
//! assert_eq!(queue.pop_front(), Some(1));
//! assert_eq!(queue.pop_front(), Some(2));
//! assert_eq!(queue.pop_front(), None);
//! ```
//!
//! # Remove
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue: RingQueue<_> = vec![11, 12, 13].into();
//! queue.remove(0);
//!
//! assert_eq!(queue[0], 12);
//! assert_eq!(queue[1], 13);
//! ```
//!
//! # Growth
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue = RingQueue::with_capacity(8).unwrap();
//! queue.extend(0..9);
//!
//! assert_eq!(queue.capacity(), 16);
//! assert_eq!(format!("{:?}", queue), "[0, 1, 2, 3, 4, 5, 6, 7, 8]");
//! ```
//!
//! # Position tracking
//! ```
//! use ringqueue::TrackedQueue;
//!
//! let mut queue: TrackedQueue<_, _, _> = TrackedQueue::from_iter_keyed(vec![10, 20, 30], |x: &i32| *x);
//!
//! assert_eq!(queue.position(&20), Some(1));
//! assert!(queue.remove_item(&20));
//! assert_eq!(queue.position(&20), None);
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&10, &30]);
//! ```

#![deny(missing_docs)]

extern crate odds;

/// Range of logical positions accepted by `drain`.
pub use odds::IndexRange as RangeArgument;

mod utils;
pub mod error;
mod ringqueue;
mod trackedqueue;

pub use crate::error::CapacityError;
pub use crate::ringqueue::{Drain, IntoIter, Iter, IterMut, RingQueue, DEFAULT_CAPACITY};
pub use crate::trackedqueue::{IdentityQueue, TrackedQueue};
