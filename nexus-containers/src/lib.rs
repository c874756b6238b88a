//! Single-owner containers: a predicate-ordered binary heap, a priority queue
//! built on it, a compacting FIFO queue, and a stack.
//!
//! # Data Structures
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`Heap`] | Custom-ordered top-k, schedulers | O(log n) insert/remove, O(n) build |
//! | [`PriorityQueue`] | Work queues, timers | O(log n) enqueue/dequeue |
//! | [`Queue`] | FIFO buffering | O(1) amortized enqueue/dequeue |
//! | [`Stack`] | LIFO, backtracking | O(1) amortized push/pop |
//!
//! # Ordering
//!
//! [`Heap`] and [`PriorityQueue`] take an ordering predicate at construction.
//! `precedes(a, b)` returns `true` when `a` must come out before `b`:
//!
//! ```
//! use nexus_containers::{Heap, MaxFirst, MinFirst};
//!
//! let max = Heap::from_vec(vec![3, 8, 1], MaxFirst);
//! let min = Heap::from_vec(vec![3, 8, 1], MinFirst);
//! let by_parity = Heap::from_vec(vec![3, 8, 1], |a: &i32, b: &i32| a % 2 < b % 2);
//!
//! assert_eq!(max.peek(), Some(&8));
//! assert_eq!(min.peek(), Some(&1));
//! assert_eq!(by_parity.peek(), Some(&8));
//! ```
//!
//! # Queue Compaction
//!
//! [`Queue::dequeue`] never shifts elements. It leaves an empty slot behind
//! and advances a cursor; the dead prefix is dropped in one pass once it
//! crosses the [`CompactionPolicy`] thresholds (by default: more than 50
//! slots, more than 25% dead).
//!
//! ```
//! use nexus_containers::Queue;
//!
//! let mut queue: Queue<u32> = (1..=60).collect();
//! for i in 1..=20 {
//!     assert_eq!(queue.dequeue(), Some(i));
//! }
//! assert_eq!(queue.front(), Some(&21));
//! assert_eq!(queue.len(), 40);
//! ```
//!
//! # Errors
//!
//! Empty containers and missing values are reported as `None`. The only
//! error type is [`OutOfBounds`], returned when replacing at a position past
//! the end of a heap; it hands the rejected value back.
//!
//! # Threading
//!
//! Every mutation takes `&mut self`. Nothing here synchronizes internally;
//! share across threads behind your own lock.
//!
//! # Diagnostics
//!
//! Structural events (bulk heap builds, queue compactions) are emitted as
//! `tracing` events at `TRACE` level.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod heap;
pub mod order;
pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use error::OutOfBounds;
pub use heap::Heap;
pub use order::{MaxFirst, MinFirst, Precedes};
pub use priority_queue::PriorityQueue;
pub use queue::{CompactionPolicy, Queue};
pub use stack::Stack;
