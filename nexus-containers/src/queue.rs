//! FIFO queue with soft-deleting dequeue and periodic compaction.
//!
//! ```text
//! slots:  [None, None, Some(c), Some(d), Some(e)]
//!                      ^ head
//! ```
//!
//! Dequeue takes the value at `head` and advances the cursor, leaving an
//! empty slot behind. Once the dead prefix grows past the
//! [`CompactionPolicy`] thresholds it is dropped in one pass, so the common
//! dequeue is O(1) and the compaction cost is amortized.

use core::fmt;
use core::slice;

use tracing::trace;

/// Thresholds controlling when a [`Queue`] drops its dead prefix.
///
/// Compaction runs after a dequeue when the backing storage holds more than
/// `min_len` slots and the dead fraction `head / slots` exceeds `max_waste`.
///
/// # Example
///
/// ```
/// use nexus_containers::{CompactionPolicy, Queue};
///
/// let policy = CompactionPolicy::new().with_min_len(1024).with_max_waste(0.5);
/// let queue: Queue<u64> = Queue::with_policy(policy);
///
/// assert_eq!(queue.policy().min_len(), 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactionPolicy {
    min_len: usize,
    max_waste: f64,
}

impl CompactionPolicy {
    /// Storage length that must be exceeded before compacting.
    pub const DEFAULT_MIN_LEN: usize = 50;

    /// Dead fraction that must be exceeded before compacting.
    pub const DEFAULT_MAX_WASTE: f64 = 0.25;

    /// Policy with the default thresholds.
    pub const fn new() -> Self {
        Self {
            min_len: Self::DEFAULT_MIN_LEN,
            max_waste: Self::DEFAULT_MAX_WASTE,
        }
    }

    /// Policy that never compacts. Dead slots are only reclaimed by
    /// [`Queue::clear`].
    pub const fn never() -> Self {
        Self {
            min_len: usize::MAX,
            max_waste: 1.0,
        }
    }

    /// Sets the storage length that must be exceeded before compacting.
    pub const fn with_min_len(self, min_len: usize) -> Self {
        Self { min_len, ..self }
    }

    /// Sets the dead fraction that must be exceeded before compacting.
    ///
    /// Clamped into `[0.0, 1.0]`. A NaN disables compaction.
    // Not `const`: `f64::clamp` is not const on the supported toolchain.
    pub fn with_max_waste(self, max_waste: f64) -> Self {
        Self {
            max_waste: max_waste.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Returns the storage length threshold.
    #[inline]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Returns the dead fraction threshold.
    #[inline]
    pub fn max_waste(&self) -> f64 {
        self.max_waste
    }

    #[inline]
    fn should_compact(&self, head: usize, slots: usize) -> bool {
        slots > self.min_len && head as f64 / slots as f64 > self.max_waste
    }
}

impl Default for CompactionPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// A first-in, first-out queue.
///
/// # Example
///
/// ```
/// use nexus_containers::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
///
/// assert_eq!(queue.front(), Some(&"a"));
/// assert_eq!(queue.dequeue(), Some("a"));
/// assert_eq!(queue.dequeue(), Some("b"));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Clone)]
pub struct Queue<T> {
    /// `[0, head)` is dead, `[head, len)` is live and all `Some`.
    slots: Vec<Option<T>>,
    head: usize,
    policy: CompactionPolicy,
}

impl<T> Queue<T> {
    /// Creates an empty queue with the default compaction policy.
    #[inline]
    pub const fn new() -> Self {
        Self::with_policy(CompactionPolicy::new())
    }

    /// Creates an empty queue with the given compaction policy.
    #[inline]
    pub const fn with_policy(policy: CompactionPolicy) -> Self {
        Self {
            slots: Vec::new(),
            head: 0,
            policy,
        }
    }

    /// Creates an empty queue with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: 0,
            policy: CompactionPolicy::new(),
        }
    }

    /// Returns the compaction policy.
    #[inline]
    pub fn policy(&self) -> &CompactionPolicy {
        &self.policy
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len() - self.head
    }

    /// Returns `true` if the queue holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.slots.len()
    }

    /// Returns the element at the front without removing it.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.slots.get(self.head).and_then(Option::as_ref)
    }

    /// Returns a mutable reference to the element at the front.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.slots.get_mut(self.head).and_then(Option::as_mut)
    }

    /// Adds an element to the back. Amortized O(1).
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    /// Removes and returns the element at the front. Amortized O(1).
    ///
    /// Returns `None` if the queue is empty.
    ///
    /// The compaction policy is checked after every dequeue, so the dead
    /// prefix is dropped on the first dequeue that crosses the threshold.
    /// With the default policy, a queue of 60 compacts on the 16th dequeue
    /// (16 / 60 > 0.25) down to 44 slots; it does not wait for a round
    /// number. Storage layout is not part of the contract, only FIFO order.
    pub fn dequeue(&mut self) -> Option<T> {
        let value = self.slots.get_mut(self.head)?.take()?;
        self.head += 1;

        if self.policy.should_compact(self.head, self.slots.len()) {
            self.compact();
        }

        Some(value)
    }

    /// Removes all elements and resets the cursor.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }

    /// Returns an iterator over live elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[self.head..].iter(),
        }
    }

    fn compact(&mut self) {
        let dropped = self.head;
        self.slots.drain(..dropped);
        self.head = 0;
        trace!(dropped, remaining = self.slots.len(), "compacted queue");
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.slots.extend(iter.into_iter().map(Some));
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live elements of a [`Queue`], front to back.
///
/// Created by [`Queue::iter`].
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.find_map(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
