//! PriorityQueue - queue-shaped facade over [`Heap`].

use core::fmt;
use core::iter::FusedIterator;

use crate::{Heap, OutOfBounds, Precedes};

/// A priority queue backed by a [`Heap`].
///
/// Dequeue order is decided entirely by the ordering predicate `P`.
///
/// # Example
///
/// ```
/// use nexus_containers::{MinFirst, PriorityQueue};
///
/// let mut pq = PriorityQueue::new(MinFirst);
/// pq.enqueue(5);
/// pq.enqueue(1);
/// pq.enqueue(3);
///
/// assert_eq!(pq.peek(), Some(&1));
/// assert_eq!(pq.dequeue(), Some(1));
/// assert_eq!(pq.dequeue(), Some(3));
/// assert_eq!(pq.dequeue(), Some(5));
/// assert_eq!(pq.dequeue(), None);
/// ```
///
/// # Draining
///
/// Iteration is destructive: [`drain`](Self::drain) dequeues until the queue
/// is empty, and the sequence cannot be restarted.
///
/// ```
/// use nexus_containers::{MaxFirst, PriorityQueue};
///
/// let mut pq = PriorityQueue::from_vec(vec![2, 8, 4], MaxFirst);
///
/// let order: Vec<_> = pq.drain().collect();
/// assert_eq!(order, vec![8, 4, 2]);
/// assert!(pq.is_empty());
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, P> {
    heap: Heap<T, P>,
}

impl<T, P: Precedes<T>> PriorityQueue<T, P> {
    /// Creates an empty queue.
    #[inline]
    pub const fn new(precedes: P) -> Self {
        Self {
            heap: Heap::new(precedes),
        }
    }

    /// Creates an empty queue with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize, precedes: P) -> Self {
        Self {
            heap: Heap::with_capacity(capacity, precedes),
        }
    }

    /// Builds a queue from an unordered vector in O(n).
    #[inline]
    pub fn from_vec(elements: Vec<T>, precedes: P) -> Self {
        Self {
            heap: Heap::from_vec(elements, precedes),
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the underlying heap.
    #[inline]
    pub fn as_heap(&self) -> &Heap<T, P> {
        &self.heap
    }

    /// Consumes the queue, returning the underlying heap.
    #[inline]
    pub fn into_heap(self) -> Heap<T, P> {
        self.heap
    }

    // ========================================================================
    // Queue operations
    // ========================================================================

    /// Returns the highest-priority element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Adds an element. O(log n).
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.heap.insert(value);
    }

    /// Removes and returns the highest-priority element. O(log n).
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.remove_root()
    }

    /// Replaces the element at heap position `index`, returning the old one.
    ///
    /// Positions come from [`index_of`](Self::index_of) and are valid until
    /// the next mutation.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] carrying `value` back if `index` is out of
    /// bounds. The queue is not modified.
    #[inline]
    pub fn change_priority(&mut self, index: usize, value: T) -> Result<T, OutOfBounds<T>> {
        self.heap.replace(index, value)
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    // ========================================================================
    // Draining
    // ========================================================================

    /// Dequeues every element in priority order.
    ///
    /// Elements not consumed before the iterator is dropped stay in the
    /// queue.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T, P> {
        Drain { queue: self }
    }

    /// Dequeues elements while the predicate holds for the front element.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_containers::{MinFirst, PriorityQueue};
    ///
    /// let mut deadlines = PriorityQueue::from_vec(vec![100, 20, 75, 40], MinFirst);
    ///
    /// // Fire everything due at or before t = 50
    /// let fired: Vec<_> = deadlines.drain_while(|&t| t <= 50).collect();
    /// assert_eq!(fired, vec![20, 40]);
    /// assert_eq!(deadlines.peek(), Some(&75));
    /// ```
    #[inline]
    pub fn drain_while<F>(&mut self, pred: F) -> DrainWhile<'_, T, P, F>
    where
        F: FnMut(&T) -> bool,
    {
        DrainWhile { queue: self, pred }
    }
}

impl<T: PartialEq, P: Precedes<T>> PriorityQueue<T, P> {
    /// Returns the heap position of the first element equal to `value`.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.heap.index_of(value)
    }

    /// Removes the first element equal to `value`.
    #[inline]
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        self.heap.remove_value(value)
    }
}

impl<T, P: Default> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self {
            heap: Heap::default(),
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}

impl<T, P: Precedes<T>> From<Heap<T, P>> for PriorityQueue<T, P> {
    fn from(heap: Heap<T, P>) -> Self {
        Self { heap }
    }
}

impl<T, P: Precedes<T>> Extend<T> for PriorityQueue<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}

impl<T, P: Precedes<T> + Default> FromIterator<T> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().collect(),
        }
    }
}

impl<T, P: Precedes<T>> IntoIterator for PriorityQueue<T, P> {
    type Item = T;
    type IntoIter = IntoIter<T, P>;

    /// Consumes the queue, yielding elements in priority order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Destructive iterator over a [`PriorityQueue`] in priority order.
///
/// Created by [`PriorityQueue::drain`].
pub struct Drain<'a, T, P: Precedes<T>> {
    queue: &'a mut PriorityQueue<T, P>,
}

impl<T, P: Precedes<T>> Iterator for Drain<'_, T, P> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, P: Precedes<T>> ExactSizeIterator for Drain<'_, T, P> {}
impl<T, P: Precedes<T>> FusedIterator for Drain<'_, T, P> {}

/// Owning iterator over a [`PriorityQueue`] in priority order.
///
/// Created by [`PriorityQueue::into_iter`].
pub struct IntoIter<T, P: Precedes<T>> {
    queue: PriorityQueue<T, P>,
}

impl<T, P: Precedes<T>> Iterator for IntoIter<T, P> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, P: Precedes<T>> ExactSizeIterator for IntoIter<T, P> {}
impl<T, P: Precedes<T>> FusedIterator for IntoIter<T, P> {}

/// An iterator that dequeues elements while a predicate holds.
///
/// Created by [`PriorityQueue::drain_while`].
pub struct DrainWhile<'a, T, P, F>
where
    P: Precedes<T>,
    F: FnMut(&T) -> bool,
{
    queue: &'a mut PriorityQueue<T, P>,
    pred: F,
}

impl<T, P, F> Iterator for DrainWhile<'_, T, P, F>
where
    P: Precedes<T>,
    F: FnMut(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let front = self.queue.peek()?;
        if (self.pred)(front) {
            self.queue.dequeue()
        } else {
            None
        }
    }
}
