//! Binary heap ordered by a caller-supplied predicate.
//!
//! Elements live in a single `Vec<T>` laid out as an implicit complete binary
//! tree:
//!
//! ```text
//! parent(i) = (i - 1) / 2
//! left(i)   = 2i + 1
//! right(i)  = 2i + 2
//! ```
//!
//! Invariant: no node precedes its parent. The root is therefore an element
//! that nothing else outranks.

use core::fmt;

use tracing::trace;

use crate::{OutOfBounds, Precedes};

/// A binary heap over an ordering predicate.
///
/// `P` decides priority: [`MaxFirst`](crate::MaxFirst) gives a max-heap,
/// [`MinFirst`](crate::MinFirst) a min-heap, and any
/// `Fn(&T, &T) -> bool` a custom order. The predicate is fixed for the
/// heap's lifetime.
///
/// # Example
///
/// ```
/// use nexus_containers::{Heap, MaxFirst};
///
/// let mut heap = Heap::from_vec(vec![5, 1, 9, 3], MaxFirst);
///
/// assert_eq!(heap.peek(), Some(&9));
/// assert_eq!(heap.remove_root(), Some(9));
/// assert_eq!(heap.remove_root(), Some(5));
/// assert_eq!(heap.remove_root(), Some(3));
/// assert_eq!(heap.remove_root(), Some(1));
/// assert_eq!(heap.remove_root(), None);
/// ```
///
/// # Arbitrary removal
///
/// Elements can be removed or replaced by position. Positions come from
/// [`index_of`](Self::index_of) or [`as_slice`](Self::as_slice) and are only
/// valid until the next mutation.
///
/// ```
/// use nexus_containers::{Heap, MinFirst};
///
/// let mut heap = Heap::from_vec(vec![4, 8, 2, 6], MinFirst);
///
/// let pos = heap.index_of(&8).unwrap();
/// assert_eq!(heap.remove_at(pos), Some(8));
/// assert_eq!(heap.into_sorted_vec(), vec![2, 4, 6]);
/// ```
#[derive(Clone)]
pub struct Heap<T, P> {
    /// Heap-ordered elements.
    elements: Vec<T>,
    precedes: P,
}

impl<T, P: Precedes<T>> Heap<T, P> {
    /// Creates an empty heap.
    #[inline]
    pub const fn new(precedes: P) -> Self {
        Self {
            elements: Vec::new(),
            precedes,
        }
    }

    /// Creates an empty heap with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize, precedes: P) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            precedes,
        }
    }

    /// Builds a heap from an unordered vector in O(n).
    ///
    /// The vector is reused as storage and heapified bottom-up.
    pub fn from_vec(elements: Vec<T>, precedes: P) -> Self {
        let mut heap = Self { elements, precedes };
        heap.heapify();
        heap
    }

    /// Builds a heap from any iterator in O(n).
    pub fn from_iter_with<I>(iter: I, precedes: P) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(iter.into_iter().collect(), precedes)
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the capacity of the backing vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the highest-priority element without removing it.
    ///
    /// Returns `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the elements in heap layout.
    ///
    /// Index `0` is the root; the rest is in tree order, not sorted order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the ordering predicate.
    #[inline]
    pub fn predicate(&self) -> &P {
        &self.precedes
    }

    /// Inserts an element. O(log n).
    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the highest-priority element. O(log n).
    ///
    /// Returns `None` if the heap is empty.
    pub fn remove_root(&mut self) -> Option<T> {
        if self.elements.len() <= 1 {
            return self.elements.pop();
        }

        // Last element moves into the root slot.
        let root = self.elements.swap_remove(0);
        let len = self.elements.len();
        self.sift_down(0, len);

        Some(root)
    }

    /// Removes and returns the element at `index`. O(log n).
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let last = self.elements.len().checked_sub(1)?;
        if index > last {
            return None;
        }
        if index == last {
            return self.elements.pop();
        }

        let removed = self.elements.swap_remove(index);

        // The moved element may belong above or below `index`; at most one
        // of these moves it.
        self.sift_down(index, last);
        self.sift_up(index);

        Some(removed)
    }

    /// Replaces the element at `index` with `value`, returning the old one.
    ///
    /// Equivalent to [`remove_at`](Self::remove_at) followed by
    /// [`insert`](Self::insert), so `value` ends up wherever its priority
    /// places it.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] carrying `value` back if `index` is out of
    /// bounds. The heap is not modified.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, OutOfBounds<T>> {
        let len = self.elements.len();
        match self.remove_at(index) {
            Some(removed) => {
                self.insert(value);
                Ok(removed)
            }
            None => Err(OutOfBounds { index, len, value }),
        }
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Consumes the heap, returning the elements in heap layout.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Consumes the heap, returning the elements in priority order
    /// (highest priority first).
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.elements.len());
        while let Some(value) = self.remove_root() {
            sorted.push(value);
        }
        sorted
    }

    fn heapify(&mut self) {
        let len = self.elements.len();
        // Indices >= len / 2 are leaves.
        for index in (0..len / 2).rev() {
            self.sift_down(index, len);
        }
        trace!(len, "heapified");
    }

    #[inline]
    fn higher_priority(&self, a: usize, b: usize) -> bool {
        self.precedes.precedes(&self.elements[a], &self.elements[b])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a != b {
            self.elements.swap(a, b);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.higher_priority(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    /// Sifts `index` down, considering only children below `boundary`.
    fn sift_down(&mut self, mut index: usize, boundary: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            // Left is checked before right; right must beat the winner.
            let mut best = index;
            if left < boundary && self.higher_priority(left, best) {
                best = left;
            }
            if right < boundary && self.higher_priority(right, best) {
                best = right;
            }

            if best == index {
                return;
            }
            self.swap(index, best);
            index = best;
        }
    }
}

impl<T: PartialEq, P: Precedes<T>> Heap<T, P> {
    /// Returns the position of the first element equal to `value`. O(n).
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == value)
    }

    /// Returns `true` if an element equal to `value` is in the heap. O(n).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`. O(n).
    ///
    /// Returns `None` if no such element exists.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        self.remove_at(index)
    }
}

impl<T, P: Default> Default for Heap<T, P> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            precedes: P::default(),
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Heap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<T, P: Precedes<T>> Extend<T> for Heap<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.elements.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, P: Precedes<T> + Default> FromIterator<T> for Heap<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, P::default())
    }
}
