//! Error types for index-addressed heap operations.

use core::fmt;

/// Index was past the end of the heap.
///
/// Returned by [`Heap::replace`](crate::Heap::replace) and
/// [`PriorityQueue::change_priority`](crate::PriorityQueue::change_priority).
/// The container is left untouched and the rejected value is handed back.
///
/// # Example
///
/// ```
/// use nexus_containers::{Heap, MaxFirst};
///
/// let mut heap = Heap::from_vec(vec![1, 2], MaxFirst);
/// let err = heap.replace(5, 42).unwrap_err();
///
/// assert_eq!(err.index, 5);
/// assert_eq!(err.len, 2);
/// assert_eq!(err.into_inner(), 42);
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds<T> {
    /// The requested index.
    pub index: usize,
    /// Number of elements at the time of the call.
    pub len: usize,
    /// The value that was not inserted.
    pub value: T,
}

impl<T> OutOfBounds<T> {
    /// Returns the value that was not inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Display for OutOfBounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for heap of length {}",
            self.index, self.len
        )
    }
}

impl<T: fmt::Debug> std::error::Error for OutOfBounds<T> {}
