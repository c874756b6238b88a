//! Ordering predicates for [`Heap`](crate::Heap) and
//! [`PriorityQueue`](crate::PriorityQueue).
//!
//! A predicate answers one question: does `a` have strictly higher priority
//! than `b`? The root of a heap is always an element that no other element
//! precedes.
//!
//! ```text
//! MaxFirst        a > b     largest at root
//! MinFirst        a < b     smallest at root
//! Fn(&T, &T)      custom    anything else
//! ```
//!
//! The predicate is a type parameter of the container, so every comparison is
//! statically dispatched. Closures and function items work directly:
//!
//! ```
//! use nexus_containers::Heap;
//!
//! // Order by string length, longest first.
//! let mut heap = Heap::new(|a: &String, b: &String| a.len() > b.len());
//! heap.insert("ab".to_string());
//! heap.insert("abcd".to_string());
//! heap.insert("a".to_string());
//!
//! assert_eq!(heap.peek().map(String::as_str), Some("abcd"));
//! ```

/// Decides relative priority between two elements.
///
/// Implementations should describe a strict weak ordering. A predicate that
/// does not (e.g. one that is not transitive) produces an unspecified heap
/// shape but never undefined behavior.
pub trait Precedes<T: ?Sized> {
    /// Returns `true` if `a` has strictly higher priority than `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Precedes<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Largest element first (max-heap).
///
/// # Example
///
/// ```
/// use nexus_containers::{Heap, MaxFirst};
///
/// let heap = Heap::from_vec(vec![3, 7, 1], MaxFirst);
/// assert_eq!(heap.peek(), Some(&7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Precedes<T> for MaxFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest element first (min-heap).
///
/// # Example
///
/// ```
/// use nexus_containers::{Heap, MinFirst};
///
/// let heap = Heap::from_vec(vec![3, 7, 1], MinFirst);
/// assert_eq!(heap.peek(), Some(&1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Precedes<T> for MinFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}
