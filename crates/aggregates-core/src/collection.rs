//! Sized, ordered, borrowable collections
//!
//! The collection-based aggregates accept any container that knows its
//! length and can be iterated forward by reference, in its natural order.

use std::collections::{LinkedList, VecDeque};

/// Ordered, finite container with a known length
pub trait SizedCollection {
    /// Element type
    type Item;

    /// Borrowing iterator in the container's natural order
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Number of elements
    fn len(&self) -> usize;

    /// Iterate over the elements by reference
    fn iter(&self) -> Self::Iter<'_>;

    /// Whether the container has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SizedCollection for [T] {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        <[T]>::iter(self)
    }
}

impl<T, const N: usize> SizedCollection for [T; N] {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        N
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> SizedCollection for Vec<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> SizedCollection for VecDeque<T> {
    type Item = T;
    type Iter<'a> = std::collections::vec_deque::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

impl<T> SizedCollection for LinkedList<T> {
    type Item = T;
    type Iter<'a> = std::collections::linked_list::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }
}
