//! A max priority queue on a binary heap.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::priority_queue::MaxPriorityQueue;
//!
//! let mut queue = MaxPriorityQueue::new();
//! queue.insert(3);
//! queue.insert(9);
//! queue.insert(5);
//!
//! assert_eq!(queue.del_max(), Ok(9));
//! assert_eq!(queue.del_max(), Ok(5));
//! assert_eq!(queue.size(), 1);
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// A heap-ordered complete binary tree stored in an array. Positions are 1-indexed so the parent
/// of `i` is `i / 2` and its children are `2i` and `2i + 1`; every parent is at least as large as
/// both of its children.
pub struct MaxPriorityQueue<T> {
    /// Position `i` lives at `heap[i - 1]`.
    heap: Vec<T>,
}

impl<T> Default for MaxPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for MaxPriorityQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.heap).finish()
    }
}

impl<T> MaxPriorityQueue<T> {
    /// Generate a new, empty queue.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Returns the number of items in the queue.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue has no items.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the largest item without removing it.
    pub fn max(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Adds an item to the queue.
    pub fn insert(&mut self, item: T)
    where
        T: Ord,
    {
        self.heap.push(item);
        self.swim(self.size());
    }

    /// Removes and returns the largest item.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPriorityQueue`] if there are no items.
    pub fn del_max(&mut self) -> Result<T>
    where
        T: Ord,
    {
        if self.is_empty() {
            return Err(Error::EmptyPriorityQueue);
        }
        let last = self.size();
        self.swap(1, last);
        let max = self.heap.pop().ok_or(Error::EmptyPriorityQueue)?;
        self.sink(1);
        Ok(max)
    }

    /// Lifts the item at `position` while its parent is smaller.
    fn swim(&mut self, mut position: usize)
    where
        T: Ord,
    {
        while position > 1 && self.less(position / 2, position) {
            self.swap(position / 2, position);
            position /= 2;
        }
    }

    /// Pushes the item at `position` down while it is smaller than one of its children.
    fn sink(&mut self, mut position: usize)
    where
        T: Ord,
    {
        let n = self.size();
        while 2 * position <= n {
            let mut child = 2 * position;
            // Exchange with the larger child, if there are two.
            if child < n && self.less(child, child + 1) {
                child += 1;
            }
            if !self.less(position, child) {
                break;
            }
            self.swap(position, child);
            position = child;
        }
    }

    fn less(&self, i: usize, j: usize) -> bool
    where
        T: Ord,
    {
        self.heap[i - 1] < self.heap[j - 1]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i - 1, j - 1);
    }

    #[cfg(test)]
    fn assert_heap_ordered(&self)
    where
        T: Ord + fmt::Debug,
    {
        for position in 2..=self.size() {
            assert!(
                !self.less(position / 2, position),
                "{:?} is above a larger child",
                self.heap[position / 2 - 1]
            );
        }
    }
}

impl<T> FromIterator<T> for MaxPriorityQueue<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.insert(item);
        }
        queue
    }
}
