//! A FIFO queue on a singly linked list. The queue keeps pointers to both ends of the list so
//! enqueueing and dequeueing are both `O(1)`.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::queue::Queue;
//! use ordered_bst::Error;
//!
//! let mut queue = Queue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//!
//! assert_eq!(queue.dequeue(), Ok("a"));
//! assert_eq!(queue.dequeue(), Ok("b"));
//! assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// A queue of `T`s. Items are enqueued at the tail and dequeued from the head.
pub struct Queue<T> {
    head: Link<T>,
    // Same list as `head`, seen from the other end. `None` exactly when `head` is `None`.
    tail: Link<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_ok() {}
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty queue.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Returns the number of items in the queue.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue has no items.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { item, next: None })));

        match self.tail {
            // SAFETY: `tail` is the last node of the list and was leaked from a `Box` in a previous
            // `enqueue`. The queue owns it and we have `&mut self` so nothing else references it.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the item at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQueue`] if there are no items.
    pub fn dequeue(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyQueue)?;
        // SAFETY: `head` was allocated with `Box::new` in `enqueue` and is only reachable through
        // this queue. We unlink it below so it is never dereferenced again.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        let Node { item, next } = *node;

        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(item)
    }

    /// Returns the item at the front of the queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        // SAFETY: Nodes stay alive until they are dequeued, which needs `&mut self`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).item })
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut link = self.head;
        std::iter::from_fn(move || {
            // SAFETY: As in `peek`, the borrow of `self` keeps every node alive.
            let node = unsafe { &*link?.as_ptr() };
            link = node.next;
            Some(&node.item)
        })
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.enqueue(item);
        }
        queue
    }
}
