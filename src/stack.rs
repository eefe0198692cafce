//! A LIFO stack on a singly linked list.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::stack::Stack;
//! use ordered_bst::Error;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(Error::EmptyStack));
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// A stack of `T`s. The most recently pushed item sits at the head of the list.
pub struct Stack<T> {
    head: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Stack<T> {
    /// Generate a new, empty stack.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of items on the stack.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack has no items.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { item, next }));
        self.len += 1;
    }

    /// Removes and returns the item on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStack`] if there are no items.
    pub fn pop(&mut self) -> Result<T> {
        let node = self.head.take().ok_or(Error::EmptyStack)?;
        let Node { item, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(item)
    }

    /// Returns the item on top of the stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.item)
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut link = self.head.as_deref();
        std::iter::from_fn(move || {
            let node = link?;
            link = node.next.as_deref();
            Some(&node.item)
        })
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}
