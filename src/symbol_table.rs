//! An ordered symbol table backed by an unbalanced Binary Search Tree. Every node remembers how
//! many nodes live in its subtree, which is what makes the order statistics ([`rank`], [`select`])
//! cheap: they only walk one root-to-leaf path.
//!
//! The tree is never rebalanced. Inserting keys in sorted order produces a tree that is really a
//! linked list, and every operation on it is then `O(N)`.
//!
//! [`rank`]: SymbolTable::rank
//! [`select`]: SymbolTable::select
//!
//! # Examples
//!
//! ```
//! use ordered_bst::symbol_table::SymbolTable;
//! use ordered_bst::Error;
//!
//! let mut table = SymbolTable::new();
//!
//! // Nothing in here yet.
//! assert_eq!(table.get(&1), None);
//! assert_eq!(table.min(), Err(Error::EmptyTable));
//!
//! for key in [5, 1, 7, 3] {
//!     table.put(key, key * 10);
//! }
//!
//! // Putting a new value for the same key overwrites the value.
//! table.put(3, 33);
//! assert_eq!(table.get(&3), Some(&33));
//! assert_eq!(table.size(), 4);
//!
//! // Order statistics.
//! assert_eq!(table.rank(&5), 2);
//! assert_eq!(table.select(2), Ok(&5));
//! assert_eq!(table.floor(&4), Some(&33));
//! assert_eq!(table.ceiling(&6), Some(&70));
//!
//! // Deleting a key returns its value.
//! assert_eq!(table.delete(&5), Some(50));
//! assert_eq!(table.keys().collect::<Vec<_>>(), [&1, &3, &7]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::error::{Error, Result};

/// An ordered map from `K` to `V`. Keys are kept in a Binary Search Tree ordered by [`Ord`] and
/// each node tracks the size of its subtree.
pub struct SymbolTable<K, V> {
    root: Tree<K, V>,
}

impl<K, V> Default for SymbolTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for SymbolTable<K, V> {
    // A tree built from sorted keys is as deep as it is long so the default recursive drop could
    // overflow the stack. Unhook children onto an explicit stack instead.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Tree::Node(root) = mem::take(&mut self.root) {
            pending.push(root);
        }
        while let Some(mut node) = pending.pop() {
            if let Tree::Node(left) = mem::take(&mut node.left) {
                pending.push(left);
            }
            if let Tree::Node(right) = mem::take(&mut node.right) {
                pending.push(right);
            }
        }
    }
}

impl<K, V> Clone for SymbolTable<K, V>
where
    K: Clone,
    V: Clone,
{
    // Post-order walk on an explicit stack: a node is copied once both of its children have been,
    // so the copy never recurses however deep the tree is.
    fn clone(&self) -> Self {
        enum Visit<'a, K, V> {
            Enter(&'a Tree<K, V>),
            Exit(&'a Node<K, V>),
        }

        let mut visits = vec![Visit::Enter(&self.root)];
        let mut copies: Vec<Tree<K, V>> = Vec::new();
        while let Some(visit) = visits.pop() {
            match visit {
                Visit::Enter(Tree::Leaf) => copies.push(Tree::Leaf),
                Visit::Enter(Tree::Node(node)) => {
                    let node: &Node<K, V> = node;
                    visits.push(Visit::Exit(node));
                    visits.push(Visit::Enter(&node.right));
                    visits.push(Visit::Enter(&node.left));
                }
                Visit::Exit(node) => {
                    let right = copies.pop().unwrap_or_default();
                    let left = copies.pop().unwrap_or_default();
                    copies.push(Tree::Node(Box::new(Node {
                        key: node.key.clone(),
                        value: node.value.clone(),
                        left,
                        right,
                        count: node.count,
                    })));
                }
            }
        }

        Self {
            root: copies.pop().unwrap_or_default(),
        }
    }
}

impl<K, V> fmt::Debug for SymbolTable<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> SymbolTable<K, V> {
    /// Generate a new, empty `SymbolTable`.
    pub fn new() -> Self {
        Self { root: Tree::Leaf }
    }

    /// Returns the number of entries in the table. This is read straight off the root's counter.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the height of the tree, i.e. the number of nodes on its longest root-to-leaf path.
    /// An empty table has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::symbol_table::SymbolTable;
    ///
    /// // Sorted input degenerates into a list.
    /// let table: SymbolTable<_, _> = (0..10).map(|x| (x, x)).collect();
    /// assert_eq!(table.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(&self.root, 1)];
        while let Some((tree, depth)) = pending.pop() {
            if let Tree::Node(node) = tree {
                deepest = deepest.max(depth);
                pending.push((&node.left, depth + 1));
                pending.push((&node.right, depth + 1));
            }
        }
        deepest
    }

    /// Potentially finds the value associated with the given key. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::symbol_table::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.put(1, 2);
    ///
    /// assert_eq!(table.get(&1), Some(&2));
    /// assert_eq!(table.get(&42), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut tree = &self.root;
        while let Tree::Node(node) = tree {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => tree = &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => tree = &node.right,
            }
        }
        None
    }

    /// Like [`get`](Self::get) but hands out a mutable reference to the value. Keys can't be
    /// changed in place since that could break the ordering of the tree.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut tree = &mut self.root;
        loop {
            match tree {
                Tree::Leaf => return None,
                Tree::Node(node) => match key.cmp(node.key.borrow()) {
                    Ordering::Less => tree = &mut node.left,
                    Ordering::Equal => return Some(&mut node.value),
                    Ordering::Greater => tree = &mut node.right,
                },
            }
        }
    }

    /// Returns `true` if the table has an entry for `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Inserts the given value into the table stored at the given key. Putting a new value for an
    /// existing key overwrites its value and leaves the shape of the tree alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::symbol_table::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    ///
    /// table.put(1, 2);
    /// assert_eq!(table.get(&1), Some(&2));
    ///
    /// table.put(1, 3);
    /// assert_eq!(table.get(&1), Some(&3));
    /// assert_eq!(table.size(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        match self.get_mut(&key) {
            Some(existing) => *existing = value,
            None => self.root.insert_new(key, value),
        }
    }

    /// Returns the smallest key in the table.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTable`] if there are no entries.
    pub fn min(&self) -> Result<&K> {
        self.root
            .min_node()
            .map(|node| &node.key)
            .ok_or(Error::EmptyTable)
    }

    /// Returns the largest key in the table.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTable`] if there are no entries.
    pub fn max(&self) -> Result<&K> {
        self.root
            .max_node()
            .map(|node| &node.key)
            .ok_or(Error::EmptyTable)
    }

    /// Returns the value stored at the largest key less than or equal to `key`, or `None` if every
    /// key in the table is larger.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::symbol_table::SymbolTable;
    ///
    /// let table: SymbolTable<_, _> = [(1, "a"), (3, "c"), (5, "e")].into_iter().collect();
    ///
    /// assert_eq!(table.floor(&4), Some(&"c"));
    /// assert_eq!(table.floor(&3), Some(&"c"));
    /// assert_eq!(table.floor(&0), None);
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.floor(key).map(|node| &node.value)
    }

    /// Returns the largest key less than or equal to `key`.
    pub fn floor_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.floor(key).map(|node| &node.key)
    }

    /// Returns the value stored at the smallest key greater than or equal to `key`, or `None` if
    /// every key in the table is smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::symbol_table::SymbolTable;
    ///
    /// let table: SymbolTable<_, _> = [(1, "a"), (3, "c"), (5, "e")].into_iter().collect();
    ///
    /// assert_eq!(table.ceiling(&4), Some(&"e"));
    /// assert_eq!(table.ceiling(&5), Some(&"e"));
    /// assert_eq!(table.ceiling(&6), None);
    /// ```
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.ceiling(key).map(|node| &node.value)
    }

    /// Returns the smallest key greater than or equal to `key`.
    pub fn ceiling_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.ceiling(key).map(|node| &node.key)
    }

    /// Returns how many keys in the table are strictly less than `key`. The key itself doesn't
    /// need to be in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::symbol_table::SymbolTable;
    ///
    /// let table: SymbolTable<_, _> = [10, 20, 30].into_iter().map(|k| (k, ())).collect();
    ///
    /// assert_eq!(table.rank(&20), 1);
    /// assert_eq!(table.rank(&25), 2);
    /// assert_eq!(table.rank(&5), 0);
    /// ```
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.rank(key)
    }

    /// Returns the key with exactly `rank` smaller keys in the table, i.e. the zero-based
    /// `rank`-th key in sorted order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `rank >= self.size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::symbol_table::SymbolTable;
    /// use ordered_bst::Error;
    ///
    /// let table: SymbolTable<_, _> = [10, 20, 30].into_iter().map(|k| (k, ())).collect();
    ///
    /// assert_eq!(table.select(0), Ok(&10));
    /// assert_eq!(table.select(2), Ok(&30));
    /// assert_eq!(table.select(3), Err(Error::InvalidArgument { rank: 3, size: 3 }));
    /// ```
    pub fn select(&self, rank: usize) -> Result<&K> {
        let out_of_range = Error::InvalidArgument {
            rank,
            size: self.size(),
        };
        if rank >= self.size() {
            return Err(out_of_range);
        }
        self.root
            .select(rank)
            .map(|node| &node.key)
            .ok_or(out_of_range)
    }

    /// Removes the entry with the smallest key and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTable`] if there are no entries.
    pub fn delete_min(&mut self) -> Result<(K, V)> {
        Tree::take_min(&mut self.root)
            .map(Node::into_entry)
            .ok_or(Error::EmptyTable)
    }

    /// Removes the entry with the largest key and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTable`] if there are no entries.
    pub fn delete_max(&mut self) -> Result<(K, V)> {
        Tree::take_max(&mut self.root)
            .map(Node::into_entry)
            .ok_or(Error::EmptyTable)
    }

    /// Deletes the entry for `key` and returns its value. If the table has no such key, nothing
    /// happens.
    ///
    /// A node with two children is replaced by the smallest node of its right subtree (Hibbard
    /// deletion). Over many deletions this skews the tree towards the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::symbol_table::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// table.put(1, 2);
    ///
    /// assert_eq!(table.delete(&1), Some(2));
    /// assert_eq!(table.delete(&1), None);
    /// assert!(table.is_empty());
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // Counts shrink on the way down, so only start once we know there is a node to remove.
        if !self.contains(key) {
            return None;
        }

        let mut slot = &mut self.root;
        loop {
            let ord = match &*slot {
                Tree::Node(node) => key.cmp(node.key.borrow()),
                Tree::Leaf => break,
            };
            if ord.is_eq() {
                break;
            }
            let Tree::Node(node) = slot else {
                unreachable!()
            };
            node.count -= 1;
            slot = if ord.is_lt() {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Tree::Node(mut node) = mem::take(slot) else {
            return None;
        };
        *slot = match (mem::take(&mut node.left), mem::take(&mut node.right)) {
            (Tree::Leaf, only) | (only, Tree::Leaf) => only,

            // With two children the successor (the smallest node on the right) is promoted into
            // this position, adopting both subtrees.
            (left, mut right) => match Tree::take_min(&mut right) {
                Some(mut successor) => {
                    successor.left = left;
                    successor.right = right;
                    successor.fix_count();
                    Tree::Node(successor)
                }
                None => left,
            },
        };
        Some(node.into_entry().1)
    }

    /// Returns the keys in ascending order. The iterator walks the tree lazily.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root)
    }
}

impl<K, V> FromIterator<(K, V)> for SymbolTable<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V> Extend<(K, V)> for SymbolTable<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SymbolTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for SymbolTable<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(mem::take(&mut self.root))
    }
}

/// In-order iterator over borrowed entries. Created by [`SymbolTable::iter`].
pub struct Iter<'a, K, V> {
    /// Nodes whose left subtree has been visited but which haven't been yielded yet.
    pending: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: &'a Tree<K, V>) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
            remaining: root.size(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree<K, V>) {
        while let Tree::Node(node) = tree {
            self.pending.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// In-order iterator over keys. Created by [`SymbolTable::keys`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// In-order iterator that takes ownership of the entries. Created by
/// [`SymbolTable::into_iter`](IntoIterator::into_iter).
pub struct IntoIter<K, V> {
    pending: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    fn new(root: Tree<K, V>) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
            remaining: root.size(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut tree: Tree<K, V>) {
        while let Tree::Node(mut node) = tree {
            tree = mem::take(&mut node.left);
            self.pending.push(node);
        }
    }
}

impl<K, V> Drop for IntoIter<K, V> {
    // Same concern as dropping the table: don't recurse down a long right spine.
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.pending.pop()?;
        self.push_left_spine(mem::take(&mut node.right));
        self.remaining -= 1;
        Some(node.into_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

/// A possibly empty subtree. Each `Node` owns its two children outright.
enum Tree<K, V> {
    Leaf,
    Node(Box<Node<K, V>>),
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Tree::Leaf
    }
}

impl<K, V> Tree<K, V> {
    fn size(&self) -> usize {
        match self {
            Tree::Leaf => 0,
            Tree::Node(node) => node.count,
        }
    }

    fn node(&self) -> Option<&Node<K, V>> {
        match self {
            Tree::Leaf => None,
            Tree::Node(node) => Some(&**node),
        }
    }

    /// Hangs a new node for `key` off the bottom of this subtree, which must not contain `key`
    /// yet. Every node passed on the way down gains exactly one descendant, so counts are bumped
    /// as we go.
    fn insert_new(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut slot = self;
        loop {
            match slot {
                Tree::Leaf => {
                    *slot = Tree::Node(Box::new(Node::new(key, value)));
                    return;
                }
                Tree::Node(node) => {
                    node.count += 1;
                    slot = match key.cmp(&node.key) {
                        Ordering::Less => &mut node.left,
                        Ordering::Equal => unreachable!("existing keys are overwritten in place"),
                        Ordering::Greater => &mut node.right,
                    };
                }
            }
        }
    }

    fn min_node(&self) -> Option<&Node<K, V>> {
        let mut node = self.node()?;
        while let Tree::Node(left) = &node.left {
            node = left;
        }
        Some(node)
    }

    fn max_node(&self) -> Option<&Node<K, V>> {
        let mut node = self.node()?;
        while let Tree::Node(right) = &node.right {
            node = right;
        }
        Some(node)
    }

    fn floor<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut current = self.node();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.node(),
                Ordering::Equal => return Some(node),
                // This node is a candidate but the right subtree may hold a closer one.
                Ordering::Greater => {
                    best = Some(node);
                    current = node.right.node();
                }
            }
        }
        best
    }

    fn ceiling<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut current = self.node();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    best = Some(node);
                    current = node.left.node();
                }
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right.node(),
            }
        }
        best
    }

    fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut smaller = 0;
        let mut current = self.node();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.node(),
                Ordering::Equal => return smaller + node.left.size(),
                Ordering::Greater => {
                    smaller += 1 + node.left.size();
                    current = node.right.node();
                }
            }
        }
        smaller
    }

    fn select(&self, mut rank: usize) -> Option<&Node<K, V>> {
        let mut current = self.node();
        while let Some(node) = current {
            let left_size = node.left.size();
            match rank.cmp(&left_size) {
                Ordering::Less => current = node.left.node(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => {
                    rank -= left_size + 1;
                    current = node.right.node();
                }
            }
        }
        None
    }

    /// Unhooks the leftmost node below `slot`, shrinking every count on the way down. The
    /// leftmost node's right child takes its place. The detached node has no children.
    fn take_min(mut slot: &mut Self) -> Option<Box<Node<K, V>>> {
        while matches!(&*slot, Tree::Node(node) if matches!(node.left, Tree::Node(_))) {
            let Tree::Node(node) = slot else {
                unreachable!()
            };
            node.count -= 1;
            slot = &mut node.left;
        }

        let Tree::Node(mut min) = mem::take(slot) else {
            return None;
        };
        *slot = mem::take(&mut min.right);
        min.count = 1;
        Some(min)
    }

    /// Mirror image of [`take_min`](Self::take_min).
    fn take_max(mut slot: &mut Self) -> Option<Box<Node<K, V>>> {
        while matches!(&*slot, Tree::Node(node) if matches!(node.right, Tree::Node(_))) {
            let Tree::Node(node) = slot else {
                unreachable!()
            };
            node.count -= 1;
            slot = &mut node.right;
        }

        let Tree::Node(mut max) = mem::take(slot) else {
            return None;
        };
        *slot = mem::take(&mut max.left);
        max.count = 1;
        Some(max)
    }
}

/// A `Node` has a key that is used for searching/sorting and a value that is associated with that
/// key. Its children may be [`Leaf`][Tree::Leaf]s.
struct Node<K, V> {
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,

    /// How many nodes are in the subtree rooted at this node, including itself.
    count: usize,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: Tree::Leaf,
            right: Tree::Leaf,
            count: 1,
        }
    }

    fn into_entry(self: Box<Self>) -> (K, V) {
        let Node { key, value, .. } = *self;
        (key, value)
    }

    /// Recomputes this node's count from its children. The children must already be correct.
    fn fix_count(&mut self) {
        self.count = 1 + self.left.size() + self.right.size();

        if cfg!(debug_assertions) {
            for child in [&self.left, &self.right] {
                if let Tree::Node(child) = child {
                    assert_eq!(child.count, 1 + child.left.size() + child.right.size());
                }
            }
        }
    }
}

#[cfg(test)]
impl<K, V> SymbolTable<K, V>
where
    K: Ord + fmt::Debug,
{
    /// Walks every node and asserts that its count matches its children and that the keys come
    /// out in strictly ascending order.
    pub(crate) fn assert_invariants(&self) {
        let mut pending = vec![&self.root];
        while let Some(tree) = pending.pop() {
            if let Tree::Node(node) = tree {
                assert_eq!(
                    node.count,
                    1 + node.left.size() + node.right.size(),
                    "bad count at {:?}",
                    node.key
                );
                pending.push(&node.left);
                pending.push(&node.right);
            }
        }

        let keys = self.keys().collect::<Vec<_>>();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", keys);
        assert_eq!(keys.len(), self.size());
    }
}
