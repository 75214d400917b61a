use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::ordered_tree::OrderedTree;
use log::debug;
use std::iter::FromIterator;

/// An ordered multiset implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Keys equal to an existing key
/// are inserted into its right subtree; later rotations may move them, but every equal key stays
/// reachable by search.
///
/// # Examples
///
/// ```
/// use search_trees::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(0);
/// tree.insert(3);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.min(), Some(&0));
///
/// assert_eq!(tree.delete(&3), Some(3));
/// assert_eq!(tree.delete(&1), None);
/// assert_eq!(tree.traverse(), vec![0, 3]);
/// ```
pub struct AvlTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a key into the tree. Duplicates are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T)
    where
        T: Ord,
    {
        self.len += 1;
        tree::insert(&mut self.tree, Node::new(key));
    }

    /// Removes one occurrence of a key from the tree and returns it. Returns `None` if the key
    /// does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        let ret = tree::remove(&mut self.tree, key);
        match ret {
            Some(_) => self.len -= 1,
            None => debug!("avl: delete of a missing key ignored"),
        }
        ret
    }

    /// Returns a reference to a stored key equal to `key`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&0), None);
    /// ```
    pub fn search(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::get(&self.tree, key)
    }

    /// Checks if a key exists in the tree.
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.search(key).is_some()
    }

    /// Returns the number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all keys.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<'_, T> {
        AvlTreeIter {
            current: self.tree.as_deref(),
            stack: Vec::new(),
        }
    }

    /// Returns every key in ascending order.
    pub fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Asserts that the heights, balance factors, ordering and length are consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        T: Ord,
    {
        assert_eq!(tree::check_consistency(&self.tree, None, None), self.len);
    }
}

impl<T> OrderedTree<T> for AvlTree<T>
where
    T: Ord,
{
    fn new() -> Self {
        AvlTree::new()
    }

    fn insert(&mut self, key: T) {
        AvlTree::insert(self, key)
    }

    fn search(&self, key: &T) -> Option<&T> {
        AvlTree::search(self, key)
    }

    fn delete(&mut self, key: &T) -> Option<T> {
        AvlTree::delete(self, key)
    }

    fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        AvlTree::traverse(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        AvlTree::height(self)
    }

    fn name() -> &'static str {
        "avl"
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a,
{
    type IntoIter = AvlTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `AvlTree<T>`.
///
/// This iterator traverses the keys of the tree in-order and yields immutable references.
pub struct AvlTreeIter<'a, T> {
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        self.stack.pop().map(|node| {
            self.current = node.right.as_deref();
            &node.key
        })
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}
