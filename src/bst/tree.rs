use crate::bst::node::{Link, Node};
use crate::ordered_tree::OrderedTree;
use log::debug;
use std::cmp::Ordering;
use std::iter::FromIterator;

// precondition: the tree is non-empty
fn remove_min<T>(tree: &mut Link<T>) -> Box<Node<T>> {
    let mut curr = tree;
    while curr.as_ref().map_or(false, |node| node.left.is_some()) {
        curr = &mut curr.as_mut().expect("Expected a non-empty subtree.").left;
    }

    let mut node = curr.take().expect("Expected a non-empty tree.");
    *curr = node.right.take();
    node
}

fn combine_subtrees<T>(left_tree: Link<T>, mut right_tree: Link<T>) -> Link<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

// Drops a subtree one node at a time so that deep chains do not recurse.
fn drop_subtree<T>(tree: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// An ordered multiset implemented using an unbalanced binary search tree.
///
/// Every key in the left subtree of a node is strictly less than the node's key and every key in
/// the right subtree is greater than or equal to it, so duplicates are stored to the right. No
/// rebalancing happens, which makes this tree a baseline for the balanced ones rather than a
/// structure to rely on: inserting sorted keys yields a tree whose height equals its length.
///
/// # Examples
///
/// ```
/// use search_trees::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(2);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.search(&2), Some(&2));
/// assert_eq!(tree.traverse(), vec![1, 2, 2]);
///
/// assert_eq!(tree.delete(&2), Some(2));
/// assert_eq!(tree.delete(&3), None);
/// assert_eq!(tree.traverse(), vec![1, 2]);
/// ```
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Constructs a new, empty `BinarySearchTree<T>`.
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    /// Inserts a key into the tree. Keys equal to an existing key are placed in its right
    /// subtree.
    pub fn insert(&mut self, key: T)
    where
        T: Ord,
    {
        let mut curr = &mut self.root;
        while let Some(node) = curr {
            curr = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *curr = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    /// Returns a reference to the first key equal to `key` on the search path, or `None` if the
    /// tree does not contain it.
    pub fn search(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut curr = self.root.as_ref();
        while let Some(node) = curr {
            match key.cmp(&node.key) {
                Ordering::Less => curr = node.left.as_ref(),
                Ordering::Greater => curr = node.right.as_ref(),
                Ordering::Equal => return Some(&node.key),
            }
        }
        None
    }

    /// Checks if a key exists in the tree.
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.search(key).is_some()
    }

    /// Removes one occurrence of `key` and returns it. If the key does not exist, the tree is
    /// left untouched and `None` is returned.
    ///
    /// A node with two children is replaced by its in-order successor.
    pub fn delete(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut curr = &mut self.root;
        loop {
            let ordering = match *curr {
                Some(ref node) => key.cmp(&node.key),
                None => {
                    debug!("bst: delete of a missing key ignored");
                    return None;
                },
            };
            match ordering {
                Ordering::Less => curr = &mut curr.as_mut().expect("Expected a non-empty subtree.").left,
                Ordering::Greater => curr = &mut curr.as_mut().expect("Expected a non-empty subtree.").right,
                Ordering::Equal => break,
            }
        }

        let unboxed_node = *curr.take().expect("Expected the matched node.");
        let Node { key, left, right } = unboxed_node;
        *curr = match (left, right) {
            (None, right) => right,
            (left, None) => left,
            (left, right) => combine_subtrees(left, right),
        };
        self.len -= 1;
        Some(key)
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
        drop_subtree(self.root.take());
        self.len = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty tree has
    /// height 0.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root.iter().map(|node| (&**node, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(ref child) = node.left {
                stack.push((&**child, depth + 1));
            }
            if let Some(ref child) = node.right {
                stack.push((&**child, depth + 1));
            }
        }
        max_depth
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut curr = self.root.as_ref()?;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.key)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut curr = self.root.as_ref()?;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.key)
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> BinarySearchTreeIter<'_, T> {
        BinarySearchTreeIter {
            current: self.root.as_deref(),
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

    /// Asserts that every node respects the ordering invariant and that the length is accurate.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        T: Ord,
    {
        // (node, inclusive lower bound, exclusive upper bound)
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> =
            self.root.iter().map(|node| (&**node, None, None)).collect();
        let mut count = 0;
        while let Some((node, lower, upper)) = stack.pop() {
            if let Some(lower) = lower {
                assert!(*lower <= node.key);
            }
            if let Some(upper) = upper {
                assert!(node.key < *upper);
            }
            count += 1;
            if let Some(ref child) = node.left {
                stack.push((&**child, lower, Some(&node.key)));
            }
            if let Some(ref child) = node.right {
                stack.push((&**child, Some(&node.key), upper));
            }
        }
        assert_eq!(count, self.len);
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        drop_subtree(self.root.take());
    }
}

impl<T> OrderedTree<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn new() -> Self {
        BinarySearchTree::new()
    }

    fn insert(&mut self, key: T) {
        BinarySearchTree::insert(self, key)
    }

    fn search(&self, key: &T) -> Option<&T> {
        BinarySearchTree::search(self, key)
    }

    fn delete(&mut self, key: &T) -> Option<T> {
        BinarySearchTree::delete(self, key)
    }

    fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        BinarySearchTree::traverse(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        BinarySearchTree::height(self)
    }

    fn name() -> &'static str {
        "bst"
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T>
where
    T: 'a,
{
    type IntoIter = BinarySearchTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `BinarySearchTree<T>`.
///
/// This iterator traverses the keys of the tree in-order with an explicit stack and yields
/// immutable references.
pub struct BinarySearchTreeIter<'a, T> {
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for BinarySearchTreeIter<'a, T>
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

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::BinarySearchTree;
    use crate::bst::node::{Link, Node};

    #[test]
    fn test_len_empty() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_is_empty() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut tree = BinarySearchTree::new();
        tree.insert(1);
        assert!(tree.contains(&1));
        assert_eq!(tree.search(&1), Some(&1));
        tree.check_consistency();
    }

    #[test]
    fn test_insert_duplicate_routes_right() {
        let mut tree = BinarySearchTree::new();
        tree.insert(1);
        tree.insert(1);

        let root = tree.root.as_ref().unwrap();
        assert!(root.left.is_none());
        assert_eq!(root.right.as_ref().map(|node| node.key), Some(1));
        assert_eq!(tree.len(), 2);
        tree.check_consistency();
    }

    #[test]
    fn test_delete_leaf() {
        let mut tree = BinarySearchTree::new();
        tree.extend(vec![2, 1, 3]);
        assert_eq!(tree.delete(&1), Some(1));
        assert_eq!(tree.traverse(), vec![2, 3]);
        tree.check_consistency();
    }

    #[test]
    fn test_delete_one_child() {
        let mut tree = BinarySearchTree::new();
        tree.extend(vec![2, 1, 0]);
        assert_eq!(tree.delete(&1), Some(1));
        assert_eq!(tree.traverse(), vec![0, 2]);
        assert_eq!(tree.height(), 2);
        tree.check_consistency();
    }

    #[test]
    fn test_delete_two_children_promotes_successor() {
        let mut tree = BinarySearchTree::new();
        tree.extend(vec![5, 2, 8, 7, 9, 6]);
        assert_eq!(tree.delete(&5), Some(5));
        assert_eq!(tree.root.as_ref().map(|node| node.key), Some(6));
        assert_eq!(tree.traverse(), vec![2, 6, 7, 8, 9]);
        tree.check_consistency();
    }

    #[test]
    fn test_delete_missing() {
        let mut tree = BinarySearchTree::new();
        tree.extend(vec![2, 1, 3]);
        assert_eq!(tree.delete(&4), None);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.traverse(), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_input_degenerates() {
        let tree: BinarySearchTree<u32> = (1..=1000).collect();
        assert_eq!(tree.height(), 1000);
        tree.check_consistency();
    }

    #[test]
    fn test_deep_chain_drop() {
        let mut root: Link<u32> = None;
        for key in 0..200_000 {
            let mut node = Node::new(key);
            node.left = root;
            root = Some(Box::new(node));
        }
        let tree = BinarySearchTree { root, len: 200_000 };
        assert_eq!(tree.height(), 200_000);
        assert_eq!(tree.min(), Some(&0));
        drop(tree);
    }

    #[test]
    fn test_clear() {
        let mut tree: BinarySearchTree<u32> = (0..10).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.search(&3), None);
    }

    #[test]
    fn test_min_max() {
        let tree: BinarySearchTree<u32> = vec![3, 1, 5].into_iter().collect();
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
    }

    #[test]
    fn test_iter() {
        let tree: BinarySearchTree<u32> = vec![1, 5, 3].into_iter().collect();
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!((&tree).into_iter().count(), 3);
    }
}
