use crate::arena::{Handle, TypedArena};
use crate::ordered_tree::OrderedTree;
use crate::red_black_tree::node::{Color, Node};
use log::debug;
use std::cmp::Ordering;
use std::iter::FromIterator;

/// An ordered multiset implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black
/// and maintains the following invariants after every public operation:
///
/// 1. The root is black.
/// 2. Absent children (the NIL sentinel) are black.
/// 3. A red node never has a red child.
/// 4. Every path from a node down to an absent child passes through the same number of black
///    nodes.
///
/// Together these bound the height of a tree holding `n` keys by `2 * log2(n + 1)`. Keys equal to
/// an existing key are inserted into its right subtree.
///
/// # Examples
///
/// ```
/// use search_trees::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(0);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.search(&3), Some(&3));
///
/// assert_eq!(tree.delete(&0), Some(0));
/// assert_eq!(tree.delete(&1), None);
/// ```
pub struct RedBlackTree<T> {
    arena: TypedArena<Node<T>>,
    root: Option<Handle>,
}

impl<T> RedBlackTree<T> {
    /// Constructs a new, empty `RedBlackTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let tree: RedBlackTree<u32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RedBlackTree {
            arena: TypedArena::new(),
            root: None,
        }
    }

    /// Constructs a new, empty `RedBlackTree<T>` with room for `capacity` keys before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackTree {
            arena: TypedArena::with_capacity(capacity),
            root: None,
        }
    }

    // The NIL sentinel is black.
    fn color(&self, link: Option<Handle>) -> Color {
        link.map_or(Color::Black, |handle| self.arena[handle].color)
    }

    fn set_color(&mut self, handle: Handle, color: Color) {
        self.arena[handle].color = color;
    }

    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                if self.arena[parent].left == Some(old) {
                    self.arena[parent].left = new;
                } else {
                    self.arena[parent].right = new;
                }
            },
        }
    }

    // Replaces the subtree rooted at `old` with the subtree rooted at `new`. The children of `old`
    // are left untouched.
    fn transplant(&mut self, old: Handle, new: Option<Handle>) {
        let parent = self.arena[old].parent;
        self.replace_child(parent, old, new);
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
    }

    fn left_rotate(&mut self, x: Handle) {
        let y = self.arena[x]
            .right
            .expect("Expected right child node to be `Some`.");
        let y_left = self.arena[y].left;
        self.arena[x].right = y_left;
        if let Some(y_left) = y_left {
            self.arena[y_left].parent = Some(x);
        }

        let x_parent = self.arena[x].parent;
        self.arena[y].parent = x_parent;
        self.replace_child(x_parent, x, Some(y));

        self.arena[y].left = Some(x);
        self.arena[x].parent = Some(y);
    }

    fn right_rotate(&mut self, y: Handle) {
        let x = self.arena[y]
            .left
            .expect("Expected left child node to be `Some`.");
        let x_right = self.arena[x].right;
        self.arena[y].left = x_right;
        if let Some(x_right) = x_right {
            self.arena[x_right].parent = Some(y);
        }

        let y_parent = self.arena[y].parent;
        self.arena[x].parent = y_parent;
        self.replace_child(y_parent, y, Some(x));

        self.arena[x].right = Some(y);
        self.arena[y].parent = Some(x);
    }

    fn minimum(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.arena[handle].left {
            handle = left;
        }
        handle
    }

    fn maximum(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.arena[handle].right {
            handle = right;
        }
        handle
    }

    fn find(&self, key: &T) -> Option<Handle>
    where
        T: Ord,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            match key.cmp(&node.key) {
                Ordering::Less => curr = node.left,
                Ordering::Greater => curr = node.right,
                Ordering::Equal => return Some(handle),
            }
        }
        None
    }

    /// Inserts a key into the tree. Keys equal to an existing key are placed in its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.traverse(), vec![1, 1]);
    /// ```
    pub fn insert(&mut self, key: T)
    where
        T: Ord,
    {
        let mut parent = None;
        let mut is_left = false;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            parent = Some(handle);
            is_left = key < node.key;
            curr = if is_left { node.left } else { node.right };
        }

        let z = self.arena.allocate(Node::new(key, parent));
        match parent {
            None => self.root = Some(z),
            Some(parent) if is_left => self.arena[parent].left = Some(z),
            Some(parent) => self.arena[parent].right = Some(z),
        }
        self.fix_insert(z);
    }

    // Restores the red black invariants after `z` was linked in as a red leaf. The only possible
    // violation is `z` and its parent both being red.
    fn fix_insert(&mut self, mut z: Handle) {
        loop {
            let parent = match self.arena[z].parent {
                Some(parent) if self.arena[parent].color == Color::Red => parent,
                _ => break,
            };
            // a red node is never the root
            let grandparent = self.arena[parent]
                .parent
                .expect("Expected a red node to have a parent.");

            if self.arena[grandparent].left == Some(parent) {
                let uncle = self.arena[grandparent].right;
                match uncle {
                    Some(uncle) if self.arena[uncle].color == Color::Red => {
                        self.set_color(parent, Color::Black);
                        self.set_color(uncle, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        z = grandparent;
                    },
                    _ => {
                        let mut parent = parent;
                        if self.arena[parent].right == Some(z) {
                            z = parent;
                            self.left_rotate(z);
                            parent = self.arena[z].parent.expect("Expected a rotated node to have a parent.");
                        }
                        self.set_color(parent, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        self.right_rotate(grandparent);
                    },
                }
            } else {
                let uncle = self.arena[grandparent].left;
                match uncle {
                    Some(uncle) if self.arena[uncle].color == Color::Red => {
                        self.set_color(parent, Color::Black);
                        self.set_color(uncle, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        z = grandparent;
                    },
                    _ => {
                        let mut parent = parent;
                        if self.arena[parent].left == Some(z) {
                            z = parent;
                            self.right_rotate(z);
                            parent = self.arena[z].parent.expect("Expected a rotated node to have a parent.");
                        }
                        self.set_color(parent, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        self.left_rotate(grandparent);
                    },
                }
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Returns a reference to a stored key equal to `key`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&0), None);
    /// ```
    pub fn search(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.find(key).map(|handle| &self.arena[handle].key)
    }

    /// Checks if a key exists in the tree.
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        self.find(key).is_some()
    }

    /// Removes one occurrence of a key from the tree and returns it. If the key does not exist,
    /// the tree is left untouched and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.delete(&1), Some(1));
    /// assert_eq!(tree.delete(&1), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        let z = match self.find(key) {
            Some(z) => z,
            None => {
                debug!("red black tree: delete of a missing key ignored");
                return None;
            },
        };

        let z_left = self.arena[z].left;
        let z_right = self.arena[z].right;
        let z_parent = self.arena[z].parent;
        let z_color = self.arena[z].color;

        // `x` is the node that moves into the spliced node's position. It may be the sentinel, so
        // its parent is tracked separately.
        let x;
        let x_parent;
        let mut removed_color = z_color;
        match (z_left, z_right) {
            (None, _) => {
                x = z_right;
                x_parent = z_parent;
                self.transplant(z, z_right);
            },
            (Some(_), None) => {
                x = z_left;
                x_parent = z_parent;
                self.transplant(z, z_left);
            },
            (Some(left), Some(right)) => {
                let y = self.minimum(right);
                removed_color = self.arena[y].color;
                x = self.arena[y].right;
                if y == right {
                    x_parent = Some(y);
                } else {
                    x_parent = self.arena[y].parent;
                    self.transplant(y, x);
                    self.arena[y].right = Some(right);
                    self.arena[right].parent = Some(y);
                }
                self.transplant(z, Some(y));
                self.arena[y].left = Some(left);
                self.arena[left].parent = Some(y);
                self.set_color(y, z_color);
            },
        }

        if removed_color == Color::Black {
            self.fix_delete(x, x_parent);
        }

        Some(self.arena.free(z).key)
    }

    // Resolves the extra black carried by `x` after a black node was spliced out above it.
    fn fix_delete(&mut self, mut x: Option<Handle>, mut parent: Option<Handle>) {
        while x != self.root && self.color(x) == Color::Black {
            let p = match parent {
                Some(p) => p,
                None => break,
            };

            if x == self.arena[p].left {
                let mut sibling = self.arena[p]
                    .right
                    .expect("Expected a doubly black node to have a sibling.");
                if self.arena[sibling].color == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(p, Color::Red);
                    self.left_rotate(p);
                    sibling = self.arena[p]
                        .right
                        .expect("Expected a doubly black node to have a sibling.");
                }

                let near = self.arena[sibling].left;
                let far = self.arena[sibling].right;
                if self.color(near) == Color::Black && self.color(far) == Color::Black {
                    self.set_color(sibling, Color::Red);
                    x = Some(p);
                    parent = self.arena[p].parent;
                } else {
                    if self.color(far) == Color::Black {
                        if let Some(near) = near {
                            self.set_color(near, Color::Black);
                        }
                        self.set_color(sibling, Color::Red);
                        self.right_rotate(sibling);
                        sibling = self.arena[p]
                            .right
                            .expect("Expected a doubly black node to have a sibling.");
                    }

                    let parent_color = self.arena[p].color;
                    self.set_color(sibling, parent_color);
                    self.set_color(p, Color::Black);
                    let far = self.arena[sibling].right;
                    if let Some(far) = far {
                        self.set_color(far, Color::Black);
                    }
                    self.left_rotate(p);
                    x = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = self.arena[p]
                    .left
                    .expect("Expected a doubly black node to have a sibling.");
                if self.arena[sibling].color == Color::Red {
                    self.set_color(sibling, Color::Black);
                    self.set_color(p, Color::Red);
                    self.right_rotate(p);
                    sibling = self.arena[p]
                        .left
                        .expect("Expected a doubly black node to have a sibling.");
                }

                let near = self.arena[sibling].right;
                let far = self.arena[sibling].left;
                if self.color(near) == Color::Black && self.color(far) == Color::Black {
                    self.set_color(sibling, Color::Red);
                    x = Some(p);
                    parent = self.arena[p].parent;
                } else {
                    if self.color(far) == Color::Black {
                        if let Some(near) = near {
                            self.set_color(near, Color::Black);
                        }
                        self.set_color(sibling, Color::Red);
                        self.left_rotate(sibling);
                        sibling = self.arena[p]
                            .left
                            .expect("Expected a doubly black node to have a sibling.");
                    }

                    let parent_color = self.arena[p].color;
                    self.set_color(sibling, parent_color);
                    self.set_color(p, Color::Black);
                    let far = self.arena[sibling].left;
                    if let Some(far) = far {
                        self.set_color(far, Color::Black);
                    }
                    self.right_rotate(p);
                    x = self.root;
                    parent = None;
                }
            }
        }

        if let Some(x) = x {
            self.set_color(x, Color::Black);
        }
    }

    /// Returns the number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the tree, removing all keys.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Returns the color of the root. An empty tree reports the color of the sentinel, black.
    pub fn root_color(&self) -> Color {
        self.color(self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Handle, usize)> = self.root.iter().map(|handle| (*handle, 1)).collect();
        while let Some((handle, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.arena[handle];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        max_depth
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.minimum(root)].key)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.maximum(root)].key)
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackTreeIter<'_, T> {
        RedBlackTreeIter {
            arena: &self.arena,
            current: self.root,
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

    /// Asserts the red black invariants, the ordering of keys, the consistency of parent links
    /// and the length of the tree.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self)
    where
        T: Ord,
    {
        assert_eq!(self.color(self.root), Color::Black);
        if let Some(root) = self.root {
            assert_eq!(self.arena[root].parent, None);
        }
        let (count, _) = self.check_subtree(self.root, None, None);
        assert_eq!(count, self.len());
    }

    // Returns the number of nodes and the black height of the subtree rooted at `link`.
    #[cfg(any(test, feature = "consistency_check"))]
    fn check_subtree(&self, link: Option<Handle>, lower: Option<&T>, upper: Option<&T>) -> (usize, usize)
    where
        T: Ord,
    {
        let handle = match link {
            Some(handle) => handle,
            None => return (0, 0),
        };
        let node = &self.arena[handle];
        if let Some(lower) = lower {
            assert!(*lower <= node.key);
        }
        if let Some(upper) = upper {
            assert!(node.key <= *upper);
        }
        for child in node.left.iter().chain(node.right.iter()) {
            assert_eq!(self.arena[*child].parent, Some(handle));
        }
        if node.color == Color::Red {
            assert_eq!(self.color(node.left), Color::Black);
            assert_eq!(self.color(node.right), Color::Black);
        }

        let (left_count, left_black_height) = self.check_subtree(node.left, lower, Some(&node.key));
        let (right_count, right_black_height) = self.check_subtree(node.right, Some(&node.key), upper);
        assert_eq!(left_black_height, right_black_height);

        let black_height = match node.color {
            Color::Black => left_black_height + 1,
            Color::Red => left_black_height,
        };
        (left_count + right_count + 1, black_height)
    }
}

impl<T> OrderedTree<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn new() -> Self {
        RedBlackTree::new()
    }

    fn insert(&mut self, key: T) {
        RedBlackTree::insert(self, key)
    }

    fn search(&self, key: &T) -> Option<&T> {
        RedBlackTree::search(self, key)
    }

    fn delete(&mut self, key: &T) -> Option<T> {
        RedBlackTree::delete(self, key)
    }

    fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        RedBlackTree::traverse(self)
    }

    fn len(&self) -> usize {
        self.arena.len()
    }

    fn height(&self) -> usize {
        RedBlackTree::height(self)
    }

    fn name() -> &'static str {
        "rbt"
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T>
where
    T: 'a,
{
    type IntoIter = RedBlackTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackTree<T>`.
///
/// This iterator traverses the keys of the tree in-order and yields immutable references.
pub struct RedBlackTreeIter<'a, T> {
    arena: &'a TypedArena<Node<T>>,
    current: Option<Handle>,
    stack: Vec<Handle>,
}

impl<'a, T> Iterator for RedBlackTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        while let Some(handle) = self.current {
            self.stack.push(handle);
            self.current = arena[handle].left;
        }
        let handle = self.stack.pop()?;
        let node = &arena[handle];
        self.current = node.right;
        Some(&node.key)
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackTree;
    use crate::red_black_tree::node::Color;
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn root_key(tree: &RedBlackTree<u32>) -> Option<u32> {
        tree.root.map(|root| tree.arena[root].key)
    }

    fn color_of(tree: &RedBlackTree<u32>, key: u32) -> Color {
        let handle = tree.find(&key).expect("Expected key to be present.");
        tree.arena[handle].color
    }

    #[test]
    fn test_len_empty() {
        let tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.root_color(), Color::Black);
    }

    #[test]
    fn test_min_max_empty() {
        let tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_insert_root_is_black() {
        let mut tree = RedBlackTree::new();
        tree.insert(1);
        assert_eq!(color_of(&tree, 1), Color::Black);
        tree.insert(2);
        assert_eq!(color_of(&tree, 2), Color::Red);
        tree.check_consistency();
    }

    #[test]
    fn test_insert_red_uncle_recolors() {
        let mut tree = RedBlackTree::new();
        tree.extend(vec![2, 1, 3, 4]);
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(color_of(&tree, 1), Color::Black);
        assert_eq!(color_of(&tree, 3), Color::Black);
        assert_eq!(color_of(&tree, 4), Color::Red);
        tree.check_consistency();
    }

    #[test]
    fn test_insert_outer_child_rotates() {
        let tree: RedBlackTree<u32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(root_key(&tree), Some(2));
        assert_eq!(color_of(&tree, 1), Color::Red);
        assert_eq!(color_of(&tree, 3), Color::Red);
        tree.check_consistency();

        let tree: RedBlackTree<u32> = vec![3, 2, 1].into_iter().collect();
        assert_eq!(root_key(&tree), Some(2));
        tree.check_consistency();
    }

    #[test]
    fn test_insert_inner_child_rotates_twice() {
        let tree: RedBlackTree<u32> = vec![3, 1, 2].into_iter().collect();
        assert_eq!(root_key(&tree), Some(2));
        tree.check_consistency();

        let tree: RedBlackTree<u32> = vec![1, 3, 2].into_iter().collect();
        assert_eq!(root_key(&tree), Some(2));
        tree.check_consistency();
    }

    #[test]
    fn test_insert_descending_sequence() {
        let tree: RedBlackTree<u32> = vec![20, 15, 25, 10, 5, 1].into_iter().collect();
        assert_eq!(tree.root_color(), Color::Black);
        assert_eq!(tree.traverse(), vec![1, 5, 10, 15, 20, 25]);
        tree.check_consistency();
    }

    #[test]
    fn test_delete_with_fixups() {
        let mut tree: RedBlackTree<u32> = vec![7, 3, 18, 10, 22, 8, 11, 26].into_iter().collect();
        for key in &[18, 11, 3] {
            assert_eq!(tree.delete(key), Some(*key));
            tree.check_consistency();
        }
        for key in &[18, 11, 3] {
            assert_eq!(tree.search(key), None);
        }
        assert_eq!(tree.search(&7), Some(&7));
        assert_eq!(tree.search(&8), Some(&8));
        assert_eq!(tree.traverse(), vec![7, 8, 10, 22, 26]);
    }

    #[test]
    fn test_delete_red_sibling() {
        // deleting 1 leaves a double black whose sibling 4 is red
        let mut tree: RedBlackTree<u32> = vec![2, 1, 4, 3, 5, 6].into_iter().collect();
        tree.check_consistency();
        for key in &[1, 2, 3, 4, 5, 6] {
            assert_eq!(tree.delete(key), Some(*key));
            tree.check_consistency();
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_delete_mirror_cases() {
        let mut tree: RedBlackTree<u32> = (0..64).collect();
        for key in (0..64).rev() {
            assert_eq!(tree.delete(&key), Some(key));
            tree.check_consistency();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.root_color(), Color::Black);
    }

    #[test]
    fn test_delete_single_key() {
        let mut tree = RedBlackTree::new();
        tree.insert(42);
        assert_eq!(tree.delete(&42), Some(42));
        assert!(tree.root.is_none());
        assert_eq!(tree.search(&42), None);
        tree.check_consistency();
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut tree: RedBlackTree<u32> = (0..20).map(|key| key * 2).collect();
        let colors: Vec<Color> = (0..20).map(|key| color_of(&tree, key * 2)).collect();
        let root = root_key(&tree);
        let height = tree.height();

        assert_eq!(tree.delete(&7), None);

        assert_eq!(tree.len(), 20);
        assert_eq!(root_key(&tree), root);
        assert_eq!(tree.height(), height);
        assert_eq!(
            (0..20).map(|key| color_of(&tree, key * 2)).collect::<Vec<Color>>(),
            colors,
        );
    }

    #[test]
    fn test_duplicates() {
        let mut tree = RedBlackTree::new();
        tree.insert(5);
        tree.insert(5);
        assert_eq!(tree.len(), 2);
        tree.check_consistency();

        assert_eq!(tree.delete(&5), Some(5));
        assert_eq!(tree.search(&5), Some(&5));
        assert_eq!(tree.traverse(), vec![5]);
        tree.check_consistency();
    }

    #[test]
    fn test_height_bound_sorted() {
        let tree: RedBlackTree<u32> = (1..=1000).collect();
        assert!((tree.height() as f64) <= 2.0 * (1001f64).log2());
        tree.check_consistency();
    }

    #[test]
    fn test_slots_are_reused() {
        let mut tree = RedBlackTree::with_capacity(16);
        for round in 0..10 {
            for key in 0..16u32 {
                tree.insert(key + round);
            }
            for key in 0..16u32 {
                assert_eq!(tree.delete(&(key + round)), Some(key + round));
            }
        }
        assert!(tree.is_empty());
        assert_eq!(tree.arena.len(), 0);
    }

    #[test]
    fn test_random_operations() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut tree = RedBlackTree::new();
        let mut expected = Vec::new();
        for _ in 0..5_000 {
            let key = rng.gen_range(0..200u32);
            if rng.gen_bool(0.55) {
                tree.insert(key);
                expected.push(key);
            } else {
                let position = expected.iter().position(|k| *k == key);
                assert_eq!(tree.delete(&key), position.map(|index| expected.swap_remove(index)));
            }
            tree.check_consistency();
        }
        expected.sort();
        assert_eq!(tree.traverse(), expected);
    }

    #[test]
    fn test_clear() {
        let mut tree: RedBlackTree<u32> = (0..10).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        tree.insert(1);
        tree.check_consistency();
    }

    #[test]
    fn test_min_max() {
        let tree: RedBlackTree<u32> = vec![3, 1, 5].into_iter().collect();
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
    }

    #[test]
    fn test_iter_restartable() {
        let tree: RedBlackTree<u32> = vec![1, 5, 3].into_iter().collect();
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }

    quickcheck! {
        fn prop_invariants_hold_after_every_operation(ops: Vec<(bool, u8)>) -> bool {
            let mut tree = RedBlackTree::new();
            let mut expected = Vec::new();
            for (is_insert, key) in ops {
                let key = key % 32;
                if is_insert {
                    tree.insert(key);
                    expected.push(key);
                } else if let Some(index) = expected.iter().position(|k| *k == key) {
                    expected.swap_remove(index);
                    assert_eq!(tree.delete(&key), Some(key));
                } else {
                    assert_eq!(tree.delete(&key), None);
                }
                tree.check_consistency();
            }
            expected.sort();
            tree.traverse() == expected
        }

        fn prop_height_is_logarithmic(keys: Vec<u16>) -> bool {
            let tree: RedBlackTree<u16> = keys.iter().cloned().collect();
            (tree.height() as f64) <= 2.0 * ((keys.len() + 1) as f64).log2()
        }
    }
}
