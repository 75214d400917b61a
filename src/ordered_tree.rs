/// The operations shared by every search tree in this crate.
///
/// Keys that compare `Equal` are all kept: an inserted duplicate is routed to the right of the
/// keys it is equal to. `search` and `delete` act on the first equal key met on the way down
/// from the root.
///
/// # Examples
///
/// ```
/// use search_trees::{AvlTree, BinarySearchTree, OrderedTree, RedBlackTree};
///
/// fn fill<O: OrderedTree<u32>>(keys: &[u32]) -> O {
///     let mut tree = O::new();
///     for key in keys {
///         tree.insert(*key);
///     }
///     tree
/// }
///
/// let keys = [5, 3, 8, 3];
/// assert_eq!(fill::<BinarySearchTree<u32>>(&keys).traverse(), vec![3, 3, 5, 8]);
/// assert_eq!(fill::<AvlTree<u32>>(&keys).traverse(), vec![3, 3, 5, 8]);
/// assert_eq!(fill::<RedBlackTree<u32>>(&keys).traverse(), vec![3, 3, 5, 8]);
/// ```
pub trait OrderedTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty tree.
    fn new() -> Self;

    /// Inserts a key. Duplicates are accepted.
    fn insert(&mut self, key: T);

    /// Returns a reference to a stored key equal to `key`, or `None` if there is none.
    fn search(&self, key: &T) -> Option<&T>;

    /// Removes one key equal to `key` and returns it. Returns `None`, leaving the tree
    /// untouched, if no such key exists.
    fn delete(&mut self, key: &T) -> Option<T>;

    /// Returns every key in ascending order.
    fn traverse(&self) -> Vec<T>
    where
        T: Clone;

    /// Returns the number of keys, counting duplicates.
    fn len(&self) -> usize;

    /// Returns the number of nodes on the longest path from the root to a leaf.
    fn height(&self) -> usize;

    /// A short human readable label for the tree type.
    fn name() -> &'static str;

    /// Returns `true` if a key equal to `key` is stored.
    fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }

    /// Returns `true` if the tree holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
