//! Unbalanced, AVL and red black binary search trees behind a common interface, plus a driver
//! that times them against each other.
//!
//! All three trees store keys only, keep duplicates (an equal key is inserted to the right) and
//! implement [`OrderedTree`]:
//!
//! ```
//! use search_trees::{OrderedTree, RedBlackTree};
//!
//! let mut tree = RedBlackTree::new();
//! for key in &[7, 3, 18, 10, 22, 8, 11, 26] {
//!     tree.insert(*key);
//! }
//! tree.delete(&18);
//! assert_eq!(tree.search(&18), None);
//! assert_eq!(tree.traverse(), vec![3, 7, 8, 10, 11, 22, 26]);
//! ```

pub mod arena;
pub mod avl_tree;
pub mod benchmark;
pub mod bst;
mod ordered_tree;
pub mod red_black_tree;

pub use self::avl_tree::AvlTree;
pub use self::bst::BinarySearchTree;
pub use self::ordered_tree::OrderedTree;
pub use self::red_black_tree::RedBlackTree;
