//! Binary search tree without any rebalancing.
//!
//! The shape of the tree depends entirely on insertion order: strictly increasing keys produce a
//! chain. Every operation is iterative so degenerate trees of any depth are safe to build, search
//! and drop.

mod node;
mod tree;

pub use self::tree::{BinarySearchTree, BinarySearchTreeIter};
