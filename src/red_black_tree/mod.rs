//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Nodes live in a `TypedArena` and refer to their parent and children by handle, which keeps the
//! parent back-links that the fixup loops walk free of ownership cycles. An absent link plays the
//! role of the black NIL sentinel.

mod node;
mod tree;

pub use self::node::Color;
pub use self::tree::{RedBlackTree, RedBlackTreeIter};
