pub type Link<T> = Option<Box<Node<T>>>;

/// A struct representing an internal node of a binary search tree.
pub struct Node<T> {
    pub key: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}
