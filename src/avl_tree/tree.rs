use crate::avl_tree::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Recomputes the height of the root of `tree` and applies the LL, LR, RR or RL rotation if its
// balance factor left [-1, 1].
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>)
where
    T: Ord,
{
    match tree {
        Some(node) => {
            if new_node.key < node.key {
                insert(&mut node.left, new_node);
            } else {
                insert(&mut node.right, new_node);
            }
        },
        None => {
            *tree = Some(Box::new(new_node));
            return;
        },
    }

    balance(tree);
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let unboxed_node = *node;
                let Node {
                    key: removed,
                    left,
                    right,
                    ..
                } = unboxed_node;
                *tree = match (left, right) {
                    (None, right) => right,
                    (left, None) => left,
                    (left, right) => combine_subtrees(left, right),
                };
                Some(removed)
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn get<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    let mut curr = tree.as_ref();
    while let Some(node) = curr {
        match key.cmp(&node.key) {
            Ordering::Less => curr = node.left.as_ref(),
            Ordering::Greater => curr = node.right.as_ref(),
            Ordering::Equal => return Some(&node.key),
        }
    }
    None
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

// Returns the number of nodes in `tree` after asserting heights, balance factors and ordering.
// Rotations can move an equal key to either side of a node, so both bounds are inclusive.
#[cfg(any(test, feature = "consistency_check"))]
pub fn check_consistency<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> usize
where
    T: Ord,
{
    match tree {
        None => 0,
        Some(node) => {
            if let Some(lower) = lower {
                assert!(*lower <= node.key);
            }
            if let Some(upper) = upper {
                assert!(node.key <= *upper);
            }
            let left_count = check_consistency(&node.left, lower, Some(&node.key));
            let right_count = check_consistency(&node.right, Some(&node.key), upper);

            let (left_height, right_height) = (height(&node.left), height(&node.right));
            assert_eq!(node.height, left_height.max(right_height) + 1);
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            left_count + right_count + 1
        },
    }
}
