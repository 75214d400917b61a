use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use search_trees::red_black_tree::{Color, RedBlackTree};

#[test]
fn test_root_is_black_after_inserts() {
    let mut tree = RedBlackTree::new();
    for key in &[20, 15, 25, 10, 5, 1] {
        tree.insert(*key);
        assert_eq!(tree.root_color(), Color::Black);
    }
    assert_eq!(tree.traverse(), vec![1, 5, 10, 15, 20, 25]);
    assert!(tree.height() <= 4);
}

#[test]
fn test_root_is_black_after_deletes() {
    let mut keys: Vec<u32> = (0..2_000).collect();
    let mut rng = StdRng::seed_from_u64(5);
    keys.shuffle(&mut rng);

    let mut tree: RedBlackTree<u32> = keys.iter().cloned().collect();
    keys.shuffle(&mut rng);
    for (deleted, key) in keys.iter().enumerate() {
        assert_eq!(tree.delete(key), Some(*key));
        assert_eq!(tree.root_color(), Color::Black);

        let remaining = keys.len() - deleted - 1;
        assert_eq!(tree.len(), remaining);
        assert!((tree.height() as f64) <= 2.0 * ((remaining + 1) as f64).log2());
    }
    assert!(tree.is_empty());
}

#[test]
fn test_string_keys() {
    let mut tree = RedBlackTree::new();
    for word in "the quick brown fox jumps over the lazy dog".split(' ') {
        tree.insert(word.to_string());
    }
    assert_eq!(tree.len(), 9);
    assert_eq!(tree.delete(&"the".to_string()), Some("the".to_string()));
    assert_eq!(tree.search(&"the".to_string()).map(String::as_str), Some("the"));
    assert_eq!(
        tree.traverse(),
        vec!["brown", "dog", "fox", "jumps", "lazy", "over", "quick", "the"],
    );
}
