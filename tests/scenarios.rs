use std::sync::Once;

use avl::Tree;
use rstest::{fixture, rstest};
use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

/// Sends the tree's `tracing` output to the test harness. Set `RUST_LOG=avl=trace` to see every
/// rotation.
fn init_test_logging() {
    TEST_SETUP.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init()
            .unwrap_or_else(|e| eprintln!("Error: Failed to set up logging: {e}"));
    });
}

fn in_order(tree: &Tree<i32>) -> Vec<i32> {
    let mut values = Vec::new();
    tree.traverse_in_order(|v| values.push(*v));
    values
}

#[fixture]
fn small_tree() -> Tree<i32> {
    init_test_logging();
    [3, 1, 4, 0, 2, 5].into_iter().collect()
}

#[test]
fn ascending_inserts_are_rebalanced() {
    init_test_logging();
    let mut tree = Tree::new();
    for x in 0..15 {
        tree.insert(x);
    }

    assert_eq!(tree.height(), Some(3));
    assert_eq!(in_order(&tree), (0..15).collect::<Vec<_>>());
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn three_ascending_inserts_rotate_left() {
    init_test_logging();
    let mut tree = Tree::new();
    tree.insert(15);
    tree.insert(16);
    tree.insert(18);

    let root = tree.root().unwrap();
    assert_eq!(root.value(), &16);

    let left = root.left().unwrap();
    let right = root.right().unwrap();
    assert_eq!(left.value(), &15);
    assert_eq!(right.value(), &18);
    assert!(left.is_leaf());
    assert!(right.is_leaf());
}

#[rstest]
#[case(5, true)]
#[case(0, true)]
#[case(3, true)]
#[case(9, false)]
#[case(-1, false)]
fn contains(small_tree: Tree<i32>, #[case] value: i32, #[case] expected: bool) {
    assert_eq!(small_tree.contains(&value), expected);
}

#[rstest]
#[case(3, vec![0, 1, 2, 4, 5])]
#[case(0, vec![1, 2, 3, 4, 5])]
#[case(5, vec![0, 1, 2, 3, 4])]
#[case(1, vec![0, 2, 3, 4, 5])]
#[case(9, vec![0, 1, 2, 3, 4, 5])]
fn remove(mut small_tree: Tree<i32>, #[case] value: i32, #[case] expected: Vec<i32>) {
    small_tree.remove(&value);

    assert_eq!(in_order(&small_tree), expected);
    assert_eq!(small_tree.len(), expected.len());
    assert_eq!(small_tree.check_invariants(), Ok(()));
}

#[rstest]
#[case(0)]
#[case(42)]
#[case(i32::MIN)]
fn remove_from_empty_tree(#[case] value: i32) {
    init_test_logging();
    let mut tree = Tree::new();

    assert_eq!(tree.remove(&value), None);
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), None);
}

#[test]
fn empty_tree_contains_nothing() {
    let tree = Tree::<i32>::new();

    assert!(!tree.contains(&0));
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree.to_string(), "Empty Tree");
}

#[test]
fn drain_in_every_order_stays_balanced() {
    init_test_logging();
    for removal_order in [
        (0..64).collect::<Vec<_>>(),
        (0..64).rev().collect(),
        (0..64).map(|x| (x * 37) % 64).collect(),
    ] {
        let mut tree: Tree<_> = (0..64).collect();
        for x in removal_order {
            assert_eq!(tree.remove(&x), Some(x));
            assert!(!tree.contains(&x));
            assert_eq!(tree.check_invariants(), Ok(()));
        }
        assert!(tree.is_empty());
    }
}
