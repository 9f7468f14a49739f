use avl::Tree;

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    let mut values = Vec::with_capacity(tree.len());
    tree.traverse_in_order(|x| values.push(*x));
    values
}

/// Every node's children differ in height by at most one, checked through the public `Node`
/// accessors rather than `check_invariants`.
fn is_balanced(tree: &Tree<i8>) -> bool {
    let mut stack: Vec<_> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        if node.balance_factor().abs() > 1 {
            return false;
        }
        stack.extend(node.left());
        stack.extend(node.right());
    }
    true
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present = xs;

    for delete in &deletes {
        // Each remove takes out exactly one copy.
        let expected = still_present
            .iter()
            .position(|x| x == delete)
            .map(|pos| still_present.swap_remove(pos));
        if tree.remove(delete) != expected {
            return false;
        }
    }

    still_present.sort_unstable();
    tree.check_invariants().is_ok() && in_order(&tree) == still_present
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    in_order(&tree) == sorted && tree.iter().copied().eq(sorted.iter().copied())
}

#[quickcheck]
fn stays_balanced(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut balanced = is_balanced(&tree);
    for delete in &deletes {
        tree.remove(delete);
        balanced &= is_balanced(&tree);
    }

    balanced
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    match tree.height() {
        None => xs.is_empty(),
        Some(height) => {
            let bound = 1.44 * ((xs.len() + 2) as f64).log2() - 1.0;
            height as f64 <= bound
        }
    }
}

#[quickcheck]
fn insert_then_remove_round_trips(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = build(&xs);
    let before = in_order(&tree);

    tree.insert(x);
    let removed = tree.remove(&x);

    removed == Some(x)
        && in_order(&tree) == before
        && tree.len() == xs.len()
        && tree.check_invariants().is_ok()
}

#[quickcheck]
fn removing_absent_value_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().filter(|y| *y != x).collect();
    let before = in_order(&tree);
    let height = tree.height();

    tree.remove(&x).is_none() && in_order(&tree) == before && tree.height() == height
}

#[quickcheck]
fn pre_and_post_order_visit_everything(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    let mut pre = Vec::new();
    tree.traverse_pre_order(|x| pre.push(*x));
    let mut post = Vec::new();
    tree.traverse_post_order(|x| post.push(*x));

    // The root comes first in one and last in the other.
    let root = tree.root().map(|n| *n.value());
    pre.first().copied() == root && post.last().copied() == root && {
        pre.sort_unstable();
        post.sort_unstable();
        pre == sorted && post == sorted
    }
}
