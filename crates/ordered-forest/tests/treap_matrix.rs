use forest_random::MinStdRandom;
use ordered_forest::{Treap, TreapTree, Tree};

#[test]
fn treap_heap_and_order_matrix() {
    let mut tree: TreapTree<i32> = Tree::with_balance(Treap::with_seed(11));
    for k in (0..500).rev() {
        tree.insert(k);
        tree.assert_valid().unwrap();
    }
    for k in (0..500).step_by(3) {
        assert!(tree.remove(&k));
        tree.assert_valid().unwrap();
    }
    assert!((0..500).all(|k| tree.contains(&k) == (k % 3 != 0)));
}

#[test]
fn treap_expected_height_matrix() {
    const N: usize = 10_000;
    let mut heights = Vec::new();
    for seed in 0..5 {
        let mut tree: TreapTree<usize> = Tree::with_balance(Treap::with_seed(seed));
        tree.extend(0..N);
        heights.push(tree.height());
    }
    // Expected height ≈ 2.99 * ln(10_000) ≈ 28; a degenerate shape would be 10_000.
    let mean = heights.iter().sum::<usize>() / heights.len();
    assert!(mean < 50, "heights: {heights:?}");
}

#[test]
fn treap_reproducible_with_deterministic_source_matrix() {
    let build = || {
        let mut tree = Tree::with_balance(Treap::with_rng(MinStdRandom::new(2019)));
        tree.extend([8, 3, 10, 1, 6, 14, 4, 7, 13]);
        tree
    };
    let (a, b) = (build(), build());
    assert_eq!(a.dump(), b.dump());
    assert_eq!(a.print(), "1 3 4 6 7 8 10 13 14");
}

#[test]
fn treap_remove_everything_matrix() {
    let mut tree: TreapTree<i32> = Tree::with_balance(Treap::with_seed(5));
    tree.extend(0..300);
    for k in (0..300).map(|i| (i * 113) % 300) {
        assert!(tree.remove(&k));
        assert!(!tree.contains(&k));
    }
    assert!(tree.is_empty());
    tree.assert_valid().unwrap();
}
