use ordered_forest::SplayTree;

#[test]
fn splay_contains_moves_key_to_root_matrix() {
    let mut tree = SplayTree::new();
    for k in 1..=5 {
        tree.insert(k);
    }
    assert_eq!(tree.root_key(), Some(&5));

    assert!(tree.contains(&1));
    assert_eq!(tree.root_key(), Some(&1));
    tree.assert_valid().unwrap();
}

#[test]
fn splay_missing_key_lands_next_to_root_matrix() {
    let mut tree: SplayTree<i32> = [10, 20, 30, 40, 50].into_iter().collect();
    assert!(!tree.contains(&35));
    let root = *tree.root_key().unwrap();
    assert!(root == 30 || root == 40);
}

#[test]
fn splay_insert_and_remove_touch_the_root_matrix() {
    let mut tree: SplayTree<i32> = (0..50).map(|i| (i * 7) % 50).collect();
    for k in [13, 0, 49, 25] {
        tree.remove(&k);
        tree.insert(k);
        assert_eq!(tree.root_key(), Some(&k));
    }

    // Removing a present key leaves its predecessor on top.
    tree.remove(&25);
    assert_eq!(tree.root_key(), Some(&24));
    tree.assert_valid().unwrap();
}

#[test]
fn splay_sequential_sweep_matrix() {
    const N: i32 = 2_000;
    let mut tree: SplayTree<i32> = (0..N).collect();
    // Sorted inserts leave a chain.
    assert_eq!(tree.height(), N as usize);

    // One access to the deepest key roughly halves the depth.
    assert!(tree.contains(&0));
    assert_eq!(tree.root_key(), Some(&0));
    assert!(tree.height() <= (N as usize) / 2 + 2);

    // Visiting every key in order rebuilds the chain, largest on top.
    for k in 0..N {
        assert!(tree.contains(&k));
        assert_eq!(tree.root_key(), Some(&k));
    }
    tree.assert_valid().unwrap();
    assert_eq!(tree.root_key(), Some(&(N - 1)));
    assert_eq!(tree.height(), N as usize);
}

#[test]
fn splay_dump_of_a_sorted_chain_matrix() {
    let out = std::thread::Builder::new()
        .stack_size(128 * 1024)
        .spawn(|| {
            let tree: SplayTree<u32> = (0..3_000).collect();
            tree.dump()
        })
        .unwrap()
        .join()
        .unwrap();
    assert!(out.starts_with("2999\n├─ 2998\n"));
    assert_eq!(out.lines().count(), 2 * 3_000 - 1);
}

#[test]
fn splay_clear_releases_everything_matrix() {
    let mut tree: SplayTree<i32> = (0..100).collect();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.root_key(), None);
    assert!(tree.find_min().is_err());
}
