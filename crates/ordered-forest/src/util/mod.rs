//! Walks over an arena-backed binary search tree.
//!
//! Nothing in here rebalances. Every walk is iterative because a splay tree
//! may legitimately degenerate into a chain as long as the key set.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::types::{KeyNode, Node};

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena[curr].l() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena[curr].r() {
        curr = r;
    }
    Some(curr)
}

/// Finds the node holding `key`.
pub fn find<K, N>(arena: &Arena<N>, root: Option<u32>, key: &K) -> Option<u32>
where
    K: Ord,
    N: KeyNode<K>,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(arena[i].key()) {
            Ordering::Less => arena[i].l(),
            Ordering::Greater => arena[i].r(),
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    let mut stack: Vec<u32> = root.into_iter().collect();
    let mut count = 0;
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(arena[i].l());
        stack.extend(arena[i].r());
    }
    count
}

/// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
pub fn height<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    let mut stack: Vec<(u32, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    let mut max = 0;
    while let Some((i, depth)) = stack.pop() {
        max = max.max(depth);
        if let Some(l) = arena[i].l() {
            stack.push((l, depth + 1));
        }
        if let Some(r) = arena[i].r() {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Releases every node under `root`, children before parents.
/// Returns the number of released nodes.
pub fn release_subtree<N: Node>(arena: &mut Arena<N>, root: Option<u32>) -> usize {
    let Some(root) = root else {
        return 0;
    };
    let mut released = 0;
    let mut stack = vec![(root, false)];
    while let Some((i, expanded)) = stack.pop() {
        if expanded {
            arena.release(i);
            released += 1;
            continue;
        }
        stack.push((i, true));
        if let Some(r) = arena[i].r() {
            stack.push((r, false));
        }
        if let Some(l) = arena[i].l() {
            stack.push((l, false));
        }
    }
    released
}

/// Copies the tree under `root` into a fresh, compact arena, keeping its
/// shape and per-node metadata. Returns the new arena and root.
pub fn clone_subtree<N>(arena: &Arena<N>, root: Option<u32>) -> (Arena<N>, Option<u32>)
where
    N: Node + Clone,
{
    let mut out = Arena::with_capacity(size(arena, root));
    let Some(root) = root else {
        return (out, None);
    };

    // (source node, parent in `out`, attach as left child)
    let mut stack: Vec<(u32, Option<u32>, bool)> = vec![(root, None, false)];
    let mut new_root = None;
    while let Some((src, parent, is_left)) = stack.pop() {
        let mut copy = arena[src].clone();
        copy.set_l(None);
        copy.set_r(None);
        copy.set_p(parent);
        let idx = out.alloc(copy);
        match parent {
            None => new_root = Some(idx),
            Some(p) if is_left => out[p].set_l(Some(idx)),
            Some(p) => out[p].set_r(Some(idx)),
        }
        if let Some(r) = arena[src].r() {
            stack.push((r, Some(idx), false));
        }
        if let Some(l) = arena[src].l() {
            stack.push((l, Some(idx), true));
        }
    }
    (out, new_root)
}

/// Checks that an in-order walk yields strictly ascending keys.
pub fn assert_bst<K, N>(arena: &Arena<N>, root: Option<u32>) -> Result<(), String>
where
    K: Ord,
    N: KeyNode<K>,
{
    let mut stack = Vec::new();
    let mut curr = root;
    let mut prev: Option<u32> = None;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = arena[i].l();
        }
        let Some(i) = stack.pop() else {
            return Ok(());
        };
        if let Some(prev) = prev {
            if arena[prev].key() >= arena[i].key() {
                return Err("Node order violated".to_string());
            }
        }
        prev = Some(i);
        curr = arena[i].r();
    }
}
