//! Treap: a binary search tree on keys that is also a min-heap on random
//! per-node priorities. Expected height is O(log n) with no balance
//! bookkeeping beyond the priority itself.

use std::cmp::Ordering;

use forest_random::{RandomInt, UniformRandom};
use log::{debug, trace};

use crate::arena::Arena;
use crate::balance::{Balance, Inserted, Removed};
use crate::rotation::{rotate_with_left_child, rotate_with_right_child};
use crate::types::{KeyNode, Node};
use crate::util::assert_bst;

#[derive(Clone, Debug)]
pub struct TreapNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub priority: u32,
}

impl<K> TreapNode<K> {
    pub fn new(k: K, priority: u32) -> Self {
        Self {
            l: None,
            r: None,
            k,
            priority,
        }
    }
}

impl<K> Node for TreapNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for TreapNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn into_key(self) -> K {
        self.k
    }

    fn label(&self) -> Option<String> {
        Some(format!("p={}", self.priority))
    }
}

/// Priority-heap rebalancing. Owns the random source that hands out node
/// priorities.
#[derive(Clone, Debug)]
pub struct Treap<R = UniformRandom> {
    rng: R,
}

impl Treap<UniformRandom> {
    /// Treap seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(UniformRandom::new(None))
    }

    /// Treap whose shape is reproducible for a given insertion sequence.
    pub fn with_seed(seed: u64) -> Self {
        debug!("seeding treap priorities with {seed}");
        Self::with_rng(UniformRandom::with_seed(seed))
    }
}

impl Default for Treap<UniformRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomInt> Treap<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn insert_at<K: Ord>(
        &mut self,
        arena: &mut Arena<TreapNode<K>>,
        node: Option<u32>,
        key: K,
    ) -> (u32, bool) {
        let Some(t) = node else {
            let priority = self.rng.next_int();
            return (arena.alloc(TreapNode::new(key, priority)), true);
        };

        match key.cmp(&arena[t].k) {
            Ordering::Less => {
                let left = arena[t].l;
                let (l, fresh) = self.insert_at(arena, left, key);
                arena[t].l = Some(l);
                if arena[l].priority < arena[t].priority {
                    return (rotate_with_left_child(arena, t), fresh);
                }
                (t, fresh)
            }
            Ordering::Greater => {
                let right = arena[t].r;
                let (r, fresh) = self.insert_at(arena, right, key);
                arena[t].r = Some(r);
                if arena[r].priority < arena[t].priority {
                    return (rotate_with_right_child(arena, t), fresh);
                }
                (t, fresh)
            }
            Ordering::Equal => (t, false),
        }
    }
}

/// Unlinks `key` from the subtree at `node`. Returns the new subtree root
/// and the detached slot.
fn remove_at<K: Ord>(
    arena: &mut Arena<TreapNode<K>>,
    node: Option<u32>,
    key: &K,
) -> (Option<u32>, Option<u32>) {
    let Some(t) = node else {
        return (None, None);
    };

    match key.cmp(&arena[t].k) {
        Ordering::Less => {
            let left = arena[t].l;
            let (l, gone) = remove_at(arena, left, key);
            arena[t].l = l;
            (Some(t), gone)
        }
        Ordering::Greater => {
            let right = arena[t].r;
            let (r, gone) = remove_at(arena, right, key);
            arena[t].r = r;
            (Some(t), gone)
        }
        Ordering::Equal => {
            let promote_left = match (arena[t].l, arena[t].r) {
                (None, None) => return (None, Some(t)),
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (Some(l), Some(r)) => arena[l].priority <= arena[r].priority,
            };
            // Sink `t` one level below its lower-priority child and keep going.
            if promote_left {
                trace!("treap remove: rotating target below its left child");
                let top = rotate_with_left_child(arena, t);
                let below = arena[top].r;
                let (r, gone) = remove_at(arena, below, key);
                arena[top].r = r;
                (Some(top), gone)
            } else {
                trace!("treap remove: rotating target below its right child");
                let top = rotate_with_right_child(arena, t);
                let below = arena[top].l;
                let (l, gone) = remove_at(arena, below, key);
                arena[top].l = l;
                (Some(top), gone)
            }
        }
    }
}

impl<K: Ord, R: RandomInt> Balance<K> for Treap<R> {
    type Node = TreapNode<K>;

    fn insert(&mut self, arena: &mut Arena<TreapNode<K>>, root: Option<u32>, key: K) -> Inserted {
        let (root, fresh) = self.insert_at(arena, root, key);
        Inserted {
            root: Some(root),
            fresh,
        }
    }

    fn remove(
        &mut self,
        arena: &mut Arena<TreapNode<K>>,
        root: Option<u32>,
        key: &K,
    ) -> Removed<TreapNode<K>> {
        let (root, gone) = remove_at(arena, root, key);
        Removed {
            root,
            node: gone.map(|i| arena.release(i)),
        }
    }

    fn validate(&self, arena: &Arena<TreapNode<K>>, root: Option<u32>) -> Result<(), String> {
        assert_treap(arena, root)?;
        assert_bst(arena, root)
    }
}

/// Checks the heap property: no child has a lower priority than its parent.
pub fn assert_treap<K>(arena: &Arena<TreapNode<K>>, root: Option<u32>) -> Result<(), String> {
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        for child in [arena[i].l, arena[i].r].into_iter().flatten() {
            if arena[child].priority < arena[i].priority {
                return Err("Child priority below parent".to_string());
            }
            stack.push(child);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::height;
    use forest_random::MinStdRandom;

    /// Hands out a fixed list of priorities, for pinning shapes.
    struct Scripted(std::vec::IntoIter<u32>);

    impl RandomInt for Scripted {
        fn next_int(&mut self) -> u32 {
            self.0.next().expect("script ran out of priorities")
        }
    }

    fn scripted(priorities: &[u32]) -> Treap<Scripted> {
        Treap::with_rng(Scripted(priorities.to_vec().into_iter()))
    }

    #[test]
    fn lower_priority_child_rotates_up() {
        let mut treap = scripted(&[50, 10]);
        let mut arena = Arena::new();
        let root = treap.insert(&mut arena, None, 5).root;
        let root = treap.insert(&mut arena, root, 3).root.unwrap();
        assert_eq!(arena[root].k, 3);
        assert_eq!(arena[root].r.map(|i| arena[i].k), Some(5));
        assert_treap(&arena, Some(root)).unwrap();
    }

    #[test]
    fn higher_priority_child_stays_below() {
        let mut treap = scripted(&[10, 50]);
        let mut arena = Arena::new();
        let root = treap.insert(&mut arena, None, 5).root;
        let root = treap.insert(&mut arena, root, 3).root.unwrap();
        assert_eq!(arena[root].k, 5);
    }

    #[test]
    fn duplicate_does_not_draw_a_priority() {
        let mut treap = scripted(&[10]);
        let mut arena = Arena::new();
        let root = treap.insert(&mut arena, None, 5).root;
        let out = treap.insert(&mut arena, root, 5);
        assert!(!out.fresh);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn remove_sinks_target_to_a_leaf() {
        // 4 on top, 2 and 6 below, 1/3/5/7 as leaves.
        let mut treap = scripted(&[1, 10, 20, 30, 40, 50, 60]);
        let mut arena = Arena::new();
        let mut root = None;
        for k in [4, 2, 6, 1, 3, 5, 7] {
            root = treap.insert(&mut arena, root, k).root;
        }
        assert_eq!(arena[root.unwrap()].k, 4);

        let out = treap.remove(&mut arena, root, &4);
        assert_eq!(out.node.map(|n| n.k), Some(4));
        // 2 (priority 10) beats 6 (priority 20) to the top.
        assert_eq!(arena[out.root.unwrap()].k, 2);
        treap.validate(&arena, out.root).unwrap();
        assert_eq!(arena.len(), 6);
    }

    #[test]
    fn remove_missing_key_leaves_tree_alone() {
        let mut treap = Treap::with_rng(MinStdRandom::new(7));
        let mut arena = Arena::new();
        let mut root = None;
        for k in 0..20 {
            root = treap.insert(&mut arena, root, k).root;
        }
        let out = treap.remove(&mut arena, root, &100);
        assert!(out.node.is_none());
        assert_eq!(out.root, root);
        assert_eq!(arena.len(), 20);
    }

    #[test]
    fn sorted_input_still_has_logarithmic_height() {
        let mut treap = Treap::with_seed(2024);
        let mut arena = Arena::new();
        let mut root = None;
        for k in 0..4096 {
            root = treap.insert(&mut arena, root, k).root;
        }
        treap.validate(&arena, root).unwrap();
        // Expected height is about 2.99 * ln(n) ≈ 25 for n = 4096.
        assert!(height(&arena, root) < 60);
    }
}
