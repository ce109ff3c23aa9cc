//! Top-down splay tree.
//!
//! Every access walks from the root toward the wanted key while peeling the
//! nodes it passes onto two side trees: nodes known to be smaller hang off
//! `left_max`, larger ones off `right_min`. When the walk stops, the last
//! node visited becomes the root and the side trees become its children.
//! Amortised O(log n) per operation.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::balance::{Balance, Inserted, Removed};
use crate::rotation::{rotate_with_left_child, rotate_with_right_child};
use crate::types::{KeyNode, Node};

#[derive(Clone, Debug)]
pub struct SplayNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
}

impl<K> SplayNode<K> {
    pub fn new(k: K) -> Self {
        Self { l: None, r: None, k }
    }
}

impl<K> Node for SplayNode<K> {
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

impl<K> KeyNode<K> for SplayNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn into_key(self) -> K {
        self.k
    }
}

/// Splays the subtree rooted at `root` around the target described by
/// `probe` and returns the new subtree root.
///
/// The new root is the target if present, otherwise the last node on the
/// search path (the target's would-be neighbour).
pub fn splay_by<K, F>(arena: &mut Arena<SplayNode<K>>, root: u32, probe: F) -> u32
where
    F: Fn(&K) -> Ordering,
{
    // Roots of the two side trees (the header's children) and their
    // attachment points.
    let mut left_root: Option<u32> = None;
    let mut right_root: Option<u32> = None;
    let mut left_max: Option<u32> = None;
    let mut right_min: Option<u32> = None;

    let mut t = root;
    loop {
        match probe(&arena[t].k) {
            Ordering::Less => {
                let Some(mut l) = arena[t].l else {
                    break;
                };
                if probe(&arena[l].k) == Ordering::Less {
                    // zig-zig
                    t = rotate_with_left_child(arena, t);
                    match arena[t].l {
                        Some(next) => l = next,
                        None => break,
                    }
                }
                // Link right: t and its right subtree are all larger.
                match right_min {
                    Some(rm) => arena[rm].l = Some(t),
                    None => right_root = Some(t),
                }
                right_min = Some(t);
                t = l;
            }
            Ordering::Greater => {
                let Some(mut r) = arena[t].r else {
                    break;
                };
                if probe(&arena[r].k) == Ordering::Greater {
                    t = rotate_with_right_child(arena, t);
                    match arena[t].r {
                        Some(next) => r = next,
                        None => break,
                    }
                }
                match left_max {
                    Some(lm) => arena[lm].r = Some(t),
                    None => left_root = Some(t),
                }
                left_max = Some(t);
                t = r;
            }
            Ordering::Equal => break,
        }
    }

    // Reassemble.
    let (tl, tr) = (arena[t].l, arena[t].r);
    match left_max {
        Some(lm) => arena[lm].r = tl,
        None => left_root = tl,
    }
    match right_min {
        Some(rm) => arena[rm].l = tr,
        None => right_root = tr,
    }
    arena[t].l = left_root;
    arena[t].r = right_root;
    t
}

/// Move-to-root rebalancing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Splay;

impl<K: Ord> Balance<K> for Splay {
    type Node = SplayNode<K>;

    fn insert(&mut self, arena: &mut Arena<SplayNode<K>>, root: Option<u32>, key: K) -> Inserted {
        let Some(root) = root else {
            let n = arena.alloc(SplayNode::new(key));
            return Inserted {
                root: Some(n),
                fresh: true,
            };
        };

        let t = splay_by(arena, root, |k| key.cmp(k));
        let (l, r) = match key.cmp(&arena[t].k) {
            Ordering::Less => {
                let l = arena[t].l.take();
                (l, Some(t))
            }
            Ordering::Greater => {
                let r = arena[t].r.take();
                (Some(t), r)
            }
            Ordering::Equal => {
                return Inserted {
                    root: Some(t),
                    fresh: false,
                }
            }
        };
        let n = arena.alloc(SplayNode { l, r, k: key });
        Inserted {
            root: Some(n),
            fresh: true,
        }
    }

    fn remove(
        &mut self,
        arena: &mut Arena<SplayNode<K>>,
        root: Option<u32>,
        key: &K,
    ) -> Removed<SplayNode<K>> {
        let Some(root) = root else {
            return Removed {
                root: None,
                node: None,
            };
        };

        let t = splay_by(arena, root, |k| key.cmp(k));
        if arena[t].k != *key {
            return Removed {
                root: Some(t),
                node: None,
            };
        }

        let new_root = match arena[t].l {
            None => arena[t].r,
            Some(l) => {
                // Bring the predecessor up; it has no right child afterwards.
                let m = splay_by(arena, l, |_| Ordering::Greater);
                arena[m].r = arena[t].r;
                Some(m)
            }
        };
        let node = arena.release(t);
        Removed {
            root: new_root,
            node: Some(node),
        }
    }

    fn access<F>(&mut self, arena: &mut Arena<SplayNode<K>>, root: Option<u32>, probe: F) -> Option<u32>
    where
        F: Fn(&K) -> Ordering,
    {
        root.map(|r| splay_by(arena, r, probe))
    }
}
