//! The seam between the ordered-set core and a rebalancing scheme.

use std::cmp::Ordering;

use crate::arena::Arena;
use crate::types::KeyNode;
use crate::util::assert_bst;

/// Outcome of [`Balance::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inserted {
    pub root: Option<u32>,
    /// `false` when the key was already present and nothing changed.
    pub fresh: bool,
}

/// Outcome of [`Balance::remove`].
#[derive(Debug)]
pub struct Removed<N> {
    pub root: Option<u32>,
    /// The detached node, if the key was present.
    pub node: Option<N>,
}

/// A rebalancing scheme for an arena-backed binary search tree.
///
/// The core owns the arena and the root index; a strategy receives both,
/// rewires nodes through the rotation primitives, and hands back the new
/// root. Strategies that keep per-node metadata (colour, priority) decide it
/// when they create the node inside [`insert`](Balance::insert).
pub trait Balance<K: Ord> {
    type Node: KeyNode<K>;

    /// Inserts `key` unless an equal key is present.
    fn insert(&mut self, arena: &mut Arena<Self::Node>, root: Option<u32>, key: K) -> Inserted;

    /// Detaches the node holding `key`, if any, and returns it.
    fn remove(
        &mut self,
        arena: &mut Arena<Self::Node>,
        root: Option<u32>,
        key: &K,
    ) -> Removed<Self::Node>;

    /// Hook run before a read. `probe` orders the wanted key against a node
    /// key (`Less` means "go left"); a probe that never returns `Equal`
    /// targets the minimum or maximum. Returns the possibly new root.
    fn access<F>(&mut self, arena: &mut Arena<Self::Node>, root: Option<u32>, probe: F) -> Option<u32>
    where
        F: Fn(&K) -> Ordering,
    {
        let _ = (arena, probe);
        root
    }

    /// Checks every invariant this strategy promises.
    fn validate(&self, arena: &Arena<Self::Node>, root: Option<u32>) -> Result<(), String> {
        assert_bst(arena, root)
    }
}
