use std::cmp::Ordering;
use std::fmt::{self, Debug};

use log::debug;

use crate::arena::Arena;
use crate::balance::Balance;
use crate::error::ForestError;
use crate::iter::Iter;
use crate::print::dump;
use crate::red_black::RedBlack;
use crate::splay::Splay;
use crate::treap::Treap;
use crate::types::KeyNode;
use crate::util::{clone_subtree, find, first, height, last, release_subtree};

/// Ordered set of unique keys, rebalanced by the strategy `B`.
///
/// Read operations take `&mut self` because a splay strategy restructures
/// the tree on every access.
pub struct Tree<K: Ord, B: Balance<K>> {
    arena: Arena<B::Node>,
    root: Option<u32>,
    len: usize,
    balance: B,
}

pub type SplayTree<K> = Tree<K, Splay>;
pub type RedBlackTree<K> = Tree<K, RedBlack>;
pub type TreapTree<K, R = forest_random::UniformRandom> = Tree<K, Treap<R>>;

impl<K: Ord, B: Balance<K> + Default> Tree<K, B> {
    pub fn new() -> Self {
        Self::with_balance(B::default())
    }
}

impl<K: Ord, B: Balance<K> + Default> Default for Tree<K, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, B: Balance<K>> Tree<K, B> {
    pub fn with_balance(balance: B) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            len: 0,
            balance,
        }
    }

    /// Adds `key`. Returns `false`, leaving the tree untouched, if an equal
    /// key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let out = self.balance.insert(&mut self.arena, self.root, key);
        self.root = out.root;
        if out.fresh {
            self.len += 1;
        }
        out.fresh
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and hands it back.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let out = self.balance.remove(&mut self.arena, self.root, key);
        self.root = out.root;
        let node = out.node?;
        self.len -= 1;
        Some(node.into_key())
    }

    pub fn contains(&mut self, key: &K) -> bool {
        self.root = self.balance.access(&mut self.arena, self.root, |k| key.cmp(k));
        find(&self.arena, self.root, key).is_some()
    }

    /// Smallest key.
    ///
    /// # Errors
    ///
    /// [`ForestError::Underflow`] if the tree is empty.
    pub fn find_min(&mut self) -> Result<&K, ForestError> {
        self.root = self.balance.access(&mut self.arena, self.root, |_| Ordering::Less);
        let i = first(&self.arena, self.root).ok_or(ForestError::Underflow)?;
        Ok(self.arena[i].key())
    }

    /// Largest key.
    ///
    /// # Errors
    ///
    /// [`ForestError::Underflow`] if the tree is empty.
    pub fn find_max(&mut self) -> Result<&K, ForestError> {
        self.root = self.balance.access(&mut self.arena, self.root, |_| Ordering::Greater);
        let i = last(&self.arena, self.root).ok_or(ForestError::Underflow)?;
        Ok(self.arena[i].key())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Releases every node, children before parents.
    pub fn clear(&mut self) {
        let released = release_subtree(&mut self.arena, self.root.take());
        debug!("cleared tree, released {released} nodes");
        self.arena.clear();
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, K, B::Node> {
        Iter::new(&self.arena, self.root, self.len)
    }

    /// Key at the root, if any.
    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|i| self.arena[i].key())
    }

    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    /// Checks key order, the strategy's own invariants, and the length
    /// bookkeeping.
    pub fn assert_valid(&self) -> Result<(), String> {
        self.balance.validate(&self.arena, self.root)?;
        if self.arena.len() != self.len {
            return Err(format!(
                "Length mismatch: {} live nodes, {} recorded",
                self.arena.len(),
                self.len
            ));
        }
        Ok(())
    }
}

impl<K: Ord + Debug, B: Balance<K>> Tree<K, B> {
    /// Keys in ascending order separated by single spaces, or `Empty tree`.
    pub fn print(&self) -> String {
        if self.is_empty() {
            return "Empty tree".to_string();
        }
        self.iter()
            .map(|k| format!("{k:?}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Indented diagram of the tree structure with per-node annotations.
    pub fn dump(&self) -> String {
        dump::<K, B::Node>(&self.arena, self.root)
    }
}

impl<K, B> Clone for Tree<K, B>
where
    K: Ord,
    B: Balance<K> + Clone,
    B::Node: Clone,
{
    /// Deep copy into a compact arena, keeping shape and metadata.
    fn clone(&self) -> Self {
        let (arena, root) = clone_subtree(&self.arena, self.root);
        Self {
            arena,
            root,
            len: self.len,
            balance: self.balance.clone(),
        }
    }
}

impl<K: Ord + Debug, B: Balance<K>> Debug for Tree<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Ord, B: Balance<K>> Extend<K> for Tree<K, B> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord, B: Balance<K> + Default> FromIterator<K> for Tree<K, B> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K: Ord, B: Balance<K>> IntoIterator for &'a Tree<K, B> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K, B::Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
