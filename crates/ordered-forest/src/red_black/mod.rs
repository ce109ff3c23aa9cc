//! Red-black tree: colour bits plus parent links, rebalanced by recolouring
//! and at most two rotations on insert, three on remove.

pub mod types;
pub mod util;

use crate::arena::Arena;
use crate::balance::{Balance, Inserted, Removed};

pub use types::{Color, RbNode};

#[derive(Clone, Copy, Debug, Default)]
pub struct RedBlack;

impl<K: Ord> Balance<K> for RedBlack {
    type Node = RbNode<K>;

    fn insert(&mut self, arena: &mut Arena<RbNode<K>>, root: Option<u32>, key: K) -> Inserted {
        util::insert(arena, root, key)
    }

    fn remove(&mut self, arena: &mut Arena<RbNode<K>>, root: Option<u32>, key: &K) -> Removed<RbNode<K>> {
        util::remove(arena, root, key)
    }

    fn validate(&self, arena: &Arena<RbNode<K>>, root: Option<u32>) -> Result<(), String> {
        util::assert_red_black_tree(arena, root)
    }
}
