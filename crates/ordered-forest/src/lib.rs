//! Self-balancing ordered sets over a shared arena core.
//!
//! One [`Tree`] type implements the set operations; a [`Balance`] strategy
//! decides how the tree is reshaped:
//!
//! - [`Splay`] moves every accessed key to the root (top-down splay).
//! - [`RedBlack`] keeps colour bits and parent links.
//! - [`Treap`] keeps a min-heap over random node priorities.
//!
//! Nodes live in an [`Arena`](arena::Arena) and refer to each other by
//! `Option<u32>` slot index. [`Forest`] wraps the three concrete trees for
//! callers that pick the strategy at runtime.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`arena`] | slot arena with a free list |
//! | [`types`] | [`Node`] / [`KeyNode`] traits |
//! | [`rotation`] | single left/right rotations |
//! | [`balance`] | the [`Balance`] strategy trait |
//! | [`splay`], [`red_black`], [`treap`] | the three strategies |
//! | [`tree`] | the ordered-set core |
//! | [`forest`] | runtime strategy selection and config |
//! | [`util`], [`print`], [`iter`] | walks, diagrams, in-order iterator |
//!
//! ```
//! use ordered_forest::RedBlackTree;
//!
//! let mut tree: RedBlackTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! assert_eq!(tree.print(), "1 3 4 5 7 8 9");
//! assert_eq!(tree.find_min(), Ok(&1));
//! tree.assert_valid().unwrap();
//! ```

pub mod arena;
pub mod balance;
pub mod error;
pub mod forest;
pub mod iter;
pub mod print;
pub mod red_black;
pub mod rotation;
pub mod splay;
pub mod tree;
pub mod treap;
pub mod types;
pub mod util;

pub use balance::{Balance, Inserted, Removed};
pub use error::ForestError;
pub use forest::{Forest, ForestConfig, StrategyKind};
pub use iter::Iter;
pub use red_black::RedBlack;
pub use splay::Splay;
pub use tree::{RedBlackTree, SplayTree, TreapTree, Tree};
pub use treap::Treap;
pub use types::{KeyNode, Node};
