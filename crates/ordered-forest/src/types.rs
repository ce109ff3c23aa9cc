//! Node trait definitions.
//!
//! Every tree variant stores its nodes in an [`Arena`](crate::arena::Arena)
//! and links them with `Option<u32>` slot indices. Only the red-black node
//! keeps a parent link; the other variants use the default no-op parent
//! accessors, so rotation code can stay generic over all three.

/// Child/parent links of a tree node.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);

    fn p(&self) -> Option<u32> {
        None
    }

    fn set_p(&mut self, _v: Option<u32>) {}
}

/// A node that carries one ordered key.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
    fn into_key(self) -> K;

    /// Variant-specific annotation shown by [`Tree::dump`](crate::Tree::dump).
    fn label(&self) -> Option<String> {
        None
    }
}
