//! Single rotations shared by every balance strategy.
//!
//! Both primitives return the new subtree root; the caller rebinds it in the
//! old root's slot (parent child pointer or tree root). Parent links are
//! rewritten for node types that keep them and ignored otherwise.

use crate::arena::Arena;
use crate::types::Node;

/// Promotes the left child of `k2`.
///
/// ```text
///     k2          k1
///    /  \        /  \
///   k1   c  →   a   k2
///  /  \            /  \
/// a    b          b    c
/// ```
pub fn rotate_with_left_child<N: Node>(arena: &mut Arena<N>, k2: u32) -> u32 {
    let k1 = arena[k2]
        .l()
        .expect("right rotation needs a left child");
    let b = arena[k1].r();
    let p = arena[k2].p();

    arena[k2].set_l(b);
    if let Some(b) = b {
        arena[b].set_p(Some(k2));
    }
    arena[k1].set_r(Some(k2));
    arena[k2].set_p(Some(k1));
    arena[k1].set_p(p);
    k1
}

/// Promotes the right child of `k1`. Mirror image of
/// [`rotate_with_left_child`].
pub fn rotate_with_right_child<N: Node>(arena: &mut Arena<N>, k1: u32) -> u32 {
    let k2 = arena[k1]
        .r()
        .expect("left rotation needs a right child");
    let b = arena[k2].l();
    let p = arena[k1].p();

    arena[k1].set_r(b);
    if let Some(b) = b {
        arena[b].set_p(Some(k1));
    }
    arena[k2].set_l(Some(k1));
    arena[k1].set_p(Some(k2));
    arena[k2].set_p(p);
    k2
}
