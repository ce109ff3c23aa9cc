use std::fmt::Debug;

use crate::arena::Arena;
use crate::types::KeyNode;

fn label<K, N>(arena: &Arena<N>, node: Option<u32>) -> String
where
    K: Debug,
    N: KeyNode<K>,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i];
    match n.label() {
        Some(label) => format!("{:?} [{label}]", n.key()),
        None => format!("{:?}", n.key()),
    }
}

/// Pending child line: the node, the indent of its branch, and whether it is
/// the last (right) child of its parent.
struct Frame {
    node: Option<u32>,
    tab: String,
    is_last: bool,
}

fn push_children<N: KeyNode<K>, K>(stack: &mut Vec<Frame>, arena: &Arena<N>, node: Option<u32>, tab: String) {
    let Some(i) = node else {
        return;
    };
    let (l, r) = (arena[i].l(), arena[i].r());
    if l.is_none() && r.is_none() {
        return;
    }
    stack.push(Frame {
        node: r,
        tab: tab.clone(),
        is_last: true,
    });
    stack.push(Frame {
        node: l,
        tab,
        is_last: false,
    });
}

/// Structural diagram of the tree under `root`, left child first.
/// An absent child next to a present one is drawn as `∅`.
///
/// The walk keeps its own stack, so a degenerate (chain-shaped) tree of any
/// length can be rendered.
pub fn dump<K, N>(arena: &Arena<N>, root: Option<u32>) -> String
where
    K: Debug,
    N: KeyNode<K>,
{
    let mut out = label::<K, N>(arena, root);
    let mut stack = Vec::new();
    push_children::<N, K>(&mut stack, arena, root, String::new());

    while let Some(Frame { node, tab, is_last }) = stack.pop() {
        out.push('\n');
        out.push_str(&tab);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(&label::<K, N>(arena, node));
        let child_tab = format!("{tab}{}", if is_last { "   " } else { "│  " });
        push_children::<N, K>(&mut stack, arena, node, child_tab);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splay::SplayNode;

    fn chain(n: u32) -> (Arena<SplayNode<u32>>, Option<u32>) {
        // Each key hangs as the left child of the next one up.
        let mut arena = Arena::new();
        let mut root = None;
        for k in 0..n {
            let idx = arena.alloc(SplayNode::new(k));
            arena[idx].l = root;
            root = Some(idx);
        }
        (arena, root)
    }

    #[test]
    fn dump_nests_tabs() {
        let mut arena = Arena::new();
        let a = arena.alloc(SplayNode::new(1));
        let b = arena.alloc(SplayNode::new(2));
        let c = arena.alloc(SplayNode::new(4));
        let d = arena.alloc(SplayNode::new(3));
        arena[b].l = Some(a);
        arena[b].r = Some(c);
        arena[c].l = Some(d);
        assert_eq!(
            dump::<u32, _>(&arena, Some(b)),
            "2\n├─ 1\n└─ 4\n   ├─ 3\n   └─ ∅"
        );
    }

    #[test]
    fn dump_continues_the_rail_under_a_left_child() {
        let (arena, root) = chain(3);
        assert_eq!(
            dump::<u32, _>(&arena, root),
            "2\n├─ 1\n│  ├─ 0\n│  └─ ∅\n└─ ∅"
        );
    }

    #[test]
    fn dump_of_nothing() {
        let arena: Arena<SplayNode<u32>> = Arena::new();
        assert_eq!(dump::<u32, _>(&arena, None), "∅");
    }

    #[test]
    fn dump_handles_a_long_chain_on_a_small_stack() {
        let out = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(|| {
                let (arena, root) = chain(3_000);
                dump::<u32, _>(&arena, root)
            })
            .unwrap()
            .join()
            .unwrap();
        assert!(out.starts_with("2999\n├─ 2998\n│  ├─ 2997"));
        assert_eq!(out.lines().count(), 2 * 3_000 - 1);
    }
}
