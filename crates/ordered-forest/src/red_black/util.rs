use std::cmp::Ordering;

use log::trace;

use crate::arena::Arena;
use crate::balance::{Inserted, Removed};
use crate::rotation::{rotate_with_left_child, rotate_with_right_child};
use crate::util::{assert_bst, find, last};

use super::types::{Color, RbNode};

/// Absent children count as black.
#[inline]
fn is_black<K>(arena: &Arena<RbNode<K>>, i: Option<u32>) -> bool {
    i.map_or(true, |i| arena[i].is_black())
}

#[inline]
fn red<K>(arena: &Arena<RbNode<K>>, i: Option<u32>) -> Option<u32> {
    i.filter(|&i| !arena[i].is_black())
}

/// Points whatever referenced `old` (its parent, or the tree root) at `new`.
fn replace_child<K>(
    arena: &mut Arena<RbNode<K>>,
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        None => *root = new,
        Some(p) if arena[p].l == Some(old) => arena[p].l = new,
        Some(p) => arena[p].r = new,
    }
}

fn rotate_left_at<K>(arena: &mut Arena<RbNode<K>>, root: &mut Option<u32>, x: u32) -> u32 {
    let parent = arena[x].p;
    let y = rotate_with_right_child(arena, x);
    replace_child(arena, root, parent, x, Some(y));
    y
}

fn rotate_right_at<K>(arena: &mut Arena<RbNode<K>>, root: &mut Option<u32>, x: u32) -> u32 {
    let parent = arena[x].p;
    let y = rotate_with_left_child(arena, x);
    replace_child(arena, root, parent, x, Some(y));
    y
}

pub fn insert<K: Ord>(arena: &mut Arena<RbNode<K>>, root: Option<u32>, key: K) -> Inserted {
    let Some(mut curr) = root else {
        let mut node = RbNode::new(key);
        node.color = Color::Black;
        return Inserted {
            root: Some(arena.alloc(node)),
            fresh: true,
        };
    };

    let go_left = loop {
        let (go_left, next) = match key.cmp(&arena[curr].k) {
            Ordering::Less => (true, arena[curr].l),
            Ordering::Greater => (false, arena[curr].r),
            Ordering::Equal => {
                return Inserted {
                    root,
                    fresh: false,
                }
            }
        };
        match next {
            Some(next) => curr = next,
            None => break go_left,
        }
    };

    let mut node = RbNode::new(key);
    node.p = Some(curr);
    let n = arena.alloc(node);
    if go_left {
        arena[curr].l = Some(n);
    } else {
        arena[curr].r = Some(n);
    }

    Inserted {
        root: insert_fixup(arena, root, n),
        fresh: true,
    }
}

fn insert_fixup<K>(arena: &mut Arena<RbNode<K>>, mut root: Option<u32>, mut n: u32) -> Option<u32> {
    loop {
        let Some(mut p) = arena[n].p else {
            break;
        };
        if arena[p].is_black() {
            break;
        }
        let Some(g) = arena[p].p else {
            break;
        };

        if arena[g].l == Some(p) {
            if let Some(u) = red(arena, arena[g].r) {
                trace!("insert fixup: red uncle, recolour");
                arena[p].color = Color::Black;
                arena[u].color = Color::Black;
                arena[g].color = Color::Red;
                n = g;
                continue;
            }
            if arena[p].r == Some(n) {
                trace!("insert fixup: inner grandchild, double rotation");
                rotate_left_at(arena, &mut root, p);
                n = p;
                p = arena[n].p.expect("rotated node has a parent");
            }
            arena[p].color = Color::Black;
            arena[g].color = Color::Red;
            rotate_right_at(arena, &mut root, g);
        } else {
            if let Some(u) = red(arena, arena[g].l) {
                trace!("insert fixup: red uncle, recolour");
                arena[p].color = Color::Black;
                arena[u].color = Color::Black;
                arena[g].color = Color::Red;
                n = g;
                continue;
            }
            if arena[p].l == Some(n) {
                trace!("insert fixup: inner grandchild, double rotation");
                rotate_right_at(arena, &mut root, p);
                n = p;
                p = arena[n].p.expect("rotated node has a parent");
            }
            arena[p].color = Color::Black;
            arena[g].color = Color::Red;
            rotate_left_at(arena, &mut root, g);
        }
        break;
    }

    if let Some(r) = root {
        arena[r].color = Color::Black;
    }
    root
}

/// Removes `key`. A node with two children trades keys with its in-order
/// predecessor, which is then the node physically unlinked.
pub fn remove<K: Ord>(
    arena: &mut Arena<RbNode<K>>,
    mut root: Option<u32>,
    key: &K,
) -> Removed<RbNode<K>> {
    let Some(mut z) = find(arena, root, key) else {
        return Removed { root, node: None };
    };

    if let (Some(l), Some(_)) = (arena[z].l, arena[z].r) {
        let pred = last(arena, Some(l)).expect("left subtree is not empty");
        let (a, b) = arena.pair_mut(z, pred);
        std::mem::swap(&mut a.k, &mut b.k);
        z = pred;
    }

    let child = arena[z].l.or(arena[z].r);
    let parent = arena[z].p;
    if let Some(c) = child {
        arena[c].p = parent;
    }
    replace_child(arena, &mut root, parent, z, child);

    if arena[z].is_black() {
        match red(arena, child) {
            Some(c) => arena[c].color = Color::Black,
            None => root = remove_fixup(arena, root, child, parent),
        }
    }

    Removed {
        root,
        node: Some(arena.release(z)),
    }
}

/// Resolves a "double black" at `x`, which may be an absent child of
/// `parent`.
fn remove_fixup<K>(
    arena: &mut Arena<RbNode<K>>,
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) -> Option<u32> {
    while x != root && is_black(arena, x) {
        let Some(p) = parent else {
            break;
        };

        if arena[p].l == x {
            if let Some(s) = red(arena, arena[p].r) {
                trace!("remove fixup: red sibling");
                arena[s].color = Color::Black;
                arena[p].color = Color::Red;
                rotate_left_at(arena, &mut root, p);
            }
            let Some(mut s) = arena[p].r else {
                x = Some(p);
                parent = arena[p].p;
                continue;
            };
            if is_black(arena, arena[s].l) && is_black(arena, arena[s].r) {
                trace!("remove fixup: black sibling, black nephews");
                arena[s].color = Color::Red;
                x = Some(p);
                parent = arena[p].p;
                continue;
            }
            if is_black(arena, arena[s].r) {
                trace!("remove fixup: near nephew red");
                let near = arena[s].l.expect("near nephew is red");
                arena[near].color = Color::Black;
                arena[s].color = Color::Red;
                s = rotate_right_at(arena, &mut root, s);
            }
            trace!("remove fixup: far nephew red");
            arena[s].color = arena[p].color;
            arena[p].color = Color::Black;
            let far = arena[s].r.expect("far nephew is red");
            arena[far].color = Color::Black;
            rotate_left_at(arena, &mut root, p);
        } else {
            if let Some(s) = red(arena, arena[p].l) {
                trace!("remove fixup: red sibling");
                arena[s].color = Color::Black;
                arena[p].color = Color::Red;
                rotate_right_at(arena, &mut root, p);
            }
            let Some(mut s) = arena[p].l else {
                x = Some(p);
                parent = arena[p].p;
                continue;
            };
            if is_black(arena, arena[s].l) && is_black(arena, arena[s].r) {
                trace!("remove fixup: black sibling, black nephews");
                arena[s].color = Color::Red;
                x = Some(p);
                parent = arena[p].p;
                continue;
            }
            if is_black(arena, arena[s].l) {
                trace!("remove fixup: near nephew red");
                let near = arena[s].r.expect("near nephew is red");
                arena[near].color = Color::Black;
                arena[s].color = Color::Red;
                s = rotate_left_at(arena, &mut root, s);
            }
            trace!("remove fixup: far nephew red");
            arena[s].color = arena[p].color;
            arena[p].color = Color::Black;
            let far = arena[s].l.expect("far nephew is red");
            arena[far].color = Color::Black;
            rotate_right_at(arena, &mut root, p);
        }
        x = root;
        break;
    }

    if let Some(x) = x {
        arena[x].color = Color::Black;
    }
    root
}

/// Checks parent links, colouring, black height and key order.
pub fn assert_red_black_tree<K: Ord>(
    arena: &Arena<RbNode<K>>,
    root: Option<u32>,
) -> Result<(), String> {
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root].p.is_some() {
        return Err("Root has parent".to_string());
    }
    if !arena[root].is_black() {
        return Err("Root is not black".to_string());
    }

    fn black_height<K>(arena: &Arena<RbNode<K>>, node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(0);
        };

        let l = arena[node].l;
        let r = arena[node].r;

        if let Some(li) = l {
            if arena[li].p != Some(node) {
                return Err("Broken parent link on left child".to_string());
            }
        }
        if let Some(ri) = r {
            if arena[ri].p != Some(node) {
                return Err("Broken parent link on right child".to_string());
            }
        }

        if !arena[node].is_black() {
            if red(arena, l).is_some() {
                return Err("Red node has red left child".to_string());
            }
            if red(arena, r).is_some() {
                return Err("Red node has red right child".to_string());
            }
        }

        let lh = black_height(arena, l)?;
        let rh = black_height(arena, r)?;
        if lh != rh {
            return Err("Black height mismatch".to_string());
        }

        Ok(lh + usize::from(arena[node].is_black()))
    }

    black_height(arena, Some(root))?;
    assert_bst(arena, Some(root))
}
