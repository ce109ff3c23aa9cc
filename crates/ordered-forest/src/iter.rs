use std::marker::PhantomData;

use crate::arena::Arena;
use crate::types::KeyNode;

/// Lazy in-order walk over the keys of a tree.
///
/// Ascending from the front, descending from the back (`.rev()`). The walk
/// borrows the tree, so it cannot observe a splay; calling
/// [`Tree::iter`](crate::Tree::iter) again restarts it.
pub struct Iter<'a, K, N> {
    arena: &'a Arena<N>,
    front: Vec<u32>,
    back: Vec<u32>,
    remaining: usize,
    _k: PhantomData<&'a K>,
}

impl<'a, K, N> Iter<'a, K, N>
where
    N: KeyNode<K>,
{
    pub(crate) fn new(arena: &'a Arena<N>, root: Option<u32>, len: usize) -> Self {
        let mut iter = Self {
            arena,
            front: Vec::new(),
            back: Vec::new(),
            remaining: len,
            _k: PhantomData,
        };
        iter.push_left_spine(root);
        iter.push_right_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.front.push(i);
            curr = self.arena[i].l();
        }
    }

    fn push_right_spine(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.back.push(i);
            curr = self.arena[i].r();
        }
    }
}

impl<'a, K: 'a, N> Iterator for Iter<'a, K, N>
where
    N: KeyNode<K>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let i = self.front.pop()?;
        self.push_left_spine(arena[i].r());
        self.remaining -= 1;
        Some(arena[i].key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, N> DoubleEndedIterator for Iter<'a, K, N>
where
    N: KeyNode<K>,
{
    fn next_back(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let i = self.back.pop()?;
        self.push_right_spine(arena[i].l());
        self.remaining -= 1;
        Some(arena[i].key())
    }
}

impl<'a, K: 'a, N> ExactSizeIterator for Iter<'a, K, N> where N: KeyNode<K> {}

impl<K, N> Clone for Iter<'_, K, N> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
            _k: PhantomData,
        }
    }
}
