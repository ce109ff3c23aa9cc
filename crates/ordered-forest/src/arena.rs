//! Slot arena that owns every node of a tree.
//!
//! Links between nodes are `u32` slot indices. Released slots go on a free
//! list and are reused by the next allocation, so a long-lived tree that sees
//! many inserts and removes does not grow without bound.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<u32>,
    live: usize,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Stores `node` and returns its slot index.
    pub fn alloc(&mut self, node: N) -> u32 {
        self.live += 1;
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(node);
            idx
        } else {
            let idx = slot_index(self.slots.len());
            self.slots.push(Some(node));
            idx
        }
    }

    /// Takes the node out of its slot and recycles the slot.
    pub fn release(&mut self, idx: u32) -> N {
        let node = self.slots[idx as usize]
            .take()
            .expect("released slot must be occupied");
        self.free.push(idx);
        self.live -= 1;
        node
    }

    /// Mutable access to two distinct nodes at once.
    pub fn pair_mut(&mut self, a: u32, b: u32) -> (&mut N, &mut N) {
        assert_ne!(a, b, "pair_mut needs two distinct slots");
        let (lo, hi, flipped) = if a < b { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(hi as usize);
        let lo_node = head[lo as usize]
            .as_mut()
            .expect("slot must be occupied");
        let hi_node = tail[0].as_mut().expect("slot must be occupied");
        if flipped {
            (hi_node, lo_node)
        } else {
            (lo_node, hi_node)
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drops every node and forgets all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.live = 0;
    }
}

/// Index of the slot that would be appended after `len` existing ones.
fn slot_index(len: usize) -> u32 {
    u32::try_from(len).expect("arena full: slot index exceeds u32")
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, idx: u32) -> &N {
        self.slots[idx as usize]
            .as_ref()
            .expect("vacant arena slot")
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, idx: u32) -> &mut N {
        self.slots[idx as usize]
            .as_mut()
            .expect("vacant arena slot")
    }
}
