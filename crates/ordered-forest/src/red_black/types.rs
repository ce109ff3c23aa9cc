use crate::types::{KeyNode, Node};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Red-black node. The only node kind that keeps a parent link.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub color: Color,
}

impl<K> RbNode<K> {
    /// New nodes start red.
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            color: Color::Red,
        }
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}

impl<K> Node for RbNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }

    fn p(&self) -> Option<u32> {
        self.p
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }
}

impl<K> KeyNode<K> for RbNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn into_key(self) -> K {
        self.k
    }

    fn label(&self) -> Option<String> {
        Some(match self.color {
            Color::Red => "red".to_string(),
            Color::Black => "black".to_string(),
        })
    }
}
