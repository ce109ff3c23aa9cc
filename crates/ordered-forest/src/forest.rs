//! Runtime choice between the three tree variants.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use log::debug;

use crate::error::ForestError;
use crate::red_black::RedBlack;
use crate::splay::Splay;
use crate::tree::{RedBlackTree, SplayTree, Tree, TreapTree};
use crate::treap::Treap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Splay,
    #[default]
    RedBlack,
    Treap,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Splay, StrategyKind::RedBlack, StrategyKind::Treap];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Splay => "splay",
            StrategyKind::RedBlack => "red-black",
            StrategyKind::Treap => "treap",
        }
    }
}

impl Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ForestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "splay" => Ok(StrategyKind::Splay),
            "red-black" | "redblack" | "rb" => Ok(StrategyKind::RedBlack),
            "treap" => Ok(StrategyKind::Treap),
            other => Err(ForestError::illegal(format!("unknown strategy `{other}`"))),
        }
    }
}

/// Construction-time settings for a [`Forest`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForestConfig {
    pub strategy: StrategyKind,
    /// Seed for treap priorities. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl ForestConfig {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            seed: None,
        }
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Only the treap consumes randomness, so a seed for anything else is
    /// rejected.
    pub fn validate(&self) -> Result<(), ForestError> {
        if self.seed.is_some() && self.strategy != StrategyKind::Treap {
            return Err(ForestError::illegal(format!(
                "a seed only applies to treap, not {}",
                self.strategy
            )));
        }
        Ok(())
    }
}

/// A tree whose balance strategy is picked when it is built.
#[derive(Clone, Debug)]
pub enum Forest<K: Ord> {
    Splay(SplayTree<K>),
    RedBlack(RedBlackTree<K>),
    Treap(TreapTree<K>),
}

macro_rules! dispatch {
    ($self:expr, $tree:ident => $body:expr) => {
        match $self {
            Forest::Splay($tree) => $body,
            Forest::RedBlack($tree) => $body,
            Forest::Treap($tree) => $body,
        }
    };
}

impl<K: Ord> Forest<K> {
    /// Empty tree of the given kind; a treap is seeded from the OS.
    pub fn new(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Splay => Forest::Splay(Tree::with_balance(Splay)),
            StrategyKind::RedBlack => Forest::RedBlack(Tree::with_balance(RedBlack)),
            StrategyKind::Treap => Forest::Treap(Tree::with_balance(Treap::new())),
        }
    }

    /// # Errors
    ///
    /// [`ForestError::IllegalArgument`] if the config does not validate.
    pub fn with_config(config: &ForestConfig) -> Result<Self, ForestError> {
        config.validate()?;
        debug!("building {} forest (seed: {:?})", config.strategy, config.seed);
        Ok(match (config.strategy, config.seed) {
            (StrategyKind::Treap, Some(seed)) => Forest::Treap(Tree::with_balance(Treap::with_seed(seed))),
            (kind, _) => Self::new(kind),
        })
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Forest::Splay(_) => StrategyKind::Splay,
            Forest::RedBlack(_) => StrategyKind::RedBlack,
            Forest::Treap(_) => StrategyKind::Treap,
        }
    }

    pub fn insert(&mut self, key: K) -> bool {
        dispatch!(self, t => t.insert(key))
    }

    pub fn remove(&mut self, key: &K) -> bool {
        dispatch!(self, t => t.remove(key))
    }

    pub fn take(&mut self, key: &K) -> Option<K> {
        dispatch!(self, t => t.take(key))
    }

    pub fn contains(&mut self, key: &K) -> bool {
        dispatch!(self, t => t.contains(key))
    }

    pub fn find_min(&mut self) -> Result<&K, ForestError> {
        dispatch!(self, t => t.find_min())
    }

    pub fn find_max(&mut self) -> Result<&K, ForestError> {
        dispatch!(self, t => t.find_max())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, t => t.is_empty())
    }

    pub fn len(&self) -> usize {
        dispatch!(self, t => t.len())
    }

    pub fn clear(&mut self) {
        dispatch!(self, t => t.clear())
    }

    pub fn iter(&self) -> Box<dyn DoubleEndedIterator<Item = &K> + '_> {
        dispatch!(self, t => Box::new(t.iter()))
    }

    pub fn root_key(&self) -> Option<&K> {
        dispatch!(self, t => t.root_key())
    }

    pub fn height(&self) -> usize {
        dispatch!(self, t => t.height())
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        dispatch!(self, t => t.assert_valid())
    }
}

impl<K: Ord + Debug> Forest<K> {
    pub fn print(&self) -> String {
        dispatch!(self, t => t.print())
    }

    pub fn dump(&self) -> String {
        dispatch!(self, t => t.dump())
    }
}

impl<K: Ord> Default for Forest<K> {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}

impl<K: Ord> Extend<K> for Forest<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        dispatch!(self, t => t.extend(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
        }
        assert_eq!("RB".parse::<StrategyKind>(), Ok(StrategyKind::RedBlack));
        assert_eq!(" Treap ".parse::<StrategyKind>(), Ok(StrategyKind::Treap));
    }

    #[test]
    fn unknown_strategy_is_an_illegal_argument() {
        assert_eq!(
            "avl".parse::<StrategyKind>(),
            Err(ForestError::IllegalArgument("unknown strategy `avl`".to_string()))
        );
    }

    #[test]
    fn seed_is_rejected_for_non_treap() {
        let config = ForestConfig::new(StrategyKind::Splay).with_seed(1);
        assert!(matches!(
            Forest::<i32>::with_config(&config),
            Err(ForestError::IllegalArgument(_))
        ));
        let config = config.with_strategy(StrategyKind::Treap);
        assert_eq!(Forest::<i32>::with_config(&config).map(|f| f.kind()), Ok(StrategyKind::Treap));
    }

    #[test]
    fn default_config_builds_red_black() {
        let forest = Forest::<i32>::with_config(&ForestConfig::default()).unwrap();
        assert_eq!(forest.kind(), StrategyKind::RedBlack);
        assert!(forest.is_empty());
    }

    #[test]
    fn seeded_treaps_have_identical_shapes() {
        let config = ForestConfig::new(StrategyKind::Treap).with_seed(77);
        let mut a = Forest::with_config(&config).unwrap();
        let mut b = Forest::with_config(&config).unwrap();
        a.extend(0..64);
        b.extend(0..64);
        assert_eq!(a.dump(), b.dump());
    }

    #[test]
    fn every_kind_behaves_as_a_set() {
        for kind in StrategyKind::ALL {
            let mut forest = Forest::new(kind);
            forest.extend([4, 2, 6, 2, 1]);
            assert_eq!(forest.len(), 4, "{kind}");
            assert_eq!(forest.find_min(), Ok(&1));
            assert_eq!(forest.find_max(), Ok(&6));
            assert!(forest.remove(&2));
            assert!(!forest.contains(&2));
            assert_eq!(forest.iter().rev().copied().collect::<Vec<_>>(), vec![6, 4, 1]);
            forest.assert_valid().unwrap();
            forest.clear();
            assert_eq!(forest.find_min(), Err(ForestError::Underflow));
        }
    }
}
