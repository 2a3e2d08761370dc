//! Playlist item order
//!
//! Owns the items in insertion order and, while shuffle is on, a separately
//! generated traversal order:
//!
//! ```text
//! items:         [A, B, C, D]        (insertion order, never reordered)
//! shuffle_order: [2, 0, 3, 1]        (rank -> sequence index)
//! traversal:      C, A, D, B
//! ```

use crate::error::{PlaybackError, Result};
use crate::shuffle::shuffled_order;
use crate::types::ShuffleAlgorithm;
use cadence_core::MediaItem;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Items of one playlist plus their optional shuffled order
#[derive(Debug, Clone)]
pub struct PlaylistOrder {
    /// Items in insertion order
    items: Vec<MediaItem>,

    /// Rank -> sequence index, present only while shuffle is on
    shuffle_order: Option<Vec<usize>>,

    /// Algorithm used by `regenerate_shuffle`
    algorithm: ShuffleAlgorithm,

    /// Random source for shuffles
    rng: StdRng,
}

impl PlaylistOrder {
    /// Create an empty order with an entropy-seeded random source
    pub fn new(algorithm: ShuffleAlgorithm) -> Self {
        Self::with_rng(algorithm, StdRng::from_entropy())
    }

    /// Create an empty order with a reproducible random source
    pub fn with_seed(algorithm: ShuffleAlgorithm, seed: u64) -> Self {
        Self::with_rng(algorithm, StdRng::seed_from_u64(seed))
    }

    fn with_rng(algorithm: ShuffleAlgorithm, rng: StdRng) -> Self {
        Self {
            items: Vec::new(),
            shuffle_order: None,
            algorithm,
            rng,
        }
    }

    /// Append an item
    ///
    /// While shuffled, the traversal order is regenerated from scratch, so
    /// previous ranks are not stable across this call.
    pub fn add_item(&mut self, item: MediaItem) {
        self.items.push(item);
        if self.is_shuffled() {
            self.regenerate_shuffle();
        }
    }

    /// Generate a fresh traversal order and turn shuffle on
    pub fn regenerate_shuffle(&mut self) {
        let order = shuffled_order(&self.items, self.algorithm, &mut self.rng);
        self.shuffle_order = Some(order);
    }

    /// Drop the traversal order and turn shuffle off
    pub fn clear_shuffle(&mut self) {
        self.shuffle_order = None;
    }

    /// Whether a traversal order is present
    pub fn is_shuffled(&self) -> bool {
        self.shuffle_order.is_some()
    }

    /// Item at a raw sequence index
    pub fn item_at(&self, index: usize) -> Result<&MediaItem> {
        self.items.get(index).ok_or(PlaybackError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Sequence index at a rank of the traversal order
    ///
    /// Without a traversal order ranks and sequence indices coincide.
    pub fn index_at(&self, rank: usize) -> Result<usize> {
        let index = match &self.shuffle_order {
            Some(order) => order.get(rank).copied(),
            None => (rank < self.items.len()).then_some(rank),
        };

        index.ok_or(PlaybackError::OutOfRange {
            index: rank,
            len: self.items.len(),
        })
    }

    /// Rank of a sequence index in the traversal order
    pub fn rank_of(&self, index: usize) -> Result<usize> {
        let rank = match &self.shuffle_order {
            Some(order) => order.iter().position(|&i| i == index),
            None => (index < self.items.len()).then_some(index),
        };

        rank.ok_or(PlaybackError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Current traversal order, if shuffled
    pub fn shuffle_order(&self) -> Option<&[usize]> {
        self.shuffle_order.as_deref()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Shuffle algorithm in use
    pub fn algorithm(&self) -> ShuffleAlgorithm {
        self.algorithm
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for PlaylistOrder {
    fn default() -> Self {
        Self::new(ShuffleAlgorithm::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with(titles: &[&str]) -> PlaylistOrder {
        let mut order = PlaylistOrder::with_seed(ShuffleAlgorithm::Random, 11);
        for title in titles {
            order.add_item(MediaItem::media(*title));
        }
        order
    }

    fn assert_permutation(order: &PlaylistOrder) {
        let mut ranks = order.shuffle_order().unwrap().to_vec();
        ranks.sort_unstable();
        assert_eq!(ranks, (0..order.len()).collect::<Vec<_>>());
    }

    #[test]
    fn create_empty_order() {
        let order = PlaylistOrder::default();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
        assert!(!order.is_shuffled());
    }

    #[test]
    fn add_keeps_insertion_order() {
        let order = order_with(&["A", "B", "C"]);
        let titles: Vec<&str> = order.items().iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn item_at_bounds() {
        let order = order_with(&["A", "B"]);
        assert_eq!(order.item_at(1).unwrap().title(), "B");
        assert_eq!(
            order.item_at(2).unwrap_err(),
            PlaybackError::OutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn unshuffled_rank_is_index() {
        let order = order_with(&["A", "B", "C"]);
        assert_eq!(order.index_at(2).unwrap(), 2);
        assert_eq!(order.rank_of(1).unwrap(), 1);
        assert!(order.index_at(3).is_err());
        assert!(order.rank_of(3).is_err());
    }

    #[test]
    fn regenerate_produces_permutation() {
        let mut order = order_with(&["A", "B", "C", "D", "E"]);
        order.regenerate_shuffle();
        assert!(order.is_shuffled());
        assert_permutation(&order);
    }

    #[test]
    fn rank_and_index_are_inverse() {
        let mut order = order_with(&["A", "B", "C", "D", "E", "F"]);
        order.regenerate_shuffle();

        for index in 0..order.len() {
            let rank = order.rank_of(index).unwrap();
            assert_eq!(order.index_at(rank).unwrap(), index);
        }
    }

    #[test]
    fn add_while_shuffled_regenerates() {
        let mut order = order_with(&["A", "B", "C"]);
        order.regenerate_shuffle();

        order.add_item(MediaItem::media("D"));
        assert_eq!(order.shuffle_order().unwrap().len(), 4);
        assert_permutation(&order);
    }

    #[test]
    fn clear_shuffle_restores_identity_ranks() {
        let mut order = order_with(&["A", "B", "C"]);
        order.regenerate_shuffle();
        order.clear_shuffle();

        assert!(!order.is_shuffled());
        assert!(order.shuffle_order().is_none());
        assert_eq!(order.index_at(0).unwrap(), 0);
    }

    #[test]
    fn shuffle_of_empty_order() {
        let mut order = PlaylistOrder::with_seed(ShuffleAlgorithm::Smart, 0);
        order.regenerate_shuffle();
        assert!(order.is_shuffled());
        assert_eq!(order.shuffle_order(), Some(&[][..]));
        assert!(order.index_at(0).is_err());
    }
}
