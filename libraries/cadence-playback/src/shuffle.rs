//! Shuffle algorithms for playlist traversal order
//!
//! Both algorithms produce a permutation of sequence indices; the playlist
//! items themselves are never reordered.

use crate::types::ShuffleAlgorithm;
use cadence_core::MediaItem;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Build a shuffled traversal order for `items`
///
/// Returns a permutation of `0..items.len()`.
pub fn shuffled_order<R: Rng + ?Sized>(
    items: &[MediaItem],
    algorithm: ShuffleAlgorithm,
    rng: &mut R,
) -> Vec<usize> {
    match algorithm {
        ShuffleAlgorithm::Random => shuffle_random(items.len(), rng),
        ShuffleAlgorithm::Smart => shuffle_smart(items, rng),
    }
}

/// Pure random shuffle using Fisher-Yates
///
/// Every permutation is equally likely.
fn shuffle_random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

/// Smart shuffle
///
/// Goals:
/// - Avoid the same artist twice in a row (when possible)
/// - Keep some randomness
///
/// Algorithm:
/// 1. Group indices by artist (plain media form one group)
/// 2. Shuffle within each group, then shuffle the group order
/// 3. Round-robin through the groups
fn shuffle_smart<R: Rng + ?Sized>(items: &[MediaItem], rng: &mut R) -> Vec<usize> {
    if items.len() <= 2 {
        return shuffle_random(items.len(), rng);
    }

    // BTreeMap keeps group order independent of hasher state, so a seeded
    // rng reproduces the same permutation.
    let mut by_artist: BTreeMap<Option<&str>, Vec<usize>> = BTreeMap::new();
    for (index, item) in items.iter().enumerate() {
        by_artist.entry(item.artist()).or_default().push(index);
    }

    let mut groups: Vec<Vec<usize>> = by_artist.into_values().collect();
    for group in &mut groups {
        group.shuffle(rng);
    }
    groups.shuffle(rng);

    let mut order = Vec::with_capacity(items.len());
    let mut round = 0;
    while order.len() < items.len() {
        for group in &groups {
            if let Some(&index) = group.get(round) {
                order.push(index);
            }
        }
        round += 1;
    }

    order
}
