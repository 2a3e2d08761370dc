//! Core types for playlist navigation

use cadence_core::MediaItem;
use serde::{Deserialize, Serialize};

/// Current position of a playlist cursor
///
/// The value means different things depending on shuffle state, so the
/// interpretation travels with it:
/// - `Sequence(i)`: index into the playlist's insertion order
/// - `Rank(r)`: index into the shuffled traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Sequence index (shuffle off)
    Sequence(usize),

    /// Rank in the shuffled order (shuffle on)
    Rank(usize),
}

impl Position {
    /// Raw value regardless of interpretation
    pub fn value(self) -> usize {
        match self {
            Position::Sequence(v) | Position::Rank(v) => v,
        }
    }

    /// Same interpretation, different value
    pub(crate) fn with_value(self, value: usize) -> Self {
        match self {
            Position::Sequence(_) => Position::Sequence(value),
            Position::Rank(_) => Position::Rank(value),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::Sequence(0)
    }
}

/// Which end of the playlist navigation ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    /// Past the last item
    End,

    /// Before the first item
    Start,
}

/// Outcome of a `move_next` / `move_previous` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// Cursor moved; `index` is the sequence index of the new current item
    Moved {
        /// Sequence index now current
        index: usize,
        /// Movement crossed a boundary under repeat
        wrapped: bool,
    },

    /// Cursor stayed put because repeat is off
    Boundary(Boundary),

    /// Playlist is empty, nothing to navigate
    NoSelection,
}

impl Navigation {
    /// Whether the cursor changed position
    pub fn moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// Shuffle algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleAlgorithm {
    /// Uniform random permutation
    #[default]
    Random,

    /// Spread artists apart (not uniform)
    Smart,
}

/// One row of a playlist listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRow<'a> {
    /// 1-based number in insertion order
    pub number: usize,

    /// Whether this row is the current item
    pub is_current: bool,

    /// The item itself
    pub item: &'a MediaItem,
}

/// Configuration for playlists created by a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Repeat state of new playlists (default: false)
    pub repeat: bool,

    /// Algorithm used when shuffle is toggled on (default: Random)
    pub shuffle_algorithm: ShuffleAlgorithm,

    /// Seed for reproducible shuffles (default: None, seeded from entropy)
    pub shuffle_seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            repeat: false,
            shuffle_algorithm: ShuffleAlgorithm::Random,
            shuffle_seed: None,
        }
    }
}
