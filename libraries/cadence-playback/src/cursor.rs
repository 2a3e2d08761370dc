//! Playlist cursor - navigation state machine
//!
//! A playlist is its item order plus a cursor: the current position and the
//! shuffle/repeat flags that decide how `move_next` / `move_previous` walk the
//! order.
//!
//! The position is a sequence index while shuffle is off and a rank in the
//! shuffled order while it is on. Toggling shuffle converts between the two,
//! so the current item keeps its identity across the toggle.

use crate::{
    error::{PlaybackError, Result},
    events::{EventQueue, PlaylistEvent},
    order::PlaylistOrder,
    types::{Boundary, DisplayRow, Navigation, PlaybackConfig, Position, ShuffleAlgorithm},
};
use cadence_core::{MediaItem, PlayRequest};

/// One playlist with its navigation state
///
/// Every mutating call records a [`PlaylistEvent`]. Callers that care about
/// events should call [`Playlist::drain_events`] after each operation; undrained
/// events are capped at [`MAX_PENDING_EVENTS`](crate::MAX_PENDING_EVENTS) and the oldest are dropped.
#[derive(Debug, Clone)]
pub struct Playlist {
    order: PlaylistOrder,
    position: Position,
    repeat: bool,

    // Event queue for driver synchronization
    pending_events: EventQueue,
}

impl Playlist {
    /// Create an empty playlist, shuffle off
    pub fn new(config: &PlaybackConfig) -> Self {
        let order = match config.shuffle_seed {
            Some(seed) => PlaylistOrder::with_seed(config.shuffle_algorithm, seed),
            None => PlaylistOrder::new(config.shuffle_algorithm),
        };

        Self {
            order,
            position: Position::default(),
            repeat: config.repeat,
            pending_events: EventQueue::default(),
        }
    }

    /// Create an empty playlist with a reproducible shuffle
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&PlaybackConfig {
            shuffle_seed: Some(seed),
            ..Default::default()
        })
    }

    // ===== Items =====

    /// Append an item
    ///
    /// The current item stays current even when the shuffled order is
    /// regenerated underneath it.
    pub fn add_media(&mut self, item: MediaItem) {
        let anchor = self.current_index().unwrap_or(0);

        self.order.add_item(item);

        if self.order.is_shuffled() {
            let rank = self.order.rank_of(anchor).unwrap_or(0);
            self.position = Position::Rank(rank);
        }

        let len = self.order.len();
        tracing::debug!(len, "Media added");
        self.pending_events.push(PlaylistEvent::MediaAdded {
            index: len - 1,
            len,
        });
    }

    /// Item at a raw sequence index
    pub fn item_at(&self, index: usize) -> Result<&MediaItem> {
        self.order.item_at(index)
    }

    /// Items in insertion order
    pub fn items(&self) -> &[MediaItem] {
        self.order.items()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the playlist has no items
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // ===== Navigation =====

    /// Step forward
    ///
    /// At the last item: wraps to the first with repeat on, otherwise stays
    /// put and reports `Boundary::End`.
    pub fn move_next(&mut self) -> Navigation {
        let len = self.order.len();
        if len == 0 {
            tracing::trace!("move_next on empty playlist");
            return Navigation::NoSelection;
        }

        let current = self.position.value();
        let (next, wrapped) = if current + 1 < len {
            (current + 1, false)
        } else if self.repeat {
            (0, true)
        } else {
            return self.boundary(Boundary::End);
        };

        self.position = self.position.with_value(next);
        self.moved(wrapped)
    }

    /// Step backward
    ///
    /// At the first item: wraps to the last with repeat on, otherwise stays
    /// put and reports `Boundary::Start`.
    pub fn move_previous(&mut self) -> Navigation {
        let len = self.order.len();
        if len == 0 {
            tracing::trace!("move_previous on empty playlist");
            return Navigation::NoSelection;
        }

        let current = self.position.value();
        let (previous, wrapped) = if current > 0 {
            (current - 1, false)
        } else if self.repeat {
            (len - 1, true)
        } else {
            return self.boundary(Boundary::Start);
        };

        self.position = self.position.with_value(previous);
        self.moved(wrapped)
    }

    fn moved(&mut self, wrapped: bool) -> Navigation {
        // Position was just set inside 0..len, so it always resolves
        let index = self.current_index().unwrap_or(0);
        tracing::debug!(index, wrapped, position = ?self.position, "Cursor moved");
        self.pending_events
            .push(PlaylistEvent::Moved { index, wrapped });
        Navigation::Moved { index, wrapped }
    }

    fn boundary(&mut self, boundary: Boundary) -> Navigation {
        tracing::trace!(?boundary, "Boundary reached");
        self.pending_events
            .push(PlaylistEvent::BoundaryReached { boundary });
        Navigation::Boundary(boundary)
    }

    // ===== Shuffle & Repeat =====

    /// Toggle shuffle, returning the new state
    ///
    /// Turning shuffle on draws a fresh order and converts the position to the
    /// current item's rank; turning it off converts the rank back.
    pub fn toggle_shuffle(&mut self) -> bool {
        let index = self.current_index().unwrap_or(0);

        if self.order.is_shuffled() {
            self.order.clear_shuffle();
            self.position = Position::Sequence(index);
        } else {
            self.order.regenerate_shuffle();
            let rank = self.order.rank_of(index).unwrap_or(0);
            self.position = Position::Rank(rank);
        }

        let enabled = self.order.is_shuffled();
        tracing::debug!(enabled, position = ?self.position, "Shuffle toggled");
        self.pending_events
            .push(PlaylistEvent::ShuffleChanged { enabled });
        enabled
    }

    /// Toggle repeat, returning the new state
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        tracing::debug!(enabled = self.repeat, "Repeat toggled");
        self.pending_events.push(PlaylistEvent::RepeatChanged {
            enabled: self.repeat,
        });
        self.repeat
    }

    /// Whether shuffle is on
    pub fn is_shuffled(&self) -> bool {
        self.order.is_shuffled()
    }

    /// Whether repeat is on
    pub fn is_repeating(&self) -> bool {
        self.repeat
    }

    /// Shuffle algorithm used when shuffle is toggled on
    pub fn shuffle_algorithm(&self) -> ShuffleAlgorithm {
        self.order.algorithm()
    }

    /// Shuffled traversal order, if shuffle is on
    pub fn shuffle_order(&self) -> Option<&[usize]> {
        self.order.shuffle_order()
    }

    // ===== State Queries =====

    /// Raw position with its interpretation
    pub fn position(&self) -> Position {
        self.position
    }

    /// Sequence index of the current item
    ///
    /// `None` when the playlist is empty.
    pub fn current_index(&self) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }

        match self.position {
            Position::Sequence(index) => (index < self.order.len()).then_some(index),
            Position::Rank(rank) => self.order.index_at(rank).ok(),
        }
    }

    /// Current item
    pub fn current(&self) -> Option<&MediaItem> {
        self.current_index()
            .and_then(|index| self.order.item_at(index).ok())
    }

    /// Play the current item
    ///
    /// Records a `Play` event and returns the request for the driver to act on.
    pub fn play_current(&mut self) -> Result<PlayRequest<'_>> {
        let index = self.current_index().ok_or(PlaybackError::NoCurrentTrack)?;
        let item = self
            .order
            .item_at(index)
            .map_err(|_| PlaybackError::NoCurrentTrack)?;

        tracing::debug!(index, title = item.title(), "Play requested");
        self.pending_events.push(PlaylistEvent::Play {
            index,
            item: item.clone(),
        });

        Ok(item.play())
    }

    /// List every item in insertion order, marking the current one
    ///
    /// Insertion order is used even while shuffled. The iterator is lazy and
    /// can be cloned to walk the listing again.
    pub fn describe_all(&self) -> impl Iterator<Item = DisplayRow<'_>> + Clone + '_ {
        let current = self.current_index();
        self.order
            .items()
            .iter()
            .enumerate()
            .map(move |(index, item)| DisplayRow {
                number: index + 1,
                is_current: current == Some(index),
                item,
            })
    }

    // ===== Events =====

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<PlaylistEvent> {
        self.pending_events.drain()
    }

    /// Check for pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}
