//! Playlist Events
//!
//! Event-based communication for driver/UI synchronization. A playlist
//! records events as it changes and the driver drains them:
//! - Play requests (the "play" signal of `play_current`)
//! - Cursor movement and boundary notices
//! - Mode changes (shuffle/repeat)
//! - Items added

use crate::types::Boundary;
use cadence_core::MediaItem;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Most events a playlist keeps before dropping the oldest
pub const MAX_PENDING_EVENTS: usize = 256;

/// Events emitted by a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaylistEvent {
    /// Current item should start playing
    Play {
        /// Sequence index of the item
        index: usize,
        /// The item to play
        item: MediaItem,
    },

    /// Cursor moved to a new item
    Moved {
        /// Sequence index now current
        index: usize,
        /// Movement wrapped around under repeat
        wrapped: bool,
    },

    /// Navigation stopped at an end of the playlist
    BoundaryReached {
        /// Which end
        boundary: Boundary,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// New shuffle state
        enabled: bool,
    },

    /// Repeat toggled
    RepeatChanged {
        /// New repeat state
        enabled: bool,
    },

    /// Item appended
    MediaAdded {
        /// Sequence index of the new item
        index: usize,
        /// Playlist length after the add
        len: usize,
    },
}

/// Bounded FIFO of undrained events
#[derive(Debug, Clone, Default)]
pub(crate) struct EventQueue {
    events: VecDeque<PlaylistEvent>,
}

impl EventQueue {
    /// Record an event, dropping the oldest once full
    pub(crate) fn push(&mut self, event: PlaylistEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<PlaylistEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drops_oldest_when_full() {
        let mut queue = EventQueue::default();
        for index in 0..MAX_PENDING_EVENTS + 3 {
            queue.push(PlaylistEvent::Moved {
                index,
                wrapped: false,
            });
        }
        assert_eq!(queue.len(), MAX_PENDING_EVENTS);

        let events = queue.drain();
        assert_eq!(
            events.first(),
            Some(&PlaylistEvent::Moved {
                index: 3,
                wrapped: false
            })
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn events_serialize() {
        let event = PlaylistEvent::BoundaryReached {
            boundary: Boundary::End,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: PlaylistEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
