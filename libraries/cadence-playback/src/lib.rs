//! Cadence - Playlist Navigation
//!
//! Ordering and navigation for in-memory playlists.
//!
//! This crate provides:
//! - Item order with an optional shuffled traversal order
//! - Shuffle algorithms (Random + Smart) over a seedable random source
//! - A navigation cursor with shuffle and repeat modes
//! - Boundary notices as plain return values, never errors
//! - A store addressing playlists through stable handles
//!
//! # Architecture
//!
//! `cadence-playback` only manages *order* and *position*:
//! - No audio decoding or output
//! - No persistence
//! - No console output (drivers render results and drain events)
//!
//! Everything is single-threaded and synchronous.
//!
//! # Example: Navigation
//!
//! ```rust
//! use cadence_core::MediaItem;
//! use cadence_playback::{Boundary, Navigation, PlaylistStore};
//!
//! let mut store = PlaylistStore::default();
//! let id = store.create_playlist();
//!
//! store.add_media(id, MediaItem::song("A", "Artist")).unwrap();
//! store.add_media(id, MediaItem::media("B")).unwrap();
//!
//! assert!(store.move_next(id).unwrap().moved());
//! assert_eq!(
//!     store.move_next(id).unwrap(),
//!     Navigation::Boundary(Boundary::End)
//! );
//!
//! // Repeat wraps around instead
//! store.toggle_repeat(id).unwrap();
//! assert_eq!(
//!     store.move_next(id).unwrap(),
//!     Navigation::Moved { index: 0, wrapped: true }
//! );
//!
//! let request = store.play_current(id).unwrap();
//! assert_eq!(request.to_string(), "Playing Song: A by Artist");
//! ```
//!
//! # Example: Shuffle
//!
//! ```rust
//! use cadence_core::MediaItem;
//! use cadence_playback::Playlist;
//!
//! // Seeded for reproducible orders
//! let mut playlist = Playlist::with_seed(7);
//! for title in ["A", "B", "C", "D"] {
//!     playlist.add_media(MediaItem::media(title));
//! }
//!
//! playlist.move_next();
//! assert!(playlist.toggle_shuffle());
//!
//! // Still on "B", now walking the shuffled order from its rank
//! assert_eq!(playlist.current().unwrap().title(), "B");
//!
//! // Listings keep insertion order
//! let titles: Vec<_> = playlist.describe_all().map(|row| row.item.title()).collect();
//! assert_eq!(titles, ["A", "B", "C", "D"]);
//! ```

mod cursor;
mod error;
mod events;
mod order;
mod shuffle;
mod store;
pub mod types;

// Public exports
pub use cursor::Playlist;
pub use error::{PlaybackError, Result};
pub use events::{PlaylistEvent, MAX_PENDING_EVENTS};
pub use order::PlaylistOrder;
pub use shuffle::shuffled_order;
pub use store::PlaylistStore;
pub use types::{Boundary, DisplayRow, Navigation, PlaybackConfig, Position, ShuffleAlgorithm};
