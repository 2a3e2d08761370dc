//! Cadence Core
//!
//! Platform-agnostic domain types and error handling for the Cadence playlist
//! navigator.
//!
//! The core crate defines:
//! - **Domain Types**: `MediaItem` (songs and plain media), `PlayRequest`
//! - **Identifiers**: `PlaylistId`, the stable handle drivers hold on to
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{MediaItem, PlaylistId};
//!
//! let song = MediaItem::song("Blue in Green", "Miles Davis");
//! assert_eq!(song.describe(), "Title: Blue in Green, Artist: Miles Davis");
//! assert_eq!(song.play().to_string(), "Playing Song: Blue in Green by Miles Davis");
//!
//! let id = PlaylistId::generate();
//! assert_ne!(id, PlaylistId::generate());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{MediaItem, PlayRequest, PlaylistId};
