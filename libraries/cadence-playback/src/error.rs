//! Error types for playlist navigation

use cadence_core::{CoreError, PlaylistId};
use thiserror::Error;

/// Playback errors
///
/// Boundary notices are not errors; see [`crate::Navigation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Raw sequence index or rank outside the playlist
    #[error("Index {index} out of range for playlist of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Playlist is empty or the position resolves to nothing
    #[error("No current track")]
    NoCurrentTrack,

    /// Handle does not refer to a live playlist
    #[error("Unknown playlist: {0}")]
    UnknownPlaylist(PlaylistId),

    /// 1-based playlist number outside the collection
    #[error("Invalid playlist selection: {0}")]
    InvalidSelection(usize),

    /// Domain type error
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
