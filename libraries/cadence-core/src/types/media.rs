/// Media domain types
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A playable media item
///
/// Immutable value with no identity beyond its attributes: two items with the
/// same title are equal and may both sit in one playlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaItem {
    /// Plain media with only a title
    Media {
        /// Display title
        title: String,
    },

    /// Song with an artist
    Song {
        /// Display title
        title: String,
        /// Artist name
        artist: String,
    },
}

impl MediaItem {
    /// Create plain media
    pub fn media(title: impl Into<String>) -> Self {
        Self::Media {
            title: title.into(),
        }
    }

    /// Create a song
    pub fn song(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self::Song {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Build an item from user input
    ///
    /// Surrounding whitespace is trimmed. A blank artist yields plain media,
    /// a blank title is rejected.
    pub fn new(title: &str, artist: Option<&str>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::InvalidMedia("title must not be empty".to_string()));
        }

        match artist.map(str::trim).filter(|a| !a.is_empty()) {
            Some(artist) => Ok(Self::song(title, artist)),
            None => Ok(Self::media(title)),
        }
    }

    /// Display title
    pub fn title(&self) -> &str {
        match self {
            Self::Media { title } | Self::Song { title, .. } => title,
        }
    }

    /// Artist, for songs
    pub fn artist(&self) -> Option<&str> {
        match self {
            Self::Media { .. } => None,
            Self::Song { artist, .. } => Some(artist),
        }
    }

    /// One-line description used in playlist listings
    pub fn describe(&self) -> String {
        match self {
            Self::Media { title } => format!("Title: {}", title),
            Self::Song { title, artist } => format!("Title: {}, Artist: {}", title, artist),
        }
    }

    /// Request playback of this item
    pub fn play(&self) -> PlayRequest<'_> {
        PlayRequest { item: self }
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Signal that an item should be played
///
/// The core has no audio output; the driver decides what "playing" means and
/// can render the request with `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayRequest<'a> {
    item: &'a MediaItem,
}

impl<'a> PlayRequest<'a> {
    /// Item being played
    pub fn item(&self) -> &'a MediaItem {
        self.item
    }
}

impl fmt::Display for PlayRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.item {
            MediaItem::Media { title } => write!(f, "Playing: {}", title),
            MediaItem::Song { title, artist } => {
                write!(f, "Playing Song: {} by {}", title, artist)
            }
        }
    }
}
