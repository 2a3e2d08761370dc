//! Playlist store
//!
//! Owns every playlist of a session behind a stable [`PlaylistId`] handle.
//! Playlists keep creation order so a driver can also address them by
//! 1-based number.

use crate::{
    cursor::Playlist,
    error::{PlaybackError, Result},
    types::{DisplayRow, Navigation, PlaybackConfig},
};
use cadence_core::{MediaItem, PlayRequest, PlaylistId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Collection of playlists addressed by handle
#[derive(Debug)]
pub struct PlaylistStore {
    playlists: Vec<(PlaylistId, Playlist)>,
    config: PlaybackConfig,

    // Derives per-playlist seeds when the config is seeded
    seeder: Option<StdRng>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new(config: PlaybackConfig) -> Self {
        let seeder = config.shuffle_seed.map(StdRng::seed_from_u64);
        Self {
            playlists: Vec::new(),
            config,
            seeder,
        }
    }

    /// Configuration applied to new playlists
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    // ===== Collection =====

    /// Create an empty playlist and return its handle
    pub fn create_playlist(&mut self) -> PlaylistId {
        let mut config = self.config.clone();
        config.shuffle_seed = self.seeder.as_mut().map(|rng| rng.gen());

        let id = PlaylistId::generate();
        self.playlists.push((id, Playlist::new(&config)));
        tracing::debug!(%id, count = self.playlists.len(), "Playlist created");
        id
    }

    /// Remove a playlist
    ///
    /// Handles of the remaining playlists stay valid.
    pub fn delete_playlist(&mut self, id: PlaylistId) -> Result<Playlist> {
        let slot = self.slot(id)?;
        let (_, playlist) = self.playlists.remove(slot);
        tracing::debug!(%id, count = self.playlists.len(), "Playlist deleted");
        Ok(playlist)
    }

    /// Resolve a 1-based playlist number to its handle
    pub fn select(&self, number: usize) -> Result<PlaylistId> {
        number
            .checked_sub(1)
            .and_then(|slot| self.playlists.get(slot))
            .map(|(id, _)| *id)
            .ok_or(PlaybackError::InvalidSelection(number))
    }

    /// 1-based number of a playlist
    pub fn number_of(&self, id: PlaylistId) -> Result<usize> {
        self.slot(id).map(|slot| slot + 1)
    }

    /// Handles in creation order
    pub fn ids(&self) -> impl Iterator<Item = PlaylistId> + '_ {
        self.playlists.iter().map(|(id, _)| *id)
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if the store holds no playlists
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Borrow a playlist
    pub fn get(&self, id: PlaylistId) -> Result<&Playlist> {
        self.playlists
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, playlist)| playlist)
            .ok_or(PlaybackError::UnknownPlaylist(id))
    }

    /// Borrow a playlist mutably
    pub fn get_mut(&mut self, id: PlaylistId) -> Result<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, playlist)| playlist)
            .ok_or(PlaybackError::UnknownPlaylist(id))
    }

    fn slot(&self, id: PlaylistId) -> Result<usize> {
        self.playlists
            .iter()
            .position(|(candidate, _)| *candidate == id)
            .ok_or(PlaybackError::UnknownPlaylist(id))
    }

    // ===== Playlist operations =====

    /// Append an item to a playlist
    pub fn add_media(&mut self, id: PlaylistId, item: MediaItem) -> Result<()> {
        self.get_mut(id)?.add_media(item);
        Ok(())
    }

    /// Play a playlist's current item
    pub fn play_current(&mut self, id: PlaylistId) -> Result<PlayRequest<'_>> {
        self.get_mut(id)?.play_current()
    }

    /// Step a playlist forward
    pub fn move_next(&mut self, id: PlaylistId) -> Result<Navigation> {
        Ok(self.get_mut(id)?.move_next())
    }

    /// Step a playlist backward
    pub fn move_previous(&mut self, id: PlaylistId) -> Result<Navigation> {
        Ok(self.get_mut(id)?.move_previous())
    }

    /// Toggle shuffle, returning the new state
    pub fn toggle_shuffle(&mut self, id: PlaylistId) -> Result<bool> {
        Ok(self.get_mut(id)?.toggle_shuffle())
    }

    /// Toggle repeat, returning the new state
    pub fn toggle_repeat(&mut self, id: PlaylistId) -> Result<bool> {
        Ok(self.get_mut(id)?.toggle_repeat())
    }

    /// List a playlist in insertion order
    pub fn describe_all(
        &self,
        id: PlaylistId,
    ) -> Result<impl Iterator<Item = DisplayRow<'_>> + Clone + '_> {
        Ok(self.get(id)?.describe_all())
    }
}

impl Default for PlaylistStore {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
