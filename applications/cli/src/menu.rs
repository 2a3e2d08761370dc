//! Main menu entries

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Next,
    Previous,
    ToggleShuffle,
    ToggleRepeat,
    CreatePlaylist,
    ManagePlaylists,
    DeletePlaylist,
    Exit,
    AddMedia,
    ShowPlaylist,
}

impl MenuChoice {
    /// Every entry in menu order
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::Play,
        MenuChoice::Next,
        MenuChoice::Previous,
        MenuChoice::ToggleShuffle,
        MenuChoice::ToggleRepeat,
        MenuChoice::CreatePlaylist,
        MenuChoice::ManagePlaylists,
        MenuChoice::DeletePlaylist,
        MenuChoice::Exit,
        MenuChoice::AddMedia,
        MenuChoice::ShowPlaylist,
    ];

    /// Parse a typed menu number
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|slot| Self::ALL.get(slot))
            .copied()
    }

    /// Number the user types
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |slot| slot + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Play => "Play",
            MenuChoice::Next => "Next",
            MenuChoice::Previous => "Previous",
            MenuChoice::ToggleShuffle => "Toggle Shuffle",
            MenuChoice::ToggleRepeat => "Toggle Repeat",
            MenuChoice::CreatePlaylist => "Create Playlist",
            MenuChoice::ManagePlaylists => "Manage Playlists",
            MenuChoice::DeletePlaylist => "Delete Playlist",
            MenuChoice::Exit => "Exit",
            MenuChoice::AddMedia => "Add Media",
            MenuChoice::ShowPlaylist => "Show Playlist",
        }
    }

    /// Entries listed only while a playlist is selected
    pub fn needs_selection_to_show(self) -> bool {
        matches!(self, MenuChoice::DeletePlaylist)
    }
}
