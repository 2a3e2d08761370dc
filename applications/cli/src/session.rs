//! Interactive menu session
//!
//! Reads menu choices line by line, drives the playlist store and writes the
//! human-facing text. Generic over input and output so tests can script it.

use crate::{
    error::Result,
    menu::MenuChoice,
};
use cadence_core::{MediaItem, PlaylistId};
use cadence_playback::{Boundary, Navigation, PlaybackError, PlaylistStore};
use std::io::{BufRead, Write};

pub struct Session<R, W> {
    store: PlaylistStore,
    selected: Option<PlaylistId>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: PlaylistStore, input: R, output: W) -> Self {
        Self {
            store,
            selected: None,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Music Player!")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("Input closed");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => {
                    tracing::debug!(?choice, "Menu choice");
                    self.dispatch(choice)?;
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "Thank you for using the Music Player. Goodbye!")?;
        Ok(())
    }

    pub fn store(&self) -> &PlaylistStore {
        &self.store
    }

    pub fn selected(&self) -> Option<PlaylistId> {
        self.selected
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> Result<()> {
        if let Some(number) = self.selected.and_then(|id| self.store.number_of(id).ok()) {
            writeln!(self.output, "\nCurrent Playlist: {}", number)?;
        }

        writeln!(self.output, "Main Menu:")?;
        for choice in MenuChoice::ALL {
            if choice.needs_selection_to_show() && self.selected.is_none() {
                continue;
            }
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    /// Write a prompt and read one trimmed line, `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Play => self.play()?,
            MenuChoice::Next => self.navigate(PlaylistStore::move_next)?,
            MenuChoice::Previous => self.navigate(PlaylistStore::move_previous)?,
            MenuChoice::ToggleShuffle => {
                if let Some(id) = self.require_selection()? {
                    let on = self.store.toggle_shuffle(id)?;
                    writeln!(self.output, "Shuffle is {}.", on_off(on))?;
                }
            }
            MenuChoice::ToggleRepeat => {
                if let Some(id) = self.require_selection()? {
                    let on = self.store.toggle_repeat(id)?;
                    writeln!(self.output, "Repeat is {}.", on_off(on))?;
                }
            }
            MenuChoice::CreatePlaylist => {
                self.selected = Some(self.store.create_playlist());
                writeln!(self.output, "New playlist created.")?;
            }
            MenuChoice::ManagePlaylists => self.manage()?,
            MenuChoice::DeletePlaylist => match self.selected.take() {
                Some(id) => {
                    self.store.delete_playlist(id)?;
                    writeln!(self.output, "Playlist deleted.")?;
                }
                None => writeln!(self.output, "No playlist is currently selected.")?,
            },
            MenuChoice::AddMedia => self.add_media()?,
            MenuChoice::ShowPlaylist => self.show()?,
            MenuChoice::Exit => {}
        }

        self.log_events()
    }

    fn require_selection(&mut self) -> Result<Option<PlaylistId>> {
        if self.selected.is_none() {
            writeln!(self.output, "Please select a playlist first.")?;
        }
        Ok(self.selected)
    }

    fn play(&mut self) -> Result<()> {
        let Some(id) = self.require_selection()? else {
            return Ok(());
        };

        match self.store.play_current(id) {
            Ok(request) => writeln!(self.output, "{}", request)?,
            Err(PlaybackError::NoCurrentTrack) => {
                writeln!(self.output, "Invalid track selection.")?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn navigate(
        &mut self,
        step: fn(&mut PlaylistStore, PlaylistId) -> cadence_playback::Result<Navigation>,
    ) -> Result<()> {
        let Some(id) = self.require_selection()? else {
            return Ok(());
        };

        match step(&mut self.store, id)? {
            Navigation::Moved { index, .. } => {
                let item = self.store.get(id)?.item_at(index)?;
                writeln!(self.output, "Current track: {}", item.describe())?;
            }
            Navigation::Boundary(Boundary::End) => {
                writeln!(self.output, "End of playlist reached.")?;
            }
            Navigation::Boundary(Boundary::Start) => {
                writeln!(self.output, "Start of playlist reached.")?;
            }
            Navigation::NoSelection => writeln!(self.output, "Invalid track selection.")?,
        }
        Ok(())
    }

    fn manage(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(
                self.output,
                "No playlists available. Please create a playlist first."
            )?;
            return Ok(());
        }

        let text = format!("Select a playlist (1-{}): ", self.store.len());
        let Some(line) = self.prompt(&text)? else {
            return Ok(());
        };

        let selection = line
            .parse::<usize>()
            .map_err(|_| PlaybackError::InvalidSelection(0))
            .and_then(|number| Ok((number, self.store.select(number)?)));

        match selection {
            Ok((number, id)) => {
                self.selected = Some(id);
                writeln!(self.output, "Playlist {} selected.", number)?;
            }
            Err(err) => {
                tracing::debug!(%err, input = %line, "Rejected playlist selection");
                self.selected = None;
                writeln!(self.output, "Invalid playlist selection.")?;
            }
        }
        Ok(())
    }

    fn add_media(&mut self) -> Result<()> {
        let Some(id) = self.require_selection()? else {
            return Ok(());
        };

        let Some(title) = self.prompt("Title: ")? else {
            return Ok(());
        };
        let artist = self.prompt("Artist (leave blank for none): ")?;

        match MediaItem::new(&title, artist.as_deref()) {
            Ok(item) => {
                writeln!(self.output, "Added: {}", item.describe())?;
                self.store.add_media(id, item)?;
            }
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let Some(id) = self.require_selection()? else {
            return Ok(());
        };

        let playlist = self.store.get(id)?;
        writeln!(
            self.output,
            "Playlist: (shuffle {}, repeat {})",
            on_off(playlist.is_shuffled()),
            on_off(playlist.is_repeating())
        )?;
        for row in playlist.describe_all() {
            let marker = if row.is_current { ">> " } else { "" };
            writeln!(self.output, "{}. {}{}", row.number, marker, row.item.describe())?;
        }
        Ok(())
    }

    fn log_events(&mut self) -> Result<()> {
        if let Some(id) = self.selected {
            for event in self.store.get_mut(id)?.drain_events() {
                tracing::debug!(?event, "Playlist event");
            }
        }
        Ok(())
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
