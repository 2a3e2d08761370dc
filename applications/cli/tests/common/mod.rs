//! Shared helpers for CLI tests

use cadence_cli::Session;
use cadence_playback::{PlaybackConfig, PlaylistStore};
use std::io::Cursor;

/// Store with a fixed shuffle seed
pub fn seeded_store() -> PlaylistStore {
    PlaylistStore::new(PlaybackConfig {
        shuffle_seed: Some(7),
        ..Default::default()
    })
}

/// Run a session over scripted input lines and return everything it printed
pub fn run_script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut session = Session::new(seeded_store(), Cursor::new(input), Vec::new());
    session.run().expect("session failed");
    String::from_utf8(session.into_output()).expect("output not utf-8")
}
