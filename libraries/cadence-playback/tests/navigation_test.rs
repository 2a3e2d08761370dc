//! Playlist navigation integration tests
//!
//! Walks the store through the scenarios a menu driver produces: building
//! playlists, stepping through them under every shuffle/repeat combination,
//! and juggling several playlists at once.

use cadence_core::MediaItem;
use cadence_playback::{
    Boundary, Navigation, PlaybackConfig, PlaybackError, PlaylistEvent, PlaylistStore, Position,
};

// ===== Test Helpers =====

fn seeded_store() -> PlaylistStore {
    PlaylistStore::new(PlaybackConfig {
        shuffle_seed: Some(2024),
        ..Default::default()
    })
}

fn abc(store: &mut PlaylistStore) -> cadence_core::PlaylistId {
    let id = store.create_playlist();
    store.add_media(id, MediaItem::song("A", "Artist A")).unwrap();
    store.add_media(id, MediaItem::song("B", "Artist B")).unwrap();
    store.add_media(id, MediaItem::media("C")).unwrap();
    id
}

fn current_title(store: &PlaylistStore, id: cadence_core::PlaylistId) -> String {
    store.get(id).unwrap().current().unwrap().title().to_string()
}

// ===== Sequential Navigation =====

#[test]
fn test_next_walks_to_end_then_stops() {
    let mut store = seeded_store();
    let id = abc(&mut store);

    assert_eq!(
        store.move_next(id).unwrap(),
        Navigation::Moved { index: 1, wrapped: false }
    );
    assert_eq!(current_title(&store, id), "B");

    assert_eq!(
        store.move_next(id).unwrap(),
        Navigation::Moved { index: 2, wrapped: false }
    );
    assert_eq!(current_title(&store, id), "C");

    assert_eq!(
        store.move_next(id).unwrap(),
        Navigation::Boundary(Boundary::End)
    );
    assert_eq!(store.get(id).unwrap().position(), Position::Sequence(2));
}

#[test]
fn test_repeat_wraps_last_to_first() {
    let mut store = seeded_store();
    let id = abc(&mut store);
    store.move_next(id).unwrap();
    store.move_next(id).unwrap();

    assert!(store.toggle_repeat(id).unwrap());
    assert_eq!(
        store.move_next(id).unwrap(),
        Navigation::Moved { index: 0, wrapped: true }
    );
    assert_eq!(current_title(&store, id), "A");
}

#[test]
fn test_previous_from_start() {
    let mut store = seeded_store();
    let id = abc(&mut store);

    assert_eq!(
        store.move_previous(id).unwrap(),
        Navigation::Boundary(Boundary::Start)
    );

    store.toggle_repeat(id).unwrap();
    assert_eq!(
        store.move_previous(id).unwrap(),
        Navigation::Moved { index: 2, wrapped: true }
    );
}

#[test]
fn test_boundary_notices_are_events() {
    let mut store = seeded_store();
    let id = abc(&mut store);
    store.get_mut(id).unwrap().drain_events();

    store.move_previous(id).unwrap();

    let events = store.get_mut(id).unwrap().drain_events();
    assert_eq!(
        events,
        vec![PlaylistEvent::BoundaryReached {
            boundary: Boundary::Start
        }]
    );
}

// ===== Empty Playlist =====

#[test]
fn test_empty_playlist_is_tolerant() {
    let mut store = seeded_store();
    let id = store.create_playlist();

    assert_eq!(
        store.play_current(id).unwrap_err(),
        PlaybackError::NoCurrentTrack
    );
    assert_eq!(store.move_next(id).unwrap(), Navigation::NoSelection);
    assert_eq!(store.move_previous(id).unwrap(), Navigation::NoSelection);
    assert_eq!(store.describe_all(id).unwrap().count(), 0);

    // Mode toggles still work on an empty playlist
    assert!(store.toggle_shuffle(id).unwrap());
    assert!(store.toggle_repeat(id).unwrap());
    assert_eq!(store.move_next(id).unwrap(), Navigation::NoSelection);
}

// ===== Shuffle =====

#[test]
fn test_shuffled_traversal_visits_every_item_once() {
    let mut store = seeded_store();
    let id = store.create_playlist();
    for i in 0..10 {
        store
            .add_media(id, MediaItem::media(format!("Track {}", i)))
            .unwrap();
    }

    store.toggle_shuffle(id).unwrap();

    // Rewind to the first rank, then walk forward
    while store.move_previous(id).unwrap().moved() {}
    let mut visited = vec![store.get(id).unwrap().current_index().unwrap()];
    while let Navigation::Moved { index, .. } = store.move_next(id).unwrap() {
        visited.push(index);
    }

    visited.sort_unstable();
    assert_eq!(visited, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_shuffle_round_trip_restores_index() {
    let mut store = seeded_store();
    let id = abc(&mut store);
    store.move_next(id).unwrap();

    store.toggle_shuffle(id).unwrap();
    store.toggle_shuffle(id).unwrap();

    assert_eq!(store.get(id).unwrap().position(), Position::Sequence(1));
    assert_eq!(current_title(&store, id), "B");
}

#[test]
fn test_moving_while_shuffled_then_unshuffling() {
    let mut store = seeded_store();
    let id = abc(&mut store);
    store.toggle_shuffle(id).unwrap();
    store.toggle_repeat(id).unwrap();

    store.move_next(id).unwrap();
    let title = current_title(&store, id);

    // Unshuffling keeps whichever item the shuffled walk landed on
    store.toggle_shuffle(id).unwrap();
    assert_eq!(current_title(&store, id), title);
}

#[test]
fn test_display_ignores_shuffle() {
    let mut store = seeded_store();
    let id = abc(&mut store);
    store.toggle_shuffle(id).unwrap();
    store.move_next(id).unwrap();

    let rows: Vec<_> = store.describe_all(id).unwrap().collect();
    let described: Vec<String> = rows.iter().map(|r| r.item.describe()).collect();
    assert_eq!(
        described,
        vec![
            "Title: A, Artist: Artist A",
            "Title: B, Artist: Artist B",
            "Title: C",
        ]
    );
    assert_eq!(rows.iter().filter(|r| r.is_current).count(), 1);
}

// ===== Multiple Playlists =====

#[test]
fn test_playlists_are_independent() {
    let mut store = seeded_store();
    let first = abc(&mut store);
    let second = abc(&mut store);

    store.move_next(first).unwrap();
    store.toggle_repeat(second).unwrap();

    assert_eq!(current_title(&store, first), "B");
    assert_eq!(current_title(&store, second), "A");
    assert!(!store.get(first).unwrap().is_repeating());
    assert!(store.get(second).unwrap().is_repeating());
}

#[test]
fn test_delete_then_select_by_number() {
    let mut store = seeded_store();
    let first = abc(&mut store);
    let second = store.create_playlist();
    let third = store.create_playlist();

    store.delete_playlist(first).unwrap();

    assert_eq!(store.select(1).unwrap(), second);
    assert_eq!(store.select(2).unwrap(), third);
    assert_eq!(
        store.select(3).unwrap_err(),
        PlaybackError::InvalidSelection(3)
    );
}
