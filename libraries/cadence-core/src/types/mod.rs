//! Domain types for Cadence

pub mod ids;
pub mod media;

pub use ids::PlaylistId;
pub use media::{MediaItem, PlayRequest};
