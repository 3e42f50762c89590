//! Presentation mapping
//!
//! No drawing happens here: a host renders `Snapshot::sprites` however it
//! likes.

pub mod snapshot;
pub mod sprites;

pub use snapshot::Snapshot;
pub use sprites::{EntityKey, Shape, Sprite, world_sprites};
