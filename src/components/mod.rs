//! The components module contains the player widget and its pieces.

pub(crate) mod audio_manager;
mod icons;
mod player;

pub use icons::*;
pub use player::*;
