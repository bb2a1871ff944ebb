//! Selection utilities for playback.
//!
//! Provides key-based circular navigation, the sliding-window diverse shuffle
//! with an injectable random source, and a player session that combines them.

pub mod navigation;
pub mod session;
pub mod shuffle;

pub use {
    navigation::{index_of, next_index, prev_index},
    session::PlayerSession,
    shuffle::{RandomSource, SeededRandom, ShuffleHistory, ThreadRandom, pick_diverse},
};
