//! Client-side state that outlives a single page view.
//!
//! This module provides the favorites store, the only piece of state
//! persisted between sessions.

pub mod favorites;

pub use favorites::{FavoritesError, FavoritesStore};
