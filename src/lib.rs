//! Showreel - catalog core for a music-video production portfolio
//!
//! The data layer behind the portfolio site: a validated static video catalog,
//! derived artist/portfolio statistics and display lanes, fuzzy search, playback
//! selection (circular navigation and no-repeat shuffle), and the small
//! formatting and attenuation helpers every rendering layer shares.

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod selection;
pub mod state;

// Re-export key types for convenience
pub use {
    catalog::{
        ArtistStats, Catalog, CatalogLoader, CatalogView, Lanes, PortfolioStats, SearchResult,
        VideoRecord,
    },
    config::{SettingsManager, UserSettings},
    error::CatalogError,
    selection::{PlayerSession, RandomSource, SeededRandom, ShuffleHistory, ThreadRandom},
    state::FavoritesStore,
};
