//! Video catalog system.
//!
//! This module provides the foundation for working with the static video catalog,
//! including loading and validation, derived views, and fuzzy search.

pub mod loader;
pub mod models;
pub mod search;
pub mod views;

#[cfg(test)]
mod catalog_tests;

pub use {
    loader::{Catalog, CatalogLoader, CatalogSettings, validate_catalog},
    models::{
        ArtistStats, CollaborationEdge, EraBucket, Lanes, PortfolioStats, PulsePoint,
        SearchResult, TopArtist, VideoRecord,
    },
    search::{SEARCH_RESULT_LIMIT, search_catalog, similarity},
    views::{CatalogView, DEFAULT_POPULAR_THRESHOLD},
};
