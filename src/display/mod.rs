//! Presentation helpers shared by every rendering layer.
//!
//! Pure, stateless functions: compact view counts, relative upload ages, the
//! distance-to-volume curve, and procedural scenery/gesture helpers.

pub mod attenuation;
pub mod format;
pub mod scenery;

pub use {
    attenuation::{DEFAULT_MAX_VOLUME, DEFAULT_SILENCE_DISTANCE, volume_from_distance},
    format::{format_relative_age, format_relative_age_now, format_view_count},
    scenery::{SwipeDirection, detect_swipe, seeded_hash},
};
