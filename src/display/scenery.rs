//! Procedural helpers for the highway scenery and the mobile grid.

/// Deterministic pseudo-random value in `[0, 1)` for an integer seed.
///
/// Pure: the same seed always yields the same value, so scenery laid out from
/// it is stable across renders.
#[must_use]
pub fn seeded_hash(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    let fraction = x - x.floor();
    // Guard against rounding up to exactly 1.0.
    if fraction >= 1.0 { 0.0 } else { fraction }
}

/// Direction of a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left.
    Left,
    /// Finger moved left to right.
    Right,
    /// Finger moved bottom to top.
    Up,
    /// Finger moved top to bottom.
    Down,
}

/// Classifies a touch movement as a swipe.
///
/// # Arguments
///
/// * `dx` - Horizontal movement (positive is rightwards)
/// * `dy` - Vertical movement (positive is downwards)
/// * `min_distance` - Minimum movement along the dominant axis
///
/// # Returns
///
/// The swipe direction along the dominant axis, or `None` if the movement is
/// too short, diagonal, or not finite.
#[must_use]
pub fn detect_swipe(dx: f64, dy: f64, min_distance: f64) -> Option<SwipeDirection> {
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }

    let (horizontal, vertical) = (dx.abs(), dy.abs());
    if horizontal > vertical && horizontal >= min_distance {
        Some(if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    } else if vertical > horizontal && vertical >= min_distance {
        Some(if dy < 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        })
    } else {
        None
    }
}
