//! Distance-based audio attenuation for proximity playback.

/// Distance at which a screen falls silent.
pub const DEFAULT_SILENCE_DISTANCE: f64 = 35.0;

/// Volume at zero distance.
pub const DEFAULT_MAX_VOLUME: u32 = 80;

/// Maps a distance to a playback volume with a quadratic ease.
///
/// Loudness falls off slowly near the source and quickly near the silence
/// boundary. The result is non-increasing in `distance` and bounded by
/// `[0, max_volume]`.
///
/// # Arguments
///
/// * `distance` - Distance from the listener to the source
/// * `silence_distance` - Distance at and beyond which the volume is 0
/// * `max_volume` - Volume at distance 0
///
/// # Returns
///
/// `round((1 - d / silence_distance)^2 * max_volume)` with `d` clamped to
/// `[0, silence_distance]`, or 0 for non-finite input or a non-positive
/// silence distance.
#[must_use]
pub fn volume_from_distance(distance: f64, silence_distance: f64, max_volume: u32) -> u32 {
    if !distance.is_finite() || !silence_distance.is_finite() || silence_distance <= 0.0 {
        return 0;
    }

    let distance = distance.clamp(0.0, silence_distance);
    let t = 1.0 - distance / silence_distance;
    let eased = t * t;

    // `eased` is in [0, 1], so the product fits in u32.
    (eased * f64::from(max_volume)).round() as u32
}
