//! Marker visual encoding scales.

use std::str::FromStr;

use pet_map_license_models::Species;

/// Marker color for species outside the known taxonomy.
pub const DEFAULT_COLOR: &str = "#95a5a6";

/// Smallest rendered circle radius, in pixels.
pub const MIN_RADIUS: f64 = 5.0;

/// Largest rendered circle radius, in pixels.
pub const MAX_RADIUS: f64 = 30.0;

/// Returns the marker color for a species string.
///
/// Total over arbitrary input: the four known species map to their
/// fixed hex colors, anything else (including the empty string) maps to
/// [`DEFAULT_COLOR`].
#[must_use]
pub fn circle_color(species: &str) -> &'static str {
    Species::from_str(species).map_or(DEFAULT_COLOR, Species::color)
}

/// Scales a circle radius linearly with license count.
///
/// The radius is `count / max_count` of [`MAX_RADIUS`], floored at
/// [`MIN_RADIUS`]. `max_count` is the largest aggregate count in the
/// currently displayed view, so radii are relative to the active
/// filter, not the whole dataset. A zero `max_count` (empty view)
/// yields [`MIN_RADIUS`].
#[must_use]
pub fn circle_radius(count: u64, max_count: u64) -> f64 {
    if max_count == 0 {
        return MIN_RADIUS;
    }
    #[allow(clippy::cast_precision_loss)]
    let scaled = (count as f64 / max_count as f64) * MAX_RADIUS;
    scaled.max(MIN_RADIUS)
}
