//! Static fallback coordinates for Seattle ZIP codes.
//!
//! Pre-known display coordinates covering the ZIP codes that appear in
//! the license data. Used only when no centroid could be computed from
//! the boundary file for that ZIP code; a computed centroid always
//! wins. Built as a plain value so callers inject it where they need
//! it instead of reaching for a global.

use std::collections::BTreeMap;

use crate::Coordinate;

/// Seattle ZIP codes with approximate (latitude, longitude) centers.
const SEATTLE_FALLBACKS: &[(&str, f64, f64)] = &[
    ("98101", 47.6062, -122.3321),
    ("98102", 47.6308, -122.3222),
    ("98103", 47.6769, -122.3419),
    ("98104", 47.6020, -122.3311),
    ("98105", 47.6617, -122.3006),
    ("98106", 47.5319, -122.3433),
    ("98107", 47.6683, -122.3761),
    ("98108", 47.5322, -122.3158),
    ("98109", 47.6244, -122.3517),
    ("98112", 47.6342, -122.3022),
    ("98115", 47.6847, -122.3006),
    ("98116", 47.5694, -122.3867),
    ("98117", 47.6883, -122.3867),
    ("98118", 47.5411, -122.2639),
    ("98119", 47.6358, -122.3597),
    ("98121", 47.6133, -122.3444),
    ("98122", 47.6019, -122.3069),
    ("98125", 47.7267, -122.3017),
    ("98126", 47.5333, -122.3733),
    ("98133", 47.7336, -122.3439),
    ("98134", 47.5844, -122.3256),
    ("98136", 47.5267, -122.3681),
    ("98144", 47.5847, -122.2950),
    ("98146", 47.4889, -122.3431),
    ("98155", 47.7553, -122.3000),
    ("98168", 47.4811, -122.2928),
    ("98177", 47.7336, -122.3758),
    ("98178", 47.5019, -122.2417),
    ("98199", 47.6564, -122.4089),
];

/// Builds the fallback coordinate table for Seattle ZIP codes.
///
/// The result is a plain owned map; construct it once and pass it to
/// the marker-derivation functions that need it.
#[must_use]
pub fn seattle_fallback_coordinates() -> BTreeMap<String, Coordinate> {
    SEATTLE_FALLBACKS
        .iter()
        .map(|&(zip, lat, lng)| (zip.to_string(), Coordinate::new(lat, lng)))
        .collect()
}
