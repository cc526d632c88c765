#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! ZIP boundary centroid computation and fallback coordinates.
//!
//! Boundary polygons come in as `GeoJSON` features keyed by a ZIP-code
//! property. Each feature gets a display coordinate: the unweighted
//! average of its outer-ring vertices. ZIP codes whose boundary is
//! missing or unusable fall back to a static table of pre-known Seattle
//! coordinates; resolution precedence lives in `pet_map_markers`.

pub mod centroid;
pub mod fallback;

pub use centroid::{ZIP_PROPERTY, calculate_centroid, calculate_zip_centroids};
pub use fallback::seattle_fallback_coordinates;

use serde::{Deserialize, Serialize};

/// A display coordinate in latitude/longitude order.
///
/// Note the axis order: `GeoJSON` positions are `[longitude, latitude]`,
/// but map frontends (Leaflet et al.) take latitude first. The swap
/// happens exactly once, inside [`calculate_centroid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
