#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the pet map server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the derivation types so the API contract can evolve
//! independently of the marker pipeline.

use pet_map_license_models::Species;
use pet_map_markers::{MapMarker, SpeciesCount, ViewSummary};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Query parameters shared by the markers and stats endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQueryParams {
    /// Species filter value; `"All"` or omitted means no filter.
    pub species: Option<String>,
}

/// A map marker as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMarker {
    /// ZIP code the marker represents.
    pub zip_code: String,
    /// Marker latitude.
    pub lat: f64,
    /// Marker longitude.
    pub lng: f64,
    /// Circle radius in pixels.
    pub radius: f64,
    /// Circle color as a hex string.
    pub color: String,
    /// License count behind the marker.
    pub count: u64,
    /// Per-species counts for the marker's popup.
    pub species_breakdown: Vec<ApiSpeciesCount>,
    /// Pre-formatted top-names popup line.
    pub top_names: String,
}

impl From<MapMarker> for ApiMarker {
    fn from(marker: MapMarker) -> Self {
        Self {
            zip_code: marker.zip_code,
            lat: marker.coordinate.lat,
            lng: marker.coordinate.lng,
            radius: marker.radius,
            color: marker.color,
            count: marker.count,
            species_breakdown: marker
                .species_breakdown
                .into_iter()
                .map(ApiSpeciesCount::from)
                .collect(),
            top_names: marker.top_names,
        }
    }
}

/// Count of licenses for a single species within a marker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpeciesCount {
    /// Species name.
    pub species: String,
    /// Number of licenses.
    pub count: u64,
    /// Share of the marker total, in percent.
    pub percent: f64,
}

impl From<SpeciesCount> for ApiSpeciesCount {
    fn from(row: SpeciesCount) -> Self {
        Self {
            species: row.species,
            count: row.count,
            percent: row.percent,
        }
    }
}

/// One entry of the map legend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLegendEntry {
    /// Species the entry styles.
    pub species: Species,
    /// Plural display label (e.g. `"Dogs"`).
    pub label: String,
    /// Legend swatch color as a hex string.
    pub color: String,
}

impl From<Species> for ApiLegendEntry {
    fn from(species: Species) -> Self {
        Self {
            label: species.plural_label().to_string(),
            color: species.color().to_string(),
            species,
        }
    }
}

/// View statistics as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStats {
    /// ZIP codes rendered on the map.
    pub zip_codes: u64,
    /// Total licenses in the filtered view.
    pub total_licenses: u64,
    /// The "Viewing:" label.
    pub viewing: String,
}

impl From<ViewSummary> for ApiStats {
    fn from(summary: ViewSummary) -> Self {
        Self {
            zip_codes: summary.zip_codes as u64,
            total_licenses: summary.total_licenses,
            viewing: summary.viewing,
        }
    }
}
