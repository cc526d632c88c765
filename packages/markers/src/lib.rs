#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Derives map-ready circle markers from aggregated license data.
//!
//! Joins per-ZIP aggregates with their resolved coordinates and computes
//! each marker's visual encoding: proportional radius, species color,
//! species breakdown, and top pet names, plus the view-level statistics
//! panel. Everything here is pure derivation over borrowed aggregates
//! and is recomputed in full whenever the species filter changes.

pub mod marker;
pub mod style;

pub use marker::{
    MapMarker, SpeciesCount, ViewSummary, build_markers, majority_species, mappable_data,
    resolve_coordinate, species_breakdown, summarize_view,
};
pub use style::{DEFAULT_COLOR, MAX_RADIUS, MIN_RADIUS, circle_color, circle_radius};
