#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Pet-license data loaders.
//!
//! Concrete loaders for the shapes the Seattle license data arrives in:
//! the pre-cleaned JSON dataset, the official CSV export, and raw
//! Socrata SODA pages, plus the ZIP boundary `GeoJSON`. Every loader
//! produces [`pet_map_license_models::PetRecord`]s; field-name variance
//! and ZIP+4 suffixes never leave this crate.

pub mod boundaries;
pub mod clean_json;
pub mod csv_export;
pub mod socrata;

mod normalize;

use std::path::PathBuf;

pub use boundaries::{load_zip_boundaries, parse_zip_boundaries};
pub use clean_json::{load_pet_records, parse_pet_records};
pub use csv_export::{load_pet_records_csv, parse_pet_records_csv};
pub use socrata::{
    PET_LICENSES_API_URL, fetch_pet_licenses, normalize_socrata, parse_socrata_records,
};

/// Errors that can occur while loading or fetching pet-license data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing failed.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// `GeoJSON` parsing failed.
    #[error("GeoJSON parse error: {0}")]
    Geojson(#[from] geojson::Error),

    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for fetching data from the upstream dataset.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Only fetch records newer than this timestamp.
    pub since: Option<chrono::DateTime<chrono::Utc>>,
    /// Maximum number of records to fetch.
    pub limit: Option<u64>,
    /// Directory to store downloaded files.
    pub output_dir: PathBuf,
}
