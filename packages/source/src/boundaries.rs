//! ZIP boundary loader.

use std::path::Path;

use geojson::FeatureCollection;

use crate::SourceError;

/// Parses `GeoJSON` text into a boundary `FeatureCollection`.
///
/// # Errors
///
/// Returns [`SourceError::Geojson`] if the text is not a valid feature
/// collection.
pub fn parse_zip_boundaries(geojson_text: &str) -> Result<FeatureCollection, SourceError> {
    let collection: FeatureCollection = geojson_text.parse()?;
    Ok(collection)
}

/// Loads the ZIP boundary collection from disk.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or parsed.
pub fn load_zip_boundaries(path: &Path) -> Result<FeatureCollection, SourceError> {
    let geojson_text = std::fs::read_to_string(path)?;
    let collection = parse_zip_boundaries(&geojson_text)?;
    log::info!(
        "Loaded {} boundary features from {}",
        collection.features.len(),
        path.display()
    );
    Ok(collection)
}
