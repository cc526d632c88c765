//! Loader for the pre-cleaned JSON dataset.
//!
//! The dataset the map was originally built around: an array of objects
//! with `"Species"`, `"ZIP Code"`, and `"Name"` keys, already cleaned
//! upstream. Fields pass through untouched so name rankings see names
//! exactly as recorded.

use std::path::Path;

use pet_map_license_models::PetRecord;
use serde::Deserialize;

use crate::SourceError;

/// One entry of the cleaned dataset.
#[derive(Debug, Deserialize)]
struct RawCleanRecord {
    #[serde(rename = "Species")]
    species: String,
    #[serde(rename = "ZIP Code")]
    zip_code: String,
    #[serde(rename = "Name", default)]
    name: Option<String>,
}

/// Parses cleaned-dataset JSON text into records.
///
/// # Errors
///
/// Returns [`SourceError::Json`] if the text is not an array of entries
/// with the expected keys.
pub fn parse_pet_records(json: &str) -> Result<Vec<PetRecord>, SourceError> {
    let raw: Vec<RawCleanRecord> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|entry| PetRecord::new(entry.species, entry.zip_code, entry.name))
        .collect())
}

/// Loads pet records from a cleaned-dataset JSON file.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or parsed.
pub fn load_pet_records(path: &Path) -> Result<Vec<PetRecord>, SourceError> {
    let json = std::fs::read_to_string(path)?;
    let records = parse_pet_records(&json)?;
    log::info!(
        "Loaded {} pet records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
