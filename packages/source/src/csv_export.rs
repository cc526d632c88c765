//! Loader for the official data.seattle.gov CSV export.
//!
//! The published export carries issue dates, license numbers, and breed
//! columns the map never uses; only species, ZIP code, and name
//! survive, run through the shared cleaning rules.

use std::path::Path;

use pet_map_license_models::PetRecord;
use serde::Deserialize;

use crate::SourceError;
use crate::normalize::clean_record;

/// One row of the published Seattle Pet Licenses CSV.
#[derive(Debug, Deserialize)]
struct RawCsvLicense {
    #[serde(rename = "Species")]
    species: Option<String>,
    #[serde(rename = "ZIP Code")]
    zip_code: Option<String>,
    #[serde(rename = "Animal's Name")]
    name: Option<String>,
}

/// Parses CSV text in the official export schema into cleaned records.
///
/// Rows with an empty species or ZIP code are dropped; ZIP+4 values are
/// truncated to their five-digit prefix.
///
/// # Errors
///
/// Returns [`SourceError::Csv`] if the CSV is malformed.
pub fn parse_pet_records_csv(csv_text: &str) -> Result<Vec<PetRecord>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<RawCsvLicense>() {
        let raw = row?;
        if let Some(record) = clean_record(
            raw.species.as_deref().unwrap_or(""),
            raw.zip_code.as_deref().unwrap_or(""),
            raw.name.as_deref(),
        ) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Loads pet records from a CSV export on disk.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or parsed.
pub fn load_pet_records_csv(path: &Path) -> Result<Vec<PetRecord>, SourceError> {
    let csv_text = std::fs::read_to_string(path)?;
    let records = parse_pet_records_csv(&csv_text)?;
    log::info!(
        "Loaded {} pet records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
