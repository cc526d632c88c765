//! Socrata SODA fetcher for the Seattle Pet Licenses dataset.
//!
//! Paginated fetching with the `$limit`, `$offset`, `$order`, and
//! `$where` query parameters, writing the raw pages to disk for a
//! separate normalization pass.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use pet_map_license_models::PetRecord;
use serde::Deserialize;

use crate::normalize::clean_record;
use crate::{FetchOptions, SourceError};

/// SODA resource URL for the Seattle Pet Licenses dataset.
pub const PET_LICENSES_API_URL: &str = "https://data.seattle.gov/resource/jguv-t9rb.json";

/// Column used for `$order` and the `since` watermark.
const DATE_COLUMN: &str = "license_issue_date";

/// Filename the raw download is written to.
pub const RAW_FILENAME: &str = "seattle_pet_licenses.json";

const PAGE_SIZE: u64 = 50_000;

/// Fetches the dataset with pagination, writes the raw JSON to the
/// output directory, and returns the output path.
///
/// # Errors
///
/// Returns [`SourceError`] if HTTP requests or file I/O fail.
pub async fn fetch_pet_licenses(options: &FetchOptions) -> Result<PathBuf, SourceError> {
    let output_path = options.output_dir.join(RAW_FILENAME);
    std::fs::create_dir_all(&options.output_dir)?;

    let client = reqwest::Client::new();
    let mut all_records: Vec<serde_json::Value> = Vec::new();
    let mut offset: u64 = 0;
    let fetch_limit = options.limit.unwrap_or(u64::MAX);

    loop {
        let remaining = fetch_limit.saturating_sub(offset);
        if remaining == 0 {
            break;
        }
        let page_limit = remaining.min(PAGE_SIZE);

        let mut url = format!(
            "{PET_LICENSES_API_URL}?$limit={page_limit}&$offset={offset}&$order={DATE_COLUMN} DESC"
        );
        if let Some(since) = &options.since {
            let since_str = since.format("%Y-%m-%dT%H:%M:%S").to_string();
            write!(url, "&$where={DATE_COLUMN} > '{since_str}'").unwrap();
        }

        log::info!("Fetching pet licenses: offset={offset}, limit={page_limit}");
        let response = client.get(&url).send().await?;
        let records: Vec<serde_json::Value> = response.json().await?;

        let count = records.len() as u64;
        if count == 0 {
            break;
        }

        all_records.extend(records);
        offset += count;

        if count < page_limit {
            break;
        }
    }

    log::info!("Downloaded {} pet license records total", all_records.len());
    let json = serde_json::to_string(&all_records)?;
    std::fs::write(&output_path, json)?;

    Ok(output_path)
}

/// One raw record as served by the SODA API.
///
/// The API exposes more columns (issue date, license number, breeds);
/// everything the map ignores is skipped at deserialization.
#[derive(Debug, Deserialize)]
struct RawSocrataLicense {
    #[serde(default)]
    species: Option<String>,
    #[serde(default)]
    zip_code: Option<String>,
    #[serde(default)]
    animal_s_name: Option<String>,
}

/// Parses raw SODA JSON into cleaned records.
///
/// Rows missing a species or ZIP code are dropped; ZIP+4 values are
/// truncated to their five-digit prefix.
///
/// # Errors
///
/// Returns [`SourceError::Json`] if the JSON is malformed.
pub fn parse_socrata_records(json: &str) -> Result<Vec<PetRecord>, SourceError> {
    let raw: Vec<RawSocrataLicense> = serde_json::from_str(json)?;
    Ok(raw
        .iter()
        .filter_map(|entry| {
            clean_record(
                entry.species.as_deref().unwrap_or(""),
                entry.zip_code.as_deref().unwrap_or(""),
                entry.animal_s_name.as_deref(),
            )
        })
        .collect())
}

/// Reads a raw SODA download and normalizes it into records.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or parsed.
pub fn normalize_socrata(path: &Path) -> Result<Vec<PetRecord>, SourceError> {
    let json = std::fs::read_to_string(path)?;
    let records = parse_socrata_records(&json)?;
    log::info!(
        "Normalized {} pet records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}
