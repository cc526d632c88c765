#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the pet map toolchain.
//!
//! Fetches the Seattle pet license dataset, exports static map documents,
//! and prints view statistics for a species filter.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use pet_map_analytics::{filter_by_species, group_by_zip_code, unique_species};
use pet_map_geography::{
    Coordinate, ZIP_PROPERTY, calculate_zip_centroids, seattle_fallback_coordinates,
};
use pet_map_license_models::{Species, SpeciesFilter};
use pet_map_markers::{build_markers, species_breakdown, summarize_view};
use pet_map_server_models::{ApiLegendEntry, ApiMarker, ApiStats};
use pet_map_source::{
    FetchOptions, fetch_pet_licenses, load_pet_records, load_zip_boundaries, normalize_socrata,
};

#[derive(Parser)]
#[command(name = "pet_map_cli", about = "Pet license map toolchain")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download pet licenses from the Seattle open data API and write a
    /// cleaned record file
    Fetch {
        /// Directory to write the raw and cleaned files into
        #[arg(long, default_value = "data")]
        output_dir: PathBuf,

        /// Maximum number of records to download
        #[arg(long)]
        limit: Option<u64>,

        /// Only download licenses issued after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,
    },
    /// Export static map documents (species, legend, boundaries, and
    /// per-filter marker bundles)
    Export {
        /// Cleaned pet record JSON file to load
        #[arg(long, default_value = "data/pets_clean_v2.json")]
        pets: PathBuf,

        /// ZIP boundary GeoJSON file to load
        #[arg(long, default_value = "data/seattle_zipcodes.geojson")]
        boundaries: PathBuf,

        /// Directory to write the documents into
        #[arg(long, default_value = "data/generated")]
        output_dir: PathBuf,
    },
    /// Print view statistics for a species filter
    Stats {
        /// Cleaned pet record JSON file to load
        #[arg(long, default_value = "data/pets_clean_v2.json")]
        pets: PathBuf,

        /// ZIP boundary GeoJSON file to load
        #[arg(long, default_value = "data/seattle_zipcodes.geojson")]
        boundaries: PathBuf,

        /// Species filter ("All" or a species name)
        #[arg(long, default_value = "All")]
        species: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            output_dir,
            limit,
            since,
        } => {
            let since = parse_since(since.as_deref())?;
            fetch(output_dir, limit, since).await?;
        }
        Commands::Export {
            pets,
            boundaries,
            output_dir,
        } => {
            export_documents(&pets, &boundaries, &output_dir)?;
        }
        Commands::Stats {
            pets,
            boundaries,
            species,
        } => {
            print_stats(&pets, &boundaries, &species)?;
        }
    }

    Ok(())
}

/// Downloads the raw dataset, then normalizes it into the cleaned record
/// file the server and export commands consume.
async fn fetch(
    output_dir: PathBuf,
    limit: Option<u64>,
    since: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = FetchOptions {
        since,
        limit,
        output_dir,
    };

    let raw_path = fetch_pet_licenses(&options).await?;
    let records = normalize_socrata(&raw_path)?;

    let clean: Vec<serde_json::Value> = records
        .iter()
        .map(|record| {
            serde_json::json!({
                "Species": record.species,
                "ZIP Code": record.zip_code,
                "Name": record.name,
            })
        })
        .collect();

    let clean_path = options.output_dir.join("pets_clean_v2.json");
    std::fs::write(&clean_path, serde_json::to_string(&clean)?)?;
    log::info!(
        "Wrote {} cleaned records to {}",
        records.len(),
        clean_path.display()
    );

    Ok(())
}

/// Writes the static hosting documents: species list, legend, a boundary
/// copy, and one marker bundle per species filter.
fn export_documents(
    pets_path: &Path,
    boundaries_path: &Path,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;

    let records = load_pet_records(pets_path)?;
    let centroids = load_centroids(boundaries_path);
    let fallback = seattle_fallback_coordinates();

    let species_list = unique_species(&records);
    std::fs::write(
        output_dir.join("species.json"),
        serde_json::to_string(&species_list)?,
    )?;

    let legend: Vec<ApiLegendEntry> = Species::all()
        .iter()
        .copied()
        .map(ApiLegendEntry::from)
        .collect();
    std::fs::write(
        output_dir.join("legend.json"),
        serde_json::to_string(&legend)?,
    )?;

    if boundaries_path.exists() {
        std::fs::copy(boundaries_path, output_dir.join("boundaries.geojson"))?;
    } else {
        log::warn!(
            "Skipping boundary copy; {} not found",
            boundaries_path.display()
        );
    }

    let mut filters = vec![SpeciesFilter::All];
    filters.extend(species_list.into_iter().map(SpeciesFilter::Only));

    for filter in &filters {
        let filtered = filter_by_species(&records, filter);
        let aggregates = group_by_zip_code(&filtered);
        let markers = build_markers(&aggregates, &centroids, &fallback, filter);
        let summary = summarize_view(&aggregates, &markers, filter);

        let api_markers: Vec<ApiMarker> = markers.into_iter().map(ApiMarker::from).collect();
        let document = serde_json::json!({
            "stats": ApiStats::from(summary),
            "markers": api_markers,
        });

        let filename = format!("markers_{}.json", filter_slug(filter));
        std::fs::write(output_dir.join(&filename), serde_json::to_string(&document)?)?;
        log::info!("Wrote {filename}");
    }

    log::info!("Export complete: {}", output_dir.display());

    Ok(())
}

/// Prints the view summary and a per-species count table to stdout.
fn print_stats(
    pets_path: &Path,
    boundaries_path: &Path,
    species: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = load_pet_records(pets_path)?;
    let centroids = load_centroids(boundaries_path);
    let fallback = seattle_fallback_coordinates();

    let filter: SpeciesFilter = species.parse()?;
    let filtered = filter_by_species(&records, &filter);
    let aggregates = group_by_zip_code(&filtered);
    let markers = build_markers(&aggregates, &centroids, &fallback, &filter);
    let summary = summarize_view(&aggregates, &markers, &filter);

    println!("Viewing: {}", summary.viewing);
    println!("ZIP codes with data: {}", summary.zip_codes);
    println!("Total licenses: {}", summary.total_licenses);

    let breakdown = species_breakdown(&filtered);
    if !breakdown.is_empty() {
        println!();
        println!("{:<12} {:>8} {:>7}", "SPECIES", "COUNT", "SHARE");
        println!("{}", "-".repeat(29));
        for row in &breakdown {
            println!("{:<12} {:>8} {:>6.1}%", row.species, row.count, row.percent);
        }
    }

    Ok(())
}

/// Parses a `--since` date argument into a UTC timestamp at midnight.
fn parse_since(
    since: Option<&str>,
) -> Result<Option<chrono::DateTime<chrono::Utc>>, Box<dyn std::error::Error>> {
    let Some(text) = since else {
        return Ok(None);
    };

    let date = chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| format!("Invalid --since date '{text}': {e}"))?;

    Ok(Some(date.and_time(chrono::NaiveTime::MIN).and_utc()))
}

/// Loads ZIP centroids from a boundary file, degrading to an empty map when
/// the file is missing or malformed.
fn load_centroids(path: &Path) -> BTreeMap<String, Coordinate> {
    load_zip_boundaries(path).map_or_else(
        |e| {
            log::warn!("Could not load ZIP boundaries from {}: {e}", path.display());
            BTreeMap::new()
        },
        |collection| calculate_zip_centroids(&collection, ZIP_PROPERTY),
    )
}

/// Lowercases a filter label into a filename-safe slug.
fn filter_slug(filter: &SpeciesFilter) -> String {
    match filter {
        SpeciesFilter::All => "all".to_string(),
        SpeciesFilter::Only(species) => species
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_since_accepts_iso_dates() {
        let parsed = parse_since(Some("2023-04-01")).unwrap().unwrap();

        assert_eq!(parsed.to_rfc3339(), "2023-04-01T00:00:00+00:00");
    }

    #[test]
    fn parse_since_rejects_other_formats() {
        assert!(parse_since(Some("04/01/2023")).is_err());
    }

    #[test]
    fn parse_since_passes_through_none() {
        assert!(parse_since(None).unwrap().is_none());
    }

    #[test]
    fn filter_slugs_are_filename_safe() {
        assert_eq!(filter_slug(&SpeciesFilter::All), "all");
        assert_eq!(filter_slug(&SpeciesFilter::Only("Dog".to_string())), "dog");
        assert_eq!(
            filter_slug(&SpeciesFilter::Only("Pot-bellied Pig".to_string())),
            "pot_bellied_pig"
        );
    }
}
