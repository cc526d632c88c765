//! Marker derivation and view statistics.

use std::collections::BTreeMap;

use pet_map_analytics::{DEFAULT_TOP_NAMES, ZipAggregate, top_names};
use pet_map_geography::Coordinate;
use pet_map_license_models::{PetRecord, SpeciesFilter};
use serde::{Deserialize, Serialize};

use crate::style::{DEFAULT_COLOR, circle_color, circle_radius};

/// One row of a per-ZIP species breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesCount {
    pub species: String,
    pub count: u64,
    /// Share of the aggregate total, in percent. Full precision here;
    /// callers format to one decimal for display.
    pub percent: f64,
}

/// A map-ready circle marker for one ZIP code.
///
/// Only ZIP codes that resolve to a coordinate (computed centroid or
/// fallback) become markers; the rest of the aggregate set is dropped
/// without error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub zip_code: String,
    pub coordinate: Coordinate,
    /// Circle radius in pixels, scaled relative to the largest count in
    /// the current view.
    pub radius: f64,
    pub color: String,
    pub count: u64,
    pub species_breakdown: Vec<SpeciesCount>,
    /// Pre-formatted popup line, e.g. `"Buddy (3), Max (2), Luna (1)"`.
    /// Empty when no record in the aggregate has a usable name.
    pub top_names: String,
}

/// The statistics panel for the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSummary {
    /// ZIP codes that resolved to a coordinate and were rendered.
    pub zip_codes: usize,
    /// Total licenses across the whole filtered view, mappable or not.
    pub total_licenses: u64,
    /// The "Viewing:" label, `"All Species"` or the species name.
    pub viewing: String,
}

/// Resolves the display coordinate for a ZIP code.
///
/// Computed centroids win; the fallback table is consulted only when no
/// centroid exists for the ZIP.
#[must_use]
pub fn resolve_coordinate(
    zip_code: &str,
    centroids: &BTreeMap<String, Coordinate>,
    fallback: &BTreeMap<String, Coordinate>,
) -> Option<Coordinate> {
    centroids
        .get(zip_code)
        .or_else(|| fallback.get(zip_code))
        .copied()
}

/// Keeps only aggregates whose ZIP code resolves to a coordinate.
#[must_use]
pub fn mappable_data<'a, 'r>(
    aggregates: &'a [ZipAggregate<'r>],
    centroids: &BTreeMap<String, Coordinate>,
    fallback: &BTreeMap<String, Coordinate>,
) -> Vec<&'a ZipAggregate<'r>> {
    aggregates
        .iter()
        .filter(|aggregate| resolve_coordinate(aggregate.zip_code, centroids, fallback).is_some())
        .collect()
}

/// Groups an aggregate's records into per-species counts with shares.
///
/// Rows are ordered descending by count; ties keep the order species
/// were first encountered in the records.
#[must_use]
pub fn species_breakdown(records: &[&PetRecord]) -> Vec<SpeciesCount> {
    let mut rows: Vec<(String, u64)> = Vec::new();
    for record in records {
        match rows.iter_mut().find(|(species, _)| *species == record.species) {
            Some((_, count)) => *count += 1,
            None => rows.push((record.species.clone(), 1)),
        }
    }
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    let total = records.len();
    rows.into_iter()
        .map(|(species, count)| {
            #[allow(clippy::cast_precision_loss)]
            let percent = (count as f64 / total as f64) * 100.0;
            SpeciesCount {
                species,
                count,
                percent,
            }
        })
        .collect()
}

/// Returns the species with the most records in an aggregate.
///
/// Ties go to the species first encountered in record order. `None`
/// only for an empty record set.
#[must_use]
pub fn majority_species(records: &[&PetRecord]) -> Option<String> {
    species_breakdown(records)
        .into_iter()
        .next()
        .map(|row| row.species)
}

/// Derives the full marker set for a filtered view.
///
/// The radius scale's `max_count` is taken over every aggregate in the
/// view, including ones that never resolve to a coordinate. Marker
/// color comes from the active filter's species, or from each
/// aggregate's majority species when viewing all.
#[must_use]
pub fn build_markers(
    aggregates: &[ZipAggregate<'_>],
    centroids: &BTreeMap<String, Coordinate>,
    fallback: &BTreeMap<String, Coordinate>,
    filter: &SpeciesFilter,
) -> Vec<MapMarker> {
    let max_count = aggregates
        .iter()
        .map(ZipAggregate::count)
        .max()
        .unwrap_or(0) as u64;

    let mut markers = Vec::with_capacity(aggregates.len());
    for aggregate in aggregates {
        let Some(coordinate) = resolve_coordinate(aggregate.zip_code, centroids, fallback) else {
            log::debug!("No coordinate for ZIP code {}", aggregate.zip_code);
            continue;
        };

        let color = match filter {
            SpeciesFilter::All => majority_species(&aggregate.records)
                .map_or(DEFAULT_COLOR, |species| circle_color(&species)),
            SpeciesFilter::Only(species) => circle_color(species),
        };

        markers.push(MapMarker {
            zip_code: aggregate.zip_code.to_string(),
            coordinate,
            radius: circle_radius(aggregate.count() as u64, max_count),
            color: color.to_string(),
            count: aggregate.count() as u64,
            species_breakdown: species_breakdown(&aggregate.records),
            top_names: top_names(&aggregate.records, DEFAULT_TOP_NAMES),
        });
    }
    markers
}

/// Computes the statistics panel for the current view.
///
/// The license total covers the whole filtered view, mappable or not;
/// the ZIP count covers only rendered markers.
#[must_use]
pub fn summarize_view(
    aggregates: &[ZipAggregate<'_>],
    markers: &[MapMarker],
    filter: &SpeciesFilter,
) -> ViewSummary {
    ViewSummary {
        zip_codes: markers.len(),
        total_licenses: aggregates.iter().map(|a| a.count() as u64).sum(),
        viewing: filter.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MAX_RADIUS;
    use pet_map_analytics::{filter_by_species, group_by_zip_code};

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    fn sample_records() -> Vec<PetRecord> {
        vec![
            PetRecord::new("Dog", "98101", Some("Buddy")),
            PetRecord::new("Dog", "98101", Some("Buddy")),
            PetRecord::new("Dog", "98101", Some("Max")),
            PetRecord::new("Cat", "98101", Some("Luna")),
            PetRecord::new("Cat", "98102", Some("Whiskers")),
            PetRecord::new("Dog", "98102", Some("Rex")),
        ]
    }

    #[test]
    fn coordinate_resolution_prefers_centroid() {
        let mut centroids = BTreeMap::new();
        centroids.insert("98101".to_string(), coord(47.61, -122.33));
        let mut fallback = BTreeMap::new();
        fallback.insert("98101".to_string(), coord(1.0, 1.0));
        fallback.insert("98102".to_string(), coord(47.63, -122.32));

        let resolved = resolve_coordinate("98101", &centroids, &fallback).unwrap();
        assert!((resolved.lat - 47.61).abs() < 1e-9);

        let fell_back = resolve_coordinate("98102", &centroids, &fallback).unwrap();
        assert!((fell_back.lat - 47.63).abs() < 1e-9);

        assert!(resolve_coordinate("98199", &centroids, &fallback).is_none());
    }

    #[test]
    fn mappable_data_drops_unresolvable_zips() {
        let records = vec![
            PetRecord::new("Dog", "98101", None::<&str>),
            PetRecord::new("Dog", "99999", None::<&str>),
        ];
        let refs = filter_by_species(&records, &SpeciesFilter::All);
        let aggregates = group_by_zip_code(&refs);

        let mut centroids = BTreeMap::new();
        centroids.insert("98101".to_string(), coord(47.61, -122.33));
        let fallback = BTreeMap::new();

        let mappable = mappable_data(&aggregates, &centroids, &fallback);
        assert_eq!(mappable.len(), 1);
        assert_eq!(mappable[0].zip_code, "98101");
    }

    #[test]
    fn breakdown_counts_and_percentages() {
        let records = vec![
            PetRecord::new("Dog", "98101", None::<&str>),
            PetRecord::new("Dog", "98101", None::<&str>),
            PetRecord::new("Dog", "98101", None::<&str>),
            PetRecord::new("Cat", "98101", None::<&str>),
        ];
        let refs: Vec<&PetRecord> = records.iter().collect();
        let breakdown = species_breakdown(&refs);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].species, "Dog");
        assert_eq!(breakdown[0].count, 3);
        assert!((breakdown[0].percent - 75.0).abs() < 1e-9);
        assert_eq!(breakdown[1].species, "Cat");
        assert!((breakdown[1].percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_percentages_sum_to_whole() {
        let records = sample_records();
        let refs: Vec<&PetRecord> = records.iter().collect();
        let total: f64 = species_breakdown(&refs).iter().map(|row| row.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_ties_keep_first_encounter_order() {
        let records = vec![
            PetRecord::new("Goat", "98101", None::<&str>),
            PetRecord::new("Pig", "98101", None::<&str>),
            PetRecord::new("Goat", "98101", None::<&str>),
            PetRecord::new("Pig", "98101", None::<&str>),
        ];
        let refs: Vec<&PetRecord> = records.iter().collect();
        let breakdown = species_breakdown(&refs);
        assert_eq!(breakdown[0].species, "Goat");
        assert_eq!(breakdown[1].species, "Pig");
    }

    #[test]
    fn majority_species_picks_most_records() {
        let records = sample_records();
        let refs: Vec<&PetRecord> = records.iter().collect();
        assert_eq!(majority_species(&refs).as_deref(), Some("Dog"));
    }

    #[test]
    fn majority_species_tie_goes_to_first_encountered() {
        let records = vec![
            PetRecord::new("Cat", "98101", None::<&str>),
            PetRecord::new("Dog", "98101", None::<&str>),
        ];
        let refs: Vec<&PetRecord> = records.iter().collect();
        assert_eq!(majority_species(&refs).as_deref(), Some("Cat"));
    }

    #[test]
    fn majority_species_empty_is_none() {
        assert!(majority_species(&[]).is_none());
    }

    #[test]
    fn markers_carry_visual_encoding() {
        let records = sample_records();
        let refs = filter_by_species(&records, &SpeciesFilter::All);
        let aggregates = group_by_zip_code(&refs);

        let mut centroids = BTreeMap::new();
        centroids.insert("98101".to_string(), coord(47.61, -122.33));
        centroids.insert("98102".to_string(), coord(47.63, -122.32));
        let fallback = BTreeMap::new();

        let markers = build_markers(&aggregates, &centroids, &fallback, &SpeciesFilter::All);
        assert_eq!(markers.len(), 2);

        let first = &markers[0];
        assert_eq!(first.zip_code, "98101");
        assert_eq!(first.count, 4);
        // 98101 is the largest aggregate, so it gets the full radius.
        assert!((first.radius - MAX_RADIUS).abs() < 1e-9);
        // Majority species in 98101 is Dog.
        assert_eq!(first.color, "#e74c3c");
        assert_eq!(first.top_names, "Buddy (2), Max (1), Luna (1)");
        assert_eq!(first.species_breakdown[0].species, "Dog");

        let second = &markers[1];
        assert_eq!(second.count, 2);
        assert!((second.radius - 15.0).abs() < 1e-9);
    }

    #[test]
    fn marker_color_follows_active_filter() {
        let records = sample_records();
        let filter = SpeciesFilter::Only("Cat".to_string());
        let refs = filter_by_species(&records, &filter);
        let aggregates = group_by_zip_code(&refs);

        let mut centroids = BTreeMap::new();
        centroids.insert("98101".to_string(), coord(47.61, -122.33));
        centroids.insert("98102".to_string(), coord(47.63, -122.32));
        let fallback = BTreeMap::new();

        let markers = build_markers(&aggregates, &centroids, &fallback, &filter);
        assert!(markers.iter().all(|marker| marker.color == "#3498db"));
    }

    #[test]
    fn marker_color_defaults_for_unknown_filter() {
        let records = vec![PetRecord::new("Armadillo", "98101", None::<&str>)];
        let filter = SpeciesFilter::Only("Armadillo".to_string());
        let refs = filter_by_species(&records, &filter);
        let aggregates = group_by_zip_code(&refs);

        let mut fallback = BTreeMap::new();
        fallback.insert("98101".to_string(), coord(47.61, -122.33));

        let markers = build_markers(&aggregates, &BTreeMap::new(), &fallback, &filter);
        assert_eq!(markers[0].color, DEFAULT_COLOR);
    }

    #[test]
    fn radius_scale_includes_unmappable_aggregates() {
        // The largest aggregate has no coordinate, but it still sets the
        // radius scale for the rest of the view.
        let mut records = vec![PetRecord::new("Dog", "98101", None::<&str>)];
        for _ in 0..7 {
            records.push(PetRecord::new("Dog", "99999", None::<&str>));
        }
        records.push(PetRecord::new("Dog", "98101", None::<&str>));

        let refs = filter_by_species(&records, &SpeciesFilter::All);
        let aggregates = group_by_zip_code(&refs);

        let mut centroids = BTreeMap::new();
        centroids.insert("98101".to_string(), coord(47.61, -122.33));
        let fallback = BTreeMap::new();

        let markers = build_markers(&aggregates, &centroids, &fallback, &SpeciesFilter::All);
        assert_eq!(markers.len(), 1);
        // 98101 holds 2 of a max of 7 licenses: (2 / 7) * 30 < 10.
        let expected = (2.0 / 7.0) * MAX_RADIUS;
        assert!((markers[0].radius - expected).abs() < 1e-9);
    }

    #[test]
    fn empty_view_builds_no_markers() {
        let aggregates = group_by_zip_code(&[]);
        let markers = build_markers(
            &aggregates,
            &BTreeMap::new(),
            &BTreeMap::new(),
            &SpeciesFilter::All,
        );
        assert!(markers.is_empty());
    }

    #[test]
    fn summary_counts_whole_view() {
        let records = sample_records();
        let refs = filter_by_species(&records, &SpeciesFilter::All);
        let aggregates = group_by_zip_code(&refs);

        // Only 98101 resolves; 98102 stays unmapped but still counts
        // toward the license total.
        let mut centroids = BTreeMap::new();
        centroids.insert("98101".to_string(), coord(47.61, -122.33));
        let fallback = BTreeMap::new();

        let markers = build_markers(&aggregates, &centroids, &fallback, &SpeciesFilter::All);
        let summary = summarize_view(&aggregates, &markers, &SpeciesFilter::All);

        assert_eq!(summary.zip_codes, 1);
        assert_eq!(summary.total_licenses, 6);
        assert_eq!(summary.viewing, "All Species");
    }

    #[test]
    fn summary_labels_species_view() {
        let records = sample_records();
        let filter = SpeciesFilter::Only("Dog".to_string());
        let refs = filter_by_species(&records, &filter);
        let aggregates = group_by_zip_code(&refs);
        let summary = summarize_view(&aggregates, &[], &filter);

        assert_eq!(summary.total_licenses, 4);
        assert_eq!(summary.viewing, "Dog");
    }
}
