//! HTTP handler functions for the pet map API.

use actix_web::{HttpResponse, web};
use pet_map_analytics::{filter_by_species, group_by_zip_code, unique_species};
use pet_map_license_models::{Species, SpeciesFilter};
use pet_map_markers::{build_markers, summarize_view};
use pet_map_server_models::{ApiHealth, ApiLegendEntry, ApiMarker, ApiStats, FilterQueryParams};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/species`
///
/// Returns the distinct species present in the loaded data, sorted.
pub async fn species(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(unique_species(&state.records))
}

/// `GET /api/legend`
///
/// Returns the known species with display label and color, in legend
/// order.
pub async fn legend() -> HttpResponse {
    let entries: Vec<ApiLegendEntry> = Species::all()
        .iter()
        .copied()
        .map(ApiLegendEntry::from)
        .collect();
    HttpResponse::Ok().json(entries)
}

/// `GET /api/markers`
///
/// Derives the marker set for the requested species filter. The view is
/// recomputed eagerly per request; the pipeline is a single pass over
/// the loaded records.
pub async fn markers(
    state: web::Data<AppState>,
    params: web::Query<FilterQueryParams>,
) -> HttpResponse {
    let filter = parse_filter(&params);
    let filtered = filter_by_species(&state.records, &filter);
    let aggregates = group_by_zip_code(&filtered);
    let markers = build_markers(&aggregates, &state.centroids, &state.fallback, &filter);
    let api_markers: Vec<ApiMarker> = markers.into_iter().map(ApiMarker::from).collect();
    HttpResponse::Ok().json(api_markers)
}

/// `GET /api/stats`
///
/// Returns the statistics panel values for the requested filter.
pub async fn stats(
    state: web::Data<AppState>,
    params: web::Query<FilterQueryParams>,
) -> HttpResponse {
    let filter = parse_filter(&params);
    let filtered = filter_by_species(&state.records, &filter);
    let aggregates = group_by_zip_code(&filtered);
    let markers = build_markers(&aggregates, &state.centroids, &state.fallback, &filter);
    let summary = summarize_view(&aggregates, &markers, &filter);
    HttpResponse::Ok().json(ApiStats::from(summary))
}

/// `GET /api/boundaries`
///
/// Serves the raw boundary `GeoJSON`. Responds 404 when the boundary
/// file failed to load; the frontend then renders markers without
/// polygon overlays.
pub async fn boundaries(state: web::Data<AppState>) -> HttpResponse {
    state.boundaries.as_ref().map_or_else(
        || {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": "ZIP boundaries unavailable"
            }))
        },
        |geojson| {
            HttpResponse::Ok()
                .content_type("application/json")
                .body(geojson.clone())
        },
    )
}

/// Parses the species query parameter into a filter. A missing
/// parameter means no filter.
fn parse_filter(params: &FilterQueryParams) -> SpeciesFilter {
    params.species.as_deref().map_or(SpeciesFilter::All, |s| {
        s.parse().unwrap_or(SpeciesFilter::All)
    })
}
