#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the pet map application.
//!
//! Loads the pet license records and ZIP boundary `GeoJSON` once at
//! startup, then serves the REST API the map frontend consumes: marker
//! sets per species filter, view statistics, the legend, and a raw
//! boundary passthrough. Marker derivation runs eagerly per request
//! over state that is shared across workers and never mutated.

mod handlers;

use std::collections::BTreeMap;
use std::path::Path;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::web::Bytes;
use actix_web::{App, HttpServer, middleware, web};
use pet_map_geography::{
    Coordinate, ZIP_PROPERTY, calculate_zip_centroids, seattle_fallback_coordinates,
};
use pet_map_license_models::PetRecord;
use pet_map_source::{load_pet_records, parse_zip_boundaries};

/// Shared application state.
pub struct AppState {
    /// Every loaded pet license record.
    pub records: Vec<PetRecord>,
    /// ZIP centroids computed from the boundary polygons.
    pub centroids: BTreeMap<String, Coordinate>,
    /// Static Seattle fallback coordinates.
    pub fallback: BTreeMap<String, Coordinate>,
    /// Raw boundary `GeoJSON` served as-is by the passthrough endpoint.
    /// `None` when the boundary load failed; the map then runs on
    /// fallback coordinates alone.
    pub boundaries: Option<Bytes>,
}

/// Loads boundary state from the `GeoJSON` file at `path`.
///
/// Any failure here degrades instead of propagating: centroids stay
/// empty, the passthrough endpoint reports the collection unavailable,
/// and markers resolve through the fallback table.
fn load_boundary_state(
    path: &Path,
    zip_property: &str,
) -> (BTreeMap<String, Coordinate>, Option<Bytes>) {
    let geojson_text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Could not read ZIP boundaries from {}: {e}", path.display());
            return (BTreeMap::new(), None);
        }
    };

    match parse_zip_boundaries(&geojson_text) {
        Ok(collection) => {
            let centroids = calculate_zip_centroids(&collection, zip_property);
            log::info!(
                "Computed {} ZIP centroids from {} boundary features",
                centroids.len(),
                collection.features.len()
            );
            (centroids, Some(Bytes::from(geojson_text)))
        }
        Err(e) => {
            log::warn!("Could not parse ZIP boundaries: {e}");
            (BTreeMap::new(), None)
        }
    }
}

/// Starts the pet map API server.
///
/// Loads pet records and ZIP boundaries concurrently, builds the shared
/// state, and starts the Actix-Web HTTP server. This is a regular async
/// function; the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
///
/// # Panics
///
/// Panics if the pet record load fails. A missing or malformed boundary
/// file is not fatal; the server degrades to fallback coordinates.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let pet_data_path =
        std::env::var("PET_DATA_PATH").unwrap_or_else(|_| "data/pets_clean_v2.json".to_string());
    let boundary_path = std::env::var("BOUNDARY_DATA_PATH")
        .unwrap_or_else(|_| "data/seattle_zipcodes.geojson".to_string());
    let zip_property =
        std::env::var("BOUNDARY_ZIP_PROPERTY").unwrap_or_else(|_| ZIP_PROPERTY.to_string());
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "app/dist".to_string());

    log::info!("Loading pet records from {pet_data_path}...");
    let pets_task =
        tokio::task::spawn_blocking(move || load_pet_records(Path::new(&pet_data_path)));

    log::info!("Loading ZIP boundaries from {boundary_path}...");
    let boundaries_task = tokio::task::spawn_blocking(move || {
        load_boundary_state(Path::new(&boundary_path), &zip_property)
    });

    let (records, boundary_state) = tokio::join!(pets_task, boundaries_task);
    let records = records
        .expect("Pet record load panicked")
        .expect("Failed to load pet records");
    let (centroids, boundaries) = boundary_state.expect("Boundary load panicked");
    log::info!("Loaded {} pet records", records.len());

    let state = web::Data::new(AppState {
        records,
        centroids,
        fallback: seattle_fallback_coordinates(),
        boundaries,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/species", web::get().to(handlers::species))
                    .route("/legend", web::get().to(handlers::legend))
                    .route("/markers", web::get().to(handlers::markers))
                    .route("/stats", web::get().to(handlers::stats))
                    .route("/boundaries", web::get().to(handlers::boundaries)),
            )
            // Serve frontend static files (production)
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
