//! Vertex-average centroid computation for boundary polygons.
//!
//! This is deliberately the simple "centroid of vertices" (the float
//! average of the outer ring's points), not an area-weighted polygon
//! centroid. It places a marker well enough for ZIP-sized areas and
//! degrades to `None` instead of failing on malformed geometry.

use std::collections::BTreeMap;

use geojson::{FeatureCollection, Geometry, JsonValue, Value};

use crate::Coordinate;

/// The boundary feature property that carries the ZIP code
/// (Census ZCTA naming, as shipped in the Seattle boundary file).
pub const ZIP_PROPERTY: &str = "ZCTA5CE10";

/// Computes the vertex-average centroid of a polygon geometry.
///
/// `MultiPolygon` geometries contribute only their first polygon; this
/// is a deliberate simplification, not a pick of the largest part. Only the
/// first (outer) ring is read; holes are ignored. The ring's closing
/// point duplicates its first point and is excluded from the average.
/// Positions with fewer than two components are skipped and do not
/// count toward the divisor.
///
/// Returns `None` for empty or missing rings, for geometries that are
/// not areal (points, lines), and when no valid position remains after
/// skipping. Never panics: failure is reported exclusively as `None`.
#[must_use]
pub fn calculate_centroid(geometry: &Geometry) -> Option<Coordinate> {
    let ring = outer_ring(geometry)?;
    if ring.is_empty() {
        return None;
    }

    let mut lat_sum = 0.0;
    let mut lng_sum = 0.0;
    let mut valid_points: u32 = 0;

    // Skip the last position: it closes the ring.
    for position in &ring[..ring.len() - 1] {
        if position.len() >= 2 {
            lng_sum += position[0];
            lat_sum += position[1];
            valid_points += 1;
        }
    }

    if valid_points == 0 {
        return None;
    }

    let divisor = f64::from(valid_points);
    Some(Coordinate::new(lat_sum / divisor, lng_sum / divisor))
}

/// Extracts the outer ring of the first polygon, if any.
fn outer_ring(geometry: &Geometry) -> Option<&[Vec<f64>]> {
    let ring = match &geometry.value {
        Value::Polygon(rings) => rings.first(),
        Value::MultiPolygon(polygons) => polygons.first()?.first(),
        _ => None,
    };
    ring.map(Vec::as_slice)
}

/// Computes a centroid for every usable boundary feature in the
/// collection, keyed by the ZIP code read from `zip_property`
/// (usually [`ZIP_PROPERTY`]).
///
/// Features with a missing or non-string ZIP property, a missing
/// geometry, or an uncomputable centroid are simply absent from the
/// result; no error is surfaced. An empty collection yields an empty
/// map.
#[must_use]
pub fn calculate_zip_centroids(
    collection: &FeatureCollection,
    zip_property: &str,
) -> BTreeMap<String, Coordinate> {
    let mut centroids = BTreeMap::new();

    for feature in &collection.features {
        let Some(zip_code) = feature.property(zip_property).and_then(JsonValue::as_str) else {
            continue;
        };
        let Some(geometry) = &feature.geometry else {
            continue;
        };

        if let Some(centroid) = calculate_centroid(geometry) {
            centroids.insert(zip_code.to_string(), centroid);
        } else {
            log::warn!("No usable centroid for ZIP boundary {zip_code}");
        }
    }

    centroids
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::Feature;

    fn square_ring() -> Vec<Vec<f64>> {
        vec![
            vec![-122.3, 47.6],
            vec![-122.2, 47.6],
            vec![-122.2, 47.7],
            vec![-122.3, 47.7],
            vec![-122.3, 47.6],
        ]
    }

    fn polygon(ring: Vec<Vec<f64>>) -> Geometry {
        Geometry::new(Value::Polygon(vec![ring]))
    }

    fn feature(zip: &str, geometry: Option<Geometry>) -> Feature {
        let mut properties = geojson::JsonObject::new();
        properties.insert(ZIP_PROPERTY.to_string(), JsonValue::from(zip));
        Feature {
            bbox: None,
            geometry,
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    #[test]
    fn centroid_of_square() {
        let centroid = calculate_centroid(&polygon(square_ring())).unwrap();
        assert!((centroid.lat - 47.65).abs() < 1e-9);
        assert!((centroid.lng - -122.25).abs() < 1e-9);
    }

    #[test]
    fn multi_polygon_uses_first_polygon() {
        let geometry = Geometry::new(Value::MultiPolygon(vec![
            vec![square_ring()],
            vec![vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 0.0]]],
        ]));
        let centroid = calculate_centroid(&geometry).unwrap();
        assert!((centroid.lat - 47.65).abs() < 1e-9);
        assert!((centroid.lng - -122.25).abs() < 1e-9);
    }

    #[test]
    fn empty_ring_yields_none() {
        assert!(calculate_centroid(&polygon(Vec::new())).is_none());
    }

    #[test]
    fn polygon_without_rings_yields_none() {
        let geometry = Geometry::new(Value::Polygon(Vec::new()));
        assert!(calculate_centroid(&geometry).is_none());
    }

    #[test]
    fn non_areal_geometry_yields_none() {
        let point = Geometry::new(Value::Point(vec![-122.3, 47.6]));
        assert!(calculate_centroid(&point).is_none());
    }

    #[test]
    fn short_positions_are_skipped() {
        // One-component position must not count toward the divisor.
        let ring = vec![
            vec![-122.3, 47.6],
            vec![-122.1],
            vec![-122.2, 47.7],
            vec![-122.3, 47.6],
        ];
        let centroid = calculate_centroid(&polygon(ring)).unwrap();
        assert!((centroid.lat - 47.65).abs() < 1e-9);
        assert!((centroid.lng - -122.25).abs() < 1e-9);
    }

    #[test]
    fn all_positions_short_yields_none() {
        let ring = vec![vec![-122.3], vec![47.6], vec![-122.3]];
        assert!(calculate_centroid(&polygon(ring)).is_none());
    }

    #[test]
    fn zip_centroids_keyed_by_property() {
        let other_square = vec![
            vec![-122.4, 47.5],
            vec![-122.3, 47.5],
            vec![-122.3, 47.6],
            vec![-122.4, 47.6],
            vec![-122.4, 47.5],
        ];
        let collection = FeatureCollection {
            bbox: None,
            features: vec![
                feature("98101", Some(polygon(square_ring()))),
                feature("98102", Some(polygon(other_square))),
                feature("98103", None),
            ],
            foreign_members: None,
        };

        let centroids = calculate_zip_centroids(&collection, ZIP_PROPERTY);
        assert_eq!(centroids.len(), 2);
        assert!((centroids["98101"].lat - 47.65).abs() < 1e-9);
        assert!((centroids["98102"].lng - -122.35).abs() < 1e-9);
        assert!(!centroids.contains_key("98103"));
    }

    #[test]
    fn missing_property_is_skipped() {
        let bare = Feature {
            bbox: None,
            geometry: Some(polygon(square_ring())),
            id: None,
            properties: None,
            foreign_members: None,
        };
        let collection = FeatureCollection {
            bbox: None,
            features: vec![bare],
            foreign_members: None,
        };
        assert!(calculate_zip_centroids(&collection, ZIP_PROPERTY).is_empty());
    }

    #[test]
    fn empty_collection_yields_empty_map() {
        let collection = FeatureCollection {
            bbox: None,
            features: Vec::new(),
            foreign_members: None,
        };
        assert!(calculate_zip_centroids(&collection, ZIP_PROPERTY).is_empty());
    }
}
