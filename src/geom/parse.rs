use crate::util::error::GeoCodeError;
use geo::Centroid;
use geo_types::{Geometry, Point};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, GeoCodeError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, GeoCodeError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| GeoCodeError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => {
            Geometry::try_from(geom).map_err(|e| GeoCodeError::GeometryParseError(e.to_string()))
        }
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| GeoCodeError::GeometryParseError("Feature has no geometry".to_string()))
            .and_then(|g| {
                Geometry::try_from(g).map_err(|e| GeoCodeError::GeometryParseError(e.to_string()))
            }),
        GeoJson::FeatureCollection(_) => Err(GeoCodeError::GeometryParseError(
            "FeatureCollection not supported, use individual geometries".to_string(),
        )),
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, GeoCodeError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| GeoCodeError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        GeoCodeError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

/// Reduces a geometry to the points that get encoded.
///
/// Points and line vertices are kept as they are, polygons are represented by
/// their centroid. Collections are flattened. A geometry that yields no points
/// at all (`LINESTRING EMPTY`, an empty collection) is an error.
pub fn geometry_to_points(geom: Geometry<f64>) -> Result<Vec<Point<f64>>, GeoCodeError> {
    let points = collect_points(geom)?;
    if points.is_empty() {
        return Err(GeoCodeError::GeometryParseError(
            "Geometry has no points".to_string(),
        ));
    }
    Ok(points)
}

fn collect_points(geom: Geometry<f64>) -> Result<Vec<Point<f64>>, GeoCodeError> {
    match geom {
        Geometry::Point(pt) => Ok(vec![pt]),
        Geometry::MultiPoint(mp) => Ok(mp.0),
        Geometry::LineString(line) => Ok(line.points().collect()),
        Geometry::MultiLineString(mls) => Ok(mls
            .0
            .iter()
            .flat_map(|line| line.points())
            .collect()),
        Geometry::Polygon(poly) => Ok(poly.centroid().into_iter().collect()),
        Geometry::MultiPolygon(mp) => Ok(mp.0.iter().filter_map(|poly| poly.centroid()).collect()),
        Geometry::GeometryCollection(gc) => {
            let mut points = Vec::new();
            for g in gc.0 {
                points.extend(collect_points(g)?);
            }
            Ok(points)
        }
        _ => Err(GeoCodeError::GeometryParseError(
            "Unsupported geometry type".to_string(),
        )),
    }
}
