use crate::core::bits::interleave;
use crate::core::encoder::encode_axes;
use crate::io::arrow::GeoCodesToArrow;
use crate::io::parquet::GeoCodesToGeoParquet;
use crate::util::coord::Coordinate;
use crate::util::error::GeoCodeError;
use arrow_array::RecordBatch;
use geo_types::Point;
use geoarrow_array::array::PointArray;
use std::cmp::Ordering;
use std::path::Path;

/// A WGS84 position together with its 64-bit Z-order code.
///
/// # Example
///
/// ```
/// use geocode64_rs::GeoCode;
///
/// # fn main() -> Result<(), geocode64_rs::GeoCodeError> {
/// let sydney = GeoCode::from_lat_lon(-33.8688, 151.2093)?;
/// assert_eq!(sydney.code, 3252046221964352);
///
/// // Tuples and points are read as (lon, lat)
/// let same = GeoCode::from_wgs84(&(151.2093, -33.8688))?;
/// assert_eq!(sydney, same);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCode {
    /// Interleaved code: latitude on even bits, longitude on odd bits
    pub code: u64,
    /// Encoded position, x = longitude and y = latitude
    pub position: Point<f64>,
    /// Latitude scaled to 26 bits
    pub lat_index: u32,
    /// Longitude scaled to 26 bits
    pub lon_index: u32,
}

impl GeoCode {
    /// Encodes a latitude/longitude pair given in that order.
    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Result<Self, GeoCodeError> {
        let (lat_index, lon_index) = encode_axes(latitude, longitude)?;

        Ok(Self {
            code: interleave(lat_index, lon_index),
            position: Point::new(longitude, latitude),
            lat_index,
            lon_index,
        })
    }

    /// Encodes any WGS84 coordinate (`x` = longitude, `y` = latitude).
    pub fn from_wgs84(coord: &impl Coordinate) -> Result<Self, GeoCodeError> {
        Self::from_lat_lon(coord.y(), coord.x())
    }

    pub fn latitude(&self) -> f64 {
        self.position.y()
    }

    pub fn longitude(&self) -> f64 {
        self.position.x()
    }

    /// Orders two codes along the Z-curve.
    pub fn z_order(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }

    /// Converts this code's position to an Arrow PointArray.
    pub fn to_arrow_points(&self) -> PointArray {
        std::slice::from_ref(self).to_arrow_points()
    }

    /// Converts this code to an Arrow RecordBatch with all attributes.
    pub fn to_record_batch(&self) -> Result<RecordBatch, GeoCodeError> {
        std::slice::from_ref(self).to_record_batch()
    }

    /// Writes this code to a GeoParquet file.
    pub fn to_geoparquet(&self, path: impl AsRef<Path>) -> Result<(), GeoCodeError> {
        std::slice::from_ref(self).to_geoparquet(path)
    }
}

impl From<GeoCode> for u64 {
    fn from(value: GeoCode) -> Self {
        value.code
    }
}
