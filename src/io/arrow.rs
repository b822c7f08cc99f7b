use crate::api::geo_code::GeoCode;
use crate::util::error::GeoCodeError;
use arrow_array::{Float64Array, RecordBatch, UInt32Array, UInt64Array};
use arrow_schema::{DataType, Field, Schema};
use geoarrow_array::IntoArrow;
use geoarrow_array::array::PointArray;
use geoarrow_array::builder::PointBuilder;
use geoarrow_schema::{Crs, Dimension, Metadata, PointType};
use std::sync::Arc;

fn wgs84_metadata() -> Arc<Metadata> {
    let crs = Crs::from_authority_code("EPSG:4326".to_string());
    Arc::new(Metadata::new(crs, None))
}

/// Trait for converting collections of [`GeoCode`]s to Arrow arrays.
///
/// Implemented for `[GeoCode]` and `Vec<GeoCode>`.
pub trait GeoCodesToArrow {
    /// Converts the encoded positions to an Arrow PointArray.
    fn to_arrow_points(&self) -> PointArray;
    /// Converts codes to a RecordBatch with code, lat_index, lon_index, latitude, longitude and geometry.
    fn to_record_batch(&self) -> Result<RecordBatch, GeoCodeError>;
}

impl GeoCodesToArrow for [GeoCode] {
    fn to_arrow_points(&self) -> PointArray {
        let point = PointType::new(Dimension::XY, wgs84_metadata());
        let mut builder = PointBuilder::with_capacity(point, self.len());

        for code in self {
            builder.push_point(Some(&code.position));
        }

        builder.finish()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, GeoCodeError> {
        let point_array = self.to_arrow_points();
        let codes: UInt64Array = self.iter().map(|c| Some(c.code)).collect();
        let lat_indices: UInt32Array = self.iter().map(|c| Some(c.lat_index)).collect();
        let lon_indices: UInt32Array = self.iter().map(|c| Some(c.lon_index)).collect();
        let latitudes: Float64Array = self.iter().map(|c| Some(c.latitude())).collect();
        let longitudes: Float64Array = self.iter().map(|c| Some(c.longitude())).collect();

        let geometry_field = point_array.extension_type().to_field("geometry", false);
        let schema = Schema::new(vec![
            Field::new("code", DataType::UInt64, false),
            Field::new("lat_index", DataType::UInt32, false),
            Field::new("lon_index", DataType::UInt32, false),
            Field::new("latitude", DataType::Float64, false),
            Field::new("longitude", DataType::Float64, false),
            geometry_field,
        ]);

        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(codes),
                Arc::new(lat_indices),
                Arc::new(lon_indices),
                Arc::new(latitudes),
                Arc::new(longitudes),
                Arc::new(point_array.into_arrow()),
            ],
        )
        .map_err(|e| GeoCodeError::IoError(e.to_string()))
    }
}

impl GeoCodesToArrow for Vec<GeoCode> {
    fn to_arrow_points(&self) -> PointArray {
        self.as_slice().to_arrow_points()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, GeoCodeError> {
        self.as_slice().to_record_batch()
    }
}
