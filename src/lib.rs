//! # geocode64-rs
//!
//! 64-bit Z-order codes for WGS84 positions. Latitude (clipped to the Web
//! Mercator band, ±85.05112878°) and longitude are each scaled to 26 bits and
//! interleaved, latitude on the even bits and longitude on the odd bits, so
//! that sorting by code keeps nearby positions close together.
//!
//! There are currently four main entry points.
//!
//! ### 1. `encode` - Raw Codes
//!
//! ```
//! use geocode64_rs::encode;
//!
//! # fn main() -> Result<(), geocode64_rs::GeoCodeError> {
//! assert_eq!(encode(13.7220, 100.5252)?, 3962257306574459);
//! assert!(encode(90.0, 0.0).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeoCode` - Single Positions
//!
//! ```
//! use geocode64_rs::GeoCode;
//! use geo_types::point;
//!
//! # fn main() -> Result<(), geocode64_rs::GeoCodeError> {
//! let code = GeoCode::from_wgs84(&point! { x: -0.1278, y: 51.5074 })?;
//! println!("{} ({}, {})", code.code, code.lat_index, code.lon_index);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `EncodeCoordinates` - Parallel Batches
//!
//! ```
//! use geocode64_rs::{EncodeCoordinates, GeoCodesToArrow};
//!
//! # fn main() -> Result<(), geocode64_rs::GeoCodeError> {
//! let coords = vec![(139.6917, 35.6895), (2.3488, 48.8534)];
//! let codes = coords.to_geo_codes()?;
//! let batch = codes.to_record_batch()?;
//! assert_eq!(batch.num_rows(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### 4. `CsvToGeoCode` - CSV File Conversion
//!
//! ```no_run
//! use geocode64_rs::{CsvGeoCodeConfig, CsvToGeoCode};
//!
//! let config = CsvGeoCodeConfig::new("geometry")
//!     .exclude(vec!["Geo Point".into()]);
//!
//! "input.csv".to_geocode_csv("output.csv", &config).unwrap();
//! ```

pub mod api;
pub mod core;
pub mod geom;
pub mod io;
pub mod util;

pub use crate::api::{EncodeCoordinates, GeoCode, sort_by_code};
pub use crate::core::{
    AXIS_BITS, Axis, LATITUDE_BITS, LONGITUDE_BITS, MAX_AXIS_VALUE, MAX_LATITUDE, MAX_LONGITUDE,
    MIN_LATITUDE, MIN_LONGITUDE, compact, deinterleave, encode, encode_axes, interleave, spread,
};
pub use crate::geom::{geometry_to_points, parse_geometry};
pub use crate::io::{
    CoordinateSource, CsvGeoCodeConfig, CsvSummary, CsvToGeoCode, GeoCodesToArrow,
    GeoCodesToGeoParquet, InvalidRowPolicy, csv_to_geocode_csv, write_geoparquet,
};
pub use crate::util::{Coordinate, GeoCodeError};

pub use geo_types;
pub use geoarrow_array;
pub use geoarrow_schema;
pub use geoparquet;
