pub mod arrow;
pub mod csv;
pub mod parquet;

pub use self::arrow::GeoCodesToArrow;
pub use self::csv::{
    CoordinateSource, CsvGeoCodeConfig, CsvSummary, CsvToGeoCode, DEFAULT_CODE_COLUMN,
    InvalidRowPolicy, csv_to_geocode_csv,
};
pub use self::parquet::{GeoCodesToGeoParquet, write_geoparquet};
