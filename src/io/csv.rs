use crate::api::geo_code::GeoCode;
use crate::geom::parse::{geometry_to_points, parse_geometry};
use crate::util::error::GeoCodeError;
use csv::StringRecord;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Default name of the output column holding the code.
pub const DEFAULT_CODE_COLUMN: &str = "geo_code";

enum SourceIndices {
    Geometry(usize),
    Coordinates { lon_idx: usize, lat_idx: usize },
}

/// Specifies how to extract location data from CSV rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns {
        lon_column: String,
        lat_column: String,
    },
}

/// What to do with a row whose location cannot be parsed or encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRowPolicy {
    /// Abort the conversion with the row's error
    #[default]
    Fail,
    /// Log a warning and leave the row out of the output
    Skip,
}

fn default_code_column() -> String {
    DEFAULT_CODE_COLUMN.to_string()
}

/// Configuration for CSV to geocode conversion.
///
/// Can be built in code or loaded from JSON:
///
/// ```
/// use geocode64_rs::{CsvGeoCodeConfig, InvalidRowPolicy};
///
/// # fn main() -> Result<(), geocode64_rs::GeoCodeError> {
/// let config = CsvGeoCodeConfig::from_json_str(
///     r#"{
///         "source": {"coordinate_columns": {"lon_column": "lng", "lat_column": "lat"}},
///         "invalid_rows": "skip"
///     }"#,
/// )?;
/// assert_eq!(config.code_column, "geo_code");
/// assert_eq!(config.invalid_rows, InvalidRowPolicy::Skip);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvGeoCodeConfig {
    pub source: CoordinateSource,
    #[serde(default)]
    pub exclude_columns: Vec<String>,
    #[serde(default = "default_code_column")]
    pub code_column: String,
    #[serde(default)]
    pub include_axis_indices: bool,
    #[serde(default)]
    pub invalid_rows: InvalidRowPolicy,
}

impl CsvGeoCodeConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// # Example
    /// ```
    /// use geocode64_rs::CsvGeoCodeConfig;
    ///
    /// let config = CsvGeoCodeConfig::new("geometry");
    /// ```
    pub fn new(geometry_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            code_column: default_code_column(),
            include_axis_indices: false,
            invalid_rows: InvalidRowPolicy::default(),
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use geocode64_rs::CsvGeoCodeConfig;
    ///
    /// let config = CsvGeoCodeConfig::from_coords("Longitude", "Latitude")
    ///     .code_column("z");
    /// ```
    pub fn from_coords(lon_column: impl Into<String>, lat_column: impl Into<String>) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lon_column: lon_column.into(),
                lat_column: lat_column.into(),
            },
            ..Self::new("")
        }
    }

    /// Parses a config from JSON. Omitted optional fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, GeoCodeError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GeoCodeError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GeoCodeError> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| GeoCodeError::IoError(e.to_string()))?;
        Self::from_json_str(&text)
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    pub fn code_column(mut self, name: impl Into<String>) -> Self {
        self.code_column = name.into();
        self
    }

    /// Also write the 26-bit `lat_index` and `lon_index` columns.
    pub fn with_axis_indices(mut self) -> Self {
        self.include_axis_indices = true;
        self
    }

    pub fn invalid_rows(mut self, policy: InvalidRowPolicy) -> Self {
        self.invalid_rows = policy;
        self
    }

    fn validate(&self) -> Result<(), GeoCodeError> {
        if self.code_column.trim().is_empty() {
            return Err(GeoCodeError::ConfigError(
                "code_column must not be empty".to_string(),
            ));
        }
        let empty_source = match &self.source {
            CoordinateSource::GeometryColumn(col) => col.is_empty(),
            CoordinateSource::CoordinateColumns {
                lon_column,
                lat_column,
            } => lon_column.is_empty() || lat_column.is_empty(),
        };
        if empty_source {
            return Err(GeoCodeError::ConfigError(
                "source column names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Counts reported by a CSV conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvSummary {
    pub rows_read: usize,
    pub rows_written: usize,
    pub rows_skipped: usize,
}

pub trait CsvToGeoCode {
    fn to_geocode_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGeoCodeConfig,
    ) -> Result<CsvSummary, GeoCodeError>;
}

impl<P: AsRef<Path>> CsvToGeoCode for P {
    fn to_geocode_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGeoCodeConfig,
    ) -> Result<CsvSummary, GeoCodeError> {
        csv_to_geocode_csv(self, output_path, config)
    }
}

fn find_column(headers: &StringRecord, name: &str) -> Result<usize, GeoCodeError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| GeoCodeError::CsvError(format!("Column '{}' not found", name)))
}

fn parse_coordinate(record: &StringRecord, idx: usize, label: &str) -> Result<f64, GeoCodeError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| GeoCodeError::CsvError(format!("Missing {} column at index {}", label, idx)))?
        .trim();
    raw.parse()
        .map_err(|_| GeoCodeError::CsvError(format!("Invalid {}: '{}'", label, raw)))
}

fn record_error(e: csv::Error) -> GeoCodeError {
    match e.kind() {
        csv::ErrorKind::Io(_) => GeoCodeError::IoError(e.to_string()),
        _ => GeoCodeError::CsvError(e.to_string()),
    }
}

fn check_width(record: &StringRecord, expected: usize) -> Result<(), GeoCodeError> {
    if record.len() != expected {
        return Err(GeoCodeError::CsvError(format!(
            "Row has {} fields, expected {}",
            record.len(),
            expected
        )));
    }
    Ok(())
}

fn record_to_codes(
    record: &StringRecord,
    source: &SourceIndices,
) -> Result<Vec<GeoCode>, GeoCodeError> {
    match source {
        SourceIndices::Geometry(idx) => {
            let geom_str = record.get(*idx).ok_or_else(|| {
                GeoCodeError::CsvError(format!("Missing geometry column at index {}", idx))
            })?;
            let points = geometry_to_points(parse_geometry(geom_str)?)?;

            let mut seen = HashSet::with_capacity(points.len());
            let mut codes = Vec::with_capacity(points.len());
            for pt in &points {
                let code = GeoCode::from_wgs84(pt)?;
                if seen.insert(code.code) {
                    codes.push(code);
                }
            }
            Ok(codes)
        }
        SourceIndices::Coordinates { lon_idx, lat_idx } => {
            let lon = parse_coordinate(record, *lon_idx, "longitude")?;
            let lat = parse_coordinate(record, *lat_idx, "latitude")?;
            Ok(vec![GeoCode::from_lat_lon(lat, lon)?])
        }
    }
}

/// Converts a CSV file with geometry or coordinate columns into a CSV file with geocodes.
///
/// Streams rows, so large files are never held in memory. A row produces one
/// output row per distinct code derived from it.
///
/// # Example
///
/// ```no_run
/// use geocode64_rs::{csv_to_geocode_csv, CsvGeoCodeConfig, InvalidRowPolicy};
///
/// let config = CsvGeoCodeConfig::from_coords("Longitude", "Latitude")
///     .with_axis_indices()
///     .invalid_rows(InvalidRowPolicy::Skip);
///
/// let summary = csv_to_geocode_csv("stations.csv", "stations_coded.csv", &config).unwrap();
/// println!("{} rows written", summary.rows_written);
/// ```
pub fn csv_to_geocode_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvGeoCodeConfig,
) -> Result<CsvSummary, GeoCodeError> {
    config.validate()?;

    let file = File::open(csv_path.as_ref()).map_err(|e| GeoCodeError::IoError(e.to_string()))?;
    // Row width is checked per record so that ragged rows fall under the row policy
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| GeoCodeError::CsvError(e.to_string()))?
        .clone();

    // Source columns never make it into the output
    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = find_column(&headers, col)?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lon_column,
            lat_column,
        } => {
            let lon_idx = find_column(&headers, lon_column)?;
            let lat_idx = find_column(&headers, lat_column)?;
            (
                SourceIndices::Coordinates { lon_idx, lat_idx },
                HashSet::from([lon_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }
    debug!(
        "reading {} columns from {}, excluding {:?}",
        headers.len(),
        csv_path.as_ref().display(),
        exclude_indices
    );

    let out_file =
        File::create(output_path.as_ref()).map_err(|e| GeoCodeError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec![config.code_column.as_str()];
    if config.include_axis_indices {
        header_row.push("lat_index");
        header_row.push("lon_index");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| GeoCodeError::CsvError(e.to_string()))?;

    let mut summary = CsvSummary::default();

    for result in reader.records() {
        summary.rows_read += 1;

        let (line, parsed) = match result {
            Ok(record) => {
                let line = record.position().map(|p| p.line());
                let codes = check_width(&record, headers.len())
                    .and_then(|_| record_to_codes(&record, &source_indices));
                (line, codes.map(|codes| (record, codes)))
            }
            Err(e) => (e.position().map(|p| p.line()), Err(record_error(e))),
        };

        let (record, codes) = match parsed {
            Ok(parsed) => parsed,
            Err(e) if config.invalid_rows == InvalidRowPolicy::Skip && e.is_row_error() => {
                match line {
                    Some(line) => warn!("skipping line {}: {}", line, e),
                    None => warn!("skipping row {}: {}", summary.rows_read, e),
                }
                summary.rows_skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        for code in codes {
            let mut row: Vec<String> = vec![code.code.to_string()];

            if config.include_axis_indices {
                row.push(code.lat_index.to_string());
                row.push(code.lon_index.to_string());
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| GeoCodeError::CsvError(e.to_string()))?;
            summary.rows_written += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| GeoCodeError::IoError(e.to_string()))?;

    info!(
        "encoded {} rows into {} ({} written, {} skipped)",
        summary.rows_read,
        output_path.as_ref().display(),
        summary.rows_written,
        summary.rows_skipped
    );
    Ok(summary)
}
