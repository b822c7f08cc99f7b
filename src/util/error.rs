use crate::core::normalize::Axis;

/// Error type for geocode64-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoCodeError {
    /// The coordinate value is NaN or infinite.
    InvalidInput { axis: Axis, value: f64 },
    /// The coordinate value lies outside the encodable range of its axis.
    OutOfRange { axis: Axis, value: f64 },
    /// A configuration value could not be read or is inconsistent.
    ConfigError(String),
    /// File I/O or serialization error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl GeoCodeError {
    /// Returns true for errors caused by a single bad input record, as opposed
    /// to failures of the surrounding pipeline (files, configuration).
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            GeoCodeError::InvalidInput { .. }
                | GeoCodeError::OutOfRange { .. }
                | GeoCodeError::CsvError(_)
                | GeoCodeError::GeometryParseError(_)
        )
    }
}

impl std::fmt::Display for GeoCodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoCodeError::InvalidInput { axis, value } => {
                write!(f, "Invalid {}: {} is not a finite number", axis, value)
            }
            GeoCodeError::OutOfRange { axis, value } => write!(
                f,
                "{} {} out of range [{}, {}]",
                axis,
                value,
                axis.min(),
                axis.max()
            ),
            GeoCodeError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            GeoCodeError::IoError(msg) => write!(f, "IO error: {}", msg),
            GeoCodeError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            GeoCodeError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for GeoCodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = GeoCodeError::OutOfRange {
            axis: Axis::Longitude,
            value: 200.0,
        };
        assert_eq!(err.to_string(), "longitude 200 out of range [-180, 180]");
    }

    #[test]
    fn test_display_invalid_input() {
        let err = GeoCodeError::InvalidInput {
            axis: Axis::Latitude,
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Invalid latitude: NaN is not a finite number");
    }

    #[test]
    fn test_row_errors() {
        assert!(GeoCodeError::CsvError("bad".into()).is_row_error());
        assert!(
            GeoCodeError::OutOfRange {
                axis: Axis::Latitude,
                value: 90.0
            }
            .is_row_error()
        );
        assert!(!GeoCodeError::IoError("disk".into()).is_row_error());
        assert!(!GeoCodeError::ConfigError("missing".into()).is_row_error());
    }
}
