use crate::core::constants::{
    AXIS_SCALE, LATITUDE_RANGE, LONGITUDE_RANGE, MAX_AXIS_VALUE, MAX_LATITUDE, MAX_LONGITUDE,
    MIN_LATITUDE, MIN_LONGITUDE,
};
use crate::util::error::GeoCodeError;
use std::fmt;

/// One of the two geographic axes a code is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn min(self) -> f64 {
        match self {
            Axis::Latitude => MIN_LATITUDE,
            Axis::Longitude => MIN_LONGITUDE,
        }
    }

    pub fn max(self) -> f64 {
        match self {
            Axis::Latitude => MAX_LATITUDE,
            Axis::Longitude => MAX_LONGITUDE,
        }
    }

    pub fn range(self) -> f64 {
        match self {
            Axis::Latitude => LATITUDE_RANGE,
            Axis::Longitude => LONGITUDE_RANGE,
        }
    }

    /// Returns true if `value` lies within `[min, max]` for this axis.
    pub fn contains(self, value: f64) -> bool {
        (self.min()..=self.max()).contains(&value)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Maps an axis value onto `[0, 2^26 - 1]`, truncating toward zero.
///
/// NaN and infinities are rejected with [`GeoCodeError::InvalidInput`], finite
/// values outside the axis range with [`GeoCodeError::OutOfRange`]. The upper
/// edge of the range scales to exactly `2^26` and is clamped onto the last cell.
pub fn normalize_axis(axis: Axis, value: f64) -> Result<u32, GeoCodeError> {
    if !value.is_finite() {
        return Err(GeoCodeError::InvalidInput { axis, value });
    }
    if !axis.contains(value) {
        return Err(GeoCodeError::OutOfRange { axis, value });
    }

    let scaled = AXIS_SCALE * (value - axis.min()) / axis.range();

    // scaled is finite and within [0, 2^26] here, so the cast is an exact truncation
    let truncated = scaled.trunc() as u32;
    Ok(truncated.min(MAX_AXIS_VALUE))
}

pub fn normalize_latitude(latitude: f64) -> Result<u32, GeoCodeError> {
    normalize_axis(Axis::Latitude, latitude)
}

pub fn normalize_longitude(longitude: f64) -> Result<u32, GeoCodeError> {
    normalize_axis(Axis::Longitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_axis_minimum_maps_to_zero() -> Result<(), GeoCodeError> {
        assert_eq!(normalize_latitude(MIN_LATITUDE)?, 0);
        assert_eq!(normalize_longitude(MIN_LONGITUDE)?, 0);
        Ok(())
    }

    #[test]
    fn test_axis_midpoint() -> Result<(), GeoCodeError> {
        assert_eq!(normalize_latitude(0.0)?, 1 << 25);
        assert_eq!(normalize_longitude(0.0)?, 1 << 25);
        Ok(())
    }

    #[test]
    fn test_just_below_maximum() -> Result<(), GeoCodeError> {
        assert_eq!(normalize_latitude(85.05112877)?, MAX_AXIS_VALUE);
        assert_eq!(normalize_longitude(179.9999999)?, MAX_AXIS_VALUE);
        Ok(())
    }

    #[test]
    fn test_maximum_is_clamped() -> Result<(), GeoCodeError> {
        assert_eq!(normalize_latitude(MAX_LATITUDE)?, MAX_AXIS_VALUE);
        assert_eq!(normalize_longitude(MAX_LONGITUDE)?, MAX_AXIS_VALUE);
        Ok(())
    }

    #[test]
    fn test_truncates_rather_than_rounds() -> Result<(), GeoCodeError> {
        // London sits at 53875168.9.. on the latitude axis
        assert_eq!(normalize_latitude(51.5074)?, 53875168);
        assert_eq!(normalize_longitude(-0.1278)?, 33530608);
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            normalize_latitude(90.0),
            Err(GeoCodeError::OutOfRange {
                axis: Axis::Latitude,
                value: 90.0
            })
        );
        assert_eq!(
            normalize_longitude(-180.5),
            Err(GeoCodeError::OutOfRange {
                axis: Axis::Longitude,
                value: -180.5
            })
        );
    }

    #[test]
    fn test_non_finite_input() {
        assert!(matches!(
            normalize_latitude(f64::NAN),
            Err(GeoCodeError::InvalidInput {
                axis: Axis::Latitude,
                ..
            })
        ));
        assert!(matches!(
            normalize_longitude(f64::INFINITY),
            Err(GeoCodeError::InvalidInput {
                axis: Axis::Longitude,
                ..
            })
        ));
        assert!(matches!(
            normalize_longitude(f64::NEG_INFINITY),
            Err(GeoCodeError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Latitude.to_string(), "latitude");
        assert_eq!(Axis::Longitude.to_string(), "longitude");
    }

    proptest! {
        #[test]
        fn latitude_normalization_is_monotonic(
            a in MIN_LATITUDE..=MAX_LATITUDE,
            b in MIN_LATITUDE..=MAX_LATITUDE,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(normalize_latitude(lo).unwrap() <= normalize_latitude(hi).unwrap());
        }

        #[test]
        fn normalized_values_fit_26_bits(v in MIN_LONGITUDE..=MAX_LONGITUDE) {
            prop_assert!(normalize_longitude(v).unwrap() <= MAX_AXIS_VALUE);
        }
    }
}
