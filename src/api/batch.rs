use crate::api::geo_code::GeoCode;
use crate::core::encoder::encode;
use crate::util::coord::Coordinate;
use crate::util::error::GeoCodeError;
use log::debug;
use rayon::prelude::*;

/// Encodes collections of coordinates in parallel.
///
/// Implemented for `[C]` and `Vec<C>`. Coordinates are read as `x` = longitude,
/// `y` = latitude. The whole batch fails if any coordinate is invalid.
///
/// # Example
/// ```
/// use geocode64_rs::EncodeCoordinates;
///
/// # fn main() -> Result<(), geocode64_rs::GeoCodeError> {
/// let coords = vec![(100.5252, 13.7220), (116.3972, 39.9075)];
/// let codes = coords.to_codes()?;
/// assert_eq!(codes, vec![3962257306574459, 4069885364908765]);
/// # Ok(())
/// # }
/// ```
pub trait EncodeCoordinates {
    /// Encodes every coordinate into a [`GeoCode`], keeping input order.
    fn to_geo_codes(&self) -> Result<Vec<GeoCode>, GeoCodeError>;
    /// Encodes every coordinate into its raw code, keeping input order.
    fn to_codes(&self) -> Result<Vec<u64>, GeoCodeError>;
}

impl<C: Coordinate + Sync> EncodeCoordinates for [C] {
    fn to_geo_codes(&self) -> Result<Vec<GeoCode>, GeoCodeError> {
        debug!("encoding {} coordinates", self.len());
        self.par_iter().map(|c| GeoCode::from_wgs84(c)).collect()
    }

    fn to_codes(&self) -> Result<Vec<u64>, GeoCodeError> {
        debug!("encoding {} coordinates", self.len());
        self.par_iter().map(|c| encode(c.y(), c.x())).collect()
    }
}

impl<C: Coordinate + Sync> EncodeCoordinates for Vec<C> {
    fn to_geo_codes(&self) -> Result<Vec<GeoCode>, GeoCodeError> {
        self.as_slice().to_geo_codes()
    }

    fn to_codes(&self) -> Result<Vec<u64>, GeoCodeError> {
        self.as_slice().to_codes()
    }
}

/// Sorts codes along the Z-curve so nearby positions end up close together.
pub fn sort_by_code(codes: &mut [GeoCode]) {
    codes.par_sort_unstable_by_key(|c| c.code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    #[test]
    fn test_batch_matches_single_encoding() -> Result<(), GeoCodeError> {
        let coords: Vec<(f64, f64)> = (0..1000)
            .map(|i| (-180.0 + i as f64 * 0.36, -85.0 + i as f64 * 0.17))
            .collect();

        let codes = coords.to_codes()?;
        assert_eq!(codes.len(), coords.len());
        for (coord, code) in coords.iter().zip(&codes) {
            assert_eq!(*code, encode(coord.1, coord.0)?);
        }
        Ok(())
    }

    #[test]
    fn test_geo_codes_keep_order() -> Result<(), GeoCodeError> {
        let points = vec![
            Point::new(-0.1278, 51.5074),
            Point::new(-74.0060, 40.7128),
            Point::new(151.2093, -33.8688),
        ];

        let codes = points.to_geo_codes()?;
        let raw: Vec<u64> = codes.iter().map(|c| c.code).collect();
        assert_eq!(
            raw,
            vec![2163557714755072, 1791873974549446, 3252046221964352]
        );
        Ok(())
    }

    #[test]
    fn test_batch_fails_on_invalid_coordinate() {
        let coords = vec![(0.0, 0.0), (0.0, f64::NAN), (10.0, 10.0)];
        assert!(matches!(
            coords.to_codes(),
            Err(GeoCodeError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_empty_batch() -> Result<(), GeoCodeError> {
        let coords: Vec<(f64, f64)> = Vec::new();
        assert!(coords.to_geo_codes()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_sort_by_code() -> Result<(), GeoCodeError> {
        let mut codes = vec![(-0.1278, 51.5074), (151.2093, -33.8688), (-74.0060, 40.7128)]
            .to_geo_codes()?;
        sort_by_code(&mut codes);

        assert!(codes.windows(2).all(|w| w[0].code <= w[1].code));
        assert_eq!(codes[0].code, 1791873974549446);
        Ok(())
    }
}
