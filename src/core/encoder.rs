use crate::core::bits::interleave;
use crate::core::normalize::{normalize_latitude, normalize_longitude};
use crate::util::error::GeoCodeError;

/// Encodes a WGS84 latitude/longitude pair (degrees) into a 64-bit Z-order code.
///
/// Both axes are scaled to 26 bits and interleaved with latitude on the even
/// bits and longitude on the odd bits.
///
/// # Example
/// ```
/// use geocode64_rs::encode;
///
/// # fn main() -> Result<(), geocode64_rs::GeoCodeError> {
/// let code = encode(51.5074, -0.1278)?;
/// assert_eq!(code, 2163557714755072);
/// # Ok(())
/// # }
/// ```
pub fn encode(latitude: f64, longitude: f64) -> Result<u64, GeoCodeError> {
    let (lat, lon) = encode_axes(latitude, longitude)?;
    Ok(interleave(lat, lon))
}

/// Returns the normalized `(lat_index, lon_index)` pair for a coordinate.
pub fn encode_axes(latitude: f64, longitude: f64) -> Result<(u32, u32), GeoCodeError> {
    Ok((normalize_latitude(latitude)?, normalize_longitude(longitude)?))
}
