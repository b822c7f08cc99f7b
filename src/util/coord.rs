use geo_types::{Coord, Point};

/// Trait for types that can provide a WGS84 position.
///
/// Follows the `x`/`y` convention of `geo_types`: `x` is longitude and `y` is
/// latitude, so tuples are read as `(lon, lat)`.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (-0.1278, 51.5074);
        assert_eq!(tuple.x(), -0.1278);
        assert_eq!(tuple.y(), 51.5074);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(-0.1278, 51.5074);
        assert_eq!(Coordinate::x(&point), -0.1278);
        assert_eq!(Coordinate::y(&point), 51.5074);
    }

    #[test]
    fn test_coordinate_trait_coord() {
        let c = coord! { x: 151.2093, y: -33.8688 };
        assert_eq!(Coordinate::x(&c), 151.2093);
        assert_eq!(Coordinate::y(&c), -33.8688);
    }
}
