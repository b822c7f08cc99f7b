pub mod batch;
pub mod geo_code;

pub use batch::{EncodeCoordinates, sort_by_code};
pub use geo_code::GeoCode;
