pub mod bits;
pub mod constants;
pub mod encoder;
pub mod normalize;

pub use bits::{compact, deinterleave, interleave, spread};
pub use constants::{
    AXIS_BITS, AXIS_SCALE, LATITUDE_BITS, LATITUDE_RANGE, LONGITUDE_BITS, LONGITUDE_RANGE,
    MAX_AXIS_VALUE, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};
pub use encoder::{encode, encode_axes};
pub use normalize::{Axis, normalize_axis, normalize_latitude, normalize_longitude};
