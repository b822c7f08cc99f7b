/// Southern latitude limit of the encodable band (Web Mercator cut-off)
pub const MIN_LATITUDE: f64 = -85.05112878;

/// Northern latitude limit of the encodable band
pub const MAX_LATITUDE: f64 = 85.05112878;

pub const MIN_LONGITUDE: f64 = -180.0;

pub const MAX_LONGITUDE: f64 = 180.0;

pub const LATITUDE_RANGE: f64 = MAX_LATITUDE - MIN_LATITUDE;

pub const LONGITUDE_RANGE: f64 = MAX_LONGITUDE - MIN_LONGITUDE;

/// Bits of precision per axis
pub const AXIS_BITS: u32 = 26;

/// Scale factor applied to a unit-normalized axis value (2^26)
pub const AXIS_SCALE: f64 = (1u64 << AXIS_BITS) as f64;

/// Largest normalized value on either axis (2^26 - 1)
pub const MAX_AXIS_VALUE: u32 = (1 << AXIS_BITS) - 1;

// Bit-dilation masks. Each one keeps the groups left in place after
// OR-ing the value with itself shifted by 16, 8, 4, 2 and 1 bits.
pub(crate) const DILATE_MASK_16: u64 = 0x0000_FFFF_0000_FFFF;
pub(crate) const DILATE_MASK_8: u64 = 0x00FF_00FF_00FF_00FF;
pub(crate) const DILATE_MASK_4: u64 = 0x0F0F_0F0F_0F0F_0F0F;
pub(crate) const DILATE_MASK_2: u64 = 0x3333_3333_3333_3333;
pub(crate) const DILATE_MASK_1: u64 = 0x5555_5555_5555_5555;

/// Low 32 bits, the final step when compacting a dilated value
pub(crate) const LOW_WORD_MASK: u64 = 0x0000_0000_FFFF_FFFF;

/// Even bit positions of a code, where latitude bits live
pub const LATITUDE_BITS: u64 = 0x5555_5555_5555_5555;

/// Odd bit positions of a code, where longitude bits live
pub const LONGITUDE_BITS: u64 = 0xAAAA_AAAA_AAAA_AAAA;
