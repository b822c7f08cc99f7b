use crate::core::constants::{
    DILATE_MASK_1, DILATE_MASK_2, DILATE_MASK_4, DILATE_MASK_8, DILATE_MASK_16, LATITUDE_BITS,
    LOW_WORD_MASK,
};

/// Spreads the bits of a 32-bit value over the even positions of a 64-bit word.
///
/// Bit `i` of `v` ends up at bit `2i` of the result and every odd bit is zero.
/// See <https://graphics.stanford.edu/~seander/bithacks.html#InterleaveBMN>.
///
/// # Example
/// ```
/// use geocode64_rs::spread;
///
/// assert_eq!(spread(0b1011), 0b1000101);
/// assert_eq!(spread(u32::MAX), 0x5555_5555_5555_5555);
/// ```
pub fn spread(v: u32) -> u64 {
    let mut v = u64::from(v);
    v = (v | (v << 16)) & DILATE_MASK_16;
    v = (v | (v << 8)) & DILATE_MASK_8;
    v = (v | (v << 4)) & DILATE_MASK_4;
    v = (v | (v << 2)) & DILATE_MASK_2;
    v = (v | (v << 1)) & DILATE_MASK_1;
    v
}

/// Inverse of [`spread`]: gathers the even bits of `v` into a 32-bit value.
///
/// Odd bits are ignored.
pub fn compact(v: u64) -> u32 {
    let mut v = v & DILATE_MASK_1;
    v = (v | (v >> 1)) & DILATE_MASK_2;
    v = (v | (v >> 2)) & DILATE_MASK_4;
    v = (v | (v >> 4)) & DILATE_MASK_8;
    v = (v | (v >> 8)) & DILATE_MASK_16;
    v = (v | (v >> 16)) & LOW_WORD_MASK;
    v as u32
}

/// Merges two axis values into one Z-order code.
///
/// Latitude takes the even bits, longitude the odd bits.
pub fn interleave(lat: u32, lon: u32) -> u64 {
    spread(lat) | (spread(lon) << 1)
}

/// Splits a code back into its `(lat_index, lon_index)` pair.
pub fn deinterleave(code: u64) -> (u32, u32) {
    (compact(code & LATITUDE_BITS), compact(code >> 1))
}
