//! Random number generator (xorshift32)
//!
//! Deliberately not the `rand` crate: the effect needs a handful of cheap,
//! deterministic draws per explosion and a reproducible seed under test.

/// Advance the xorshift32 state and return the next raw value.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform f32 in [0, 1). Uses the top 24 bits so the mantissa is exact.
#[inline]
pub fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / 16_777_216.0
}

/// Uniform f32 in [lo, hi).
#[inline]
pub fn range_f32(state: &mut u32, lo: f32, hi: f32) -> f32 {
    lo + unit_f32(state) * (hi - lo)
}
