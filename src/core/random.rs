//! Seeded xorshift32 generator for spawn randomness.
//!
//! Each animation instance owns one generator; there is no shared state.

/// Replacement for a zero seed (xorshift never leaves zero).
const ZERO_SEED_FALLBACK: u32 = 0x9E37_79B9;

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_FALLBACK } else { seed };
        Self { state }
    }

    /// Uniform in `[0, 1)` with 24 bits of precision.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in `[0, n)`.
    #[inline]
    pub fn rand(&mut self, n: f32) -> f32 {
        n * self.next_f32()
    }

    /// Uniform in `(-n, n]`.
    #[inline]
    pub fn rand_range(&mut self, n: f32) -> f32 {
        n - self.rand(2.0 * n)
    }
}
