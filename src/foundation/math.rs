/// Deterministic SplitMix64 generator used for seeded layouts (particle fields).
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Create a generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in `[-half_extent, half_extent)`.
    pub fn next_centered(&mut self, half_extent: f64) -> f64 {
        (self.next_f64_01() - 0.5) * 2.0 * half_extent
    }
}

/// Linear remap of `x` from `[in_lo, in_hi]` onto `[out_lo, out_hi]` without clamping.
pub fn map_linear(x: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let span = in_hi - in_lo;
    if span == 0.0 {
        return out_lo;
    }
    out_lo + (x - in_lo) * (out_hi - out_lo) / span
}

/// Clamp `v` to `[-limit, limit]`, mapping NaN to `fallback`.
pub fn clamp_finite(v: f64, limit: f64, fallback: f64) -> f64 {
    if v.is_nan() {
        return fallback;
    }
    v.clamp(-limit, limit)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
