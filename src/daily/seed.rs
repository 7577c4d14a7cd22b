//! String-seeded pseudo-random generator
//!
//! Hashes the seed string with a 31-multiplier polynomial rolling hash in
//! wrapping 32-bit signed arithmetic, then runs a linear congruential
//! generator modulo 2^31. The same seed string always produces the same
//! sequence, which is what makes the daily puzzle identical for everyone.

/// Deterministic generator seeded from a string
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Seed from a string.
    ///
    /// `hash = hash * 31 + char_code` with two's-complement 32-bit wrap,
    /// then the absolute value, substituting 1 for a zero state so the LCG
    /// never sticks at zero.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let mut hash: i32 = 0;
        for c in seed.chars() {
            hash = hash.wrapping_mul(31).wrapping_add(c as i32);
        }

        let state = u64::from(hash.unsigned_abs());
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state.wrapping_mul(1_103_515_245).wrapping_add(12_345)) & 0x7fff_ffff;
        self.state as f64 / f64::from(0x8000_0000u32)
    }

    /// Next index in `[0, len)` by scaling a draw
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }
}
