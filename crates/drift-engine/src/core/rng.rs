//! Random sources for particle creation and respawn.
//!
//! The scene never reaches for ambient randomness. It draws through a
//! `RandomSource`, so hosts get variety from the seeded `Rng` and tests can
//! script exact values.

/// Capability the simulation draws randomness from.
pub trait RandomSource {
    /// Uniform sample in [0, 1).
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in [lo, hi). Returns `lo` when the range is empty.
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_unit() * (hi - lo)
    }
}

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits map exactly onto the f32 mantissa.
        (self.next_u64() >> 40) as f32 * (1.0 / 16_777_216.0)
    }
}

/// Replays a fixed list of unit samples, cycling when exhausted.
#[cfg(test)]
pub(crate) struct Scripted {
    values: Vec<f32>,
    cursor: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(values: &[f32]) -> Self {
        Self { values: values.to_vec(), cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
