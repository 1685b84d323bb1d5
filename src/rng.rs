//! Deterministic random stream for one drawing.
//!
//! ChaCha8 is used instead of `StdRng` because its output is fixed by the
//! algorithm, not by the `rand` release, so a seed keeps producing the same
//! drawing across builds and hosts.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

#[derive(Debug, Clone)]
pub struct DeterministicRng {
    inner: ChaCha8Rng,
}

impl DeterministicRng {
    pub fn new(seed: u32) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(u64::from(seed)),
        }
    }

    /// Uniform float in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform float in `[lo, hi)`. An empty range yields `lo` without
    /// consuming the stream.
    #[inline]
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.inner.gen_range(lo..hi)
    }

    /// Zero-mean Gaussian sample with standard deviation `scale`.
    #[inline]
    pub fn normal(&mut self, scale: f64) -> f64 {
        let z: f64 = self.inner.sample(StandardNormal);
        z * scale
    }

    /// One element, chosen uniformly. `None` only for an empty slice.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
