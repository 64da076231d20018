//! Deterministic weight initialization.
//!
//! The crate deliberately avoids OS randomness: constructors take
//! `FnMut() -> F` generators, and this module provides a seeded stream to
//! plug into them so that two runs from the same seed build bit-identical
//! models on every platform.

use num_traits::Float;

/// SplitMix64 sequence generator.
///
/// Small, fast and full-period over `u64`; statistical quality is more than
/// sufficient for symmetry-breaking weight initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a stream from the given seed.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Returns the next value mapped uniformly into `[0, 1)`.
    ///
    /// Uses the top 53 bits so the mapping is exact in `f64` before the
    /// conversion to `F`.
    pub fn next_unit<F: Float>(&mut self) -> F {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        F::from(unit).unwrap_or_else(F::zero)
    }
}

/// Returns a generator drawing uniformly from `[-1, 1)`, suitable for
/// [`DenseLayer::from_fn`](crate::layer::DenseLayer::from_fn) and
/// [`NetworkTopology::instantiate`](crate::topology::NetworkTopology::instantiate).
pub fn uniform_init<F: Float>(seed: u64) -> impl FnMut() -> F {
    let mut stream = SplitMix64::new(seed);
    move || {
        let two = F::one() + F::one();
        stream.next_unit::<F>() * two - F::one()
    }
}
