//! Pseudorandom generators driving value generation.
//!
//! Generation only ever talks to the [`Prng`] trait, so any deterministic
//! source can be plugged in. [`Seed`] is the default, a SplitMix64 generator
//! that is cheap to copy.

use crate::error::{QuickpropError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// A seedable, stateful source of uniform randomness.
///
/// Implementations must be deterministic: the same starting state and the
/// same sequence of calls yield the same outputs.
pub trait Prng {
    /// Advance the generator and return 64 uniformly distributed bits.
    fn next_u64(&mut self) -> u64;

    /// Draw an integer uniformly from the closed interval `[min, max]`.
    ///
    /// Consumes exactly one [`Prng::next_u64`] draw on success and none when
    /// the range is invalid.
    fn next_uniform_int(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            return Err(QuickpropError::InvalidRange { min, max });
        }

        let raw = self.next_u64();
        let span = (max as i128 - min as i128 + 1) as u128;
        if span > u64::MAX as u128 {
            // The whole i64 domain.
            return Ok(raw as i64);
        }

        let offset = ((raw as u128 * span) >> 64) as i128;
        Ok((min as i128 + offset) as i64)
    }
}

impl<R: Prng + ?Sized> Prng for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

impl Prng for rand::rngs::StdRng {
    fn next_u64(&mut self) -> u64 {
        rand::RngCore::next_u64(self)
    }
}

/// SplitMix64 generator state: the running counter and its odd increment.
///
/// Copying a seed forks the sequence; both copies then replay the same draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// Create a new seed from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        Seed(state, gamma)
    }
}

impl Prng for Seed {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(self.1);
        splitmix64_mix(self.0)
    }
}

/// Derive a new seed value from the wall clock mixed with OS entropy.
pub fn fresh_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    nanos ^ rand::random::<u64>()
}

/// SplitMix64 mixing function for high-quality output.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Derive the SplitMix64 increment from a mixed state.
fn mix_gamma(mut z: u64) -> u64 {
    z = splitmix64_mix(z);
    // Odd gamma keeps the full period.
    (z | 1).wrapping_mul(0x9e3779b97f4a7c15)
}
