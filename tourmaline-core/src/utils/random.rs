#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::Error;
use std::sync::Mutex;

/// Provides the way to use randomized values in generic way.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max).
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool;

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation backed by a small PRNG behind a lock.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl DefaultRandom {
    /// Creates an instance of `DefaultRandom` with a fixed seed to get reproducible
    /// value sequences.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.lock().expect("cannot lock RNG").gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.lock().expect("cannot lock RNG").gen_range(min..max)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.rng.lock().expect("cannot lock RNG").gen_bool(probability.clamp(0., 1.))
    }

    fn get_rng(&self) -> RandomGen {
        let mut guard = self.rng.lock().expect("cannot lock RNG");
        RandomGen { rng: SmallRng::from_rng(&mut *guard).expect("cannot fork RNG") }
    }
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: SmallRng,
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}
