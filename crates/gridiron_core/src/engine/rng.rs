//! Injectable randomness for play resolution.
//!
//! Play outcomes only ever need uniform samples in `[0, 1)`, so the seam is a
//! single method. Production code uses [`SeededRng`]; tests script exact
//! samples with [`ScriptedRng`].

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform samples in `[0, 1)`
pub trait PlayRng {
    fn next_unit(&mut self) -> f64;
}

impl<T: PlayRng + ?Sized> PlayRng for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<T: PlayRng + ?Sized> PlayRng for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// ChaCha8-backed generator; same seed, same sequence
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        Self { inner: ChaCha8Rng::from_entropy() }
    }
}

impl PlayRng for SeededRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Replays a fixed sequence of samples.
///
/// Running past the end of the script panics: the caller under-specified the
/// draws a play needs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    samples: VecDeque<f64>,
}

impl ScriptedRng {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        let samples: VecDeque<f64> = samples.into_iter().collect();
        assert!(
            samples.iter().all(|s| (0.0..1.0).contains(s)),
            "scripted samples must lie in [0, 1): {samples:?}"
        );
        Self { samples }
    }

    pub fn push(&mut self, sample: f64) {
        assert!((0.0..1.0).contains(&sample), "scripted sample must lie in [0, 1): {sample}");
        self.samples.push_back(sample);
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }

    /// Sample that makes [`uniform_int`] over `min..=max` return `value`
    pub fn unit_for(value: i32, min: i32, max: i32) -> f64 {
        assert!((min..=max).contains(&value), "{value} outside {min}..={max}");
        let span = (max - min + 1) as f64;
        (f64::from(value - min) + 0.5) / span
    }
}

impl PlayRng for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        match self.samples.pop_front() {
            Some(sample) => sample,
            None => panic!("ScriptedRng exhausted"),
        }
    }
}

/// Uniform integer in `min..=max` from one unit sample
pub fn uniform_int<R: PlayRng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max);
    let span = (max - min + 1) as f64;
    let offset = (rng.next_unit() * span).floor() as i32;
    // u < 1.0 keeps offset below span; the min() guards float rounding at the edge
    min + offset.min(max - min)
}
