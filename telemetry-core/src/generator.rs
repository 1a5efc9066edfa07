//! Sample generator
//!
//! Draws CPU and memory usage uniformly inside fixed ranges. The random
//! source is a trait so callers (and tests) decide where entropy comes from.

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::models::Reading;

/// CPU usage percentage, `[10, 100)`
pub const CPU_RANGE: UsageRange = UsageRange { min: 10.0, max: 100.0 };

/// Memory usage percentage, `[20, 90)`
pub const MEMORY_RANGE: UsageRange = UsageRange { min: 20.0, max: 90.0 };

/// Source of uniform values in `[0, 1)`
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Production source backed by a `StdRng`
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Half-open interval `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageRange {
    pub min: f64,
    pub max: f64,
}

impl UsageRange {
    /// Maps a unit value onto the range. The result always lands in
    /// `[min, max)`, even for units outside `[0, 1)` or NaN.
    pub fn sample(&self, unit: f64) -> f64 {
        let unit = if unit.is_finite() { unit.max(0.0) } else { 0.0 };
        let value = self.min + unit * (self.max - self.min);
        if value >= self.max {
            self.max - self.max.abs().max(1.0) * f64::EPSILON
        } else {
            value
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Produces readings from a random source
pub struct Generator<S> {
    source: S,
}

impl<S: RandomSource> Generator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// One reading stamped with the current wall-clock time. CPU is drawn
    /// before memory.
    pub fn generate(&mut self) -> Reading {
        let cpu = CPU_RANGE.sample(self.source.next_unit());
        let memory = MEMORY_RANGE.sample(self.source.next_unit());
        trace!(cpu, memory, "generated reading");
        Reading::new(cpu, memory, Local::now())
    }

    /// `count` readings back to back, no delay (API path)
    pub fn generate_many(&mut self, count: usize) -> Vec<Reading> {
        (0..count).map(|_| self.generate()).collect()
    }
}

impl Generator<EntropySource> {
    pub fn from_entropy() -> Self {
        Self::new(EntropySource::new())
    }
}
