//! Source of the sample power words offered when a subject has none.
//!
//! This is the only non-deterministic piece of an analysis, so it sits behind
//! a trait: production code draws at random, tests pass a seeded or fixed
//! sampler and can assert the exact suggestion text.

use crate::core::PowerWord;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

pub trait PowerWordSampler {
    /// Pick up to `amount` distinct words from `table`.
    fn sample(&mut self, table: &'static [PowerWord], amount: usize) -> Vec<&'static str>;
}

/// Uniform sampling without replacement.
#[derive(Debug, Clone)]
pub struct RandomSampler<R> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl RandomSampler<StdRng> {
    /// Reproducible sampler: the same seed always yields the same words.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PowerWordSampler for RandomSampler<R> {
    fn sample(&mut self, table: &'static [PowerWord], amount: usize) -> Vec<&'static str> {
        table
            .choose_multiple(&mut self.rng, amount)
            .map(|pw| pw.word)
            .collect()
    }
}

/// Deterministic sampler for tests and reproducible reports.
#[derive(Debug, Clone, Default)]
pub enum FixedSampler {
    /// The first `amount` entries of the table
    #[default]
    TableOrder,
    /// Exactly these words, truncated to `amount`
    Words(Vec<&'static str>),
}

impl PowerWordSampler for FixedSampler {
    fn sample(&mut self, table: &'static [PowerWord], amount: usize) -> Vec<&'static str> {
        match self {
            FixedSampler::TableOrder => table.iter().take(amount).map(|pw| pw.word).collect(),
            FixedSampler::Words(words) => words.iter().take(amount).copied().collect(),
        }
    }
}
