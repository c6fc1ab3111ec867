//! Selection of `n` items out of the pool.
//!
//! Both strategies run the same Fisher-Yates walk over a copy of the pool and
//! keep the first `n` elements; they differ only in where the swap index comes
//! from. The strategy is chosen once per run from the resolved seed.

use rand::Rng;
use tracing::debug;

use crate::quiz_engine::rng::Mulberry32;

/// Draw an ordered subsequence of `n` elements from `pool`.
///
/// Implementations never mutate `pool` and always return exactly
/// `min(n, pool.len())` elements.
pub trait Sampler {
    fn sample<T: Clone>(&mut self, pool: &[T], n: usize) -> Vec<T>;
}

/// Shuffle `items` in place. `pick(i)` must return an index in `0..=i`.
fn fisher_yates<T>(items: &mut [T], mut pick: impl FnMut(usize) -> usize) {
    for i in (1..items.len()).rev() {
        let j = pick(i);
        items.swap(i, j);
    }
}

/// Reproducible sampler driven by [`Mulberry32`].
#[derive(Debug, Clone)]
pub struct SeededSampler {
    rng: Mulberry32,
}

impl SeededSampler {
    pub fn new(seed: &str) -> Self {
        SeededSampler { rng: Mulberry32::from_seed_str(seed) }
    }
}

impl Sampler for SeededSampler {
    fn sample<T: Clone>(&mut self, pool: &[T], n: usize) -> Vec<T> {
        let rng = &mut self.rng;
        let mut shuffled = pool.to_vec();
        fisher_yates(&mut shuffled, |i| {
            let j = (rng.next_unit() * (i + 1) as f64).floor() as usize;
            j.min(i)
        });
        shuffled.truncate(n);
        shuffled
    }
}

/// Non-reproducible sampler backed by the thread-local entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySampler;

impl Sampler for EntropySampler {
    fn sample<T: Clone>(&mut self, pool: &[T], n: usize) -> Vec<T> {
        // Nothing is dropped, so the authored order is kept as is.
        if n >= pool.len() {
            return pool.to_vec();
        }
        let mut rng = rand::thread_rng();
        let mut shuffled = pool.to_vec();
        fisher_yates(&mut shuffled, |i| rng.gen_range(0..=i));
        shuffled.truncate(n);
        shuffled
    }
}

/// The sampler picked for one run.
#[derive(Debug, Clone)]
pub enum SamplingStrategy {
    Seeded(SeededSampler),
    Entropy(EntropySampler),
}

impl SamplingStrategy {
    /// `None` and the empty string both select the entropy sampler.
    pub fn from_seed(seed: Option<&str>) -> Self {
        match seed {
            Some(s) if !s.is_empty() => {
                debug!(seed = s, "using seeded sampler");
                SamplingStrategy::Seeded(SeededSampler::new(s))
            }
            _ => {
                debug!("no seed given, using entropy sampler");
                SamplingStrategy::Entropy(EntropySampler)
            }
        }
    }

    pub fn is_reproducible(&self) -> bool {
        matches!(self, SamplingStrategy::Seeded(_))
    }
}

impl Sampler for SamplingStrategy {
    fn sample<T: Clone>(&mut self, pool: &[T], n: usize) -> Vec<T> {
        match self {
            SamplingStrategy::Seeded(s) => s.sample(pool, n),
            SamplingStrategy::Entropy(s) => s.sample(pool, n),
        }
    }
}

/// Clamp a requested (possibly fractional) count against the pool size.
///
/// Negative, zero and NaN requests yield 0.
pub fn effective_count(requested: f64, pool_len: usize) -> usize {
    if requested.is_nan() {
        return 0;
    }
    let clamped = requested.min(pool_len as f64).floor();
    if clamped <= 0.0 {
        0
    } else {
        clamped as usize
    }
}
