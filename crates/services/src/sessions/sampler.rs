use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rng};
use tracing::debug;

/// Draw up to `count` distinct items from `bank` in random order.
///
/// The bank itself is left untouched: a permutation of its indices is shuffled
/// and the first `min(count, bank.len())` positions are cloned out. An empty
/// bank yields an empty draw.
pub fn sample<T, R>(bank: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut order: Vec<usize> = (0..bank.len()).collect();
    order.shuffle(rng);
    order.truncate(count);
    order.into_iter().map(|idx| bank[idx].clone()).collect()
}

/// Selection result for one play-through.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan<T> {
    pub questions: Vec<T>,
    pub bank_size: usize,
    pub requested: usize,
}

impl<T> SessionPlan<T> {
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// True when the bank had fewer questions than requested.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.questions.len() < self.requested
    }
}

/// Owns the random source used to draw sessions.
///
/// Not cryptographically secure; any uniform generator is enough for quizzes.
#[derive(Debug, Clone)]
pub struct SessionSampler {
    rng: StdRng,
}

impl SessionSampler {
    /// Sampler seeded from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rng()),
        }
    }

    /// Reproducible sampler, for tests and replayable runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn draw<T: Clone>(&mut self, bank: &[T], count: usize) -> SessionPlan<T> {
        let questions = sample(bank, count, &mut self.rng);
        debug!(
            bank_size = bank.len(),
            requested = count,
            drawn = questions.len(),
            "sampled session"
        );
        SessionPlan {
            questions,
            bank_size: bank.len(),
            requested: count,
        }
    }
}

impl Default for SessionSampler {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn bank(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn draws_min_of_count_and_bank_size_without_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [0, 1, 3, 10, 25] {
            for k in [0, 1, 5, 10, 30] {
                let source = bank(n);
                let drawn = sample(&source, k, &mut rng);
                assert_eq!(drawn.len(), n.min(k), "n={n} k={k}");
                let unique: HashSet<_> = drawn.iter().collect();
                assert_eq!(unique.len(), drawn.len());
                assert!(drawn.iter().all(|item| source.contains(item)));
            }
        }
    }

    #[test]
    fn small_bank_is_fully_permuted() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = bank(4);
        let mut drawn = sample(&source, 10, &mut rng);
        drawn.sort_unstable();
        assert_eq!(drawn, source);
    }

    #[test]
    fn bank_is_not_mutated() {
        let source = vec!["a", "b", "c", "d", "e"];
        let before = source.clone();
        let _ = sample(&source, 3, &mut StdRng::seed_from_u64(3));
        assert_eq!(source, before);
    }

    #[test]
    fn empty_bank_yields_empty_plan() {
        let mut sampler = SessionSampler::seeded(0);
        let plan = sampler.draw::<u8>(&[], 10);
        assert_eq!(plan.total(), 0);
        assert!(plan.is_short());
    }

    #[test]
    fn short_bank_plan_records_sizes() {
        let mut sampler = SessionSampler::seeded(2);
        let plan = sampler.draw(&bank(3), 10);
        assert_eq!(plan.bank_size, 3);
        assert_eq!(plan.requested, 10);
        assert!(plan.is_short());
        assert!(!sampler.draw(&bank(12), 10).is_short());
    }

    #[test]
    fn repeated_draws_differ() {
        let mut sampler = SessionSampler::seeded(42);
        let source = bank(20);
        let first = sampler.draw(&source, 10).questions;
        let differs = (0..8).any(|_| sampler.draw(&source, 10).questions != first);
        assert!(differs);
    }

    #[test]
    fn same_seed_reproduces_draw() {
        let source = bank(20);
        let a = SessionSampler::seeded(9).draw(&source, 10);
        let b = SessionSampler::seeded(9).draw(&source, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn every_item_can_come_first() {
        let source = bank(3);
        let mut sampler = SessionSampler::seeded(5);
        let firsts: HashSet<_> = (0..200)
            .map(|_| sampler.draw(&source, 3).questions[0])
            .collect();
        assert_eq!(firsts.len(), 3);
    }
}
