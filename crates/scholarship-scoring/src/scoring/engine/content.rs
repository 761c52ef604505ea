use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lower bound of the simulated content score.
pub const SIMULATED_CONTENT_MIN: f64 = 40.0;
/// Upper bound of the simulated content score.
pub const SIMULATED_CONTENT_MAX: f64 = 70.0;

/// Maps motivation-letter text to a content-quality contribution in `[0, 70]`.
///
/// The engine only calls this for letters that are present and non-blank, and
/// clamps whatever comes back into the content band.
pub trait ContentAssessor: Send + Sync {
    fn assess(&self, letter: &str) -> f64;
}

impl<T: ContentAssessor + ?Sized> ContentAssessor for Box<T> {
    fn assess(&self, letter: &str) -> f64 {
        (**self).assess(letter)
    }
}

impl<T: ContentAssessor + ?Sized> ContentAssessor for std::sync::Arc<T> {
    fn assess(&self, letter: &str) -> f64 {
        (**self).assess(letter)
    }
}

/// Stand-in for a text-quality model: a uniform draw in `[40, 70]`.
///
/// Seed it when scores must be reproducible; an entropy-seeded instance makes
/// every evaluation of the same letter differ.
#[derive(Debug)]
pub struct SimulatedContentAssessor {
    rng: Mutex<StdRng>,
}

impl SimulatedContentAssessor {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ContentAssessor for SimulatedContentAssessor {
    fn assess(&self, _letter: &str) -> f64 {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(SIMULATED_CONTENT_MIN..=SIMULATED_CONTENT_MAX)
    }
}

/// Returns the same contribution for every letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedContentAssessor(pub f64);

impl ContentAssessor for FixedContentAssessor {
    fn assess(&self, _letter: &str) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_scores_stay_in_band() {
        let assessor = SimulatedContentAssessor::seeded(7);
        for _ in 0..500 {
            let value = assessor.assess("letter");
            assert!((SIMULATED_CONTENT_MIN..=SIMULATED_CONTENT_MAX).contains(&value));
        }
    }

    #[test]
    fn equal_seeds_replay_the_same_sequence() {
        let first = SimulatedContentAssessor::seeded(2024);
        let second = SimulatedContentAssessor::seeded(2024);
        let a: Vec<f64> = (0..5).map(|_| first.assess("x")).collect();
        let b: Vec<f64> = (0..5).map(|_| second.assess("x")).collect();
        assert_eq!(a, b);
    }
}
