//! Decides whether a positive decision turns into a match.
//!
//! Real matching needs the other person's decision, which lives on a backend
//! this plugin does not talk to. A [`MatchOracle`] stands in for it.

use crate::domain::{Card, Decision};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait MatchOracle: Send {
    /// Called once per committed Like or SuperLike.
    fn is_match(&mut self, card: &Card, decision: Decision) -> bool;
}

/// Every positive decision matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysMatch;

impl MatchOracle for AlwaysMatch {
    fn is_match(&mut self, _card: &Card, _decision: Decision) -> bool {
        true
    }
}

/// Nothing ever matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverMatch;

impl MatchOracle for NeverMatch {
    fn is_match(&mut self, _card: &Card, _decision: Decision) -> bool {
        false
    }
}

/// Matches with a fixed probability.
#[derive(Debug, Clone)]
pub struct ProbabilityMatch {
    rate: f64,
    rng: StdRng,
}

impl ProbabilityMatch {
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self::with_rng(rate, StdRng::from_entropy())
    }

    /// Deterministic oracle for tests and reproducible sessions.
    #[must_use]
    pub fn seeded(rate: f64, seed: u64) -> Self {
        Self::with_rng(rate, StdRng::seed_from_u64(seed))
    }

    /// `rate` is clamped to `[0, 1]`; NaN counts as `0`.
    fn with_rng(rate: f64, rng: StdRng) -> Self {
        let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        Self { rate, rng }
    }

    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }
}

impl MatchOracle for ProbabilityMatch {
    fn is_match(&mut self, _card: &Card, _decision: Decision) -> bool {
        self.rng.gen_bool(self.rate)
    }
}

/// Oracle for a configured match rate: `1` always matches, `0` (or less)
/// never does, anything in between is a coin flip.
#[must_use]
pub fn oracle_for_rate(rate: f64) -> Box<dyn MatchOracle> {
    if rate >= 1.0 {
        Box::new(AlwaysMatch)
    } else if rate <= 0.0 || rate.is_nan() {
        Box::new(NeverMatch)
    } else {
        Box::new(ProbabilityMatch::new(rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Profile;

    fn card() -> Card {
        Card::new("a", Profile::default())
    }

    #[test]
    fn fixed_oracles() {
        assert!(AlwaysMatch.is_match(&card(), Decision::Like));
        assert!(!NeverMatch.is_match(&card(), Decision::SuperLike));
    }

    #[test]
    fn probability_is_clamped() {
        assert_eq!(ProbabilityMatch::seeded(3.0, 1).rate(), 1.0);
        assert_eq!(ProbabilityMatch::seeded(-1.0, 1).rate(), 0.0);
    }

    #[test]
    fn nan_rate_never_matches() {
        let mut oracle = ProbabilityMatch::seeded(f64::NAN, 3);
        assert_eq!(oracle.rate(), 0.0);
        assert!(!oracle.is_match(&card(), Decision::Like));
    }

    #[test]
    fn seeded_oracle_is_reproducible() {
        let draw = |seed| {
            let mut oracle = ProbabilityMatch::seeded(0.5, seed);
            (0..32)
                .map(|_| oracle.is_match(&card(), Decision::Like))
                .collect::<Vec<_>>()
        };
        let first = draw(7);
        assert_eq!(first, draw(7));
        assert!(first.contains(&true) && first.contains(&false));
    }

    #[test]
    fn rate_extremes_pick_fixed_oracles() {
        assert!(oracle_for_rate(1.0).is_match(&card(), Decision::Like));
        assert!(!oracle_for_rate(0.0).is_match(&card(), Decision::Like));
    }
}
