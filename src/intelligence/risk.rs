// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::{Mutex, PoisonError};

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

pub const BREACH_WEIGHT: u32 = 30;
pub const VOIP_WEIGHT: u32 = 25;
pub const SOCIAL_WEIGHT: u32 = 15;
/// Social exposure only counts once a number is tied to more platforms
/// than this.
pub const SOCIAL_PLATFORM_THRESHOLD: usize = 2;
/// Jitter is drawn from `0..JITTER_CEILING`.
pub const JITTER_CEILING: u32 = 10;
pub const MAX_RISK_SCORE: u32 = 100;

/// Supplies the small random term added to every risk score so repeated
/// lookups of one number do not produce an identical figure.
pub trait JitterSource: Send + Sync {
    /// Returns a value in `0..JITTER_CEILING`.
    fn jitter(&self) -> u32;
}

/// Draws jitter uniformly from `0..JITTER_CEILING` using the RNG it owns.
#[derive(Debug)]
pub struct RandomJitter<R: RngCore + Send = StdRng> {
    rng: Mutex<R>,
}

impl RandomJitter<StdRng> {
    /// Seeds a `StdRng` from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for RandomJitter<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + Send> RandomJitter<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng: Mutex::new(rng) }
    }
}

impl<R: RngCore + Send> JitterSource for RandomJitter<R> {
    fn jitter(&self) -> u32 {
        // RNG state stays usable after a poisoning panic.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..JITTER_CEILING)
    }
}

/// Always yields the same jitter. Values at or above `JITTER_CEILING` are
/// capped to `JITTER_CEILING - 1`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedJitter(u32);

impl FixedJitter {
    pub fn new(value: u32) -> Self {
        Self(value.min(JITTER_CEILING - 1))
    }

    pub fn zero() -> Self {
        Self(0)
    }
}

impl JitterSource for FixedJitter {
    fn jitter(&self) -> u32 {
        self.0
    }
}

/// The independent observations a risk score is built from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RiskSignals {
    /// The number appeared in at least one known breach.
    pub breached: bool,
    /// The carrier line is internet-based.
    pub voip: bool,
    /// Number of social platforms the number is associated with.
    pub social_platforms: usize,
}

/// Sums the triggered contributions plus jitter, capped at
/// `MAX_RISK_SCORE`.
pub fn compute_risk_score(signals: &RiskSignals, jitter: &dyn JitterSource) -> u8 {
    let mut score = 0;
    if signals.breached {
        score += BREACH_WEIGHT;
    }
    if signals.voip {
        score += VOIP_WEIGHT;
    }
    if signals.social_platforms > SOCIAL_PLATFORM_THRESHOLD {
        score += SOCIAL_WEIGHT;
    }
    score += jitter.jitter().min(JITTER_CEILING - 1);

    // MAX_RISK_SCORE fits in a u8.
    score.min(MAX_RISK_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_signals_is_just_jitter() {
        assert_eq!(compute_risk_score(&RiskSignals::default(), &FixedJitter::zero()), 0);
        assert_eq!(compute_risk_score(&RiskSignals::default(), &FixedJitter::new(7)), 7);
    }

    #[test]
    fn contributions_add_up() {
        let zero = FixedJitter::zero();
        let breached = RiskSignals { breached: true, ..Default::default() };
        let voip = RiskSignals { voip: true, ..Default::default() };
        let social = RiskSignals { social_platforms: 3, ..Default::default() };
        let everything = RiskSignals { breached: true, voip: true, social_platforms: 5 };

        assert_eq!(compute_risk_score(&breached, &zero), 30);
        assert_eq!(compute_risk_score(&voip, &zero), 25);
        assert_eq!(compute_risk_score(&social, &zero), 15);
        assert_eq!(compute_risk_score(&everything, &zero), 70);
        assert_eq!(compute_risk_score(&everything, &FixedJitter::new(9)), 79);
    }

    #[test]
    fn social_threshold_is_exclusive() {
        let two = RiskSignals { social_platforms: 2, ..Default::default() };
        assert_eq!(compute_risk_score(&two, &FixedJitter::zero()), 0);
    }

    #[test]
    fn fixed_jitter_is_capped() {
        assert_eq!(FixedJitter::new(250).jitter(), 9);
    }

    #[test]
    fn out_of_range_jitter_cannot_escape_bounds() {
        struct Loud;
        impl JitterSource for Loud {
            fn jitter(&self) -> u32 {
                u32::MAX / 2
            }
        }
        let everything = RiskSignals { breached: true, voip: true, social_platforms: 9 };
        assert_eq!(compute_risk_score(&everything, &Loud), 79);
    }

    #[test]
    fn random_jitter_stays_in_range() {
        let signals = RiskSignals { breached: true, voip: true, social_platforms: 3 };
        let jitter = RandomJitter::new();
        for _ in 0..200 {
            assert!(jitter.jitter() < JITTER_CEILING);
            let score = compute_risk_score(&signals, &jitter);
            assert!((70..80).contains(&score));
        }
    }

    #[test]
    fn seeded_rng_repeats_its_jitter() {
        let first = RandomJitter::with_rng(StdRng::seed_from_u64(7));
        let second = RandomJitter::with_rng(StdRng::seed_from_u64(7));
        let drawn: Vec<u32> = (0..50).map(|_| first.jitter()).collect();
        let replayed: Vec<u32> = (0..50).map(|_| second.jitter()).collect();
        assert_eq!(drawn, replayed);
        assert!(drawn.iter().all(|value| *value < JITTER_CEILING));
    }
}
