//! Simulated resource gauges rendered by the console panels.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Small record of simulated load metrics for one session.
///
/// `artifact_count` mirrors the artifact collection length at all times and
/// is maintained by the store's synchronous mutations. `cpu` and `memory`
/// are the volatile fields re-drawn by the background sampler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryGauge {
    /// Simulated CPU load, percent.
    pub cpu: u8,
    /// Simulated resident memory, GB.
    pub memory: u8,
    /// Tokens attributed to generative calls (display-only, never sampled).
    pub tokens: u64,
    /// Current number of placed artifacts.
    pub artifact_count: usize,
}

impl Default for TelemetryGauge {
    fn default() -> Self {
        Self {
            cpu: 15,
            memory: 42,
            tokens: 0,
            artifact_count: 0,
        }
    }
}

impl TelemetryGauge {
    /// Re-draws the volatile fields from independent uniform samples.
    /// `tokens` and `artifact_count` stay untouched.
    pub fn resample<R: Rng>(&mut self, rng: &mut R, cpu: Range<u8>, memory: Range<u8>) {
        self.cpu = rng.random_range(cpu);
        self.memory = rng.random_range(memory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_resample_ranges_and_untouched_fields() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut gauge = TelemetryGauge {
            tokens: 99,
            artifact_count: 4,
            ..TelemetryGauge::default()
        };
        // Three independent draws, all within the configured ranges.
        for _ in 0..3 {
            gauge.resample(&mut rng, 5..25, 38..43);
            assert!((5..25).contains(&gauge.cpu));
            assert!((38..43).contains(&gauge.memory));
        }
        assert_eq!(gauge.tokens, 99);
        assert_eq!(gauge.artifact_count, 4);
    }

    #[test]
    fn test_initial_gauge_values() {
        let gauge = TelemetryGauge::default();
        assert_eq!(gauge.cpu, 15);
        assert_eq!(gauge.memory, 42);
        assert_eq!(gauge.tokens, 0);
        assert_eq!(gauge.artifact_count, 0);
    }

    #[test]
    fn test_seeded_resample_is_deterministic() {
        let mut a = TelemetryGauge::default();
        let mut b = TelemetryGauge::default();
        let mut rng_a = SmallRng::seed_from_u64(42);
        let mut rng_b = SmallRng::seed_from_u64(42);
        a.resample(&mut rng_a, 5..25, 38..43);
        b.resample(&mut rng_b, 5..25, 38..43);
        assert_eq!(a.cpu, b.cpu);
        assert_eq!(a.memory, b.memory);
    }
}
