//! Studio tuning knobs, overridable from `ATELIER_*` environment variables.
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | ATELIER_LOG_CAPACITY | 50 | Max retained activity log entries. |
//! | ATELIER_TRAFFIC_CAPACITY | 20 | Max retained traffic entries. |
//! | ATELIER_TELEMETRY_INTERVAL_MS | 3000 | Gauge sampler cadence (floor 100ms). |

use std::ops::Range;
use std::time::Duration;

const DEFAULT_LOG_CAPACITY: usize = 50;
const DEFAULT_TRAFFIC_CAPACITY: usize = 20;
const DEFAULT_TELEMETRY_INTERVAL_MS: u64 = 3000;

/// Floor for the sampler cadence so a misconfigured env var cannot busy-loop.
const MIN_TELEMETRY_INTERVAL_MS: u64 = 100;

/// Per-session studio configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Maximum retained activity log entries (newest first).
    pub log_capacity: usize,
    /// Maximum retained traffic entries (newest first).
    pub traffic_capacity: usize,
    /// Cadence of the background gauge sampler.
    pub telemetry_interval: Duration,
    /// Uniform draw range for the simulated cpu gauge (percent).
    pub cpu_range: Range<u8>,
    /// Uniform draw range for the simulated memory gauge (GB).
    pub memory_range: Range<u8>,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl Default for StudioConfig {
    fn default() -> Self {
        let interval_ms = env_parse::<u64>("ATELIER_TELEMETRY_INTERVAL_MS")
            .unwrap_or(DEFAULT_TELEMETRY_INTERVAL_MS)
            .max(MIN_TELEMETRY_INTERVAL_MS);

        Self {
            log_capacity: env_parse("ATELIER_LOG_CAPACITY").unwrap_or(DEFAULT_LOG_CAPACITY),
            traffic_capacity: env_parse("ATELIER_TRAFFIC_CAPACITY")
                .unwrap_or(DEFAULT_TRAFFIC_CAPACITY),
            telemetry_interval: Duration::from_millis(interval_ms),
            cpu_range: 5..25,
            memory_range: 38..43,
        }
    }
}
