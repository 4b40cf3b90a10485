//! The studio store: one session's placed artifacts, activity feeds, and
//! telemetry gauges behind a single integration point.
//!
//! Construct one store per session (or per test) and share it as an
//! `Arc<StudioStore>`; there is no hidden global. All mutation entry points
//! run synchronously to completion. The only timer-driven mutation is the
//! gauge sampler, an abortable background task that touches nothing but the
//! gauge's volatile fields and exits on its own once the store is dropped.
//!
//! No store operation returns an error: unknown ids and boundary moves
//! degrade to no-ops, and side effects (count, log, traffic) fire only when
//! state actually changed.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::artifacts::{Artifact, ArtifactCollection, MoveDirection};
use crate::config::StudioConfig;
use crate::events::{local_clock, LogEntry, LogSeverity, TrafficEntry, TrafficKind};
use crate::feed::BoundedFeed;
use crate::ident;
use crate::telemetry::TelemetryGauge;

/// Display-only latency labels for simulated traffic, picked at random.
const LATENCY_DISPLAY: [&str; 5] = ["12ms", "45ms", "124ms", "210ms", "8ms"];

const DEFAULT_STATUS: &str = "200 OK";
const ROUTE_INTEGRATE: &str = "/api/v4/studio/integrate";
const ROUTE_TERMINATE: &str = "/api/v4/studio/terminate";

// Lock recovery: no code path panics while holding a guard, but the no-error
// contract forbids surfacing a poisoned lock either way.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Session-scoped state store for the studio canvas and its console panels.
pub struct StudioStore {
    config: StudioConfig,
    artifacts: RwLock<ArtifactCollection>,
    logs: RwLock<BoundedFeed<LogEntry>>,
    traffic: RwLock<BoundedFeed<TrafficEntry>>,
    telemetry: RwLock<TelemetryGauge>,
    /// Single randomness source for latency picks and gauge draws; seedable
    /// so tests can substitute a deterministic sequence.
    rng: Mutex<SmallRng>,
    sampler: Mutex<Option<JoinHandle<()>>>,
}

impl StudioStore {
    /// Creates a store with an OS-seeded randomness source.
    pub fn new(config: StudioConfig) -> Arc<Self> {
        Self::build(config, SmallRng::from_os_rng())
    }

    /// Creates a store with a deterministic randomness source.
    pub fn with_seed(config: StudioConfig, seed: u64) -> Arc<Self> {
        Self::build(config, SmallRng::seed_from_u64(seed))
    }

    fn build(config: StudioConfig, rng: SmallRng) -> Arc<Self> {
        Arc::new(Self {
            artifacts: RwLock::new(ArtifactCollection::default()),
            logs: RwLock::new(BoundedFeed::new(config.log_capacity)),
            traffic: RwLock::new(BoundedFeed::new(config.traffic_capacity)),
            telemetry: RwLock::new(TelemetryGauge::default()),
            rng: Mutex::new(rng),
            sampler: Mutex::new(None),
            config,
        })
    }

    // -----------------------------------------------------------------------
    // Mutation entry points
    // -----------------------------------------------------------------------

    /// Places `artifact` at the end of the canvas stack. A fresh placement id
    /// is always minted, prefixed by the incoming (catalog) id. Records a
    /// success log line and a `DB` traffic entry, and bumps the artifact
    /// gauge. Always succeeds; returns the stored artifact.
    pub fn add_artifact(&self, artifact: Artifact) -> Artifact {
        let stored = write(&self.artifacts).append(artifact);
        write(&self.telemetry).artifact_count += 1;
        self.log(
            format!("INTEGRATED_NODE: {}", stored.name),
            LogSeverity::Success,
        );
        self.record_traffic(ROUTE_INTEGRATE, TrafficKind::Db, None);
        debug!(id = %stored.id, "artifact integrated");
        stored
    }

    /// Removes the artifact with `id`. The gauge decrement, warn log line,
    /// and `SYS` traffic entry fire only when something was actually removed;
    /// an unknown id has zero side effects.
    pub fn remove_artifact(&self, id: &str) -> bool {
        let removed = write(&self.artifacts).remove_by_id(id);
        if removed {
            write(&self.telemetry).artifact_count -= 1;
            self.log(format!("TERMINATED_NODE: {}", id), LogSeverity::Warn);
            self.record_traffic(ROUTE_TERMINATE, TrafficKind::Sys, None);
            debug!(id, "artifact terminated");
        }
        removed
    }

    /// Moves the artifact with `id` one step in `direction`. Logs an info
    /// line on success only; no traffic entry either way.
    pub fn move_artifact(&self, id: &str, direction: MoveDirection) -> bool {
        let moved = write(&self.artifacts).move_by_id(id, direction);
        if moved {
            self.log(
                format!("ORCHESTRATED_NODE: {} {}", id, direction),
                LogSeverity::Info,
            );
        }
        moved
    }

    /// Appends directly to the activity log. Collaborators use this to report
    /// outcomes of calls the store never initiated (e.g. a generation result
    /// or failure).
    pub fn log(&self, message: impl Into<String>, severity: LogSeverity) {
        write(&self.logs).push(LogEntry::now(message, severity));
    }

    /// Appends a simulated gateway request with a random display latency.
    /// `status` defaults to `200 OK`. Exposed so collaborators can annotate
    /// external calls without coupling the store to their implementation.
    pub fn record_traffic(&self, route: &str, kind: TrafficKind, status: Option<&str>) {
        let latency = {
            let mut rng = lock(&self.rng);
            LATENCY_DISPLAY[rng.random_range(0..LATENCY_DISPLAY.len())]
        };
        let entry = TrafficEntry {
            id: ident::next_id(None),
            route: route.to_string(),
            status: status.unwrap_or(DEFAULT_STATUS).to_string(),
            latency: latency.to_string(),
            kind,
            timestamp: local_clock(),
        };
        write(&self.traffic).push(entry);
    }

    // -----------------------------------------------------------------------
    // State reads
    // -----------------------------------------------------------------------

    /// Order-preserving snapshot of the canvas stack.
    pub fn artifacts(&self) -> Vec<Artifact> {
        read(&self.artifacts).snapshot()
    }

    /// Newest-first snapshot of the activity log.
    pub fn logs(&self) -> Vec<LogEntry> {
        read(&self.logs).snapshot()
    }

    /// Newest-first snapshot of the traffic feed.
    pub fn traffic(&self) -> Vec<TrafficEntry> {
        read(&self.traffic).snapshot()
    }

    /// Current gauge values.
    pub fn telemetry(&self) -> TelemetryGauge {
        read(&self.telemetry).clone()
    }

    // -----------------------------------------------------------------------
    // Telemetry sampler lifecycle
    // -----------------------------------------------------------------------

    /// Starts the background gauge sampler. Calling while already running is
    /// a no-op; after [`stop_telemetry`](Self::stop_telemetry) the sampler
    /// may be started again. The task holds only a `Weak` reference, so a
    /// store dropped without `stop_telemetry` does not leak the loop.
    pub fn start_telemetry(self: &Arc<Self>) {
        let mut slot = lock(&self.sampler);
        if slot.as_ref().is_some_and(|h| !h.is_finished()) {
            return;
        }
        let weak: Weak<StudioStore> = Arc::downgrade(self);
        let interval = self.config.telemetry_interval;
        info!(interval_ms = interval.as_millis() as u64, "gauge sampler started");
        *slot = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; skip it so draws happen
            // on the cadence, not at spawn time.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(store) = weak.upgrade() else { break };
                store.sample_gauges();
            }
        }));
    }

    /// Cancels the sampler. Safe to call repeatedly or when never started.
    pub fn stop_telemetry(&self) {
        if let Some(handle) = lock(&self.sampler).take() {
            handle.abort();
            info!("gauge sampler stopped");
        }
    }

    /// One draw of the volatile gauge fields (cpu and memory only).
    fn sample_gauges(&self) {
        let mut rng = lock(&self.rng);
        let mut gauge = write(&self.telemetry);
        gauge.resample(
            &mut *rng,
            self.config.cpu_range.clone(),
            self.config.memory_range.clone(),
        );
        debug!(cpu = gauge.cpu, memory = gauge.memory, "gauge resample");
    }
}

impl Drop for StudioStore {
    fn drop(&mut self) {
        self.stop_telemetry();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::Category;
    use std::time::Duration;

    fn draft(name: &str) -> Artifact {
        Artifact {
            id: String::new(),
            category: Category::Hero,
            name: name.to_string(),
            description: String::new(),
            markup: "<section>hero</section>".to_string(),
            tags: Vec::new(),
        }
    }

    fn test_store() -> Arc<StudioStore> {
        StudioStore::with_seed(StudioConfig::default(), 1)
    }

    #[test]
    fn test_add_then_remove_hero_scenario() {
        let store = test_store();
        let stored = store.add_artifact(draft("Hero"));
        assert_eq!(store.telemetry().artifact_count, 1);

        assert!(store.remove_artifact(&stored.id));
        assert!(store.artifacts().is_empty());
        assert_eq!(store.telemetry().artifact_count, 0);

        // Newest-first: warn (terminate), then success (integrate).
        let logs = store.logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].severity, LogSeverity::Warn);
        assert!(logs[0].message.starts_with("TERMINATED_NODE:"));
        assert_eq!(logs[1].severity, LogSeverity::Success);
        assert_eq!(logs[1].message, "INTEGRATED_NODE: Hero");

        // One DB entry for integrate, one SYS entry for terminate.
        let traffic = store.traffic();
        assert_eq!(traffic.len(), 2);
        assert_eq!(traffic[0].kind, TrafficKind::Sys);
        assert_eq!(traffic[0].route, "/api/v4/studio/terminate");
        assert_eq!(traffic[1].kind, TrafficKind::Db);
        assert_eq!(traffic[1].route, "/api/v4/studio/integrate");
    }

    #[test]
    fn test_remove_missing_has_no_side_effects() {
        let store = test_store();
        store.add_artifact(draft("Hero"));
        let logs_before = store.logs().len();
        let traffic_before = store.traffic().len();

        assert!(!store.remove_artifact("no-such-id"));
        assert_eq!(store.telemetry().artifact_count, 1);
        assert_eq!(store.logs().len(), logs_before);
        assert_eq!(store.traffic().len(), traffic_before);
    }

    #[test]
    fn test_move_logs_only_on_state_change() {
        let store = test_store();
        let a = store.add_artifact(draft("A"));
        store.add_artifact(draft("B"));
        let logs_before = store.logs().len();

        // Boundary move: no log line.
        assert!(!store.move_artifact(&a.id, MoveDirection::Up));
        assert_eq!(store.logs().len(), logs_before);

        // Real move: one info line, still no traffic.
        let traffic_before = store.traffic().len();
        assert!(store.move_artifact(&a.id, MoveDirection::Down));
        let logs = store.logs();
        assert_eq!(logs.len(), logs_before + 1);
        assert_eq!(logs[0].severity, LogSeverity::Info);
        assert!(logs[0].message.contains("down"));
        assert_eq!(store.traffic().len(), traffic_before);
    }

    #[test]
    fn test_add_always_mints_new_id() {
        let store = test_store();
        let mut block = draft("Hero");
        block.id = "opt-hero-alpha".to_string();
        let first = store.add_artifact(block.clone());
        let second = store.add_artifact(block);
        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("opt-hero-alpha-"));
    }

    #[test]
    fn test_record_traffic_latency_from_fixed_set() {
        let store = test_store();
        for _ in 0..10 {
            store.record_traffic("/api/v4/ai/materialize", TrafficKind::Ai, None);
        }
        for entry in store.traffic() {
            assert!(LATENCY_DISPLAY.contains(&entry.latency.as_str()));
            assert_eq!(entry.status, "200 OK");
        }
    }

    #[test]
    fn test_record_traffic_custom_status() {
        let store = test_store();
        store.record_traffic("/api/v4/ai/materialize", TrafficKind::Ai, Some("503 UNAVAILABLE"));
        assert_eq!(store.traffic()[0].status, "503 UNAVAILABLE");
    }

    #[test]
    fn test_seeded_stores_draw_identical_latencies() {
        let a = StudioStore::with_seed(StudioConfig::default(), 9);
        let b = StudioStore::with_seed(StudioConfig::default(), 9);
        for _ in 0..5 {
            a.record_traffic("/r", TrafficKind::Fn, None);
            b.record_traffic("/r", TrafficKind::Fn, None);
        }
        let lat_a: Vec<String> = a.traffic().into_iter().map(|t| t.latency).collect();
        let lat_b: Vec<String> = b.traffic().into_iter().map(|t| t.latency).collect();
        assert_eq!(lat_a, lat_b);
    }

    #[test]
    fn test_log_feed_capped() {
        let config = StudioConfig {
            log_capacity: 2,
            ..StudioConfig::default()
        };
        let store = StudioStore::with_seed(config, 1);
        store.log("A", LogSeverity::Info);
        store.log("B", LogSeverity::Info);
        store.log("C", LogSeverity::Info);
        let messages: Vec<String> = store.logs().into_iter().map(|l| l.message).collect();
        assert_eq!(messages, vec!["C", "B"]);
    }

    #[tokio::test]
    async fn test_sampler_redraws_volatile_fields_only() {
        let config = StudioConfig {
            telemetry_interval: Duration::from_millis(100),
            // Degenerate one-value ranges make the draw observable.
            cpu_range: 90..91,
            memory_range: 60..61,
            ..StudioConfig::default()
        };
        let store = StudioStore::with_seed(config, 3);
        store.add_artifact(draft("Hero"));
        store.start_telemetry();

        tokio::time::sleep(Duration::from_millis(350)).await;
        let gauge = store.telemetry();
        assert_eq!(gauge.cpu, 90);
        assert_eq!(gauge.memory, 60);
        // The sampler never touches these.
        assert_eq!(gauge.tokens, 0);
        assert_eq!(gauge.artifact_count, 1);

        store.stop_telemetry();
    }

    #[tokio::test]
    async fn test_sampler_lifecycle_is_idempotent() {
        let store = test_store();
        store.start_telemetry();
        store.start_telemetry(); // no-op while running
        store.stop_telemetry();
        store.stop_telemetry(); // safe repeated cancel
        store.start_telemetry(); // restart after stop is allowed
        store.stop_telemetry();
    }

    #[tokio::test]
    async fn test_sampler_does_not_draw_before_first_interval() {
        let config = StudioConfig {
            telemetry_interval: Duration::from_secs(3600),
            cpu_range: 90..91,
            memory_range: 60..61,
            ..StudioConfig::default()
        };
        let store = StudioStore::with_seed(config, 3);
        store.start_telemetry();
        tokio::time::sleep(Duration::from_millis(50)).await;
        // Initial values survive until the first cadence tick.
        assert_eq!(store.telemetry().cpu, 15);
        assert_eq!(store.telemetry().memory, 42);
        store.stop_telemetry();
    }
}
