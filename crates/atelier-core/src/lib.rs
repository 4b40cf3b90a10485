//! atelier-core: studio state & telemetry store.
//!
//! One [`StudioStore`] per session owns the canvas stack (placed artifacts),
//! two newest-first bounded feeds (activity log, simulated traffic), and the
//! telemetry gauges with their background sampler. The presentation layer
//! reads snapshots and invokes the mutation entry points; the
//! generative-content bridge ([`provider`]) is a collaborator the store
//! never calls itself.

mod artifacts;
mod config;
mod events;
mod feed;
mod ident;
pub mod provider;
mod store;
mod telemetry;

pub use artifacts::{Artifact, ArtifactCollection, Category, MoveDirection};
pub use config::StudioConfig;
pub use events::{LogEntry, LogSeverity, TrafficEntry, TrafficKind};
pub use feed::BoundedFeed;
pub use ident::next_id;
pub use provider::{
    ContentProvider, GatewayBridge, GeneratedBlock, GenerationStyle, ProviderError, StaticProvider,
};
pub use store::StudioStore;
pub use telemetry::TelemetryGauge;
