//! Immutable records carried by the two activity feeds.
//!
//! Both shapes are serialized as-is for the console panels, so field names
//! and enum spellings match what the presentation layer renders.

use serde::{Deserialize, Serialize};

/// Severity band for a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSeverity {
    Info,
    Success,
    Warn,
    Error,
}

/// One line in the system activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Human-readable capture time (local wall clock, `HH:MM:SS`).
    pub timestamp: String,
    pub message: String,
    pub severity: LogSeverity,
}

impl LogEntry {
    /// Builds an entry stamped with the current wall-clock time.
    pub fn now(message: impl Into<String>, severity: LogSeverity) -> Self {
        Self {
            timestamp: local_clock(),
            message: message.into(),
            severity,
        }
    }
}

/// Subsystem tag shown next to a simulated gateway request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrafficKind {
    Ai,
    Sec,
    Db,
    Sys,
    Fn,
}

/// One simulated gateway request in the traffic feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficEntry {
    pub id: String,
    pub route: String,
    pub status: String,
    /// Display-only latency label picked from a fixed set, not a measurement.
    pub latency: String,
    pub kind: TrafficKind,
    pub timestamp: String,
}

/// Wall-clock capture time in the shape the console panels render.
pub(crate) fn local_clock() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_now() {
        let entry = LogEntry::now("INTEGRATED_NODE: HERO.ALPHA", LogSeverity::Success);
        assert_eq!(entry.message, "INTEGRATED_NODE: HERO.ALPHA");
        assert_eq!(entry.severity, LogSeverity::Success);
        // HH:MM:SS
        assert_eq!(entry.timestamp.len(), 8);
    }

    #[test]
    fn test_severity_wire_spelling() {
        let json = serde_json::to_string(&LogSeverity::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
    }

    #[test]
    fn test_traffic_kind_wire_spelling() {
        let json = serde_json::to_string(&TrafficKind::Db).unwrap();
        assert_eq!(json, "\"DB\"");
        let back: TrafficKind = serde_json::from_str("\"SEC\"").unwrap();
        assert_eq!(back, TrafficKind::Sec);
    }
}
