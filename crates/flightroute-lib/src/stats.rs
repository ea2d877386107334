//! Per-call search instrumentation.
//!
//! Every engine invocation scopes its own [`RunTracker`]: a monotonic timer
//! started at call entry, an expansion counter, and a running peak of the
//! estimated transient structure size. The tracker is consumed into the
//! [`RunStats`] value handed back to the caller; nothing is retained between
//! calls.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Terminal status of a search invocation.
///
/// `Unreachable` is a normal outcome, not a fault: the destination exists
/// but no path connects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Found,
    Unreachable,
    Cancelled,
}

/// Instrumentation produced once per search call and owned solely by the
/// caller that receives it.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    /// Frontier pops that led to an expansion.
    pub nodes_expanded: u64,
    /// Wall time between call entry and return.
    pub elapsed_time: Duration,
    /// Peak estimated size in bytes of the transient search structures
    /// (frontier, best-cost map, predecessor map, finalized set).
    pub peak_memory: u64,
    /// Final path cost; infinite when no path was found.
    pub total_cost: f64,
    pub status: SearchStatus,
}

/// Mutable instrumentation scope held by a running engine.
#[derive(Debug)]
pub(crate) struct RunTracker {
    started: Instant,
    nodes_expanded: u64,
    peak_memory: u64,
}

impl RunTracker {
    pub(crate) fn start() -> Self {
        Self {
            started: Instant::now(),
            nodes_expanded: 0,
            peak_memory: 0,
        }
    }

    pub(crate) fn expand(&mut self) {
        self.nodes_expanded += 1;
    }

    pub(crate) fn observe_memory(&mut self, bytes: u64) {
        self.peak_memory = self.peak_memory.max(bytes);
    }

    pub(crate) fn finish(self, total_cost: f64, status: SearchStatus) -> RunStats {
        RunStats {
            nodes_expanded: self.nodes_expanded,
            elapsed_time: self.started.elapsed(),
            peak_memory: self.peak_memory,
            total_cost,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_counts_expansions_and_peak_memory() {
        let mut tracker = RunTracker::start();
        tracker.expand();
        tracker.expand();
        tracker.observe_memory(128);
        tracker.observe_memory(64);

        let stats = tracker.finish(42.0, SearchStatus::Found);
        assert_eq!(stats.nodes_expanded, 2);
        assert_eq!(stats.peak_memory, 128);
        assert_eq!(stats.total_cost, 42.0);
        assert_eq!(stats.status, SearchStatus::Found);
    }

    #[test]
    fn stats_serialize_with_reporting_field_names() {
        let stats = RunStats {
            nodes_expanded: 7,
            elapsed_time: Duration::from_millis(3),
            peak_memory: 2048,
            total_cost: 1234.5,
            status: SearchStatus::Found,
        };

        let json = serde_json::to_value(&stats).expect("stats serialize");
        assert_eq!(json["nodes_expanded"], 7);
        assert_eq!(json["peak_memory"], 2048);
        assert_eq!(json["total_cost"], 1234.5);
        assert_eq!(json["status"], "found");
        assert!(json["elapsed_time"].is_object());
    }
}
