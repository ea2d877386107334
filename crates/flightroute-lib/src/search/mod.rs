//! Pathfinding engines and their shared plumbing.
//!
//! Three engines operate on a frozen [`FlightNetwork`](crate::FlightNetwork):
//!
//! - [`dijkstra`] — uniform-cost search, plus the bounded k-cheapest and
//!   single-source variants;
//! - [`astar`] — heuristic-guided search parameterized by [`Heuristic`];
//! - [`alternatives`] — layover-bounded alternative-route enumeration.
//!
//! All engines share the same shape of contract: validate both endpoint
//! codes, scope a [`RunTracker`](crate::stats::RunTracker) to the call,
//! check the optional [`CancelToken`] at every frontier pop, and return the
//! result together with a [`RunStats`](crate::RunStats) value.

pub mod alternatives;
pub mod astar;
pub mod dijkstra;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::geo;
use crate::network::Airport;
use crate::path::Path;
use crate::stats::{RunStats, SearchStatus};

/// Heuristic selector for the guided engine, resolved once per call.
///
/// Each arm carries its admissibility contract as a documented
/// precondition; it is checked by review and tests, not at runtime.
///
/// No `PartialEq`: the `Custom` arm holds a function pointer, and pointer
/// equality is unreliable. Compare selectors by [`Heuristic::name`].
#[derive(Debug, Clone, Copy)]
pub enum Heuristic {
    /// Great-circle distance between the node and the goal. Admissible and
    /// consistent when edge weights are themselves great-circle distances.
    /// The default.
    Haversine,
    /// Straight-line chord through the sphere. The chord never exceeds the
    /// surface arc, so this is admissible and consistent, though a weaker
    /// bound than [`Heuristic::Haversine`].
    Euclidean,
    /// Axis-aligned sum of scaled coordinate deltas. Can overestimate the
    /// remaining cost by up to sqrt(2): NOT admissible in general, so the
    /// guided engine may return a suboptimal path. Kept for comparison
    /// experiments.
    Manhattan,
    /// Caller-supplied estimate in the same unit as the edge weights. The
    /// caller is responsible for admissibility; an overestimating function
    /// voids the optimality guarantee.
    Custom(fn(&Airport, &Airport) -> f64),
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Haversine
    }
}

impl Heuristic {
    /// Stable name used in serialized comparison reports.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Haversine => "haversine",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Manhattan => "manhattan",
            Heuristic::Custom(_) => "custom",
        }
    }

    /// Estimate of the remaining cost from `from` to `to`.
    pub(crate) fn estimate(&self, from: &Airport, to: &Airport) -> f64 {
        match self {
            Heuristic::Haversine => {
                geo::haversine_km(from.latitude, from.longitude, to.latitude, to.longitude)
            }
            Heuristic::Euclidean => {
                geo::euclidean_km(from.latitude, from.longitude, to.latitude, to.longitude)
            }
            Heuristic::Manhattan => {
                geo::manhattan_km(from.latitude, from.longitude, to.latitude, to.longitude)
            }
            Heuristic::Custom(estimator) => estimator(from, to),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cooperative cancellation signal shared between a caller and a running
/// search. Cloning hands out another handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Engines observe the flag at their next
    /// frontier pop and fail with [`Error::Cancelled`].
    pub fn cancel(&self) {
        self.flag.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(AtomicOrdering::Relaxed)
    }
}

/// Per-call options accepted by the `*_with` engine entry points.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// External cancellation signal, checked once per frontier pop.
    pub cancel: Option<CancelToken>,
}

impl SearchOptions {
    pub(crate) fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// Internal engine outcome before cancellation is surfaced as an error.
pub(crate) struct SearchOutcome {
    pub path: Path,
    pub stats: RunStats,
}

/// Convert an internal outcome into the public contract: an observed
/// cancellation becomes [`Error::Cancelled`], everything else is `Ok`.
pub(crate) fn resolve_outcome(outcome: SearchOutcome) -> Result<(Path, RunStats)> {
    match outcome.stats.status {
        SearchStatus::Cancelled => Err(Error::Cancelled),
        SearchStatus::Found | SearchStatus::Unreachable => Ok((outcome.path, outcome.stats)),
    }
}

/// Walk the predecessor map back from `goal` to `start`.
pub(crate) fn reconstruct_path(
    parents: &HashMap<String, Option<String>>,
    start: &str,
    goal: &str,
) -> Vec<String> {
    let mut stops = Vec::new();
    let mut current = Some(goal.to_string());
    while let Some(code) = current {
        current = if code == start {
            None
        } else {
            parents.get(&code).cloned().flatten()
        };
        stops.push(code);
    }
    stops.reverse();
    stops
}

/// Rough byte estimate of the transient search structures: the frontier
/// entries plus the best-cost / predecessor / finalized bookkeeping per
/// tracked node. Codes are costed at their three-byte inline length plus
/// the `String` header.
pub(crate) fn transient_bytes(
    frontier_len: usize,
    frontier_entry_size: usize,
    tracked_nodes: usize,
) -> u64 {
    const CODE_BYTES: usize = mem::size_of::<String>() + 3;
    let per_node = CODE_BYTES + mem::size_of::<f64>() + mem::size_of::<Option<String>>() + 3;
    ((frontier_len * (frontier_entry_size + 3)) + tracked_nodes * per_node) as u64
}

/// Total order over `f64` priorities; NaN sorts last.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Frontier entry for uniform-cost search, keyed by tentative cost with the
/// insertion sequence number as a deterministic tie-break.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub code: String,
    pub cost: FloatOrd,
    pub seq: u64,
}

impl QueueEntry {
    pub(crate) fn new(code: String, cost: f64, seq: u64) -> Self {
        Self {
            code,
            cost: FloatOrd(cost),
            seq,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap; earlier
        // insertions win ties for reproducible runs.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier entry for guided search, keyed by `f = g + h` with the same
/// insertion-sequence tie-break.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GuidedEntry {
    pub code: String,
    pub cost: FloatOrd,
    pub estimate: FloatOrd,
    pub seq: u64,
}

impl GuidedEntry {
    pub(crate) fn new(code: String, cost: f64, heuristic: f64, seq: u64) -> Self {
        Self {
            code,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
            seq,
        }
    }
}

impl Ord for GuidedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for GuidedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
