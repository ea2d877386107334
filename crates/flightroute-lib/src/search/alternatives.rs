//! Layover-bounded alternative-route enumeration.
//!
//! Depth-first exploration of simple paths whose intermediate-stop count
//! stays within the caller's bound. Completed paths are always recorded; a
//! branch stops expanding once its accumulated cost exceeds the best
//! completed cost (branch-and-bound), which keeps exploration tractable on
//! dense regional subgraphs at the price of dropping detours that are
//! already more expensive than the best route.

use std::collections::HashSet;
use std::mem;

use crate::error::{Error, Result};
use crate::network::FlightNetwork;
use crate::path::Path;
use crate::stats::{RunStats, RunTracker, SearchStatus};

use super::SearchOptions;

/// Enumerate distinct routes from `source` to `destination` with at most
/// `max_layovers` intermediate stops.
///
/// Deterministic and recomputed per call. Results are deduplicated by exact
/// stop sequence (keeping the cheapest among parallel routes) and ordered
/// by ascending total cost, then ascending layover count. An empty vector
/// (status [`SearchStatus::Unreachable`]) means no route exists within the
/// bound; with `max_layovers = 0` only direct routes qualify.
pub fn find_alternatives(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    max_layovers: usize,
) -> Result<(Vec<Path>, RunStats)> {
    find_alternatives_with(
        network,
        source,
        destination,
        max_layovers,
        &SearchOptions::default(),
    )
}

/// [`find_alternatives`] with per-call options (cancellation, checked at
/// every visited node).
pub fn find_alternatives_with(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    max_layovers: usize,
    options: &SearchOptions,
) -> Result<(Vec<Path>, RunStats)> {
    let source = network.require(source)?.code.clone();
    let destination = network.require(destination)?.code.clone();
    let mut tracker = RunTracker::start();

    if source == destination {
        let path = Path::single(source);
        let stats = tracker.finish(0.0, SearchStatus::Found);
        return Ok((vec![path], stats));
    }

    let mut explorer = Explorer {
        network,
        destination: &destination,
        max_layovers,
        options,
        tracker: &mut tracker,
        trail: vec![source.clone()],
        on_trail: HashSet::from([source.clone()]),
        best_complete: f64::INFINITY,
        found: Vec::new(),
    };

    let completed = explorer.visit(&source, 0.0);
    let mut found = mem::take(&mut explorer.found);

    if !completed {
        return Err(Error::Cancelled);
    }

    // Parallel routes produce identical stop sequences; group sequences
    // first so the cheapest copy survives even when a distinct path sorts
    // between two duplicates by cost.
    found.sort_by(|a, b| {
        a.stops
            .cmp(&b.stops)
            .then_with(|| a.total_cost.total_cmp(&b.total_cost))
    });
    found.dedup_by(|a, b| a.stops == b.stops);

    found.sort_by(|a, b| {
        a.total_cost
            .total_cmp(&b.total_cost)
            .then_with(|| a.layovers().cmp(&b.layovers()))
            .then_with(|| a.stops.cmp(&b.stops))
    });

    let (best_cost, status) = match found.first() {
        Some(best) => (best.total_cost, SearchStatus::Found),
        None => (f64::INFINITY, SearchStatus::Unreachable),
    };
    let stats = tracker.finish(best_cost, status);
    tracing::debug!(
        source = %source,
        destination = %destination,
        max_layovers,
        routes = found.len(),
        "alternative-route enumeration complete"
    );
    Ok((found, stats))
}

struct Explorer<'a> {
    network: &'a FlightNetwork,
    destination: &'a str,
    max_layovers: usize,
    options: &'a SearchOptions,
    tracker: &'a mut RunTracker,
    trail: Vec<String>,
    on_trail: HashSet<String>,
    best_complete: f64,
    found: Vec<Path>,
}

impl Explorer<'_> {
    /// Depth-first visit of `code` with `cost_so_far` accumulated along the
    /// trail. Returns `false` when cancellation was observed.
    fn visit(&mut self, code: &str, cost_so_far: f64) -> bool {
        if self.options.cancelled() {
            return false;
        }
        self.tracker.expand();
        self.tracker
            .observe_memory(trail_bytes(self.trail.len(), self.on_trail.len()));

        for route in self.network.outgoing(code) {
            let next_cost = cost_so_far + route.weight;

            if route.destination == self.destination {
                // Completed routes are always recorded, even above the
                // branch-and-bound cut, so costlier direct options survive.
                let mut stops = self.trail.clone();
                stops.push(route.destination.clone());
                self.found.push(Path {
                    stops,
                    total_cost: next_cost,
                });
                self.best_complete = self.best_complete.min(next_cost);
                continue;
            }

            if self.on_trail.contains(&route.destination) {
                continue; // simple paths only
            }
            // Entering `route.destination` would make it an intermediate
            // stop; the trail currently holds the source plus the
            // intermediates already committed.
            if self.trail.len() > self.max_layovers {
                continue;
            }
            if next_cost > self.best_complete {
                continue; // branch-and-bound prune
            }

            self.trail.push(route.destination.clone());
            self.on_trail.insert(route.destination.clone());
            let completed = self.visit(&route.destination, next_cost);
            self.trail.pop();
            self.on_trail.remove(&route.destination);
            if !completed {
                return false;
            }
        }
        true
    }
}

/// Rough byte estimate of the enumerator's transient state: the trail stack
/// plus the on-trail membership set.
fn trail_bytes(trail_len: usize, set_len: usize) -> u64 {
    const CODE_BYTES: usize = mem::size_of::<String>() + 3;
    ((trail_len + set_len) * CODE_BYTES) as u64
}
