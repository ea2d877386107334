//! Heuristic-guided (A*) search engine.
//!
//! Frontier ordered by `f = g + h` with the same insertion-sequence
//! tie-break as the uniform-cost engine. Staleness is detected by comparing
//! a popped entry's `g` against the best known cost, so nodes may be
//! re-opened when an inadmissible heuristic (e.g.
//! [`Heuristic::Manhattan`]) misguides the first visit. With an admissible,
//! consistent heuristic the returned cost equals the uniform-cost result
//! and the expansion count never exceeds it.

use std::collections::{BinaryHeap, HashMap};

use crate::error::Result;
use crate::network::FlightNetwork;
use crate::path::Path;
use crate::stats::{RunStats, RunTracker, SearchStatus};

use super::{
    reconstruct_path, resolve_outcome, transient_bytes, GuidedEntry, Heuristic, SearchOptions,
    SearchOutcome,
};

/// Find the least-cost path from `source` to `destination` guided by
/// `heuristic`.
///
/// Same contract shape as [`super::dijkstra::find_path`]: unknown codes fail
/// with [`crate::Error::UnknownAirport`], unreachable destinations are a
/// normal outcome with status [`SearchStatus::Unreachable`].
pub fn find_path(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    heuristic: Heuristic,
) -> Result<(Path, RunStats)> {
    find_path_with(
        network,
        source,
        destination,
        heuristic,
        &SearchOptions::default(),
    )
}

/// [`find_path`] with per-call options (cancellation).
pub fn find_path_with(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    heuristic: Heuristic,
    options: &SearchOptions,
) -> Result<(Path, RunStats)> {
    let outcome = run(network, source, destination, heuristic, options)?;
    resolve_outcome(outcome)
}

fn run(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    heuristic: Heuristic,
    options: &SearchOptions,
) -> Result<SearchOutcome> {
    let source = network.require(source)?.code.clone();
    let goal = network.require(destination)?.clone();
    let mut tracker = RunTracker::start();

    if source == goal.code {
        let path = Path::single(source);
        let stats = tracker.finish(0.0, SearchStatus::Found);
        return Ok(SearchOutcome { path, stats });
    }

    // Resolve the estimator once per call; endpoints are guaranteed present
    // so a missing airport only occurs for codes never validated, which the
    // relaxation below cannot produce.
    let estimate = |code: &str| -> f64 {
        network
            .airport(code)
            .map(|airport| heuristic.estimate(airport, &goal))
            .unwrap_or(0.0)
    };

    let mut g_score: HashMap<String, f64> = HashMap::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    g_score.insert(source.clone(), 0.0);
    parents.insert(source.clone(), None);
    frontier.push(GuidedEntry::new(source.clone(), 0.0, estimate(&source), seq));

    while let Some(entry) = frontier.pop() {
        if options.cancelled() {
            let stats = tracker.finish(f64::INFINITY, SearchStatus::Cancelled);
            return Ok(SearchOutcome {
                path: Path::unreachable(),
                stats,
            });
        }

        let current_cost = entry.cost.0;
        match g_score.get(&entry.code) {
            Some(best) if current_cost > *best => continue, // superseded entry
            Some(_) => {}
            None => continue,
        }
        tracker.expand();

        if entry.code == goal.code {
            let path = Path {
                stops: reconstruct_path(&parents, &source, &goal.code),
                total_cost: current_cost,
            };
            let stats = tracker.finish(current_cost, SearchStatus::Found);
            tracing::debug!(
                source = %source,
                destination = %goal.code,
                heuristic = %heuristic,
                cost = current_cost,
                expanded = stats.nodes_expanded,
                "guided search found a path"
            );
            return Ok(SearchOutcome { path, stats });
        }

        for route in network.outgoing(&entry.code) {
            let tentative = current_cost + route.weight;
            if tentative < *g_score.get(&route.destination).unwrap_or(&f64::INFINITY) {
                g_score.insert(route.destination.clone(), tentative);
                parents.insert(route.destination.clone(), Some(entry.code.clone()));
                seq += 1;
                frontier.push(GuidedEntry::new(
                    route.destination.clone(),
                    tentative,
                    estimate(&route.destination),
                    seq,
                ));
            }
        }
        tracker.observe_memory(transient_bytes(
            frontier.len(),
            std::mem::size_of::<GuidedEntry>(),
            g_score.len(),
        ));
    }

    let stats = tracker.finish(f64::INFINITY, SearchStatus::Unreachable);
    Ok(SearchOutcome {
        path: Path::unreachable(),
        stats,
    })
}
