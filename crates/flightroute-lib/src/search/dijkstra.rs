//! Uniform-cost (Dijkstra) search engine.
//!
//! Label-setting shortest-path search over non-negative weights: a binary
//! heap frontier keyed by tentative cost-from-source with an insertion
//! sequence number as deterministic tie-break, a finalized set, and lazy
//! deletion of superseded frontier entries. Guarantees the true minimum
//! cost and expands no node more than once after finalization.

use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{Error, Result};
use crate::network::FlightNetwork;
use crate::path::Path;
use crate::stats::{RunStats, RunTracker, SearchStatus};

use super::{
    reconstruct_path, resolve_outcome, transient_bytes, QueueEntry, SearchOptions, SearchOutcome,
};

/// Find the least-cost path from `source` to `destination`.
///
/// Fails with [`crate::Error::UnknownAirport`] when either code is absent. An
/// unreachable destination is a normal outcome: the returned path is empty,
/// the cost infinite, and the status [`SearchStatus::Unreachable`].
pub fn find_path(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
) -> Result<(Path, RunStats)> {
    find_path_with(network, source, destination, &SearchOptions::default())
}

/// [`find_path`] with per-call options (cancellation).
pub fn find_path_with(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    options: &SearchOptions,
) -> Result<(Path, RunStats)> {
    let outcome = run(network, source, destination, options, &HashSet::new())?;
    resolve_outcome(outcome)
}

/// Bounded k-cheapest distinct paths.
///
/// Finds the optimal path, then re-runs the search with each of its routes
/// excluded one at a time, collecting distinct detours. Results are ordered
/// by ascending cost, then hop count, then stop sequence, and truncated to
/// `k`. Returns fewer than `k` entries (possibly none) when no further
/// distinct path exists.
pub fn find_k_cheapest(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    k: usize,
) -> Result<Vec<Path>> {
    find_k_cheapest_with(network, source, destination, k, &SearchOptions::default())
}

/// [`find_k_cheapest`] with per-call options (cancellation).
pub fn find_k_cheapest_with(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    k: usize,
    options: &SearchOptions,
) -> Result<Vec<Path>> {
    if k == 0 {
        return Ok(Vec::new());
    }

    let (best, _) = find_path_with(network, source, destination, options)?;
    if !best.is_found() {
        return Ok(Vec::new());
    }

    let mut candidates: Vec<Path> = Vec::new();
    for leg in best.stops.windows(2) {
        let mut excluded = HashSet::new();
        excluded.insert((leg[0].clone(), leg[1].clone()));

        let outcome = run(network, source, destination, options, &excluded)?;
        let (alternative, _) = resolve_outcome(outcome)?;

        if alternative.is_found()
            && alternative.stops != best.stops
            && !candidates.iter().any(|path| path.stops == alternative.stops)
        {
            candidates.push(alternative);
        }
    }

    candidates.sort_by(|a, b| {
        a.total_cost
            .total_cmp(&b.total_cost)
            .then_with(|| a.stops.len().cmp(&b.stops.len()))
            .then_with(|| a.stops.cmp(&b.stops))
    });

    let mut paths = vec![best];
    paths.extend(candidates);
    paths.truncate(k);

    if paths.len() < k {
        tracing::debug!(
            found = paths.len(),
            requested = k,
            "fewer distinct paths than requested"
        );
    }
    Ok(paths)
}

/// Least-cost paths from `source` to every reachable airport.
///
/// Runs the uniform-cost search to exhaustion and returns a map keyed by
/// destination code; the source itself is not included. No single
/// destination applies, so the returned stats carry a `total_cost` of 0.
pub fn find_all_paths(
    network: &FlightNetwork,
    source: &str,
) -> Result<(HashMap<String, Path>, RunStats)> {
    find_all_paths_with(network, source, &SearchOptions::default())
}

/// [`find_all_paths`] with per-call options (cancellation, checked at
/// every frontier pop).
pub fn find_all_paths_with(
    network: &FlightNetwork,
    source: &str,
    options: &SearchOptions,
) -> Result<(HashMap<String, Path>, RunStats)> {
    let source = network.require(source)?.code.clone();
    let mut tracker = RunTracker::start();

    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    distances.insert(source.clone(), 0.0);
    parents.insert(source.clone(), None);
    frontier.push(QueueEntry::new(source.clone(), 0.0, seq));

    while let Some(entry) = frontier.pop() {
        if options.cancelled() {
            return Err(Error::Cancelled);
        }
        if !visited.insert(entry.code.clone()) {
            continue;
        }
        tracker.expand();

        relax_neighbors(
            network,
            &entry,
            &mut distances,
            &mut parents,
            &visited,
            &mut frontier,
            &mut seq,
            &HashSet::new(),
        );
        tracker.observe_memory(transient_bytes(
            frontier.len(),
            std::mem::size_of::<QueueEntry>(),
            distances.len(),
        ));
    }

    let mut paths = HashMap::new();
    for (code, cost) in &distances {
        if *code == source {
            continue;
        }
        paths.insert(
            code.clone(),
            Path {
                stops: reconstruct_path(&parents, &source, code),
                total_cost: *cost,
            },
        );
    }

    let reachable = paths.len();
    let stats = tracker.finish(0.0, SearchStatus::Found);
    tracing::debug!(source = %source, reachable, "single-source search complete");
    Ok((paths, stats))
}

/// Core search loop shared by the public entry points. `excluded` holds
/// (source, destination) route pairs the relaxation must skip; it is empty
/// outside the k-cheapest variant.
pub(crate) fn run(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    options: &SearchOptions,
    excluded: &HashSet<(String, String)>,
) -> Result<SearchOutcome> {
    let source = network.require(source)?.code.clone();
    let destination = network.require(destination)?.code.clone();
    let mut tracker = RunTracker::start();

    if source == destination {
        let path = Path::single(source);
        let stats = tracker.finish(0.0, SearchStatus::Found);
        return Ok(SearchOutcome { path, stats });
    }

    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut parents: HashMap<String, Option<String>> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;

    distances.insert(source.clone(), 0.0);
    parents.insert(source.clone(), None);
    frontier.push(QueueEntry::new(source.clone(), 0.0, seq));

    while let Some(entry) = frontier.pop() {
        if options.cancelled() {
            let stats = tracker.finish(f64::INFINITY, SearchStatus::Cancelled);
            return Ok(SearchOutcome {
                path: Path::unreachable(),
                stats,
            });
        }
        if !visited.insert(entry.code.clone()) {
            // Superseded frontier entry left behind by lazy deletion.
            continue;
        }
        tracker.expand();

        if entry.code == destination {
            let cost = entry.cost.0;
            let path = Path {
                stops: reconstruct_path(&parents, &source, &destination),
                total_cost: cost,
            };
            let stats = tracker.finish(cost, SearchStatus::Found);
            tracing::debug!(
                source = %source,
                destination = %destination,
                cost,
                expanded = stats.nodes_expanded,
                "uniform-cost search found a path"
            );
            return Ok(SearchOutcome { path, stats });
        }

        relax_neighbors(
            network,
            &entry,
            &mut distances,
            &mut parents,
            &visited,
            &mut frontier,
            &mut seq,
            excluded,
        );
        tracker.observe_memory(transient_bytes(
            frontier.len(),
            std::mem::size_of::<QueueEntry>(),
            distances.len(),
        ));
    }

    let stats = tracker.finish(f64::INFINITY, SearchStatus::Unreachable);
    Ok(SearchOutcome {
        path: Path::unreachable(),
        stats,
    })
}

#[allow(clippy::too_many_arguments)]
fn relax_neighbors(
    network: &FlightNetwork,
    entry: &QueueEntry,
    distances: &mut HashMap<String, f64>,
    parents: &mut HashMap<String, Option<String>>,
    visited: &HashSet<String>,
    frontier: &mut BinaryHeap<QueueEntry>,
    seq: &mut u64,
    excluded: &HashSet<(String, String)>,
) {
    let current_cost = entry.cost.0;
    for route in network.outgoing(&entry.code) {
        if visited.contains(&route.destination) {
            continue;
        }
        if !excluded.is_empty()
            && excluded.contains(&(route.source.clone(), route.destination.clone()))
        {
            continue;
        }

        let next_cost = current_cost + route.weight;
        if next_cost < *distances.get(&route.destination).unwrap_or(&f64::INFINITY) {
            distances.insert(route.destination.clone(), next_cost);
            parents.insert(route.destination.clone(), Some(entry.code.clone()));
            *seq += 1;
            frontier.push(QueueEntry::new(route.destination.clone(), next_cost, *seq));
        }
    }
}
