//! Side-by-side engine comparison for benchmarking consumers.

use serde::Serialize;

use crate::error::Result;
use crate::network::FlightNetwork;
use crate::path::Path;
use crate::search::{astar, dijkstra, Heuristic};
use crate::stats::{RunStats, SearchStatus};

/// Relative tolerance for agreeing costs; floating-point summation order
/// differs between the engines.
const COST_TOLERANCE: f64 = 1e-9;

/// Outcome of running both engines on the same query.
///
/// Serialized as-is by reporting collaborators; the heuristic is carried by
/// its stable name.
#[derive(Debug, Clone, Serialize)]
pub struct EngineComparison {
    pub source: String,
    pub destination: String,
    pub heuristic: &'static str,
    pub uniform_cost: RunStats,
    pub guided: RunStats,
    /// The guided engine's path.
    pub path: Path,
    /// Whether both engines agreed on the total cost (always true for an
    /// admissible heuristic).
    pub costs_agree: bool,
    /// Uniform-cost expansions divided by guided expansions; 1.0 when the
    /// guided engine expanded nothing.
    pub expansion_ratio: f64,
}

/// Run the uniform-cost and guided engines on the same query and report
/// their results side by side.
pub fn compare_engines(
    network: &FlightNetwork,
    source: &str,
    destination: &str,
    heuristic: Heuristic,
) -> Result<EngineComparison> {
    // Echo the codes as the network registers them so the report stays
    // consistent with whatever normalization the lookup applies.
    let source = network.require(source)?.code.clone();
    let destination = network.require(destination)?.code.clone();

    let (_, uniform_cost) = dijkstra::find_path(network, &source, &destination)?;
    let (path, guided) = astar::find_path(network, &source, &destination, heuristic)?;

    let costs_agree = match (uniform_cost.status, guided.status) {
        (SearchStatus::Found, SearchStatus::Found) => {
            let scale = uniform_cost.total_cost.abs().max(1.0);
            (uniform_cost.total_cost - guided.total_cost).abs() <= COST_TOLERANCE * scale
        }
        (a, b) => a == b,
    };
    if !costs_agree {
        tracing::warn!(
            source = %source,
            destination = %destination,
            heuristic = %heuristic,
            uniform_cost = uniform_cost.total_cost,
            guided = guided.total_cost,
            "engines disagree on cost; heuristic is not admissible for this network"
        );
    }

    let expansion_ratio = if guided.nodes_expanded == 0 {
        1.0
    } else {
        uniform_cost.nodes_expanded as f64 / guided.nodes_expanded as f64
    };

    Ok(EngineComparison {
        source,
        destination,
        heuristic: heuristic.name(),
        uniform_cost,
        guided,
        path,
        costs_agree,
        expansion_ratio,
    })
}
