//! Flightroute library entry points.
//!
//! This crate models a directed, weighted flight network and exposes the
//! pathfinding engines that operate on it: uniform-cost (Dijkstra) search,
//! heuristic-guided (A*) search, and a layover-bounded alternative-route
//! enumerator. Every engine invocation returns a [`RunStats`] value with
//! the instrumentation consumed by benchmarking and reporting collaborators.
//! Higher-level consumers (CLI, visualization, report exporters) should
//! depend on the functions exported here instead of reimplementing
//! behavior. Dataset acquisition and parsing are the caller's concern;
//! the engines only require a populated [`FlightNetwork`].

#![deny(warnings)]

pub mod compare;
pub mod error;
pub mod geo;
pub mod network;
pub mod path;
pub mod search;
pub mod stats;

pub use compare::{compare_engines, EngineComparison};
pub use error::{Error, Result};
pub use network::{Airport, FlightNetwork, Route};
pub use path::Path;
pub use search::{alternatives, astar, dijkstra, CancelToken, Heuristic, SearchOptions};
pub use stats::{RunStats, SearchStatus};
