//! In-memory flight network model.
//!
//! The network is append-only: it is constructed empty, populated with
//! [`FlightNetwork::add_airport`] / [`FlightNetwork::add_route`], and then
//! handed to the engines by shared reference. Searches never mutate the
//! network, so a frozen network may be shared read-only across concurrently
//! issued searches; mutation while a search is running is ruled out by the
//! borrow checker.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo;

/// An airport node. Codes are case-insensitive identifiers normalized to
/// uppercase at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    /// Build a validated airport.
    ///
    /// Fails with [`Error::InvalidAirportCode`] for a blank code and with
    /// [`Error::InvalidCoordinates`] when latitude leaves [-90, 90] or
    /// longitude leaves [-180, 180].
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self> {
        let code = normalize_code(&code.into());
        if code.is_empty() {
            return Err(Error::InvalidAirportCode { code });
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidCoordinates {
                code,
                latitude,
                longitude,
            });
        }

        Ok(Self {
            code,
            name: name.into(),
            city: city.into(),
            country: country.into(),
            latitude,
            longitude,
        })
    }

    /// Great-circle distance to another airport in kilometres.
    pub fn distance_to(&self, other: &Airport) -> f64 {
        geo::haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// A directed route between two airports. Presence of A -> B does not imply
/// B -> A.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub source: String,
    pub destination: String,
    /// Non-negative cost of traversing the route (distance or time unit).
    pub weight: f64,
}

impl Route {
    /// Build a route with both endpoint codes normalized to uppercase.
    /// Weight validation happens at [`FlightNetwork::add_route`] time.
    pub fn new(source: impl Into<String>, destination: impl Into<String>, weight: f64) -> Self {
        Self {
            source: normalize_code(&source.into()),
            destination: normalize_code(&destination.into()),
            weight,
        }
    }
}

/// Directed weighted graph of airports and routes.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    airports: HashMap<String, Airport>,
    adjacency: HashMap<String, Vec<Route>>,
    route_count: usize,
}

impl FlightNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport. Fails with [`Error::DuplicateAirport`] when the
    /// code is already present.
    pub fn add_airport(&mut self, airport: Airport) -> Result<()> {
        if self.airports.contains_key(&airport.code) {
            return Err(Error::DuplicateAirport {
                code: airport.code,
            });
        }
        self.adjacency.entry(airport.code.clone()).or_default();
        self.airports.insert(airport.code.clone(), airport);
        Ok(())
    }

    /// Register a directed route. Both endpoints must already exist
    /// ([`Error::UnknownEndpoint`]) and the weight must be finite and
    /// non-negative ([`Error::InvalidWeight`]).
    pub fn add_route(&mut self, route: Route) -> Result<()> {
        for code in [&route.source, &route.destination] {
            if !self.airports.contains_key(code) {
                return Err(Error::UnknownEndpoint { code: code.clone() });
            }
        }
        if !route.weight.is_finite() || route.weight < 0.0 {
            return Err(Error::InvalidWeight {
                origin: route.source,
                destination: route.destination,
                weight: route.weight,
            });
        }

        self.adjacency
            .entry(route.source.clone())
            .or_default()
            .push(route);
        self.route_count += 1;
        Ok(())
    }

    /// Outgoing routes for an airport, in insertion order. Fails with
    /// [`Error::UnknownAirport`] when the code is absent. Lookup is
    /// case-insensitive.
    pub fn neighbors(&self, code: &str) -> Result<&[Route]> {
        let code = normalize_code(code);
        self.adjacency
            .get(&code)
            .map(Vec::as_slice)
            .ok_or(Error::UnknownAirport { code })
    }

    /// Look up an airport by code, case-insensitively.
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(&normalize_code(code))
    }

    /// Whether an airport code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(&normalize_code(code))
    }

    /// Number of registered airports.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of registered routes.
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    /// Iterator over registered airport codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.airports.keys().map(String::as_str)
    }

    /// Cheapest direct weight from `source` to `destination`, if any route
    /// connects them.
    pub fn route_weight(&self, source: &str, destination: &str) -> Option<f64> {
        let destination = normalize_code(destination);
        self.adjacency
            .get(&normalize_code(source))?
            .iter()
            .filter(|route| route.destination == destination)
            .map(|route| route.weight)
            .min_by(f64::total_cmp)
    }

    /// Validated airport lookup used by the engines on entry.
    pub(crate) fn require(&self, code: &str) -> Result<&Airport> {
        self.airport(code).ok_or_else(|| Error::UnknownAirport {
            code: normalize_code(code),
        })
    }

    /// Infallible neighbour access for codes already validated against the
    /// network; unknown codes yield an empty slice.
    pub(crate) fn outgoing(&self, code: &str) -> &[Route] {
        self.adjacency.get(code).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
