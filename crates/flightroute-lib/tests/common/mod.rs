// Shared fixtures for `flightroute-lib` integration tests.
#![allow(dead_code)]

use flightroute_lib::{geo, Airport, FlightNetwork, Route};

pub fn airport(
    code: &str,
    name: &str,
    city: &str,
    country: &str,
    latitude: f64,
    longitude: f64,
) -> Airport {
    Airport::new(code, name, city, country, latitude, longitude).expect("valid fixture airport")
}

/// The three-airport scenario: `AAA -> BBB` (10), `BBB -> CCC` (10),
/// `AAA -> CCC` (30), plus the disconnected `DDD`.
///
/// Coordinates sit a few kilometres apart so the great-circle estimate
/// between any pair stays below the cheapest remaining cost, keeping the
/// haversine heuristic admissible for these artificial weights.
pub fn triangle_network() -> FlightNetwork {
    let mut network = FlightNetwork::new();
    network
        .add_airport(airport("AAA", "Alpha Field", "Alpha", "US", 40.00, -75.00))
        .unwrap();
    network
        .add_airport(airport("BBB", "Bravo Field", "Bravo", "US", 40.02, -75.00))
        .unwrap();
    network
        .add_airport(airport("CCC", "Charlie Field", "Charlie", "US", 40.04, -75.00))
        .unwrap();
    network
        .add_airport(airport("DDD", "Delta Field", "Delta", "US", 10.00, 10.00))
        .unwrap();

    network.add_route(Route::new("AAA", "BBB", 10.0)).unwrap();
    network.add_route(Route::new("BBB", "CCC", 10.0)).unwrap();
    network.add_route(Route::new("AAA", "CCC", 30.0)).unwrap();
    network
}

/// A small United States network with bidirectional routes weighted by
/// great-circle distance, plus the isolated `FAI`.
pub fn regional_network() -> FlightNetwork {
    let airports = [
        ("LAX", "Los Angeles Intl", "Los Angeles", 33.9425, -118.4081),
        ("SFO", "San Francisco Intl", "San Francisco", 37.6213, -122.3790),
        ("SEA", "Seattle-Tacoma Intl", "Seattle", 47.4502, -122.3088),
        ("DEN", "Denver Intl", "Denver", 39.8561, -104.6737),
        ("ORD", "O'Hare Intl", "Chicago", 41.9742, -87.9073),
        ("ATL", "Hartsfield-Jackson", "Atlanta", 33.6407, -84.4277),
        ("JFK", "John F. Kennedy Intl", "New York", 40.6413, -73.7781),
        ("BOS", "Logan Intl", "Boston", 42.3656, -71.0096),
        ("MIA", "Miami Intl", "Miami", 25.7959, -80.2870),
        ("FAI", "Fairbanks Intl", "Fairbanks", 64.8151, -147.8561),
    ];

    let mut network = FlightNetwork::new();
    for (code, name, city, lat, lon) in airports {
        network.add_airport(airport(code, name, city, "US", lat, lon)).unwrap();
    }

    let legs = [
        ("LAX", "SFO"),
        ("LAX", "DEN"),
        ("LAX", "ORD"),
        ("SFO", "SEA"),
        ("SEA", "DEN"),
        ("DEN", "ORD"),
        ("ORD", "JFK"),
        ("ORD", "ATL"),
        ("ATL", "JFK"),
        ("ATL", "MIA"),
        ("MIA", "JFK"),
        ("JFK", "BOS"),
    ];
    for (a, b) in legs {
        add_round_trip(&mut network, a, b);
    }
    network
}

/// Add both directions of a leg weighted by great-circle distance.
pub fn add_round_trip(network: &mut FlightNetwork, a: &str, b: &str) {
    let from = network.airport(a).expect("leg endpoint registered").clone();
    let to = network.airport(b).expect("leg endpoint registered").clone();
    let weight = geo::haversine_km(from.latitude, from.longitude, to.latitude, to.longitude);
    network.add_route(Route::new(a, b, weight)).unwrap();
    network.add_route(Route::new(b, a, weight)).unwrap();
}
