mod common;

use flightroute_lib::{
    astar, dijkstra, Airport, CancelToken, Error, Heuristic, SearchOptions, SearchStatus,
};

#[test]
fn guided_search_matches_uniform_cost_on_the_triangle() {
    let network = common::triangle_network();
    let (path, stats) = astar::find_path(&network, "AAA", "CCC", Heuristic::Haversine).unwrap();

    assert_eq!(path.stops, vec!["AAA", "BBB", "CCC"]);
    assert_eq!(path.total_cost, 20.0);
    assert_eq!(stats.status, SearchStatus::Found);
}

#[test]
fn admissible_heuristics_return_the_uniform_cost_optimum() {
    let network = common::regional_network();
    let queries = [("LAX", "JFK"), ("SEA", "MIA"), ("SFO", "BOS"), ("DEN", "ATL")];

    for (source, destination) in queries {
        let (expected, _) = dijkstra::find_path(&network, source, destination).unwrap();
        for heuristic in [Heuristic::Haversine, Heuristic::Euclidean] {
            let (path, _) = astar::find_path(&network, source, destination, heuristic).unwrap();
            assert!(
                (path.total_cost - expected.total_cost).abs() < 1e-6,
                "{source}->{destination} with {heuristic} returned {} instead of {}",
                path.total_cost,
                expected.total_cost
            );
        }
    }
}

#[test]
fn guided_search_expands_no_more_nodes_than_uniform_cost() {
    let network = common::regional_network();
    let queries = [("LAX", "JFK"), ("SEA", "MIA"), ("SFO", "BOS")];

    for (source, destination) in queries {
        let (_, uniform) = dijkstra::find_path(&network, source, destination).unwrap();
        let (_, guided) =
            astar::find_path(&network, source, destination, Heuristic::Haversine).unwrap();
        assert!(
            guided.nodes_expanded <= uniform.nodes_expanded,
            "{source}->{destination}: guided expanded {} vs uniform {}",
            guided.nodes_expanded,
            uniform.nodes_expanded
        );
    }
}

#[test]
fn zero_custom_heuristic_degenerates_to_uniform_cost() {
    fn zero(_: &Airport, _: &Airport) -> f64 {
        0.0
    }

    let network = common::regional_network();
    let (expected, uniform) = dijkstra::find_path(&network, "LAX", "BOS").unwrap();
    let (path, guided) =
        astar::find_path(&network, "LAX", "BOS", Heuristic::Custom(zero)).unwrap();

    assert!((path.total_cost - expected.total_cost).abs() < 1e-6);
    assert_eq!(guided.nodes_expanded, uniform.nodes_expanded);
}

#[test]
fn manhattan_heuristic_still_returns_a_consistent_path() {
    // Manhattan can overestimate, so optimality is not guaranteed; the
    // returned path must still be a real route whose cost re-sums.
    let network = common::regional_network();
    let (path, stats) = astar::find_path(&network, "LAX", "JFK", Heuristic::Manhattan).unwrap();

    assert_eq!(stats.status, SearchStatus::Found);
    let resummed = path.cost_over(&network).expect("every leg has a route");
    assert!((resummed - path.total_cost).abs() < 1e-9);
}

#[test]
fn same_source_and_destination_is_a_single_stop_path() {
    let network = common::regional_network();
    let (path, stats) = astar::find_path(&network, "JFK", "JFK", Heuristic::Haversine).unwrap();

    assert_eq!(path.stops, vec!["JFK"]);
    assert_eq!(path.total_cost, 0.0);
    assert_eq!(stats.nodes_expanded, 0);
}

#[test]
fn unreachable_destination_is_a_status_not_an_error() {
    let network = common::regional_network();
    let (path, stats) = astar::find_path(&network, "LAX", "FAI", Heuristic::Haversine).unwrap();

    assert!(path.stops.is_empty());
    assert_eq!(stats.status, SearchStatus::Unreachable);
    assert!(stats.total_cost.is_infinite());
}

#[test]
fn unknown_codes_fail_before_searching() {
    let network = common::regional_network();
    let err = astar::find_path(&network, "LAX", "ZZZ", Heuristic::Haversine).unwrap_err();
    assert!(matches!(err, Error::UnknownAirport { code } if code == "ZZZ"));
}

#[test]
fn pre_cancelled_token_aborts_the_search() {
    let network = common::regional_network();
    let cancel = CancelToken::new();
    cancel.cancel();
    let options = SearchOptions {
        cancel: Some(cancel),
    };

    let err =
        astar::find_path_with(&network, "LAX", "JFK", Heuristic::Haversine, &options).unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[test]
fn repeated_runs_are_deterministic() {
    let network = common::regional_network();
    let (first_path, first_stats) =
        astar::find_path(&network, "SEA", "MIA", Heuristic::Haversine).unwrap();
    let (second_path, second_stats) =
        astar::find_path(&network, "SEA", "MIA", Heuristic::Haversine).unwrap();

    assert_eq!(first_path.stops, second_path.stops);
    assert_eq!(first_stats.nodes_expanded, second_stats.nodes_expanded);
}
