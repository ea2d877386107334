mod common;

use flightroute_lib::{compare_engines, Heuristic, SearchStatus};

#[test]
fn engines_agree_under_an_admissible_heuristic() {
    let network = common::regional_network();
    let report = compare_engines(&network, "LAX", "JFK", Heuristic::Haversine).unwrap();

    assert!(report.costs_agree);
    assert_eq!(report.uniform_cost.status, SearchStatus::Found);
    assert_eq!(report.guided.status, SearchStatus::Found);
    assert!(report.expansion_ratio >= 1.0);
    assert_eq!(report.path.stops.first().map(String::as_str), Some("LAX"));
    assert_eq!(report.path.stops.last().map(String::as_str), Some("JFK"));
}

#[test]
fn unreachable_queries_agree_too() {
    let network = common::regional_network();
    let report = compare_engines(&network, "LAX", "FAI", Heuristic::Haversine).unwrap();

    assert!(report.costs_agree);
    assert_eq!(report.uniform_cost.status, SearchStatus::Unreachable);
    assert_eq!(report.guided.status, SearchStatus::Unreachable);
}

#[test]
fn report_echoes_codes_as_the_network_registers_them() {
    let network = common::regional_network();
    let report = compare_engines(&network, " lax ", "jfk", Heuristic::Haversine).unwrap();

    assert_eq!(report.source, "LAX");
    assert_eq!(report.destination, "JFK");
}

#[test]
fn report_serializes_for_export() {
    let network = common::triangle_network();
    let report = compare_engines(&network, "AAA", "CCC", Heuristic::Euclidean).unwrap();

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["heuristic"], "euclidean");
    assert_eq!(json["source"], "AAA");
    assert_eq!(json["uniform_cost"]["status"], "found");
    assert_eq!(json["path"]["total_cost"], 20.0);
}
