use serde::Serialize;

use crate::network::FlightNetwork;

/// An ordered sequence of airport codes from source to destination
/// inclusive, with the summed weight of the traversed routes.
///
/// A single-stop path (source equals destination) has cost 0 and is always
/// valid. An unreachable result is represented by an empty stop list with an
/// infinite cost; see [`crate::SearchStatus::Unreachable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    pub stops: Vec<String>,
    pub total_cost: f64,
}

impl Path {
    pub(crate) fn single(code: String) -> Self {
        Self {
            stops: vec![code],
            total_cost: 0.0,
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            stops: Vec::new(),
            total_cost: f64::INFINITY,
        }
    }

    /// Whether the search produced a usable path.
    pub fn is_found(&self) -> bool {
        !self.stops.is_empty()
    }

    /// Number of traversed routes.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Number of intermediate stops between source and destination.
    pub fn layovers(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }

    /// Whether the path is a single direct route.
    pub fn is_direct(&self) -> bool {
        self.stops.len() == 2
    }

    /// Re-sum the route weights along the stop sequence against `network`,
    /// taking the cheapest route for every leg. Returns `None` when some leg
    /// has no connecting route or the path is empty.
    pub fn cost_over(&self, network: &FlightNetwork) -> Option<f64> {
        if self.stops.is_empty() {
            return None;
        }
        let mut total = 0.0;
        for leg in self.stops.windows(2) {
            total += network.route_weight(&leg[0], &leg[1])?;
        }
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_stop_path_has_zero_cost() {
        let path = Path::single("LAX".to_string());
        assert_eq!(path.stops, vec!["LAX"]);
        assert_eq!(path.total_cost, 0.0);
        assert_eq!(path.hop_count(), 0);
        assert_eq!(path.layovers(), 0);
        assert!(path.is_found());
        assert!(!path.is_direct());
    }

    #[test]
    fn unreachable_path_is_empty_with_infinite_cost() {
        let path = Path::unreachable();
        assert!(!path.is_found());
        assert!(path.total_cost.is_infinite());
        assert_eq!(path.layovers(), 0);
    }

    #[test]
    fn layover_count_excludes_endpoints() {
        let path = Path {
            stops: vec!["LAX".into(), "ORD".into(), "JFK".into()],
            total_cost: 4000.0,
        };
        assert_eq!(path.hop_count(), 2);
        assert_eq!(path.layovers(), 1);
    }
}
