//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::routing::RouteOutcome;

/// Query parameters for a route request.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Source station id
    pub from: String,

    /// Destination station id
    pub to: String,
}

/// A station in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct StationResult {
    /// Station identifier
    pub id: String,

    /// Primary display name
    pub name: String,

    /// Lines serving this station
    pub lines: Vec<u32>,

    /// Latitude, when the dataset has coordinates
    pub latitude: Option<f64>,

    /// Longitude, when the dataset has coordinates
    pub longitude: Option<f64>,

    /// Whether the dataset marks the station out of service
    pub disabled: bool,
}

impl StationResult {
    /// Build from a domain station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
            lines: station.lines.iter().map(|l| l.value()).collect(),
            latitude: station.coordinates.map(|(lat, _)| lat),
            longitude: station.coordinates.map(|(_, lng)| lng),
            disabled: station.disabled,
        }
    }
}

/// Full station listing.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationResult>,
}

/// Outcome of a route request.
///
/// "No route" is a normal outcome and shares the 200 response with found
/// routes; the tag lets clients render the two cases differently.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteResponse {
    /// A path was found.
    Found {
        stations: Vec<StationResult>,
        hops: usize,
    },

    /// The endpoints are valid but not connected.
    NoRoute,
}

impl RouteResponse {
    /// Build from a route outcome, resolving ids to station details against
    /// the given lookup.
    pub fn from_outcome<'a>(
        outcome: &RouteOutcome,
        lookup: impl Fn(&crate::domain::StationId) -> Option<&'a Station>,
    ) -> Self {
        match outcome {
            RouteOutcome::Found(route) => RouteResponse::Found {
                stations: route
                    .stations()
                    .iter()
                    .filter_map(|id| lookup(id).map(StationResult::from_station))
                    .collect(),
                hops: route.hops(),
            },
            RouteOutcome::NoRoute => RouteResponse::NoRoute,
        }
    }
}

/// Response to a dataset refresh.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// Stations in the rebuilt graph
    pub stations: usize,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::{sid, station};
    use crate::graph::{AdjacencyPolicy, StationGraph};
    use crate::routing;

    #[test]
    fn station_result_from_station() {
        let mut s = station("Tajrish", &[1], &[]);
        s.coordinates = Some((35.805, 51.433));
        s.disabled = true;

        let result = StationResult::from_station(&s);
        assert_eq!(result.id, "Tajrish");
        assert_eq!(result.name, "Tajrish");
        assert_eq!(result.lines, vec![1]);
        assert_eq!(result.latitude, Some(35.805));
        assert_eq!(result.longitude, Some(51.433));
        assert!(result.disabled);
    }

    #[test]
    fn route_response_found_serializes_with_tag() {
        let stations = vec![
            station("S1", &[1], &["S2"]),
            station("S2", &[1], &["S1"]),
        ];
        let graph = StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap();
        let outcome = routing::find_route(&graph, &sid("S1"), &sid("S2")).unwrap();

        let response = RouteResponse::from_outcome(&outcome, |id| graph.station(id).ok());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "found");
        assert_eq!(json["hops"], 1);
        assert_eq!(json["stations"][0]["id"], "S1");
        assert_eq!(json["stations"][1]["id"], "S2");
    }

    #[test]
    fn route_response_no_route_serializes_with_tag() {
        let response = RouteResponse::from_outcome(&RouteOutcome::NoRoute, |_| None);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "no_route");
        assert!(json.get("stations").is_none());
    }
}
