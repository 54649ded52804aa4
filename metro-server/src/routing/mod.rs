//! Route finding over the station graph.
//!
//! `find_route` answers "which stations do I pass through from A to B?" in
//! two phases: a direct single-line walk when the endpoints share a line,
//! then an unweighted breadth-first search. The direct walk is a heuristic:
//! it can dead-end even when a single-line path exists, in which case BFS
//! takes over and guarantees a minimum-hop path if any path exists.

mod bfs;
mod direct;

use tracing::debug;

use crate::domain::StationId;
use crate::graph::{GraphError, StationGraph};

/// Error from a route query.
///
/// "No route" is deliberately not here: a disconnected pair of valid
/// stations is a normal outcome, represented in [`RouteOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A supplied endpoint is not in the dataset.
    #[error("unknown station: {0}")]
    UnknownStation(StationId),
}

impl From<GraphError> for RouteError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::UnknownStation(id) => RouteError::UnknownStation(id),
        }
    }
}

/// An ordered path of station identifiers from source to destination,
/// inclusive of both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<StationId>,
}

impl Route {
    fn new(stations: Vec<StationId>) -> Self {
        debug_assert!(!stations.is_empty());
        Route { stations }
    }

    /// The stations along the route, source first.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Number of hops (edges) along the route. Zero when source equals
    /// destination.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    /// Consume the route, yielding the station sequence.
    pub fn into_stations(self) -> Vec<StationId> {
        self.stations
    }
}

/// Outcome of a route query between two valid stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// A path was found.
    Found(Route),

    /// The endpoints are valid but the graph does not connect them.
    NoRoute,
}

impl RouteOutcome {
    /// The route, if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoRoute => None,
        }
    }
}

/// Find a route from `source` to `destination`.
///
/// Both endpoints are validated before any searching happens; an identifier
/// outside the dataset is an `UnknownStation` error, never a silent
/// `NoRoute`. Each call is stateless and reads only the given graph, so
/// concurrent queries against the same snapshot are safe.
pub fn find_route(
    graph: &StationGraph,
    source: &StationId,
    destination: &StationId,
) -> Result<RouteOutcome, RouteError> {
    let src = graph.station(source)?;
    let dst = graph.station(destination)?;

    if source == destination {
        return Ok(RouteOutcome::Found(Route::new(vec![source.clone()])));
    }

    // Phase 1: single-line shortcut. Tie-break is the first line in the
    // source's order that the destination also serves.
    if let Some(line) = src.common_line(dst) {
        if let Some(path) = direct::walk(graph, source, destination, line) {
            debug!(
                source = %source,
                destination = %destination,
                line = %line,
                hops = path.len() - 1,
                "direct single-line route found"
            );
            return Ok(RouteOutcome::Found(Route::new(path)));
        }
    }

    // Phase 2: BFS fallback.
    match bfs::search(graph, source, destination) {
        Some(path) => {
            debug!(
                source = %source,
                destination = %destination,
                hops = path.len() - 1,
                "BFS route found"
            );
            Ok(RouteOutcome::Found(Route::new(path)))
        }
        None => {
            debug!(source = %source, destination = %destination, "no route");
            Ok(RouteOutcome::NoRoute)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::{sid, station};
    use crate::graph::AdjacencyPolicy;

    /// Line 1 = {S1, S2, S3}; line 2 = {S3, S4, S5}; S3 is the interchange.
    fn two_line_graph() -> StationGraph {
        let stations = vec![
            station("S1", &[1], &["S2"]),
            station("S2", &[1], &["S1", "S3"]),
            station("S3", &[1, 2], &["S2", "S4"]),
            station("S4", &[2], &["S3", "S5"]),
            station("S5", &[2], &["S4"]),
        ];
        StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap()
    }

    fn path(outcome: &RouteOutcome) -> Vec<&str> {
        outcome
            .route()
            .expect("expected a route")
            .stations()
            .iter()
            .map(StationId::as_str)
            .collect()
    }

    #[test]
    fn direct_route_on_shared_line() {
        let graph = two_line_graph();
        let outcome = find_route(&graph, &sid("S1"), &sid("S3")).unwrap();
        assert_eq!(path(&outcome), vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn bfs_through_interchange() {
        let graph = two_line_graph();
        // No common line between S1 and S5; BFS goes through S3.
        let outcome = find_route(&graph, &sid("S1"), &sid("S5")).unwrap();
        assert_eq!(path(&outcome), vec!["S1", "S2", "S3", "S4", "S5"]);
    }

    #[test]
    fn source_equals_destination() {
        let graph = two_line_graph();
        let outcome = find_route(&graph, &sid("S1"), &sid("S1")).unwrap();
        assert_eq!(path(&outcome), vec!["S1"]);
        assert_eq!(outcome.route().unwrap().hops(), 0);
    }

    #[test]
    fn unknown_destination() {
        let graph = two_line_graph();
        let err = find_route(&graph, &sid("S1"), &sid("S99")).unwrap_err();
        assert_eq!(err, RouteError::UnknownStation(sid("S99")));
    }

    #[test]
    fn unknown_source() {
        let graph = two_line_graph();
        let err = find_route(&graph, &sid("S0"), &sid("S1")).unwrap_err();
        assert_eq!(err, RouteError::UnknownStation(sid("S0")));
    }

    #[test]
    fn unknown_source_reported_before_destination() {
        let graph = two_line_graph();
        let err = find_route(&graph, &sid("S0"), &sid("S99")).unwrap_err();
        assert_eq!(err, RouteError::UnknownStation(sid("S0")));
    }

    #[test]
    fn disconnected_station_yields_no_route() {
        let stations = vec![
            station("S1", &[1], &["S2"]),
            station("S2", &[1], &["S1"]),
            // S6 sits alone on its own line with no relations.
            crate::domain::Station {
                relations: Some(Vec::new()),
                ..station("S6", &[9], &["S1"])
            },
        ];
        let graph = StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap();
        let outcome = find_route(&graph, &sid("S1"), &sid("S6")).unwrap();
        assert_eq!(outcome, RouteOutcome::NoRoute);
    }

    #[test]
    fn direct_walk_dead_end_falls_back_to_bfs() {
        // All on line 1. From S1 the first on-line neighbour is the spur D,
        // which dead-ends; the walk gives up and BFS finds S1-S2-S3.
        let stations = vec![
            station("D", &[1], &["S1"]),
            station("S1", &[1], &["D", "S2"]),
            station("S2", &[1], &["S1", "S3"]),
            station("S3", &[1], &["S2"]),
        ];
        let graph = StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap();
        let outcome = find_route(&graph, &sid("S1"), &sid("S3")).unwrap();
        assert_eq!(path(&outcome), vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn self_loops_do_not_hang_route_finding() {
        let stations = vec![
            station("S1", &[1], &["S1", "S2", "S2"]),
            station("S2", &[1], &["S2", "S1"]),
        ];
        let graph = StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap();
        let outcome = find_route(&graph, &sid("S1"), &sid("S2")).unwrap();
        assert_eq!(path(&outcome), vec!["S1", "S2"]);
    }

    #[test]
    fn asymmetric_relations_give_asymmetric_reachability() {
        // S1 can reach S2, but nothing leads back to S1.
        let stations = vec![
            station("S1", &[1], &["S2"]),
            crate::domain::Station {
                relations: Some(Vec::new()),
                ..station("S2", &[2], &[])
            },
        ];
        let graph = StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap();
        let forward = find_route(&graph, &sid("S1"), &sid("S2")).unwrap();
        assert_eq!(path(&forward), vec!["S1", "S2"]);
        let reverse = find_route(&graph, &sid("S2"), &sid("S1")).unwrap();
        assert_eq!(reverse, RouteOutcome::NoRoute);
    }

    #[test]
    fn repeated_queries_are_deterministic() {
        let graph = two_line_graph();
        let first = find_route(&graph, &sid("S1"), &sid("S5")).unwrap();
        let second = find_route(&graph, &sid("S1"), &sid("S5")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn derived_adjacency_routes_in_one_hop_per_line() {
        // Under shared-line derivation every same-line pair is adjacent, so
        // S1 - S3 (interchange) - S5 is two hops.
        let stations = vec![
            station("S1", &[1], &[]),
            station("S2", &[1], &[]),
            station("S3", &[1, 2], &[]),
            station("S4", &[2], &[]),
            station("S5", &[2], &[]),
        ];
        let graph = StationGraph::build(stations, AdjacencyPolicy::DerivedBySharedLine).unwrap();
        let outcome = find_route(&graph, &sid("S1"), &sid("S5")).unwrap();
        assert_eq!(path(&outcome), vec!["S1", "S3", "S5"]);
    }
}
