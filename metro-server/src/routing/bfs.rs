//! Unweighted breadth-first search fallback.
//!
//! Standard BFS over `neighbors()` edges with a FIFO queue of
//! (station, path-so-far) and a visited set checked at dequeue. The first
//! path to reach the destination has minimum hop count; an exhausted queue
//! means the endpoints are disconnected.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::domain::StationId;
use crate::graph::StationGraph;

/// Run BFS from `source`. Returns the first-discovered path to
/// `destination`, or `None` when the queue drains without reaching it.
pub(super) fn search(
    graph: &StationGraph,
    source: &StationId,
    destination: &StationId,
) -> Option<Vec<StationId>> {
    let mut queue: VecDeque<(StationId, Vec<StationId>)> = VecDeque::new();
    queue.push_back((source.clone(), vec![source.clone()]));

    let mut visited: HashSet<StationId> = HashSet::new();
    let mut expanded = 0usize;

    while let Some((current, path)) = queue.pop_front() {
        // Goal test before the visited check, so the degenerate
        // source-equals-destination query answers without any expansion.
        if &current == destination {
            trace!(expanded, hops = path.len() - 1, "BFS reached destination");
            return Some(path);
        }

        if !visited.insert(current.clone()) {
            continue;
        }
        expanded += 1;

        let Ok(neighbors) = graph.neighbors(&current) else {
            continue;
        };

        for neighbor in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(neighbor.clone());
            queue.push_back((neighbor.clone(), extended));
        }
    }

    trace!(expanded, "BFS exhausted without reaching destination");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::{sid, station};
    use crate::graph::AdjacencyPolicy;

    fn chain_graph() -> StationGraph {
        let stations = vec![
            station("A", &[1], &["B"]),
            station("B", &[1], &["A", "C"]),
            station("C", &[1, 2], &["B", "D"]),
            station("D", &[2], &["C", "E"]),
            station("E", &[2], &["D"]),
        ];
        StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap()
    }

    #[test]
    fn finds_path_across_lines() {
        let graph = chain_graph();
        let path = search(&graph, &sid("A"), &sid("E")).unwrap();
        assert_eq!(
            path,
            vec![sid("A"), sid("B"), sid("C"), sid("D"), sid("E")]
        );
    }

    #[test]
    fn start_is_goal_checked_before_expansion() {
        let graph = chain_graph();
        let path = search(&graph, &sid("C"), &sid("C")).unwrap();
        assert_eq!(path, vec![sid("C")]);
    }

    #[test]
    fn disconnected_returns_none() {
        let stations = vec![
            station("A", &[1], &["B"]),
            station("B", &[1], &["A"]),
            crate::domain::Station {
                relations: Some(Vec::new()),
                ..station("Z", &[9], &[])
            },
        ];
        let graph = StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap();
        assert_eq!(search(&graph, &sid("A"), &sid("Z")), None);
    }

    /// Enumerate every simple path between two stations by DFS.
    fn all_path_lengths(
        graph: &StationGraph,
        from: &StationId,
        to: &StationId,
    ) -> Vec<usize> {
        fn go(
            graph: &StationGraph,
            current: &StationId,
            to: &StationId,
            on_path: &mut Vec<StationId>,
            lengths: &mut Vec<usize>,
        ) {
            if current == to {
                lengths.push(on_path.len() - 1);
                return;
            }
            for next in graph.neighbors(current).unwrap() {
                if on_path.contains(next) {
                    continue;
                }
                on_path.push(next.clone());
                go(graph, next, to, on_path, lengths);
                on_path.pop();
            }
        }

        let mut lengths = Vec::new();
        let mut on_path = vec![from.clone()];
        go(graph, from, to, &mut on_path, &mut lengths);
        lengths
    }

    #[test]
    fn bfs_paths_have_minimum_hop_count() {
        // A diamond with a long way round: A-B-D and A-C-D plus A-E-F-D.
        let stations = vec![
            station("A", &[1], &["E", "B", "C"]),
            station("B", &[1], &["A", "D"]),
            station("C", &[1], &["A", "D"]),
            station("D", &[1], &["B", "C", "F"]),
            station("E", &[1], &["A", "F"]),
            station("F", &[1], &["E", "D"]),
        ];
        let graph = StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap();

        for from in graph.station_ids() {
            for to in graph.station_ids() {
                let lengths = all_path_lengths(&graph, from, to);
                let shortest = lengths.iter().min().copied();
                let found = search(&graph, from, to).map(|p| p.len() - 1);
                assert_eq!(found, shortest, "pair {from} -> {to}");
            }
        }
    }

    #[test]
    fn duplicate_edges_do_not_duplicate_path_entries() {
        let stations = vec![
            station("A", &[1], &["B", "B", "A"]),
            station("B", &[1], &["A", "C", "C"]),
            station("C", &[1], &["B"]),
        ];
        let graph = StationGraph::build(stations, AdjacencyPolicy::ExplicitRelations).unwrap();
        let path = search(&graph, &sid("A"), &sid("C")).unwrap();
        assert_eq!(path, vec![sid("A"), sid("B"), sid("C")]);
    }
}
