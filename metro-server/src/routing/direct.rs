//! Direct single-line walk.
//!
//! Given a line both endpoints serve, walk greedily from the source: at each
//! station take the first neighbour, in `neighbors()` order, that serves the
//! chosen line and has not been stepped on yet. The not-yet-visited guard is
//! what terminates the walk on looping or oscillating adjacency; it does not
//! make the heuristic complete, and a dead end is reported as `None` so the
//! caller can fall back to BFS.

use std::collections::HashSet;

use tracing::trace;

use crate::domain::{LineId, StationId};
use crate::graph::StationGraph;

/// Attempt the single-line walk. Returns the full path on success, `None`
/// when the walk dead-ends before reaching the destination.
pub(super) fn walk(
    graph: &StationGraph,
    source: &StationId,
    destination: &StationId,
    line: LineId,
) -> Option<Vec<StationId>> {
    let mut path = vec![source.clone()];
    let mut visited: HashSet<StationId> = HashSet::new();
    visited.insert(source.clone());

    let mut current = source.clone();
    while &current != destination {
        let neighbors = graph.neighbors(&current).ok()?;
        let next = neighbors.iter().find(|candidate| {
            !visited.contains(*candidate)
                && graph
                    .station(candidate)
                    .map(|s| s.on_line(line))
                    .unwrap_or(false)
        });

        match next {
            Some(next) => {
                trace!(station = %next, line = %line, "direct walk step");
                visited.insert(next.clone());
                path.push(next.clone());
                current = next.clone();
            }
            None => {
                trace!(station = %current, line = %line, "direct walk dead end");
                return None;
            }
        }
    }

    Some(path)
}
