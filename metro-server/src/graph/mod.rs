//! The station graph.
//!
//! An immutable adjacency view over a loaded station set. Adjacency comes
//! from one of two sources, fixed per dataset at build time: the explicit
//! `relations` lists on the records, or the "same line implies connected"
//! derivation used by older versions of the feed. The two policies are never
//! mixed within one graph.

mod build;

use std::collections::HashMap;

use crate::domain::{Station, StationId};

pub use build::GraphBuildError;

/// Where a graph's adjacency comes from.
///
/// Chosen once per dataset when the graph is built; queries never revisit
/// the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjacencyPolicy {
    /// Use the `relations` list carried on every station record.
    ExplicitRelations,

    /// Treat every pair of stations sharing at least one line as adjacent.
    DerivedBySharedLine,
}

/// Error from a graph query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The queried identifier is not in the dataset.
    #[error("unknown station: {0}")]
    UnknownStation(StationId),
}

/// Immutable station graph with precomputed adjacency.
///
/// Neighbour order is deterministic: explicit relations keep their listed
/// order, derived adjacency follows the loader's sorted-key dataset order.
/// Relations are taken exactly as loaded; an asymmetric `relations` entry
/// produces asymmetric reachability, which the router preserves rather than
/// repairs.
#[derive(Debug, Clone)]
pub struct StationGraph {
    stations: HashMap<StationId, Station>,
    adjacency: HashMap<StationId, Vec<StationId>>,
    order: Vec<StationId>,
    policy: AdjacencyPolicy,
}

impl StationGraph {
    /// The stations adjacent to `id`, in deterministic order.
    pub fn neighbors(&self, id: &StationId) -> Result<&[StationId], GraphError> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownStation(id.clone()))
    }

    /// Look up a station record.
    pub fn station(&self, id: &StationId) -> Result<&Station, GraphError> {
        self.stations
            .get(id)
            .ok_or_else(|| GraphError::UnknownStation(id.clone()))
    }

    /// Whether the dataset contains this identifier.
    pub fn contains(&self, id: &StationId) -> bool {
        self.stations.contains_key(id)
    }

    /// All station identifiers, in dataset order.
    pub fn station_ids(&self) -> impl Iterator<Item = &StationId> {
        self.order.iter()
    }

    /// All station records, in dataset order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.order.iter().filter_map(|id| self.stations.get(id))
    }

    /// Number of stations in the graph.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The adjacency policy this graph was built with.
    pub fn policy(&self) -> AdjacencyPolicy {
        self.policy
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use crate::domain::{LineId, Station, StationId};

    pub fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    /// Build a station record for tests: `(id, lines, relations)`.
    /// An empty relations slice means "no relations list at all".
    pub fn station(id: &str, lines: &[u32], relations: &[&str]) -> Station {
        Station {
            id: sid(id),
            name: id.to_string(),
            translations: HashMap::new(),
            lines: lines.iter().map(|&n| LineId::new(n)).collect(),
            coordinates: None,
            relations: if relations.is_empty() {
                None
            } else {
                Some(relations.iter().map(|r| sid(r)).collect())
            },
            disabled: false,
        }
    }
}
