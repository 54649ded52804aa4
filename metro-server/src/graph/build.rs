//! Graph construction and dataset-integrity validation.

use std::collections::HashMap;

use crate::domain::{Station, StationId};

use super::{AdjacencyPolicy, StationGraph};

/// Error from building a graph out of a loaded station set.
///
/// These are data-integrity failures in the dataset itself, caught once at
/// construction so that queries never have to re-check them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphBuildError {
    /// The same identifier appears twice in the input.
    #[error("duplicate station id: {0}")]
    DuplicateStation(StationId),

    /// A station belongs to no line.
    #[error("station {0} belongs to no line")]
    EmptyLines(StationId),

    /// A `relations` entry names an identifier outside the dataset.
    #[error("station {station} lists unknown neighbour {target}")]
    DanglingRelation {
        station: StationId,
        target: StationId,
    },

    /// Explicit adjacency was requested but a record carries no relations
    /// list. Falling back to shared-line derivation for just that station
    /// would mix policies, so this is rejected instead.
    #[error("station {0} has no relations list under the explicit-relations policy")]
    MissingRelations(StationId),
}

impl StationGraph {
    /// Build a graph from a loaded station set under the given policy.
    ///
    /// The input is expected in the loader's deterministic (sorted-key)
    /// order; derived adjacency inherits that order, and explicit relations
    /// keep the order of each record's `relations` list. Self-loops and
    /// duplicate neighbour entries in the data are kept as-is; the router's
    /// visited-set discipline tolerates them.
    pub fn build(
        stations: Vec<Station>,
        policy: AdjacencyPolicy,
    ) -> Result<Self, GraphBuildError> {
        let mut order: Vec<StationId> = Vec::with_capacity(stations.len());
        let mut by_id: HashMap<StationId, Station> = HashMap::with_capacity(stations.len());

        for station in stations {
            if station.lines.is_empty() {
                return Err(GraphBuildError::EmptyLines(station.id.clone()));
            }
            if by_id.contains_key(&station.id) {
                return Err(GraphBuildError::DuplicateStation(station.id.clone()));
            }
            order.push(station.id.clone());
            by_id.insert(station.id.clone(), station);
        }

        let mut adjacency: HashMap<StationId, Vec<StationId>> =
            HashMap::with_capacity(order.len());

        for id in &order {
            let station = &by_id[id];
            let neighbors = match policy {
                AdjacencyPolicy::ExplicitRelations => {
                    let relations = station
                        .relations
                        .as_ref()
                        .ok_or_else(|| GraphBuildError::MissingRelations(id.clone()))?;
                    for target in relations {
                        if !by_id.contains_key(target) {
                            return Err(GraphBuildError::DanglingRelation {
                                station: id.clone(),
                                target: target.clone(),
                            });
                        }
                    }
                    relations.clone()
                }
                AdjacencyPolicy::DerivedBySharedLine => order
                    .iter()
                    .filter(|other| {
                        *other != id
                            && by_id
                                .get(*other)
                                .is_some_and(|s| station.lines.iter().any(|l| s.on_line(*l)))
                    })
                    .cloned()
                    .collect(),
            };
            adjacency.insert(id.clone(), neighbors);
        }

        Ok(StationGraph {
            stations: by_id,
            adjacency,
            order,
            policy,
        })
    }
}
