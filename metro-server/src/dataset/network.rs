//! The process-wide owner of the current station graph.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::Station;
use crate::graph::{AdjacencyPolicy, StationGraph};

use super::client::DatasetClient;
use super::error::DatasetError;

/// Pick the adjacency policy for a loaded station set.
///
/// Explicit relations are used only when every record carries a relations
/// list; anything less falls back to shared-line derivation for the whole
/// dataset. The choice is made once per load, never per query, so a single
/// graph never mixes the two policies.
pub fn choose_policy(stations: &[Station]) -> AdjacencyPolicy {
    if !stations.is_empty() && stations.iter().all(|s| s.relations.is_some()) {
        AdjacencyPolicy::ExplicitRelations
    } else {
        AdjacencyPolicy::DerivedBySharedLine
    }
}

fn build_graph(stations: Vec<Station>) -> Result<StationGraph, DatasetError> {
    let policy = choose_policy(&stations);
    Ok(StationGraph::build(stations, policy)?)
}

/// Thread-safe owner of the metro network graph.
///
/// Queries take a cheap [`snapshot`](Self::snapshot) and run against that;
/// `refresh` rebuilds a fresh graph from the feed and swaps it in, so
/// in-flight queries keep the snapshot they started with.
#[derive(Clone)]
pub struct MetroNetwork {
    inner: Arc<RwLock<Arc<StationGraph>>>,
    client: DatasetClient,
}

impl MetroNetwork {
    /// Create a network by fetching the feed.
    ///
    /// Fails if the feed is unreachable or does not form a valid graph.
    pub async fn fetch(client: DatasetClient) -> Result<Self, DatasetError> {
        let stations = client.fetch_stations().await?;
        let graph = build_graph(stations)?;

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(graph))),
            client,
        })
    }

    /// Create a network from an already-loaded station set (local file or
    /// test fixture). The client is kept for later refreshes.
    pub fn from_stations(
        client: DatasetClient,
        stations: Vec<Station>,
    ) -> Result<Self, DatasetError> {
        let graph = build_graph(stations)?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(graph))),
            client,
        })
    }

    /// The current graph. The returned Arc stays valid across refreshes,
    /// giving each query an immutable view.
    pub async fn snapshot(&self) -> Arc<StationGraph> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Number of stations in the current graph.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Whether the current graph is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Re-fetch the feed and rebuild the graph from scratch.
    ///
    /// On success the new graph is swapped in and the station count
    /// returned. On failure the existing graph is preserved and the error
    /// returned.
    pub async fn refresh(&self) -> Result<usize, DatasetError> {
        let stations = self.client.fetch_stations().await?;
        let graph = build_graph(stations)?;
        let count = graph.len();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(graph);

        Ok(count)
    }
}
