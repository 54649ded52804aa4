//! Caching layer for computed routes.
//!
//! Routes only change when the dataset changes, so computed outcomes are
//! cached by endpoint pair and invalidated wholesale on refresh. TTL and
//! capacity bounds keep the cache from growing with every queried pair on a
//! large network.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::dataset::{DatasetError, MetroNetwork};
use crate::domain::StationId;
use crate::routing::{self, RouteError, RouteOutcome};

/// Cache key: (source, destination).
type RouteKey = (StationId, StationId);

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached routes.
    pub ttl: Duration,

    /// Maximum number of cached endpoint pairs.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Route finder with a result cache over the current network.
pub struct CachedRouter {
    network: MetroNetwork,
    routes: MokaCache<RouteKey, Arc<RouteOutcome>>,
}

impl CachedRouter {
    /// Create a cached router over the given network.
    pub fn new(network: MetroNetwork, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { network, routes }
    }

    /// Find a route, serving from cache when possible.
    ///
    /// Only successful computations are cached; `UnknownStation` errors are
    /// recomputed on every call (they are cheap, and caching them would keep
    /// rejecting an id that a refresh might introduce).
    pub async fn find_route(
        &self,
        source: &StationId,
        destination: &StationId,
    ) -> Result<Arc<RouteOutcome>, RouteError> {
        let key = (source.clone(), destination.clone());
        if let Some(hit) = self.routes.get(&key).await {
            return Ok(hit);
        }

        let graph = self.network.snapshot().await;
        let outcome = Arc::new(routing::find_route(&graph, source, destination)?);
        self.routes.insert(key, Arc::clone(&outcome)).await;

        Ok(outcome)
    }

    /// Refresh the underlying network and drop every cached route.
    pub async fn refresh(&self) -> Result<usize, DatasetError> {
        let count = self.network.refresh().await?;
        self.routes.invalidate_all();
        Ok(count)
    }

    /// The underlying network.
    pub fn network(&self) -> &MetroNetwork {
        &self.network
    }

    /// Number of cached routes (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }
}
