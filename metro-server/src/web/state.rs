//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedRouter;
use crate::dataset::MetroNetwork;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached route finder over the current network
    pub router: Arc<CachedRouter>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(router: CachedRouter) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    /// The underlying network.
    pub fn network(&self) -> &MetroNetwork {
        self.router.network()
    }
}
