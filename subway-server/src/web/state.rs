//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::distance::DistancePolicy;
use crate::domain::Network;
use crate::graph::NetworkGraph;

/// A successfully ingested map: the indexed network plus the graph model
/// built from it.
///
/// Replaced wholesale on every upload, never mutated in place, so
/// readers always see a network and graph that belong together.
pub struct LoadedMap {
    pub network: Network,
    pub graph: NetworkGraph,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The currently loaded map, if any.
    pub map: Arc<RwLock<Option<LoadedMap>>>,

    /// Distance policy for this process, chosen once at startup.
    pub policy: DistancePolicy,
}

impl AppState {
    /// Create state with no map loaded.
    pub fn new(policy: DistancePolicy) -> Self {
        Self {
            map: Arc::new(RwLock::new(None)),
            policy,
        }
    }
}
