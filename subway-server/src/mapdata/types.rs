//! Map document schema.

use serde::Deserialize;

use crate::domain::{Line, Network, Station};

/// A map document as produced by the external map-authoring tool.
///
/// Only the fields the pipeline consumes are modeled; unknown keys in the
/// document are ignored. Both top-level collections are required, and a
/// document missing either fails to parse as a whole.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapDocument {
    pub stations: Vec<Station>,
    pub lines: Vec<Line>,
}

impl MapDocument {
    /// Index the document's collections for graph building.
    pub fn into_network(self) -> Network {
        Network::new(self.stations, self.lines)
    }
}
