//! Graph model construction.
//!
//! Turns the indexed station/line collections into the weighted graph
//! model: a nodelist of active stations, per-node display weights, a
//! symmetric adjacency structure, and each line's edge sequence for
//! rendering attribution.

mod builder;
mod error;
mod neighbors;
mod path;

pub use builder::{NODE_DISPLAY_SCALE, NetworkGraph};
pub use error::GraphError;
pub use neighbors::{NeighborMap, resolve_neighbors};
pub use path::{Edge, path_edges};
