//! Domain types for the subway network.
//!
//! This module contains the validated model of a map document: station
//! and line records plus the id-indexed collections built from them.
//! Records are parsed once at the upload boundary and immutable
//! thereafter, so code that receives these types can trust their shape.

mod ids;
mod line;
mod network;
mod station;

pub use ids::{LineId, StationId};
pub use line::Line;
pub use network::Network;
pub use station::{Coordinates, Station};
