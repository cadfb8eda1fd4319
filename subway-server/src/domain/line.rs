//! Line records.

use serde::Deserialize;

use super::{LineId, StationId};

/// A line record: an ordered station sequence forming one route.
///
/// Sequence order is meaningful. Adjacency along a line is defined by
/// consecutive positions, so reordering the sequence changes the graph.
/// A line with an empty sequence is dropped by the cleaner and never
/// reaches the graph model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Line {
    pub id: LineId,
    /// Display color from the authoring tool, e.g. `"#0039A6"`.
    pub color: String,
    pub stations: Vec<StationId>,
}

impl Line {
    /// Position of `station` in this line's sequence (first occurrence).
    pub fn position_of(&self, station: StationId) -> Option<usize> {
        self.stations.iter().position(|&s| s == station)
    }
}
