//! Edge sequence utility.

use crate::domain::StationId;

/// A directed station pair.
pub type Edge = (StationId, StationId);

/// The consecutive pairs of a station sequence, in order.
///
/// A sequence of n stations yields n - 1 edges; sequences of length 0
/// or 1 yield none. Used both to turn a line's sequence into drawable
/// segments and to turn a computed path into highlightable edges.
pub fn path_edges(path: &[StationId]) -> Vec<Edge> {
    path.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
