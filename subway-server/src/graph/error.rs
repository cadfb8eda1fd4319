//! Graph construction error types.

use crate::domain::{LineId, StationId};

/// Referential inconsistencies between station and line records.
///
/// A document that contradicts itself produces no graph at all: the
/// first inconsistency aborts the build, with no partial output and no
/// silently skipped records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A station claims membership of a line id the document does not
    /// define (or that was dropped for having an empty sequence).
    #[error("station {station} claims line {line}, which does not exist")]
    UnknownLine { station: StationId, line: LineId },

    /// A station claims membership of a line whose sequence does not
    /// list it.
    #[error("station {station} is not in the station sequence of line {line}")]
    StationNotOnLine { station: StationId, line: LineId },

    /// A line's sequence references a station id with no record, so its
    /// coordinates are unavailable.
    #[error("line {line} references station {station}, which has no record")]
    UnknownStation { station: StationId, line: LineId },
}
