//! Document cleaning.

use tracing::debug;

use super::MapDocument;

/// Remove lines whose station sequence is empty.
///
/// Empty lines are authoring leftovers; they carry no adjacency and would
/// only trip up membership checks downstream. Station records pass
/// through unchanged, and the surviving lines keep their document order.
/// Cleaning an already-clean document changes nothing.
pub fn clean(document: MapDocument) -> MapDocument {
    let total = document.lines.len();
    let lines: Vec<_> = document
        .lines
        .into_iter()
        .filter(|line| !line.stations.is_empty())
        .collect();

    if lines.len() < total {
        debug!(
            dropped = total - lines.len(),
            kept = lines.len(),
            "dropped lines with empty station sequences"
        );
    }

    MapDocument {
        stations: document.stations,
        lines,
    }
}
