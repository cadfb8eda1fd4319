//! Neighbor resolution.

use std::collections::BTreeMap;

use crate::distance::DistancePolicy;
use crate::domain::{Network, Station, StationId};

use super::GraphError;

/// Edge weights keyed by neighbor station id.
///
/// A plain mapping: when several of a station's lines make the same pair
/// adjacent, the line walked last overwrites the earlier weight. Which
/// lines contributed is not recorded here; the render layer recovers
/// that from the line sequences themselves.
pub type NeighborMap = BTreeMap<StationId, f64>;

/// Resolve the neighbors of `station` along each line it claims.
///
/// Lines are walked in the order of the station's `lines` list. For each
/// line, the stations at the previous and next sequence positions (where
/// those exist) become neighbors, weighted by `policy` applied to the
/// two coordinate pairs. Termini simply lack one side.
///
/// Activity flags are not consulted here; the builder decides which
/// stations are visible in the finished graph.
///
/// # Errors
///
/// * [`GraphError::UnknownLine`] if the station claims a line id the
///   network does not contain.
/// * [`GraphError::StationNotOnLine`] if a claimed line's sequence does
///   not list the station.
/// * [`GraphError::UnknownStation`] if an adjacent position references a
///   station id with no record.
pub fn resolve_neighbors(
    station: &Station,
    network: &Network,
    policy: DistancePolicy,
) -> Result<NeighborMap, GraphError> {
    let mut neighbors = NeighborMap::new();
    let origin = station.coordinates();

    for &line_id in &station.lines {
        let line = network.line(line_id).ok_or(GraphError::UnknownLine {
            station: station.id,
            line: line_id,
        })?;
        let position = line
            .position_of(station.id)
            .ok_or(GraphError::StationNotOnLine {
                station: station.id,
                line: line_id,
            })?;

        if position > 0 {
            let neighbor_id = line.stations[position - 1];
            let neighbor = network
                .station(neighbor_id)
                .ok_or(GraphError::UnknownStation {
                    station: neighbor_id,
                    line: line_id,
                })?;
            neighbors.insert(neighbor_id, policy.distance(origin, neighbor.coordinates()));
        }

        if position + 1 < line.stations.len() {
            let neighbor_id = line.stations[position + 1];
            let neighbor = network
                .station(neighbor_id)
                .ok_or(GraphError::UnknownStation {
                    station: neighbor_id,
                    line: line_id,
                })?;
            neighbors.insert(neighbor_id, policy.distance(origin, neighbor.coordinates()));
        }
    }

    Ok(neighbors)
}
