//! Graph model construction.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::distance::DistancePolicy;
use crate::domain::{Coordinates, LineId, Network, StationId};

use super::{Edge, GraphError, NeighborMap, path_edges, resolve_neighbors};

/// Multiplier applied to a node's claimed-line count for display sizing.
pub const NODE_DISPLAY_SCALE: f64 = 4.0;

/// The weighted graph model built from a network.
///
/// Contains only active stations. The adjacency structure is symmetric:
/// every surviving neighbor entry is applied in both directions with the
/// same weight, so reachability never depends on which side claimed the
/// line. There are no self-loop entries.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkGraph {
    nodes: BTreeMap<StationId, Coordinates>,
    display_weights: BTreeMap<StationId, f64>,
    adjacency: BTreeMap<StationId, NeighborMap>,
    line_edges: BTreeMap<LineId, Vec<Edge>>,
}

impl NetworkGraph {
    /// Build the graph model for `network` under `policy`.
    ///
    /// Inactive stations are invisible to every consumer: they get no
    /// node, no adjacency key, and no neighbor entry pointing at them.
    /// A line that runs through an inactive station is therefore left
    /// with a gap, not a bridge; the two surviving sides stay
    /// disconnected unless some other line joins them.
    ///
    /// Stations are processed in document order, so where two lines give
    /// the same pair different weights the line resolved last wins in
    /// both directions.
    pub fn build(network: &Network, policy: DistancePolicy) -> Result<Self, GraphError> {
        let mut nodes = BTreeMap::new();
        let mut display_weights = BTreeMap::new();
        let mut adjacency: BTreeMap<StationId, NeighborMap> = BTreeMap::new();

        for station in network.active_stations() {
            let resolved = resolve_neighbors(station, network, policy)?;
            trace!(station = %station.id, neighbors = resolved.len(), "resolved neighbors");

            nodes.insert(station.id, station.coordinates());
            display_weights.insert(station.id, station.lines.len() as f64 * NODE_DISPLAY_SCALE);
            adjacency.entry(station.id).or_default();

            for (neighbor, weight) in resolved {
                if neighbor == station.id || !network.is_active(neighbor) {
                    continue;
                }
                adjacency.entry(station.id).or_default().insert(neighbor, weight);
                adjacency.entry(neighbor).or_default().insert(station.id, weight);
            }
        }

        let line_edges = network
            .lines()
            .iter()
            .map(|line| (line.id, path_edges(&line.stations)))
            .collect();

        let graph = Self {
            nodes,
            display_weights,
            adjacency,
            line_edges,
        };
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            %policy,
            "built graph model"
        );
        Ok(graph)
    }

    /// The nodelist: active station ids mapped to their coordinates.
    pub fn nodes(&self) -> &BTreeMap<StationId, Coordinates> {
        &self.nodes
    }

    /// Per-node display weight (claimed-line count scaled for rendering).
    pub fn display_weights(&self) -> &BTreeMap<StationId, f64> {
        &self.display_weights
    }

    /// The symmetric adjacency structure.
    ///
    /// Every node appears as a key, including isolated ones, whose maps
    /// are empty.
    pub fn adjacency(&self) -> &BTreeMap<StationId, NeighborMap> {
        &self.adjacency
    }

    /// Each line's sequence as consecutive pairs, in sequence order.
    ///
    /// Taken from the raw sequences, so pairs touching invisible
    /// stations may appear here; consumers match these against the
    /// graph's edges.
    pub fn line_edges(&self) -> &BTreeMap<LineId, Vec<Edge>> {
        &self.line_edges
    }

    /// Whether `id` is a node of this graph.
    pub fn contains(&self, id: StationId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// The neighbors of `id` with their weights, in ascending id order.
    pub fn neighbors(&self, id: StationId) -> impl Iterator<Item = (StationId, f64)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flatten()
            .map(|(&neighbor, &weight)| (neighbor, weight))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed neighbor entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(NeighborMap::len).sum()
    }

    /// Undirected edges, each reported once with the smaller id first,
    /// in ascending order.
    pub fn undirected_edges(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        self.adjacency.iter().flat_map(|(&from, neighbors)| {
            neighbors
                .iter()
                .filter(move |&(&to, _)| from < to)
                .map(move |(&to, &weight)| ((from, to), weight))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Station};

    fn station(id: u32, lat: f64, lng: f64, lines: &[u32], active: bool) -> Station {
        Station {
            id: StationId(id),
            name: format!("S{id}"),
            lat,
            lng,
            lines: lines.iter().map(|&l| LineId(l)).collect(),
            active,
        }
    }

    fn line(id: u32, stations: &[u32]) -> Line {
        Line {
            id: LineId(id),
            color: "#A7A9AC".to_string(),
            stations: stations.iter().map(|&s| StationId(s)).collect(),
        }
    }

    const POLICY: DistancePolicy = DistancePolicy::SquaredEuclidean;

    /// Three stations in a row on one line.
    fn three_in_a_row() -> Network {
        Network::new(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1], true),
                station(3, 0.0, 2.0, &[1], true),
            ],
            vec![line(1, &[1, 2, 3])],
        )
    }

    #[test]
    fn chain_produces_expected_model() {
        let graph = NetworkGraph::build(&three_in_a_row(), POLICY).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(
            graph.nodes()[&StationId(2)],
            Coordinates { lat: 0.0, lng: 1.0 }
        );

        let a = &graph.adjacency()[&StationId(1)];
        assert_eq!(a.len(), 1);
        assert_eq!(a[&StationId(2)], 1.0);

        let b = &graph.adjacency()[&StationId(2)];
        assert_eq!(b.len(), 2);
        assert_eq!(b[&StationId(1)], 1.0);
        assert_eq!(b[&StationId(3)], 1.0);

        let c = &graph.adjacency()[&StationId(3)];
        assert_eq!(c.len(), 1);
        assert_eq!(c[&StationId(2)], 1.0);

        // One claimed line each.
        assert_eq!(graph.display_weights()[&StationId(1)], NODE_DISPLAY_SCALE);
    }

    #[test]
    fn inactive_station_leaves_a_gap() {
        let network = Network::new(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1], false),
                station(3, 0.0, 2.0, &[1], true),
            ],
            vec![line(1, &[1, 2, 3])],
        );

        let graph = NetworkGraph::build(&network, POLICY).unwrap();

        // The inactive station is invisible everywhere, and the line is
        // not re-stitched around it.
        assert_eq!(
            graph.nodes().keys().copied().collect::<Vec<_>>(),
            vec![StationId(1), StationId(3)]
        );
        assert!(graph.adjacency()[&StationId(1)].is_empty());
        assert!(graph.adjacency()[&StationId(3)].is_empty());
        assert!(!graph.display_weights().contains_key(&StationId(2)));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn one_sided_claim_still_connects_both_directions() {
        // Station 2 sits on the line's sequence but claims no lines.
        let network = Network::new(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[], true),
            ],
            vec![line(1, &[1, 2])],
        );

        let graph = NetworkGraph::build(&network, POLICY).unwrap();
        assert_eq!(graph.adjacency()[&StationId(1)][&StationId(2)], 1.0);
        assert_eq!(graph.adjacency()[&StationId(2)][&StationId(1)], 1.0);
    }

    #[test]
    fn self_loops_never_appear() {
        // A sequence that repeats a station back to back would otherwise
        // make the station its own neighbor.
        let network = Network::new(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1], true),
            ],
            vec![line(1, &[1, 1, 2])],
        );

        let graph = NetworkGraph::build(&network, POLICY).unwrap();
        assert!(!graph.adjacency()[&StationId(1)].contains_key(&StationId(1)));
        assert_eq!(graph.adjacency()[&StationId(1)][&StationId(2)], 1.0);
        assert_eq!(graph.adjacency()[&StationId(2)][&StationId(1)], 1.0);
    }

    #[test]
    fn interchange_merges_lines() {
        let network = Network::new(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1, 2], true),
                station(3, 1.0, 1.0, &[2], true),
            ],
            vec![line(1, &[1, 2]), line(2, &[2, 3])],
        );

        let graph = NetworkGraph::build(&network, POLICY).unwrap();
        let hub = &graph.adjacency()[&StationId(2)];
        assert_eq!(hub.len(), 2);
        // Two claimed lines double the display weight.
        assert_eq!(
            graph.display_weights()[&StationId(2)],
            2.0 * NODE_DISPLAY_SCALE
        );
    }

    #[test]
    fn build_is_deterministic() {
        let network = Network::new(
            vec![
                station(4, 0.0, 0.0, &[1, 2], true),
                station(2, 0.5, 1.0, &[1], true),
                station(9, 1.0, 0.0, &[2], true),
            ],
            vec![line(1, &[2, 4]), line(2, &[4, 9])],
        );

        let first = NetworkGraph::build(&network, POLICY).unwrap();
        let second = NetworkGraph::build(&network, POLICY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_line_claim_aborts_build() {
        let network = Network::new(vec![station(1, 0.0, 0.0, &[7], true)], vec![]);
        let err = NetworkGraph::build(&network, POLICY).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownLine {
                station: StationId(1),
                line: LineId(7),
            }
        );
    }

    #[test]
    fn ghost_reference_aborts_build() {
        let network = Network::new(
            vec![station(1, 0.0, 0.0, &[1], true)],
            vec![line(1, &[1, 42])],
        );
        let err = NetworkGraph::build(&network, POLICY).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownStation {
                station: StationId(42),
                line: LineId(1),
            }
        );
    }

    #[test]
    fn inconsistency_on_inactive_station_is_ignored() {
        // Only active stations are resolved, so a bogus claim on an
        // inactive one cannot poison the build.
        let network = Network::new(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1], true),
                station(3, 5.0, 5.0, &[99], false),
            ],
            vec![line(1, &[1, 2])],
        );

        let graph = NetworkGraph::build(&network, POLICY).unwrap();
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn line_edges_follow_raw_sequences() {
        let network = Network::new(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1], false),
                station(3, 0.0, 2.0, &[1], true),
            ],
            vec![line(1, &[1, 2, 3])],
        );

        let graph = NetworkGraph::build(&network, POLICY).unwrap();
        // The raw sequence keeps the pairs through the inactive station.
        assert_eq!(
            graph.line_edges()[&LineId(1)],
            vec![
                (StationId(1), StationId(2)),
                (StationId(2), StationId(3)),
            ]
        );
    }

    #[test]
    fn undirected_edges_report_each_pair_once() {
        let graph = NetworkGraph::build(&three_in_a_row(), POLICY).unwrap();
        let edges: Vec<_> = graph.undirected_edges().collect();
        assert_eq!(
            edges,
            vec![
                ((StationId(1), StationId(2)), 1.0),
                ((StationId(2), StationId(3)), 1.0),
            ]
        );
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn empty_network_builds_empty_graph() {
        let network = Network::new(vec![], vec![]);
        let graph = NetworkGraph::build(&network, POLICY).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.undirected_edges().next().is_none());
    }
}
