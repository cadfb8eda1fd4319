//! Shortest-path queries over the graph model.
//!
//! Path search itself is delegated to the `pathfinding` crate's Dijkstra
//! implementation; this module adapts the graph model to its interface
//! and maps its outcomes onto domain results. All edge weights are
//! non-negative by construction, which is what makes Dijkstra valid here.

use ordered_float::OrderedFloat;
use pathfinding::prelude::dijkstra;
use tracing::debug;

use crate::domain::StationId;
use crate::graph::{Edge, NetworkGraph, path_edges};

/// Error from a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// An endpoint is not a node of the graph (unknown id, or a station
    /// that is inactive and therefore invisible).
    #[error("station {0} is not in the graph")]
    UnknownStation(StationId),

    /// The endpoints sit in different connected components.
    #[error("no path exists between station {from} and station {to}")]
    NoPath { from: StationId, to: StationId },
}

/// A shortest path between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Stations visited, start first, end last.
    pub stations: Vec<StationId>,
    /// The path's consecutive pairs, ready for highlighting.
    pub edges: Vec<Edge>,
    /// Sum of edge weights, in the active distance policy's unit.
    pub total_weight: f64,
}

impl Route {
    /// Whether `edge` lies on this route, in either direction.
    pub fn covers(&self, edge: Edge) -> bool {
        let (a, b) = edge;
        self.edges
            .iter()
            .any(|&(from, to)| (from, to) == (a, b) || (from, to) == (b, a))
    }
}

/// Find the minimum-total-weight path from `from` to `to`.
///
/// Neighbors are expanded in ascending id order, so the result is stable
/// for a given graph even when several paths tie on weight. Callers
/// guard the degenerate `from == to` selection; it is a no-op at the
/// call sites and never reaches this function.
///
/// # Errors
///
/// * [`RouteError::UnknownStation`] if an endpoint is not in the graph.
/// * [`RouteError::NoPath`] if the endpoints are not connected.
pub fn shortest_path(
    graph: &NetworkGraph,
    from: StationId,
    to: StationId,
) -> Result<Route, RouteError> {
    if !graph.contains(from) {
        return Err(RouteError::UnknownStation(from));
    }
    if !graph.contains(to) {
        return Err(RouteError::UnknownStation(to));
    }

    let successors = |&id: &StationId| {
        graph
            .neighbors(id)
            .map(|(neighbor, weight)| (neighbor, OrderedFloat(weight)))
            .collect::<Vec<_>>()
    };

    let (stations, total) =
        dijkstra(&from, successors, |&id| id == to).ok_or(RouteError::NoPath { from, to })?;

    debug!(
        %from,
        %to,
        hops = stations.len().saturating_sub(1),
        weight = total.into_inner(),
        "found shortest path"
    );

    let edges = path_edges(&stations);
    Ok(Route {
        stations,
        edges,
        total_weight: total.into_inner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistancePolicy;
    use crate::domain::{Line, LineId, Network, Station};

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
            color: "#808183".to_string(),
            stations: stations.iter().map(|&s| StationId(s)).collect(),
        }
    }

    fn graph_of(stations: Vec<Station>, lines: Vec<Line>) -> NetworkGraph {
        let network = Network::new(stations, lines);
        NetworkGraph::build(&network, DistancePolicy::SquaredEuclidean).unwrap()
    }

    #[test]
    fn walks_a_simple_chain() {
        let graph = graph_of(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1], true),
                station(3, 0.0, 2.0, &[1], true),
            ],
            vec![line(1, &[1, 2, 3])],
        );

        let route = shortest_path(&graph, StationId(1), StationId(3)).unwrap();
        assert_eq!(
            route.stations,
            vec![StationId(1), StationId(2), StationId(3)]
        );
        assert_eq!(
            route.edges,
            vec![
                (StationId(1), StationId(2)),
                (StationId(2), StationId(3)),
            ]
        );
        assert!((route.total_weight - 2.0).abs() < 1e-12);
    }

    #[test]
    fn prefers_the_lighter_detour() {
        // Direct hop 1-3 weighs 4; the detour through 2 weighs 2.
        let graph = graph_of(
            vec![
                station(1, 0.0, 0.0, &[1, 2], true),
                station(2, 0.0, 1.0, &[2], true),
                station(3, 0.0, 2.0, &[1, 2], true),
            ],
            vec![line(1, &[1, 3]), line(2, &[1, 2, 3])],
        );

        let route = shortest_path(&graph, StationId(1), StationId(3)).unwrap();
        assert_eq!(
            route.stations,
            vec![StationId(1), StationId(2), StationId(3)]
        );
    }

    #[test]
    fn crosses_lines_at_an_interchange() {
        let graph = graph_of(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1, 2], true),
                station(3, 1.0, 1.0, &[2], true),
            ],
            vec![line(1, &[1, 2]), line(2, &[2, 3])],
        );

        let route = shortest_path(&graph, StationId(1), StationId(3)).unwrap();
        assert_eq!(
            route.stations,
            vec![StationId(1), StationId(2), StationId(3)]
        );
    }

    #[test]
    fn disconnected_components_have_no_path() {
        let graph = graph_of(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1], true),
                station(3, 5.0, 5.0, &[2], true),
                station(4, 5.0, 6.0, &[2], true),
            ],
            vec![line(1, &[1, 2]), line(2, &[3, 4])],
        );

        let err = shortest_path(&graph, StationId(1), StationId(4)).unwrap_err();
        assert_eq!(
            err,
            RouteError::NoPath {
                from: StationId(1),
                to: StationId(4),
            }
        );
    }

    #[test]
    fn gap_from_inactive_station_blocks_the_route() {
        let graph = graph_of(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1], false),
                station(3, 0.0, 2.0, &[1], true),
            ],
            vec![line(1, &[1, 2, 3])],
        );

        assert!(matches!(
            shortest_path(&graph, StationId(1), StationId(3)),
            Err(RouteError::NoPath { .. })
        ));
    }

    #[test]
    fn endpoints_must_be_in_the_graph() {
        let graph = graph_of(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 1.0, &[1], true),
                station(3, 0.0, 2.0, &[1], false),
            ],
            vec![line(1, &[1, 2, 3])],
        );

        // Never seen in the document.
        assert_eq!(
            shortest_path(&graph, StationId(42), StationId(2)).unwrap_err(),
            RouteError::UnknownStation(StationId(42))
        );
        // Present in the document but inactive, so not a node.
        assert_eq!(
            shortest_path(&graph, StationId(1), StationId(3)).unwrap_err(),
            RouteError::UnknownStation(StationId(3))
        );
    }

    #[test]
    fn equal_weight_paths_resolve_deterministically() {
        // A diamond with two weight-2 paths from 1 to 4.
        let stations = vec![
            station(1, 0.0, 0.0, &[1, 2], true),
            station(2, 0.0, 1.0, &[1], true),
            station(3, 1.0, 0.0, &[2], true),
            station(4, 1.0, 1.0, &[1, 2], true),
        ];
        let lines = vec![line(1, &[1, 2, 4]), line(2, &[1, 3, 4])];
        let graph = graph_of(stations.clone(), lines.clone());

        let route = shortest_path(&graph, StationId(1), StationId(4)).unwrap();
        assert!((route.total_weight - 2.0).abs() < 1e-12);
        assert_eq!(route.stations.len(), 3);
        assert!(
            route.stations[1] == StationId(2) || route.stations[1] == StationId(3)
        );

        // Same graph, same query, same answer.
        let again = shortest_path(&graph_of(stations, lines), StationId(1), StationId(4));
        assert_eq!(route, again.unwrap());
    }

    #[test]
    fn adjacent_stations_route_over_one_edge() {
        let graph = graph_of(
            vec![
                station(1, 0.0, 0.0, &[1], true),
                station(2, 0.0, 3.0, &[1], true),
            ],
            vec![line(1, &[1, 2])],
        );

        let route = shortest_path(&graph, StationId(1), StationId(2)).unwrap();
        assert_eq!(route.stations, vec![StationId(1), StationId(2)]);
        assert_eq!(route.edges.len(), 1);
        assert!((route.total_weight - 9.0).abs() < 1e-12);
    }

    #[test]
    fn covers_matches_either_direction() {
        let route = Route {
            stations: vec![StationId(1), StationId(2)],
            edges: vec![(StationId(1), StationId(2))],
            total_weight: 1.0,
        };

        assert!(route.covers((StationId(1), StationId(2))));
        assert!(route.covers((StationId(2), StationId(1))));
        assert!(!route.covers((StationId(2), StationId(3))));
    }

    #[test]
    fn route_length_matches_summed_weights_under_haversine() {
        let network = Network::new(
            vec![
                station(1, 40.0, -74.0, &[1], true),
                station(2, 40.1, -74.0, &[1], true),
                station(3, 40.2, -74.1, &[1], true),
            ],
            vec![line(1, &[1, 2, 3])],
        );
        let policy = DistancePolicy::Haversine;
        let graph = NetworkGraph::build(&network, policy).unwrap();

        let route = shortest_path(&graph, StationId(1), StationId(3)).unwrap();
        let expected: f64 = route
            .edges
            .iter()
            .map(|&(a, b)| {
                policy.distance(graph.nodes()[&a], graph.nodes()[&b])
            })
            .sum();
        assert!((route.total_weight - expected).abs() < 1e-9);
    }
}
