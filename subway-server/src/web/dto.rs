//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::distance::DistancePolicy;
use crate::domain::{Network, Station};
use crate::graph::NetworkGraph;
use crate::render::edge_attributions;
use crate::routing::Route;

/// Error payload returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Summary returned after a successful upload.
#[derive(Debug, Serialize)]
pub struct MapSummary {
    /// Station records in the document
    pub stations: usize,

    /// Line records surviving the cleaner
    pub lines: usize,

    /// Active stations in the graph
    pub nodes: usize,

    /// Undirected graph edges
    pub edges: usize,

    /// Distance policy the weights were computed under
    pub policy: String,
}

impl MapSummary {
    pub fn new(network: &Network, graph: &NetworkGraph, policy: DistancePolicy) -> Self {
        Self {
            stations: network.stations().len(),
            lines: network.lines().len(),
            nodes: graph.node_count(),
            edges: graph.undirected_edges().count(),
            policy: policy.to_string(),
        }
    }
}

/// One row of the station listing.
#[derive(Debug, Serialize)]
pub struct StationRow {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,

    /// Claimed line ids, in document order
    pub lines: Vec<u32>,

    pub active: bool,
}

impl StationRow {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.clone(),
            lat: station.lat,
            lng: station.lng,
            lines: station.lines.iter().map(|line| line.0).collect(),
            active: station.active,
        }
    }
}

/// Response for the station listing.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationRow>,
}

/// One undirected edge of the graph payload.
#[derive(Debug, Serialize)]
pub struct GraphEdge {
    pub from: u32,
    pub to: u32,
    pub weight: f64,

    /// Line occurrences using this edge, in document order
    pub lines: Vec<u32>,

    /// Resolved display color
    pub color: String,
}

/// Graph model payload.
///
/// Map keys are station ids rendered as strings, since JSON object keys
/// are always strings.
#[derive(Debug, Serialize)]
pub struct GraphResponse {
    /// Node id to [lat, lng]
    pub nodes: BTreeMap<String, [f64; 2]>,

    /// Node id to display weight
    pub display_weights: BTreeMap<String, f64>,

    /// Node id to neighbor id to edge weight
    pub adjacency: BTreeMap<String, BTreeMap<String, f64>>,

    /// Undirected edges with line attribution
    pub edges: Vec<GraphEdge>,
}

impl GraphResponse {
    pub fn new(network: &Network, graph: &NetworkGraph) -> Self {
        let attributions = edge_attributions(network, graph);
        let edges = graph
            .undirected_edges()
            .map(|(edge, weight)| {
                let attribution = &attributions[&edge];
                GraphEdge {
                    from: edge.0.0,
                    to: edge.1.0,
                    weight,
                    lines: attribution.lines.iter().map(|line| line.0).collect(),
                    color: attribution.display_color().to_string(),
                }
            })
            .collect();

        Self {
            nodes: graph
                .nodes()
                .iter()
                .map(|(id, c)| (id.to_string(), [c.lat, c.lng]))
                .collect(),
            display_weights: graph
                .display_weights()
                .iter()
                .map(|(id, &weight)| (id.to_string(), weight))
                .collect(),
            adjacency: graph
                .adjacency()
                .iter()
                .map(|(id, neighbors)| {
                    (
                        id.to_string(),
                        neighbors
                            .iter()
                            .map(|(neighbor, &weight)| (neighbor.to_string(), weight))
                            .collect(),
                    )
                })
                .collect(),
            edges,
        }
    }
}

/// Query parameters for the index page.
#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    /// Selected start station id
    pub from: Option<u32>,

    /// Selected end station id
    pub to: Option<u32>,
}

/// Query parameters for a route request.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Start station id
    pub from: u32,

    /// End station id
    pub to: u32,
}

/// Response for a route request.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations visited, start first
    pub stations: Vec<u32>,

    /// Consecutive station pairs of the path
    pub edges: Vec<[u32; 2]>,

    /// Sum of edge weights
    pub total_weight: f64,

    /// Unit of the total
    pub unit: &'static str,
}

impl RouteResponse {
    pub fn from_route(route: &Route, policy: DistancePolicy) -> Self {
        Self {
            stations: route.stations.iter().map(|station| station.0).collect(),
            edges: route
                .edges
                .iter()
                .map(|&(from, to)| [from.0, to.0])
                .collect(),
            total_weight: route.total_weight,
            unit: policy.unit(),
        }
    }

    /// The degenerate same-start-and-end selection: nothing was computed.
    pub fn empty(policy: DistancePolicy) -> Self {
        Self {
            stations: Vec::new(),
            edges: Vec::new(),
            total_weight: 0.0,
            unit: policy.unit(),
        }
    }
}
