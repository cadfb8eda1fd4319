//! Askama templates for the web frontend.

use askama::Template;

use crate::distance::DistancePolicy;
use crate::domain::Network;
use crate::graph::NetworkGraph;
use crate::render::{RenderModel, render_network};
use crate::routing::Route;

use super::state::LoadedMap;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: upload form plus, once a map is loaded, the network view
/// and the shortest-path form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Name of the active distance policy.
    pub policy: String,
    /// Unit label for path lengths.
    pub unit: &'static str,
    pub map: Option<MapView>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route listing fragment.
#[derive(Template)]
#[template(path = "route_result.html")]
pub struct RouteResultTemplate {
    pub stops: Vec<String>,
    pub total_weight: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// View model for a loaded map.
pub struct MapView {
    pub station_count: usize,
    pub line_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub rows: Vec<StationRowView>,
    pub options: Vec<StationOptionView>,
    pub figure: RenderModel,
    pub route: Option<RouteView>,
    /// Shown when a selection produced no route (no path, bad endpoint).
    pub route_message: Option<String>,
}

impl MapView {
    pub fn build(
        loaded: &LoadedMap,
        policy: DistancePolicy,
        selected_from: Option<u32>,
        selected_to: Option<u32>,
        route: Option<&Route>,
        route_message: Option<String>,
    ) -> Self {
        let network = &loaded.network;
        let graph = &loaded.graph;

        let rows = network
            .stations()
            .iter()
            .map(StationRowView::from_station)
            .collect();

        // Only stations in the graph are selectable endpoints.
        let options = graph
            .nodes()
            .keys()
            .map(|&id| StationOptionView {
                id: id.0,
                name: station_label(network, id),
                selected_from: selected_from == Some(id.0),
                selected_to: selected_to == Some(id.0),
            })
            .collect();

        Self {
            station_count: network.stations().len(),
            line_count: network.lines().len(),
            node_count: graph.node_count(),
            edge_count: graph.undirected_edges().count(),
            rows,
            options,
            figure: render_network(network, graph, None),
            route: route.map(|r| RouteView::build(network, graph, r, policy)),
            route_message,
        }
    }
}

/// One row of the station table.
pub struct StationRowView {
    pub id: u32,
    pub name: String,
    pub lat: String,
    pub lng: String,
    pub lines: String,
    pub active: bool,
}

impl StationRowView {
    pub fn from_station(station: &crate::domain::Station) -> Self {
        let lines = station
            .lines
            .iter()
            .map(|line| line.0.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: station.id.0,
            name: station.name.clone(),
            lat: format!("{:.4}", station.lat),
            lng: format!("{:.4}", station.lng),
            lines,
            active: station.active,
        }
    }
}

/// One option of the start/end selectors.
pub struct StationOptionView {
    pub id: u32,
    pub name: String,
    pub selected_from: bool,
    pub selected_to: bool,
}

/// The computed route section.
pub struct RouteView {
    pub figure: RenderModel,
    pub stops: Vec<String>,
    pub total_weight: String,
}

impl RouteView {
    pub fn build(
        network: &Network,
        graph: &NetworkGraph,
        route: &Route,
        policy: DistancePolicy,
    ) -> Self {
        Self {
            figure: render_network(network, graph, Some(route)),
            stops: route
                .stations
                .iter()
                .map(|&id| station_label(network, id))
                .collect(),
            total_weight: format_weight(route.total_weight, policy),
        }
    }
}

/// Display label for a station id.
fn station_label(network: &Network, id: crate::domain::StationId) -> String {
    network
        .station(id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Path length with its unit, e.g. `"3.42 mi"`.
pub fn format_weight(weight: f64, policy: DistancePolicy) -> String {
    format!("{:.2} {}", weight, policy.unit())
}
