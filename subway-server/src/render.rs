//! Render model construction.
//!
//! A render call takes the graph model, the network (for labels and line
//! colors), and optionally a route to highlight, and produces a
//! self-contained description of one picture: projected node positions
//! and styled edge segments for the SVG template. Nothing here touches
//! shared drawing state, so concurrent requests can render freely.

use std::collections::BTreeMap;

use crate::domain::{Coordinates, LineId, Network, StationId};
use crate::graph::{Edge, NetworkGraph};
use crate::routing::Route;

/// Viewport width in SVG user units.
pub const VIEW_WIDTH: f64 = 800.0;
/// Viewport height in SVG user units.
pub const VIEW_HEIGHT: f64 = 600.0;
/// Gap between the viewport edge and the outermost nodes.
const VIEW_PADDING: f64 = 40.0;

/// Color for edges shared by several lines.
const NEUTRAL_EDGE_COLOR: &str = "#9e9e9e";
/// Color for edges on the highlighted route.
const HIGHLIGHT_COLOR: &str = "#d62728";
/// Opacity of edges off the highlighted route.
const DIMMED_OPACITY: f64 = 0.25;
/// Stroke width contributed by each line occurrence on an edge.
const EDGE_WIDTH_SCALE: f64 = 2.0;
/// Smallest node radius drawn, whatever the display weight says.
const MIN_NODE_RADIUS: f64 = 3.0;

/// Which lines contributed a graph edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAttribution {
    /// Contributing line occurrences, in document order.
    pub lines: Vec<LineId>,
    /// The occurrences' display colors, parallel to `lines`.
    pub colors: Vec<String>,
}

impl EdgeAttribution {
    /// Number of line occurrences using the edge. Drives stroke width.
    pub fn multiplicity(&self) -> usize {
        self.lines.len()
    }

    /// Display color for the edge.
    ///
    /// An edge used by exactly one distinct line keeps that line's
    /// color; shared edges (and edges attributable to no line) fall
    /// back to the neutral color.
    pub fn display_color(&self) -> &str {
        match self.lines.split_first() {
            Some((first, rest)) if rest.iter().all(|id| id == first) => &self.colors[0],
            _ => NEUTRAL_EDGE_COLOR,
        }
    }
}

/// Attribute each undirected graph edge to the lines that use it.
///
/// A line contributes one occurrence for every consecutive pair of its
/// sequence matching the edge in either direction. Line pairs that did
/// not survive into the graph (because an endpoint is invisible) are
/// skipped.
pub fn edge_attributions(
    network: &Network,
    graph: &NetworkGraph,
) -> BTreeMap<Edge, EdgeAttribution> {
    let mut attributions: BTreeMap<Edge, EdgeAttribution> = graph
        .undirected_edges()
        .map(|(edge, _)| {
            (
                edge,
                EdgeAttribution {
                    lines: Vec::new(),
                    colors: Vec::new(),
                },
            )
        })
        .collect();

    for line in network.lines() {
        let Some(pairs) = graph.line_edges().get(&line.id) else {
            continue;
        };
        for &(a, b) in pairs {
            let key = if a <= b { (a, b) } else { (b, a) };
            if let Some(attribution) = attributions.get_mut(&key) {
                attribution.lines.push(line.id);
                attribution.colors.push(line.color.clone());
            }
        }
    }

    attributions
}

/// A node ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub id: StationId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// An edge segment ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEdge {
    pub from: StationId,
    pub to: StationId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: String,
    pub width: f64,
    pub opacity: f64,
    pub on_route: bool,
}

/// A self-contained picture of the network.
///
/// Edges come first so the template draws them under the nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub width: f64,
    pub height: f64,
    pub edges: Vec<RenderEdge>,
    pub nodes: Vec<RenderNode>,
}

impl RenderModel {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the render model for the network.
///
/// With `highlight`, the route's edges are drawn in the highlight color
/// at full opacity and every other edge is dimmed. Without it, every
/// edge carries its attribution color at full opacity. The underlying
/// graph is read, never changed, so rendering twice gives the same
/// picture.
pub fn render_network(
    network: &Network,
    graph: &NetworkGraph,
    highlight: Option<&Route>,
) -> RenderModel {
    let projection = Projection::fit(graph.nodes().values());
    let attributions = edge_attributions(network, graph);

    let edges = graph
        .undirected_edges()
        .map(|(edge, _)| {
            let (from, to) = edge;
            let (x1, y1) = projection.project(graph.nodes()[&from]);
            let (x2, y2) = projection.project(graph.nodes()[&to]);
            let attribution = &attributions[&edge];

            let on_route = highlight.is_some_and(|route| route.covers(edge));
            let (color, opacity) = match highlight {
                Some(_) if on_route => (HIGHLIGHT_COLOR.to_string(), 1.0),
                Some(_) => (attribution.display_color().to_string(), DIMMED_OPACITY),
                None => (attribution.display_color().to_string(), 1.0),
            };

            RenderEdge {
                from,
                to,
                x1,
                y1,
                x2,
                y2,
                color,
                width: attribution.multiplicity().max(1) as f64 * EDGE_WIDTH_SCALE,
                opacity,
                on_route,
            }
        })
        .collect();

    let nodes = graph
        .nodes()
        .iter()
        .map(|(&id, &coordinates)| {
            let (x, y) = projection.project(coordinates);
            let label = network
                .station(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| id.to_string());
            RenderNode {
                id,
                label,
                x,
                y,
                radius: graph.display_weights()[&id].max(MIN_NODE_RADIUS),
            }
        })
        .collect();

    RenderModel {
        width: VIEW_WIDTH,
        height: VIEW_HEIGHT,
        edges,
        nodes,
    }
}

/// Linear coordinate-to-viewport projection.
///
/// Longitude grows rightward and latitude grows upward, so the y axis is
/// inverted relative to SVG's. A degenerate span (all nodes on one
/// meridian or parallel, or a single node) centers that axis instead of
/// dividing by zero.
struct Projection {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl Projection {
    fn fit<'a>(positions: impl Iterator<Item = &'a Coordinates>) -> Self {
        let mut projection = Self {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lng: f64::INFINITY,
            max_lng: f64::NEG_INFINITY,
        };
        for p in positions {
            projection.min_lat = projection.min_lat.min(p.lat);
            projection.max_lat = projection.max_lat.max(p.lat);
            projection.min_lng = projection.min_lng.min(p.lng);
            projection.max_lng = projection.max_lng.max(p.lng);
        }
        projection
    }

    fn project(&self, p: Coordinates) -> (f64, f64) {
        let usable_width = VIEW_WIDTH - 2.0 * VIEW_PADDING;
        let usable_height = VIEW_HEIGHT - 2.0 * VIEW_PADDING;
        let lng_span = self.max_lng - self.min_lng;
        let lat_span = self.max_lat - self.min_lat;

        let x = if lng_span > 0.0 {
            VIEW_PADDING + (p.lng - self.min_lng) / lng_span * usable_width
        } else {
            VIEW_WIDTH / 2.0
        };
        let y = if lat_span > 0.0 {
            VIEW_PADDING + (self.max_lat - p.lat) / lat_span * usable_height
        } else {
            VIEW_HEIGHT / 2.0
        };
        (x, y)
    }
}
