//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::info;

use crate::domain::StationId;
use crate::graph::{GraphError, NetworkGraph};
use crate::mapdata::{self, MapError};
use crate::routing::{RouteError, shortest_path};

use super::dto::*;
use super::state::{AppState, LoadedMap};
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/map", post(upload_map))
        .route("/api/stations", get(list_stations))
        .route("/api/graph", get(graph_model))
        .route("/api/route", get(route_query))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Index page: upload form, network view, shortest-path form.
///
/// With `from` and `to` query parameters the page also shows the route
/// between them. Picking the same station twice is a no-op; a selection
/// with no route renders the reason instead of a path.
async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Response, AppError> {
    let guard = state.map.read().await;

    let map = guard.as_ref().map(|loaded| {
        let mut route = None;
        let mut route_message = None;

        if let (Some(from), Some(to)) = (query.from, query.to) {
            if from != to {
                match shortest_path(&loaded.graph, StationId(from), StationId(to)) {
                    Ok(found) => route = Some(found),
                    Err(e) => route_message = Some(e.to_string()),
                }
            }
        }

        MapView::build(
            loaded,
            state.policy,
            query.from,
            query.to,
            route.as_ref(),
            route_message,
        )
    });

    let template = IndexTemplate {
        policy: state.policy.to_string(),
        unit: state.policy.unit(),
        map,
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Ingest an uploaded map document.
///
/// Parses and cleans the document, builds the graph under the process
/// distance policy, and swaps the result in as the current map. On any
/// failure the previously loaded map stays in place untouched.
async fn upload_map(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let document = mapdata::parse_document(&body)?;
    let document = mapdata::clean(document);
    let network = document.into_network();
    let graph = NetworkGraph::build(&network, state.policy)?;

    let summary = MapSummary::new(&network, &graph, state.policy);
    info!(
        stations = summary.stations,
        lines = summary.lines,
        nodes = summary.nodes,
        edges = summary.edges,
        "map loaded"
    );

    let mut guard = state.map.write().await;
    *guard = Some(LoadedMap { network, graph });

    Ok(Json(summary).into_response())
}

/// The full station listing of the current map.
async fn list_stations(State(state): State<AppState>) -> Result<Response, AppError> {
    let guard = state.map.read().await;
    let loaded = guard.as_ref().ok_or_else(AppError::no_map)?;

    let stations = loaded
        .network
        .stations()
        .iter()
        .map(StationRow::from_station)
        .collect();

    Ok(Json(StationsResponse { stations }).into_response())
}

/// The graph model of the current map.
async fn graph_model(State(state): State<AppState>) -> Result<Response, AppError> {
    let guard = state.map.read().await;
    let loaded = guard.as_ref().ok_or_else(AppError::no_map)?;

    Ok(Json(GraphResponse::new(&loaded.network, &loaded.graph)).into_response())
}

/// Shortest path between two stations of the current map.
async fn route_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RouteQuery>,
) -> Result<Response, AppError> {
    let guard = state.map.read().await;
    let loaded = guard.as_ref().ok_or_else(AppError::no_map)?;

    // Same start and end: nothing to compute, nothing to highlight.
    if query.from == query.to {
        if accepts_html(&headers) {
            let template = RouteResultTemplate {
                stops: Vec::new(),
                total_weight: format_weight(0.0, state.policy),
            };
            let html = template.render().map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
            return Ok(Html(html).into_response());
        }
        return Ok(Json(RouteResponse::empty(state.policy)).into_response());
    }

    let route = shortest_path(&loaded.graph, StationId(query.from), StationId(query.to))?;

    if accepts_html(&headers) {
        let view = RouteView::build(&loaded.network, &loaded.graph, &route, state.policy);
        let template = RouteResultTemplate {
            stops: view.stops,
            total_weight: view.total_weight,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(RouteResponse::from_route(&route, state.policy)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn no_map() -> Self {
        AppError::NotFound {
            message: "no map loaded".to_string(),
        }
    }
}

impl From<MapError> for AppError {
    fn from(e: MapError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<GraphError> for AppError {
    fn from(e: GraphError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::UnknownStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            RouteError::NoPath { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
