use std::net::SocketAddr;

use subway_server::distance::DistancePolicy;
use subway_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

/// Default port when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Default directory for static assets.
const DEFAULT_STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Pick the distance policy from the environment
    let policy = match std::env::var("SUBWAY_DISTANCE") {
        Ok(name) => name.parse().unwrap_or_else(|e| {
            eprintln!("Warning: {e}. Falling back to haversine.");
            DistancePolicy::Haversine
        }),
        Err(_) => DistancePolicy::Haversine,
    };

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

    // Build app state
    let state = AppState::new(policy);

    // Create router
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Subway Map Planner listening on http://{addr}");
    println!("Distance policy: {policy}");
    println!();
    println!("Open http://{addr} in your browser, upload a map document,");
    println!("and pick two stations to see the shortest path.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  POST /map           - Upload a map document");
    println!("  GET  /api/stations  - Station listing");
    println!("  GET  /api/graph     - Graph model");
    println!("  GET  /api/route     - Shortest path between two stations");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
