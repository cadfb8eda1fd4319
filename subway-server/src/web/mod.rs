//! Web layer for the subway map planner.
//!
//! Provides the HTML frontend plus JSON endpoints for uploading maps and
//! querying stations, the graph model, and shortest paths.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::{AppState, LoadedMap};
pub use templates::*;
