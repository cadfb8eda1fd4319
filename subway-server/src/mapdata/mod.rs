//! Map document ingestion.
//!
//! Parsing and cleaning for the JSON documents produced by the external
//! map-authoring tool. This is the only place loosely-typed input exists;
//! everything downstream works with the validated schema from
//! [`crate::domain`].

mod clean;
mod error;
mod parse;
mod types;

pub use clean::clean;
pub use error::MapError;
pub use parse::parse_document;
pub use types::MapDocument;
