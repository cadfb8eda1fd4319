//! Station and line identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a station, unique within one map document.
///
/// The map-authoring tool assigns small non-negative integers. The value
/// is opaque here beyond equality and ordering; ordering is used for
/// deterministic iteration, never for meaning.
///
/// # Examples
///
/// ```
/// use subway_server::domain::StationId;
///
/// let a = StationId(3);
/// assert_eq!(a.to_string(), "3");
/// assert!(a < StationId(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a line, unique within one map document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u32);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
