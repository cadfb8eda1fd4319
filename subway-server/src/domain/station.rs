//! Station records and coordinates.

use serde::Deserialize;

use super::{LineId, StationId};

/// A pair of geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A station record from the map document.
///
/// Parsed once at the upload boundary and immutable thereafter. The
/// `lines` list keeps the document's order; neighbor resolution walks
/// the lines in exactly that order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Lines this station claims membership of, in document order.
    pub lines: Vec<LineId>,
    /// Inactive stations are kept in the document but excluded from the
    /// graph model entirely.
    pub active: bool,
}

impl Station {
    /// The station's position as a coordinate pair.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}
