//! Distance policies for edge weights.
//!
//! Exactly one policy is active per loaded map. The two policies produce
//! numbers in incomparable units (miles vs. squared degrees), so weights
//! from different policies must never be mixed in one graph.

use std::fmt;
use std::str::FromStr;

use crate::domain::Coordinates;

/// Mean Earth radius in miles, as used by the haversine policy.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown distance policy {name:?} (expected \"haversine\" or \"squared-euclidean\")")]
pub struct UnknownPolicy {
    name: String,
}

/// How edge weights are computed from station coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistancePolicy {
    /// Great-circle distance in miles via the haversine formula.
    #[default]
    Haversine,

    /// Squared coordinate-space difference. Cheap, has no physical unit,
    /// and distorts with latitude; kept selectable for parity with maps
    /// authored against the older behaviour.
    SquaredEuclidean,
}

impl DistancePolicy {
    /// Distance between two coordinate pairs under this policy.
    ///
    /// Always finite and non-negative for coordinates in range, symmetric
    /// in its arguments, and exactly zero for coincident points.
    pub fn distance(self, a: Coordinates, b: Coordinates) -> f64 {
        match self {
            DistancePolicy::Haversine => haversine_miles(a, b),
            DistancePolicy::SquaredEuclidean => {
                let d_lat = a.lat - b.lat;
                let d_lng = a.lng - b.lng;
                d_lat * d_lat + d_lng * d_lng
            }
        }
    }

    /// Unit label shown next to path lengths.
    pub fn unit(self) -> &'static str {
        match self {
            DistancePolicy::Haversine => "mi",
            DistancePolicy::SquaredEuclidean => "deg\u{b2}",
        }
    }
}

impl fmt::Display for DistancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistancePolicy::Haversine => f.write_str("haversine"),
            DistancePolicy::SquaredEuclidean => f.write_str("squared-euclidean"),
        }
    }
}

impl FromStr for DistancePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "haversine" => Ok(DistancePolicy::Haversine),
            "squared-euclidean" => Ok(DistancePolicy::SquaredEuclidean),
            other => Err(UnknownPolicy {
                name: other.to_string(),
            }),
        }
    }
}

/// Great-circle distance between two points, in miles.
fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can nudge h past 1.0 for near-antipodal pairs.
    let h = h.min(1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}
