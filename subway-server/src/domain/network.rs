//! Indexed station and line collections.

use std::collections::HashMap;

use super::{Line, LineId, Station, StationId};

/// Id-indexed station and line collections built from a cleaned document.
///
/// Construction indexes records by id. If the document repeats an id, the
/// first occurrence wins and later records with the same id are ignored
/// by lookups (they remain visible in the document-order slices).
#[derive(Debug, Clone)]
pub struct Network {
    stations: Vec<Station>,
    lines: Vec<Line>,
    station_index: HashMap<StationId, usize>,
    line_index: HashMap<LineId, usize>,
}

impl Network {
    pub fn new(stations: Vec<Station>, lines: Vec<Line>) -> Self {
        let mut station_index = HashMap::with_capacity(stations.len());
        for (idx, station) in stations.iter().enumerate() {
            station_index.entry(station.id).or_insert(idx);
        }

        let mut line_index = HashMap::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            line_index.entry(line.id).or_insert(idx);
        }

        Self {
            stations,
            lines,
            station_index,
            line_index,
        }
    }

    /// All stations, in document order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines, in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.station_index.get(&id).map(|&idx| &self.stations[idx])
    }

    /// Look up a line by id.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.line_index.get(&id).map(|&idx| &self.lines[idx])
    }

    /// Whether `id` names a station that exists and is active.
    pub fn is_active(&self, id: StationId) -> bool {
        self.station(id).is_some_and(|s| s.active)
    }

    /// Active stations, in document order.
    pub fn active_stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter().filter(|s| s.active)
    }
}
