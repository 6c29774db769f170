//! Static metro network: stations, lines, and direct connections.
//!
//! The network is immutable once built. Lookups are undirected: the
//! connection between `a` and `b` is stored once, under the canonical
//! `(min, max)` pair. Stations are 0-based indexes here; everything
//! user-facing is 1-based.

use std::collections::HashMap;

/// Number of stations in the reference network.
pub const PARIS_STATION_COUNT: usize = 14;

/// A metro line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Line {
    Red,
    Green,
    Blue,
    Yellow,
}

/// A direct connection between two stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Straight-line distance between the endpoints.
    pub direct_distance: f32,
    /// Track distance actually travelled.
    pub real_distance: f32,
    /// Line operating the connection.
    pub line: Line,
}

/// An edge-table row: 0-based station pair, straight-line distance,
/// track distance, line.
pub type EdgeRow = (usize, usize, f32, f32, Line);

/// Immutable station graph.
#[derive(Debug, Clone)]
pub struct Network {
    station_count: usize,
    connections: HashMap<(usize, usize), Connection>,
}

impl Network {
    /// Build a network from an edge table.
    ///
    /// A row with a zero track distance marks a pair without a direct
    /// connection and is skipped, as are self-pairs and rows naming
    /// stations outside `[0, station_count)`.
    pub fn from_edges(station_count: usize, edges: &[EdgeRow]) -> Self {
        let mut connections = HashMap::new();
        for &(a, b, direct, real, line) in edges {
            if a == b || a >= station_count || b >= station_count || real <= 0.0 {
                continue;
            }
            connections.insert(
                canonical(a, b),
                Connection {
                    direct_distance: direct,
                    real_distance: real,
                    line,
                },
            );
        }
        Self {
            station_count,
            connections,
        }
    }

    /// The fixed 14-station reference network.
    pub fn paris() -> Self {
        Self::from_edges(PARIS_STATION_COUNT, PARIS_CONNECTIONS)
    }

    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        self.station_count
    }

    /// Undirected lookup of the direct connection between `a` and `b`.
    pub fn connection(&self, a: usize, b: usize) -> Option<&Connection> {
        if a == b {
            return None;
        }
        self.connections.get(&canonical(a, b))
    }

    /// Stations directly connected to `u`, in ascending index order,
    /// with their connections.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, &Connection)> + '_ {
        (0..self.station_count).filter_map(move |j| self.connection(u, j).map(|c| (j, c)))
    }
}

fn canonical(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Direct connections of the reference network. Pairs without a
/// direct connection are omitted.
pub(crate) const PARIS_CONNECTIONS: &[EdgeRow] = &[
    (0, 1, 10.0, 10.0, Line::Blue),
    (1, 2, 8.5, 8.5, Line::Blue),
    (1, 8, 10.0, 10.0, Line::Yellow),
    (1, 9, 3.5, 3.5, Line::Yellow),
    (2, 3, 6.3, 6.3, Line::Blue),
    (2, 8, 9.4, 9.4, Line::Red),
    (2, 10, 19.5, 3.5, Line::Red),
    (2, 12, 12.1, 18.7, Line::Red),
    (3, 4, 12.0, 13.0, Line::Blue),
    (3, 7, 12.4, 15.3, Line::Green),
    (3, 12, 10.6, 12.8, Line::Green),
    (4, 5, 3.0, 3.0, Line::Blue),
    (4, 6, 2.4, 2.4, Line::Yellow),
    (4, 7, 19.4, 30.0, Line::Yellow),
    (7, 8, 8.2, 9.6, Line::Yellow),
    (7, 11, 6.4, 6.4, Line::Green),
    (8, 10, 11.2, 12.2, Line::Red),
    (12, 13, 5.1, 5.1, Line::Green),
];
