//! Best-first route search over the metro network.
//!
//! Uniform-cost relaxation: pop the frontier entry with the smallest
//! station index, relax every direct neighbor, repeat until the
//! frontier drains. The line-change penalty folds into the edge cost,
//! so expansion order affects the trace but not the optimum (all
//! weights are non-negative).

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{LigneError, Result};
use crate::network::{Connection, Line, Network};

/// Average in-service speed, in distance units per hour.
const AVERAGE_SPEED: f32 = 30.0;

/// Fixed cost of changing lines mid-route, in minutes.
const LINE_CHANGE_MINUTES: f32 = 4.0;

/// A computed route with its estimated travel time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Source station, 1-based.
    pub source: usize,
    /// Destination station, 1-based.
    pub destination: usize,
    /// Estimated travel time in minutes.
    pub minutes: f32,
    /// Stations visited in order, 1-based, endpoints included.
    pub route: Vec<usize>,
}

/// Travel time in minutes for one hop over `connection`, arriving on
/// `arrival` (`None` before the first hop, which is never penalized).
fn edge_cost(connection: &Connection, arrival: Option<Line>) -> f32 {
    let mut minutes = (connection.real_distance + connection.direct_distance) / AVERAGE_SPEED * 60.0;
    if arrival.is_some_and(|line| line != connection.line) {
        minutes += LINE_CHANGE_MINUTES;
    }
    minutes
}

/// Outcome of the relaxation loop.
struct Relaxation {
    /// Best known travel time per station, +inf where unreached.
    best_time: Vec<f32>,
    /// Station each best known time was reached from.
    predecessor: Vec<Option<usize>>,
}

fn relax(network: &Network, src: usize) -> Relaxation {
    let station_count = network.station_count();
    let mut best_time = vec![f32::INFINITY; station_count];
    let mut predecessor: Vec<Option<usize>> = vec![None; station_count];
    best_time[src] = 0.0;

    // Entries pop smallest station index first, not cheapest first. A
    // station may sit in the frontier under several arrival lines at
    // once.
    let mut frontier: BTreeSet<(usize, Option<Line>)> = BTreeSet::new();
    frontier.insert((src, None));

    let mut iteration = 0u32;
    while let Some((u, arrival)) = frontier.pop_first() {
        iteration += 1;
        let pending: Vec<usize> = frontier.iter().map(|&(station, _)| station + 1).collect();
        tracing::debug!(iteration, station = u + 1, frontier = ?pending, "expand");

        for (j, connection) in network.neighbors(u) {
            let candidate = best_time[u] + edge_cost(connection, arrival);
            if candidate < best_time[j] {
                best_time[j] = candidate;
                predecessor[j] = Some(u);
                frontier.insert((j, Some(connection.line)));
            }
        }
    }

    Relaxation {
        best_time,
        predecessor,
    }
}

/// Walk the predecessor chain from `dst` back to `src`, yielding the
/// 0-based station sequence in travel order.
fn walk_predecessors(predecessor: &[Option<usize>], src: usize, dst: usize) -> Result<Vec<usize>> {
    let mut stations = vec![dst];
    let mut current = dst;
    while current != src {
        let previous = predecessor[current].ok_or(LigneError::Unreachable {
            from: src + 1,
            to: dst + 1,
        })?;
        stations.push(previous);
        current = previous;
    }
    stations.reverse();
    Ok(stations)
}

/// Re-derive the total travel time from the reconstructed route.
///
/// This is a second accounting pass against the network itself, not
/// the relaxation's bookkeeping; a transition is only counted between
/// two actual lines, so the first hop stays free.
fn route_minutes(network: &Network, stations: &[usize]) -> Result<f32> {
    let mut minutes = 0.0;
    let mut arrival: Option<Line> = None;
    for leg in stations.windows(2) {
        let connection = network.connection(leg[0], leg[1]).ok_or_else(|| {
            LigneError::Other(format!(
                "route references missing connection {} -> {}",
                leg[0] + 1,
                leg[1] + 1
            ))
        })?;
        minutes += edge_cost(connection, arrival);
        arrival = Some(connection.line);
    }
    Ok(minutes)
}

/// Compute the minimum-time route between two 0-based stations.
///
/// The reported time is re-derived from the reconstructed route rather
/// than read back from the relaxation, so the printed minutes always
/// match the printed stations.
#[tracing::instrument(skip(network), fields(src = src + 1, dst = dst + 1))]
pub fn plan(network: &Network, src: usize, dst: usize) -> Result<Itinerary> {
    let station_count = network.station_count();
    if src >= station_count {
        return Err(LigneError::StationOutOfRange {
            what: "source",
            station: src + 1,
            limit: station_count,
        });
    }
    if dst >= station_count {
        return Err(LigneError::StationOutOfRange {
            what: "destination",
            station: dst + 1,
            limit: station_count,
        });
    }

    let relaxation = relax(network, src);
    if !relaxation.best_time[dst].is_finite() {
        return Err(LigneError::Unreachable {
            from: src + 1,
            to: dst + 1,
        });
    }

    let stations = walk_predecessors(&relaxation.predecessor, src, dst)?;
    let minutes = route_minutes(network, &stations)?;
    tracing::debug!(minutes, hops = stations.len() - 1, "route_found");

    Ok(Itinerary {
        source: src + 1,
        destination: dst + 1,
        minutes,
        route: stations.iter().map(|&station| station + 1).collect(),
    })
}
