//! The route command: validate stations, plan, print.

use ligne_core::error::{LigneError, Result};
use ligne_core::format::OutputFormat;
use ligne_core::network::{Network, PARIS_STATION_COUNT};
use ligne_core::search;

use crate::cli::Cli;

/// Validate a 1-based station argument and convert it to 0-based.
fn check_station(what: &'static str, station: usize) -> Result<usize> {
    if !(1..=PARIS_STATION_COUNT).contains(&station) {
        return Err(LigneError::StationOutOfRange {
            what,
            station,
            limit: PARIS_STATION_COUNT,
        });
    }
    Ok(station - 1)
}

/// Plan and print the route for the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    let src = check_station("source", cli.source)?;
    let dst = check_station("destination", cli.destination)?;

    let network = Network::paris();
    let itinerary = search::plan(&network, src, dst)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&itinerary)?),
        OutputFormat::Human => {
            println!("Estimated time: {:.2} minutes", itinerary.minutes);
            let route = itinerary
                .route
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!("Route: {route}");
        }
    }

    Ok(())
}
